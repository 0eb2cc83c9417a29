//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`CityError`] covers every failure mode:
//! - Timeline construction errors (empty schedule, bad durations, bad easings)
//! - Easing name parsing
//! - Settings validation and loading
//! - Scene lookups
//!
//! Construction errors are meant to stop the host before the first frame is
//! driven. Once a [`Timeline`](crate::animation::Timeline) exists, ticking it
//! cannot fail.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lowpoly_city::errors::{CityError, Result};
//!
//! fn build() -> Result<()> {
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the city crate.
#[derive(Error, Debug)]
pub enum CityError {
    // ========================================================================
    // Timeline Construction Errors
    // ========================================================================
    /// A timeline needs at least one segment.
    #[error("Timeline has no segments")]
    EmptyTimeline,

    /// A segment duration was zero, negative or not finite.
    #[error("Segment {index} has invalid duration {duration} (must be finite and > 0)")]
    InvalidDuration {
        /// Position of the offending segment
        index: usize,
        /// The rejected duration in seconds
        duration: f32,
    },

    /// A segment easing does not map 0 to 0 and 1 to 1, or has bad parameters.
    #[error("Segment {index} has a malformed easing: {reason}")]
    InvalidEasing {
        /// Position of the offending segment
        index: usize,
        /// What was wrong with it
        reason: String,
    },

    /// An easing name could not be parsed.
    #[error("Unknown easing: {0}")]
    UnknownEasing(String),

    // ========================================================================
    // Scene Errors
    // ========================================================================
    /// A node handle or name did not resolve.
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Settings failed validation.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Alias for `Result<T, CityError>`.
pub type Result<T> = std::result::Result<T, CityError>;

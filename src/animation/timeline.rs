//! Looping motion timeline.
//!
//! A [`Timeline`] is an immutable, ordered list of [`MotionSegment`]s played
//! back to back and restarted forever. Playback state lives outside the
//! timeline in a [`TimelineCursor`], which is passed into and returned from
//! every [`Timeline::tick`]. The timeline itself holds no timers; stopping
//! playback means no longer calling `tick`.
//!
//! # Tick semantics
//!
//! 1. The delta is added to the time accumulated in the active segment.
//! 2. Every segment whose duration is used up is evaluated once at raw
//!    progress `1.0`, the overflow is carried into the next segment and the
//!    index advances, wrapping after the last segment.
//! 3. The segment that is active afterwards is evaluated at its current
//!    progress, so the written position always belongs to the active segment.
//!
//! After a tick `0 <= accumulated < duration` holds for the active segment.

use glam::Vec3;
use log::{debug, trace, warn};

use crate::animation::easing::Easing;
use crate::animation::segment::{MotionPath, MotionSegment};
use crate::errors::{CityError, Result};

/// Playback position inside a [`Timeline`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimelineCursor {
    pub segment_index: usize,
    /// Seconds spent in the active segment.
    pub accumulated: f32,
}

#[derive(Debug, Clone)]
pub struct Timeline {
    origin: Vec3,
    segments: Vec<MotionSegment>,
    total_duration: f32,
}

impl Timeline {
    /// Validates `segments` and resolves every [`MotionPath::To`] against the
    /// end of the segment before it (`origin` for the first one).
    ///
    /// Paths after the last `To` are never evaluated here, so custom rules
    /// only run from `tick` unless a `To` depends on their end point.
    pub fn new(origin: Vec3, segments: Vec<MotionSegment>) -> Result<Self> {
        if segments.is_empty() {
            return Err(CityError::EmptyTimeline);
        }

        let last_to = segments
            .iter()
            .rposition(|s| matches!(s.path, MotionPath::To { .. }));

        let mut resolved = Vec::with_capacity(segments.len());
        let mut end = origin;
        let mut total_duration = 0.0_f32;

        for (index, segment) in segments.into_iter().enumerate() {
            let MotionSegment {
                duration,
                easing,
                path,
            } = segment;

            if !duration.is_finite() || duration <= 0.0 {
                return Err(CityError::InvalidDuration { index, duration });
            }
            easing
                .validate()
                .map_err(|reason| CityError::InvalidEasing { index, reason })?;

            let path = path.resolve(end);
            if last_to.is_some_and(|last| index < last) {
                end = path.sample(easing.apply(1.0), end);
            }
            total_duration += duration;
            if !total_duration.is_finite() {
                return Err(CityError::InvalidDuration { index, duration });
            }

            resolved.push(MotionSegment::new(duration, easing, path));
        }

        debug!(
            "Timeline built: {} segments, {:.3}s per loop",
            resolved.len(),
            total_duration
        );

        Ok(Self {
            origin,
            segments: resolved,
            total_duration,
        })
    }

    #[must_use]
    pub fn builder(origin: Vec3) -> TimelineBuilder {
        TimelineBuilder::new(origin)
    }

    #[inline]
    #[must_use]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[MotionSegment] {
        &self.segments
    }

    #[inline]
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Sum of all segment durations, in seconds.
    #[inline]
    #[must_use]
    pub fn total_duration(&self) -> f32 {
        self.total_duration
    }

    /// Advances `cursor` by `dt` seconds and writes the resulting position.
    ///
    /// Negative or non-finite deltas are treated as zero, and a cursor with
    /// a non-finite `accumulated` restarts its segment. Deltas spanning more
    /// than one full loop skip the whole loops before stepping, so a stalled
    /// clock costs at most two passes over the segment list; the leftover
    /// time is kept either way.
    pub fn tick(&self, cursor: TimelineCursor, dt: f32, position: &mut Vec3) -> TimelineCursor {
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            warn!("Timeline tick with invalid delta {dt}, treating as 0");
            0.0
        };

        let start = if cursor.accumulated.is_finite() {
            cursor.accumulated.max(0.0)
        } else {
            warn!(
                "Timeline cursor with invalid accumulated time {}, restarting segment",
                cursor.accumulated
            );
            0.0
        };

        let len = self.segments.len();
        let total = self.total_duration;
        let mut index = cursor.segment_index % len;
        let mut accumulated = start + dt;

        // Sum may overflow f32 even for in-range inputs; fold in f64 then.
        if !accumulated.is_finite() || accumulated >= 2.0 * total {
            let wide = f64::from(start) + f64::from(dt);
            let remainder = (wide % f64::from(total)) as f32;
            accumulated = if (total + remainder).is_finite() {
                total + remainder
            } else {
                remainder
            };
            debug!("Timeline skipped {:.0} whole loops", (wide / f64::from(total)).floor() - 1.0);
        }

        loop {
            let segment = &self.segments[index];
            if accumulated < segment.duration {
                break;
            }

            segment.apply(1.0, position);
            accumulated -= segment.duration;
            trace!("Segment {index} complete, carrying {accumulated:.4}s");

            index += 1;
            if index == len {
                index = 0;
                debug!("Timeline looped");
            }
        }

        let segment = &self.segments[index];
        segment.apply(accumulated / segment.duration, position);

        TimelineCursor {
            segment_index: index,
            accumulated,
        }
    }

    /// Re-evaluates the position at `cursor` without advancing it.
    pub fn sample(&self, cursor: TimelineCursor, position: &mut Vec3) {
        let segment = &self.segments[cursor.segment_index % self.segments.len()];
        segment.apply(cursor.accumulated / segment.duration, position);
    }

    /// Cursor for an absolute playback time measured from the first segment.
    #[must_use]
    pub fn cursor_at(&self, elapsed: f32) -> TimelineCursor {
        if !elapsed.is_finite() || elapsed <= 0.0 {
            return TimelineCursor::default();
        }

        let mut remaining = elapsed % self.total_duration;
        for (segment_index, segment) in self.segments.iter().enumerate() {
            if remaining < segment.duration {
                return TimelineCursor {
                    segment_index,
                    accumulated: remaining,
                };
            }
            remaining -= segment.duration;
        }

        // Rounding left us at the very end of the loop.
        TimelineCursor::default()
    }
}

/// Fluent construction of a [`Timeline`], in playback order.
///
/// ```rust,ignore
/// let timeline = Timeline::builder(Vec3::new(7.5, 1.0, 0.0))
///     .orbit(5.0, Easing::Linear, Vec3::new(0.0, 0.0, 2.0), 7.5)
///     .to(3.0, Easing::QUAD_IN_OUT, Vec3::new(0.0, 1.0, 5.0))
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct TimelineBuilder {
    origin: Vec3,
    segments: Vec<MotionSegment>,
}

impl TimelineBuilder {
    #[must_use]
    pub fn new(origin: Vec3) -> Self {
        Self {
            origin,
            segments: Vec::new(),
        }
    }

    #[must_use]
    pub fn then(mut self, segment: MotionSegment) -> Self {
        self.segments.push(segment);
        self
    }

    /// One full turn around `center` in the XZ plane.
    #[must_use]
    pub fn orbit(self, duration: f32, easing: Easing, center: Vec3, radius: f32) -> Self {
        self.then(MotionSegment::new(
            duration,
            easing,
            MotionPath::full_orbit(center, radius),
        ))
    }

    /// Tween from the previous end point to `target`.
    #[must_use]
    pub fn to(self, duration: f32, easing: Easing, target: Vec3) -> Self {
        self.then(MotionSegment::new(
            duration,
            easing,
            MotionPath::To { target },
        ))
    }

    #[must_use]
    pub fn lerp(self, duration: f32, easing: Easing, from: Vec3, to: Vec3) -> Self {
        self.then(MotionSegment::new(
            duration,
            easing,
            MotionPath::Lerp { from, to },
        ))
    }

    #[must_use]
    pub fn custom<F>(self, duration: f32, easing: Easing, f: F) -> Self
    where
        F: Fn(f32, Vec3) -> Vec3 + Send + Sync + 'static,
    {
        self.then(MotionSegment::new(duration, easing, MotionPath::custom(f)))
    }

    pub fn build(self) -> Result<Timeline> {
        Timeline::new(self.origin, self.segments)
    }
}

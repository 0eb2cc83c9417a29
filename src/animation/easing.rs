//! Easing functions for motion segments.
//!
//! An easing reshapes the raw progress `t ∈ [0, 1]` of a segment. All
//! families satisfy `f(0) = 0` and `f(1) = 1`; the `Back*` family overshoots
//! in between, so callers must not assume the eased value stays in `[0, 1]`.
//!
//! Names follow the GSAP convention so a schedule can be written as strings:
//!
//! ```rust,ignore
//! use lowpoly_city::animation::Easing;
//!
//! let ease: Easing = "power1.inOut".parse()?;
//! assert!((ease.apply(0.5) - 0.5).abs() < 1e-6);
//! ```

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::errors::CityError;

/// Default overshoot of the `back` family (GSAP / Penner constant).
pub const DEFAULT_BACK_OVERSHOOT: f32 = 1.701_58;

const BOUNDARY_TOLERANCE: f32 = 1e-4;

/// Easing function type
#[derive(Clone, Copy, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// `t^p`
    PowerIn(f32),
    /// `1 - (1 - t)^p`
    PowerOut(f32),
    /// `2^(p-1)·t^p` for the first half, mirrored for the second.
    PowerInOut(f32),
    SineIn,
    SineOut,
    SineInOut,
    /// Pulls back below zero before accelerating. Parameter is the overshoot.
    BackIn(f32),
    /// Overshoots past one before settling. Parameter is the overshoot.
    BackOut(f32),
    BackInOut(f32),
    /// User supplied curve. Checked for `f(0) = 0` and `f(1) = 1` on validation.
    Custom(fn(f32) -> f32),
}

impl Easing {
    /// Quadratic ease-in-out, GSAP's `power1.inOut`.
    pub const QUAD_IN_OUT: Easing = Easing::PowerInOut(2.0);

    /// Apply the easing function to a progress value (0.0 to 1.0)
    #[must_use]
    pub fn apply(&self, t: f32) -> f32 {
        match *self {
            Easing::Linear => t,
            Easing::PowerIn(p) => t.powf(p),
            Easing::PowerOut(p) => 1.0 - (1.0 - t).powf(p),
            Easing::PowerInOut(p) => {
                if t < 0.5 {
                    2f32.powf(p - 1.0) * t.powf(p)
                } else {
                    1.0 - (-2.0 * t + 2.0).powf(p) / 2.0
                }
            }
            Easing::SineIn => 1.0 - (t * PI / 2.0).cos(),
            Easing::SineOut => (t * PI / 2.0).sin(),
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Easing::BackIn(s) => {
                let c3 = s + 1.0;
                c3 * t * t * t - s * t * t
            }
            Easing::BackOut(s) => {
                let c3 = s + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u * u * u + s * u * u
            }
            Easing::BackInOut(s) => {
                let c2 = s * 1.525;
                if t < 0.5 {
                    let u = 2.0 * t;
                    (u * u * ((c2 + 1.0) * u - c2)) / 2.0
                } else {
                    let u = 2.0 * t - 2.0;
                    (u * u * ((c2 + 1.0) * u + c2) + 2.0) / 2.0
                }
            }
            Easing::Custom(f) => f(t),
        }
    }

    /// Checks parameters and boundary conditions.
    ///
    /// Returns a human readable reason on failure; the timeline wraps it into
    /// [`CityError::InvalidEasing`] together with the segment index.
    pub fn validate(&self) -> Result<(), String> {
        match *self {
            Easing::PowerIn(p) | Easing::PowerOut(p) | Easing::PowerInOut(p) => {
                if !p.is_finite() || p <= 0.0 {
                    return Err(format!("power exponent must be finite and > 0, got {p}"));
                }
            }
            Easing::BackIn(s) | Easing::BackOut(s) | Easing::BackInOut(s) => {
                if !s.is_finite() || s < 0.0 {
                    return Err(format!("overshoot must be finite and >= 0, got {s}"));
                }
            }
            Easing::Custom(_) => {
                let start = self.apply(0.0);
                let end = self.apply(1.0);
                if !start.is_finite() || start.abs() > BOUNDARY_TOLERANCE {
                    return Err(format!("custom easing must map 0 to 0, got {start}"));
                }
                if !end.is_finite() || (end - 1.0).abs() > BOUNDARY_TOLERANCE {
                    return Err(format!("custom easing must map 1 to 1, got {end}"));
                }
            }
            Easing::Linear | Easing::SineIn | Easing::SineOut | Easing::SineInOut => {}
        }
        Ok(())
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Linear => write!(f, "Linear"),
            Easing::PowerIn(p) => write!(f, "PowerIn({p})"),
            Easing::PowerOut(p) => write!(f, "PowerOut({p})"),
            Easing::PowerInOut(p) => write!(f, "PowerInOut({p})"),
            Easing::SineIn => write!(f, "SineIn"),
            Easing::SineOut => write!(f, "SineOut"),
            Easing::SineInOut => write!(f, "SineInOut"),
            Easing::BackIn(s) => write!(f, "BackIn({s})"),
            Easing::BackOut(s) => write!(f, "BackOut({s})"),
            Easing::BackInOut(s) => write!(f, "BackInOut({s})"),
            Easing::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

#[derive(Clone, Copy)]
enum Direction {
    In,
    Out,
    InOut,
}

/// Parses GSAP style names: `linear`, `none`, `power2.inOut`, `quad.out`,
/// `sine.in`, `back.out(1.7)`. A missing direction means `out`, as in GSAP.
impl FromStr for Easing {
    type Err = CityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || CityError::UnknownEasing(s.to_string());
        let lower = s.trim().to_ascii_lowercase();

        let (head, param) = match lower.split_once('(') {
            Some((head, rest)) => {
                let inner = rest.strip_suffix(')').ok_or_else(unknown)?;
                let value = inner.trim().parse::<f32>().map_err(|_| unknown())?;
                (head.to_string(), Some(value))
            }
            None => (lower, None),
        };

        let (family, direction) = match head.split_once('.') {
            Some((family, dir)) => {
                let direction = match dir {
                    "in" => Direction::In,
                    "out" => Direction::Out,
                    "inout" => Direction::InOut,
                    _ => return Err(unknown()),
                };
                (family, direction)
            }
            None => (head.as_str(), Direction::Out),
        };

        let power = |p: f32| match direction {
            Direction::In => Easing::PowerIn(p),
            Direction::Out => Easing::PowerOut(p),
            Direction::InOut => Easing::PowerInOut(p),
        };

        let easing = match family {
            "linear" | "none" | "power0" => Easing::Linear,
            "power1" | "quad" => power(2.0),
            "power2" | "cubic" => power(3.0),
            "power3" | "quart" => power(4.0),
            "power4" | "quint" | "strong" => power(5.0),
            "sine" => match direction {
                Direction::In => Easing::SineIn,
                Direction::Out => Easing::SineOut,
                Direction::InOut => Easing::SineInOut,
            },
            "back" => {
                let overshoot = param.unwrap_or(DEFAULT_BACK_OVERSHOOT);
                match direction {
                    Direction::In => Easing::BackIn(overshoot),
                    Direction::Out => Easing::BackOut(overshoot),
                    Direction::InOut => Easing::BackInOut(overshoot),
                }
            }
            _ => return Err(unknown()),
        };

        // Only `back` takes a parameter.
        if param.is_some() && family != "back" {
            return Err(unknown());
        }

        Ok(easing)
    }
}

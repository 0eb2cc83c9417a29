use std::f32::consts::TAU;
use std::fmt;
use std::sync::Arc;

use glam::Vec3;

use crate::animation::easing::Easing;

/// User supplied update rule: `(eased_progress, current_position) -> new_position`.
pub type PathFn = Arc<dyn Fn(f32, Vec3) -> Vec3 + Send + Sync>;

/// How a segment maps eased progress to a position.
#[derive(Clone)]
pub enum MotionPath {
    /// Circular arc in the XZ plane around `center`. The Y component of the
    /// animated position is left untouched.
    Orbit {
        center: Vec3,
        radius: f32,
        /// Angle at progress 0, in radians.
        start_angle: f32,
        /// Swept angle over the whole segment, in radians.
        sweep: f32,
    },
    /// Straight line between two fixed positions.
    Lerp { from: Vec3, to: Vec3 },
    /// Straight line from wherever the previous segment ends to `target`.
    ///
    /// Resolved into [`MotionPath::Lerp`] when the timeline is built, so it
    /// never reaches [`MotionPath::sample`] in a built timeline.
    To { target: Vec3 },
    /// Arbitrary parametric rule.
    Custom(PathFn),
}

impl MotionPath {
    /// One full counter-clockwise turn starting on the +X side of `center`.
    #[must_use]
    pub fn full_orbit(center: Vec3, radius: f32) -> Self {
        MotionPath::Orbit {
            center,
            radius,
            start_angle: 0.0,
            sweep: TAU,
        }
    }

    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32, Vec3) -> Vec3 + Send + Sync + 'static,
    {
        MotionPath::Custom(Arc::new(f))
    }

    /// Evaluates the path at eased progress `t`.
    ///
    /// `current` is the position before this evaluation; rules that only
    /// drive some axes copy the rest from it. `t` may leave `[0, 1]` for
    /// overshooting easings.
    #[must_use]
    pub fn sample(&self, t: f32, current: Vec3) -> Vec3 {
        match self {
            MotionPath::Orbit {
                center,
                radius,
                start_angle,
                sweep,
            } => {
                let angle = start_angle + sweep * t;
                Vec3::new(
                    center.x + radius * angle.cos(),
                    current.y,
                    center.z + radius * angle.sin(),
                )
            }
            MotionPath::Lerp { from, to } => from.lerp(*to, t),
            // Unresolved: behave like a tween that starts where we are now.
            MotionPath::To { target } => current.lerp(*target, t),
            MotionPath::Custom(f) => f(t, current),
        }
    }

    /// Replaces `To` with a fixed `Lerp` starting at `start`.
    pub(crate) fn resolve(self, start: Vec3) -> Self {
        match self {
            MotionPath::To { target } => MotionPath::Lerp {
                from: start,
                to: target,
            },
            other => other,
        }
    }
}

impl fmt::Debug for MotionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionPath::Orbit {
                center,
                radius,
                start_angle,
                sweep,
            } => f
                .debug_struct("Orbit")
                .field("center", center)
                .field("radius", radius)
                .field("start_angle", start_angle)
                .field("sweep", sweep)
                .finish(),
            MotionPath::Lerp { from, to } => f
                .debug_struct("Lerp")
                .field("from", from)
                .field("to", to)
                .finish(),
            MotionPath::To { target } => f.debug_struct("To").field("target", target).finish(),
            MotionPath::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// One timed leg of a composite motion.
#[derive(Debug, Clone)]
pub struct MotionSegment {
    /// Seconds, finite and > 0 once validated.
    pub duration: f32,
    pub easing: Easing,
    pub path: MotionPath,
}

impl MotionSegment {
    #[must_use]
    pub fn new(duration: f32, easing: Easing, path: MotionPath) -> Self {
        Self {
            duration,
            easing,
            path,
        }
    }

    /// Writes the position for raw progress `raw`, clamped to `[0, 1]`.
    pub fn apply(&self, raw: f32, position: &mut Vec3) {
        let eased = self.easing.apply(raw.clamp(0.0, 1.0));
        *position = self.path.sample(eased, *position);
    }
}

//! Widget-wide mutable state.

/// Rotation state shared by every tag of one cloud.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CloudState {
    /// Rotation in radians. Grows without bound; trig periodicity wraps it.
    pub angle: f64,
    /// Speed multiplier, slowed while a tag is hovered.
    pub speed: f64,
    /// Sphere radius in pixels, fixed for the lifetime of the cloud.
    pub radius: f64,
}

impl CloudState {
    pub fn new(radius: f64, speed: f64) -> Self {
        Self {
            angle: 0.0,
            speed,
            radius,
        }
    }
}

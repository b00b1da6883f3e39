//! Basic 2D types.
//!
//! - `Location`: a point in the plane (`nalgebra::Vector2<f64>`, fields `.x`/`.y`).
//! - `Segment2`: a directed segment `p → q` with length and interpolation helpers.

use nalgebra::Vector2;

/// Point in the plane.
pub type Location = Vector2<f64>;

/// Directed segment `p → q`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment2 {
    pub p: Location,
    pub q: Location,
}

impl Segment2 {
    #[inline]
    pub fn new(p: Location, q: Location) -> Self {
        Self { p, q }
    }
    #[inline]
    pub fn length(&self) -> f64 {
        (self.q - self.p).norm()
    }
    /// `p + f·(q − p)`; `f` is not clamped.
    #[inline]
    pub fn lerp(&self, f: f64) -> Location {
        self.p + (self.q - self.p) * f
    }
}

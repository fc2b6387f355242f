//! Planar geometry used when drawing the bridge.

use serde::Serialize;

/// Position in the bridge's vertical plane measured in metres.
///
/// `x` runs along the ground and `y` is the height above it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    /// Horizontal position.
    pub x: f64,
    /// Height above ground level.
    pub y: f64,
}

impl Point {
    /// Create a [`Point`] with explicit coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Create a point lying on the ground at position `x`.
    #[must_use]
    pub const fn on_ground(x: f64) -> Self {
        Self::new(x, 0.0)
    }
}

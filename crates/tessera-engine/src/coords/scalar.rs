use super::Point;

/// Tolerance used by every approximate comparison in the engine.
pub const EPSILON: f32 = 1e-3;

/// Approximate scalar equality within [`EPSILON`].
#[inline]
pub fn feq(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPSILON
}

#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg.to_radians()
}

#[inline]
pub fn rad_to_deg(rad: f32) -> f32 {
    rad.to_degrees()
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f32 {
    (a - b).length()
}

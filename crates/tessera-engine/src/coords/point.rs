use core::ops::{Add, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};

use super::scalar::feq;

/// Position in a 2D coordinate space.
///
/// Equality is approximate (see [`EPSILON`](super::EPSILON)) so that points
/// produced by long chains of matrix products still compare equal to their
/// exact counterparts.
#[derive(Debug, Copy, Clone, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Displacement from the origin to this point.
    #[inline]
    pub const fn to_vector(self) -> Vector {
        Vector::new(self.x, self.y)
    }
}

impl PartialEq for Point {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        feq(self.x, other.x) && feq(self.y, other.y)
    }
}

impl From<(f32, f32)> for Point {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl Add<Vector> for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Vector) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub for Point {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Displacement in a 2D coordinate space.
///
/// Unlike [`Point`], a vector is unaffected by the translation part of a
/// [`Matrix`](super::Matrix).
#[derive(Debug, Copy, Clone, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl PartialEq for Vector {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        feq(self.x, other.x) && feq(self.y, other.y)
    }
}

impl From<(f32, f32)> for Vector {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: f32) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── equality ──────────────────────────────────────────────────────────

    #[test]
    fn points_within_epsilon_are_equal() {
        assert_eq!(Point::new(1.0, 2.0), Point::new(1.0005, 1.9995));
    }

    #[test]
    fn points_outside_epsilon_differ() {
        assert_ne!(Point::new(1.0, 2.0), Point::new(1.01, 2.0));
        assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 2.01));
    }

    // ── arithmetic ────────────────────────────────────────────────────────

    #[test]
    fn point_difference_is_a_vector() {
        let v = Point::new(5.0, 7.0) - Point::new(2.0, 3.0);
        assert_eq!(v, Vector::new(3.0, 4.0));
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn point_plus_vector_moves_point() {
        let p = Point::new(1.0, 1.0) + Vector::new(2.0, -3.0);
        assert_eq!(p, Point::new(3.0, -2.0));
        assert_eq!(p - Vector::new(2.0, -3.0), Point::new(1.0, 1.0));
    }

    #[test]
    fn vector_add_and_scale() {
        let v = (Vector::new(1.0, 2.0) + Vector::new(3.0, 4.0)) * 0.5;
        assert_eq!(v, Vector::new(2.0, 3.0));
        assert_eq!(-v, Vector::new(-2.0, -3.0));
    }
}

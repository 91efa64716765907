use core::ops::{Mul, MulAssign};

use bytemuck::{Pod, Zeroable};

use super::scalar::{deg_to_rad, feq};
use super::{Point, Vector};
use crate::error::{Result, SceneError};

/// 2x3 affine transform.
///
/// Maps a point as
///
/// ```text
/// | x' |   | m11 m12 |   | x |   | dx |
/// | y' | = | m21 m22 | * | y | + | dy |
/// ```
///
/// Composition follows the column-vector convention: in `a * b`, `b` is
/// applied first and `a` second. The product is associative but not
/// commutative.
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Matrix {
    pub m11: f32,
    pub m12: f32,
    pub m21: f32,
    pub m22: f32,
    pub dx: f32,
    pub dy: f32,
}

impl Matrix {
    #[inline]
    pub const fn new(m11: f32, m12: f32, m21: f32, m22: f32, dx: f32, dy: f32) -> Self {
        Self {
            m11,
            m12,
            m21,
            m22,
            dx,
            dy,
        }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0)
    }

    /// Pure translation by `v`.
    #[inline]
    pub const fn translation(v: Vector) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, v.x, v.y)
    }

    /// Pure rotation by `degrees`, counter-clockwise for positive angles in a
    /// +Y-up frame.
    pub fn rotation(degrees: f32) -> Self {
        let (sin, cos) = deg_to_rad(degrees).sin_cos();
        Self::new(cos, -sin, sin, cos, 0.0, 0.0)
    }

    /// Rotation by `degrees` about `pivot`. The pivot is a fixed point of the
    /// result.
    pub fn rotation_around(pivot: Point, degrees: f32) -> Self {
        let to_pivot = Self::translation(pivot.to_vector());
        let from_pivot = Self::translation(-pivot.to_vector());
        to_pivot * Self::rotation(degrees) * from_pivot
    }

    /// Non-uniform geometric scale along the axes.
    #[inline]
    pub const fn scaling(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Multiplies every component, translation included, by `f`.
    ///
    /// This scales the representation, not the geometry: use [`Matrix::scaling`]
    /// for a geometric scale.
    #[inline]
    pub fn scale(self, f: f32) -> Self {
        Self::new(
            self.m11 * f,
            self.m12 * f,
            self.m21 * f,
            self.m22 * f,
            self.dx * f,
            self.dy * f,
        )
    }

    /// Maps `p` through the linear part and the translation.
    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.m11 * p.x + self.m12 * p.y + self.dx,
            self.m21 * p.x + self.m22 * p.y + self.dy,
        )
    }

    /// Maps `v` through the linear part only.
    #[inline]
    pub fn apply_vector(&self, v: Vector) -> Vector {
        Vector::new(
            self.m11 * v.x + self.m12 * v.y,
            self.m21 * v.x + self.m22 * v.y,
        )
    }

    /// Swaps `m12` and `m21`; the translation is kept as is.
    #[inline]
    pub const fn transpose(self) -> Self {
        Self::new(self.m11, self.m21, self.m12, self.m22, self.dx, self.dy)
    }

    #[inline]
    pub fn determinant(&self) -> f32 {
        self.m11 * self.m22 - self.m12 * self.m21
    }

    #[inline]
    pub fn is_invertible(&self) -> bool {
        let det = self.determinant();
        det != 0.0 && (1.0 / det).is_finite()
    }

    /// Algebraic inverse through the adjugate.
    ///
    /// Fails with [`SceneError::SingularMatrix`] when the determinant is zero
    /// or so small that the inverse would not be finite.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if !self.is_invertible() {
            return Err(SceneError::SingularMatrix { determinant: det });
        }

        let adjugate = Self::new(
            self.m22,
            -self.m12,
            -self.m21,
            self.m11,
            self.m12 * self.dy - self.m22 * self.dx,
            self.m21 * self.dx - self.m11 * self.dy,
        );
        let inverse = adjugate.scale(1.0 / det);
        if !inverse.is_finite() {
            return Err(SceneError::SingularMatrix { determinant: det });
        }
        Ok(inverse)
    }

    /// Component-wise comparison within [`EPSILON`](super::EPSILON).
    pub fn approx_eq(&self, other: &Matrix) -> bool {
        feq(self.m11, other.m11)
            && feq(self.m12, other.m12)
            && feq(self.m21, other.m21)
            && feq(self.m22, other.m22)
            && feq(self.dx, other.dx)
            && feq(self.dy, other.dy)
    }

    #[inline]
    pub fn translation_part(&self) -> Vector {
        Vector::new(self.dx, self.dy)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.to_array().iter().all(|c| c.is_finite())
    }

    /// Column-major `[m11, m21, m12, m22, dx, dy]`, the `a b c d e f` layout
    /// used by SVG, canvas and most 2D rasterizers.
    #[inline]
    pub fn to_array(&self) -> [f32; 6] {
        [self.m11, self.m21, self.m12, self.m22, self.dx, self.dy]
    }
}

impl Default for Matrix {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    #[inline]
    fn mul(self, b: Matrix) -> Matrix {
        Matrix::new(
            self.m11 * b.m11 + self.m12 * b.m21,
            self.m11 * b.m12 + self.m12 * b.m22,
            self.m21 * b.m11 + self.m22 * b.m21,
            self.m21 * b.m12 + self.m22 * b.m22,
            self.m11 * b.dx + self.m12 * b.dy + self.dx,
            self.m21 * b.dx + self.m22 * b.dy + self.dy,
        )
    }
}

impl MulAssign for Matrix {
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix) {
        *self = *self * rhs;
    }
}

impl Mul<f32> for Matrix {
    type Output = Matrix;
    #[inline]
    fn mul(self, rhs: f32) -> Matrix {
        self.scale(rhs)
    }
}

impl Mul<Matrix> for f32 {
    type Output = Matrix;
    #[inline]
    fn mul(self, rhs: Matrix) -> Matrix {
        rhs.scale(self)
    }
}

impl MulAssign<f32> for Matrix {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = self.scale(rhs);
    }
}

impl Mul<Point> for Matrix {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: Point) -> Point {
        self.apply(rhs)
    }
}

impl Mul<Vector> for Matrix {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: Vector) -> Vector {
        self.apply_vector(rhs)
    }
}

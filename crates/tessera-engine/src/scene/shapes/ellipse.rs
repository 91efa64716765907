use crate::coords::{Bounds, Matrix, Point};
use crate::paint::DrawStyle;
use crate::render::{Surface, SurfaceScope};

use super::Draw;

/// Axis-aligned (in local space) ellipse given by center and radii.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Ellipse {
    center: Point,
    rx: f32,
    ry: f32,
}

impl Ellipse {
    #[inline]
    pub const fn new(center: Point, rx: f32, ry: f32) -> Self {
        Self { center, rx, ry }
    }

    /// Replaces center and radii. Chains.
    #[inline]
    pub fn set(&mut self, center: Point, rx: f32, ry: f32) -> &mut Self {
        *self = Self::new(center, rx, ry);
        self
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Horizontal and vertical radii.
    #[inline]
    pub fn radii(&self) -> (f32, f32) {
        (self.rx, self.ry)
    }

    /// Local-space bounding box.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::from_center_radii(self.center, self.rx, self.ry)
    }
}

impl Draw for Ellipse {
    /// The world matrix is installed on the surface instead of mapping the
    /// bounds, so rotation and shear bend the curve correctly.
    fn draw<S: Surface + ?Sized>(&self, world: &Matrix, style: &DrawStyle, surface: &mut S) {
        let mut surface = SurfaceScope::new(surface);
        let combined = surface.transform() * *world;
        surface.set_transform(combined);
        surface.draw_ellipse(self.bounds(), style);
    }
}

use crate::coords::{Matrix, Point};
use crate::paint::DrawStyle;
use crate::render::Surface;

use super::Draw;

/// Four-vertex polygon spanned by two opposite local-space corners.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rectangle {
    top_left: Point,
    bottom_right: Point,
}

impl Rectangle {
    #[inline]
    pub const fn new(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Moves both corners. Chains.
    #[inline]
    pub fn set(&mut self, top_left: Point, bottom_right: Point) -> &mut Self {
        self.top_left = top_left;
        self.bottom_right = bottom_right;
        self
    }

    /// Vertices in winding order, starting at `top_left`.
    #[inline]
    pub fn vertices(&self) -> [Point; 4] {
        let (a, b) = (self.top_left, self.bottom_right);
        [a, Point::new(b.x, a.y), b, Point::new(a.x, b.y)]
    }

    #[inline]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[inline]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }
}

impl Draw for Rectangle {
    fn draw<S: Surface + ?Sized>(&self, world: &Matrix, style: &DrawStyle, surface: &mut S) {
        let points = self.vertices().map(|p| *world * p);
        surface.draw_polygon(&points, style);
    }
}

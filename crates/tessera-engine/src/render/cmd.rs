use crate::coords::{Bounds, Matrix, Point};
use crate::paint::DrawStyle;

/// Closed polygon payload, vertices in surface space.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonCmd {
    pub points: Vec<Point>,
    pub style: DrawStyle,
}

impl PolygonCmd {
    #[inline]
    pub fn new(points: Vec<Point>, style: DrawStyle) -> Self {
        Self { points, style }
    }

    /// Vertices as interleaved `x, y` floats, ready for a vertex buffer.
    #[inline]
    pub fn vertex_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.points)
    }
}

/// Line segment payload, endpoints in surface space.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Point,
    pub to: Point,
    pub style: DrawStyle,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Point, to: Point, style: DrawStyle) -> Self {
        Self { from, to, style }
    }
}

/// Ellipse payload: local bounds plus the full transform to surface space.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseCmd {
    pub bounds: Bounds,
    pub transform: Matrix,
    pub style: DrawStyle,
}

impl EllipseCmd {
    #[inline]
    pub fn new(bounds: Bounds, transform: Matrix, style: DrawStyle) -> Self {
        Self {
            bounds,
            transform,
            style,
        }
    }

    /// Center of the ellipse in surface space.
    #[inline]
    pub fn center(&self) -> Point {
        self.transform * self.bounds.center()
    }
}

/// Recorded drawing command.
///
/// Extending the command set:
/// - add a payload type here
/// - add a variant
/// - add the matching `Surface` method and record it in `DrawList`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Polygon(PolygonCmd),
    Line(LineCmd),
    Ellipse(EllipseCmd),
}

impl DrawCmd {
    #[inline]
    pub fn style(&self) -> &DrawStyle {
        match self {
            DrawCmd::Polygon(c) => &c.style,
            DrawCmd::Line(c) => &c.style,
            DrawCmd::Ellipse(c) => &c.style,
        }
    }

    #[inline]
    pub fn kind(&self) -> &'static str {
        match self {
            DrawCmd::Polygon(_) => "polygon",
            DrawCmd::Line(_) => "line",
            DrawCmd::Ellipse(_) => "ellipse",
        }
    }
}

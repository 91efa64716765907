pub(crate) mod composite;
pub(crate) mod ellipse;
pub(crate) mod line;
pub(crate) mod polygon;
pub(crate) mod rectangle;

use crate::coords::Matrix;
use crate::paint::DrawStyle;
use crate::render::Surface;

pub use composite::Composite;
pub use ellipse::Ellipse;
pub use line::Line;
pub use polygon::Polygon;
pub use rectangle::Rectangle;

/// Capability of rendering local-space geometry through a world matrix.
pub trait Draw {
    /// Issues the surface calls for this geometry, placed by `world`.
    fn draw<S: Surface + ?Sized>(&self, world: &Matrix, style: &DrawStyle, surface: &mut S);
}

/// Drawable kind of an object.
///
/// Extending the scene:
/// - add a shape module under `scene::shapes::*` implementing [`Draw`]
/// - add a variant here and a `From` impl
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line),
    Polygon(Polygon),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Composite(Composite),
}

impl Shape {
    #[inline]
    pub fn is_composite(&self) -> bool {
        matches!(self, Shape::Composite(_))
    }

    #[inline]
    pub fn as_composite(&self) -> Option<&Composite> {
        match self {
            Shape::Composite(c) => Some(c),
            _ => None,
        }
    }

    #[inline]
    pub(crate) fn as_composite_mut(&mut self) -> Option<&mut Composite> {
        match self {
            Shape::Composite(c) => Some(c),
            _ => None,
        }
    }

    #[inline]
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Line(_) => "line",
            Shape::Polygon(_) => "polygon",
            Shape::Rectangle(_) => "rectangle",
            Shape::Ellipse(_) => "ellipse",
            Shape::Composite(_) => "composite",
        }
    }
}

impl Draw for Shape {
    fn draw<S: Surface + ?Sized>(&self, world: &Matrix, style: &DrawStyle, surface: &mut S) {
        match self {
            Shape::Line(s) => s.draw(world, style, surface),
            Shape::Polygon(s) => s.draw(world, style, surface),
            Shape::Rectangle(s) => s.draw(world, style, surface),
            Shape::Ellipse(s) => s.draw(world, style, surface),
            // Children are drawn by the scene, which owns them.
            Shape::Composite(_) => {}
        }
    }
}

impl From<Line> for Shape {
    fn from(s: Line) -> Self {
        Shape::Line(s)
    }
}

impl From<Polygon> for Shape {
    fn from(s: Polygon) -> Self {
        Shape::Polygon(s)
    }
}

impl From<Rectangle> for Shape {
    fn from(s: Rectangle) -> Self {
        Shape::Rectangle(s)
    }
}

impl From<Ellipse> for Shape {
    fn from(s: Ellipse) -> Self {
        Shape::Ellipse(s)
    }
}

impl From<Composite> for Shape {
    fn from(s: Composite) -> Self {
        Shape::Composite(s)
    }
}

use crate::coords::{Matrix, Point};
use crate::paint::DrawStyle;
use crate::render::Surface;

use super::Draw;

/// Segment between two local-space points.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
}

impl Line {
    #[inline]
    pub const fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }
}

impl Draw for Line {
    fn draw<S: Surface + ?Sized>(&self, world: &Matrix, style: &DrawStyle, surface: &mut S) {
        surface.draw_line(*world * self.p1, *world * self.p2, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vector;
    use crate::paint::{Color, Pen};
    use crate::render::{DrawCmd, DrawList};

    #[test]
    fn draw_maps_endpoints_through_world() {
        let world = Matrix::translation(Vector::new(10.0, 5.0)) * Matrix::rotation(90.0);
        let style = DrawStyle::default().with_pen(Pen::solid(3.0, Color::black()));
        let mut list = DrawList::new();
        Line::new(Point::new(1.0, 0.0), Point::new(3.0, 2.0)).draw(&world, &style, &mut list);

        let DrawCmd::Line(cmd) = &list.items()[0].cmd else {
            panic!("expected a line");
        };
        assert_eq!(cmd.from, Point::new(10.0, 6.0));
        assert_eq!(cmd.to, Point::new(8.0, 8.0));
        assert_eq!(cmd.style, style);
    }

    #[test]
    fn identity_world_keeps_local_endpoints() {
        let mut list = DrawList::new();
        let line = Line::new(Point::new(-1000.0, 0.0), Point::new(1000.0, 0.0));
        line.draw(&Matrix::identity(), &DrawStyle::default(), &mut list);

        let DrawCmd::Line(cmd) = &list.items()[0].cmd else {
            panic!("expected a line");
        };
        assert_eq!((cmd.from, cmd.to), (line.p1, line.p2));
    }
}

use crate::coords::{Matrix, Point};
use crate::error::{Result, SceneError};
use crate::paint::DrawStyle;
use crate::render::Surface;

use super::Draw;

/// Closed polygon over an ordered list of local-space vertices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vertices(vertices: impl IntoIterator<Item = Point>) -> Self {
        Self {
            vertices: vertices.into_iter().collect(),
        }
    }

    /// Appends a vertex. Chains.
    #[inline]
    pub fn add_vertex(&mut self, p: Point) -> &mut Self {
        self.vertices.push(p);
        self
    }

    /// Appends the vertex `(x, y)`. Chains.
    #[inline]
    pub fn push_vertex(&mut self, x: f32, y: f32) -> &mut Self {
        self.add_vertex(Point::new(x, y))
    }

    /// Removes and returns the vertex at `index`.
    ///
    /// Fails with [`SceneError::VertexOutOfRange`] without touching the list
    /// if `index >= len`.
    pub fn remove_vertex(&mut self, index: usize) -> Result<Point> {
        let len = self.vertices.len();
        if index >= len {
            return Err(SceneError::VertexOutOfRange { index, len });
        }
        Ok(self.vertices.remove(index))
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl Draw for Polygon {
    fn draw<S: Surface + ?Sized>(&self, world: &Matrix, style: &DrawStyle, surface: &mut S) {
        if self.vertices.is_empty() {
            return;
        }
        let points: Vec<Point> = self.vertices.iter().map(|&p| *world * p).collect();
        surface.draw_polygon(&points, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCmd, DrawList};

    fn triangle() -> Polygon {
        let mut p = Polygon::new();
        p.push_vertex(0.0, 0.0).push_vertex(8.0, 8.0).push_vertex(16.0, 0.0);
        p
    }

    #[test]
    fn remove_vertex_in_range() {
        let mut p = triangle();
        assert_eq!(p.remove_vertex(1).unwrap(), Point::new(8.0, 8.0));
        assert_eq!(p.vertices(), &[Point::new(0.0, 0.0), Point::new(16.0, 0.0)]);
    }

    #[test]
    fn remove_vertex_out_of_range_leaves_list_intact() {
        let mut p = triangle();
        assert_eq!(
            p.remove_vertex(3).unwrap_err(),
            SceneError::VertexOutOfRange { index: 3, len: 3 }
        );
        assert_eq!(p.len(), 3);
        assert!(Polygon::new().remove_vertex(0).is_err());
    }

    #[test]
    fn draw_maps_vertices_through_world() {
        let mut list = DrawList::new();
        let world = Matrix::translation(crate::coords::Vector::new(100.0, 0.0));
        triangle().draw(&world, &DrawStyle::default(), &mut list);

        let DrawCmd::Polygon(cmd) = &list.items()[0].cmd else {
            panic!("expected a polygon");
        };
        assert_eq!(
            cmd.points,
            vec![Point::new(100.0, 0.0), Point::new(108.0, 8.0), Point::new(116.0, 0.0)]
        );
    }

    #[test]
    fn empty_polygon_draws_nothing() {
        let mut list = DrawList::new();
        Polygon::new().draw(&Matrix::identity(), &DrawStyle::default(), &mut list);
        assert!(list.is_empty());
    }
}

use crate::coords::{Bounds, Matrix, Point};
use crate::paint::DrawStyle;

use super::cmd::{DrawCmd, EllipseCmd, LineCmd, PolygonCmd};
use super::Surface;

/// A single recorded draw: insertion order + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub order: u32,
    pub cmd: DrawCmd,
    /// Number of active `save` calls when the command was recorded.
    pub depth: usize,
}

/// Recording surface: captures a frame's draw stream for a renderer.
///
/// Commands are stored in surface space: polygon and line points are mapped
/// through the current transform at record time, ellipses keep the full
/// transform so the renderer can rasterize the exact curve.
///
/// Performance characteristics:
/// - recording is O(points) per command
/// - `clear()` keeps allocated capacity; no per-frame allocation once warmed
///
/// Paint order is insertion order.
#[derive(Debug)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    transform: Matrix,
    /// Saved transforms; the top is restored by the next `restore`.
    state_stack: Vec<Matrix>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::with_transform(Matrix::identity())
    }

    /// Creates a list whose base transform maps scene space to surface space.
    #[inline]
    pub fn with_transform(transform: Matrix) -> Self {
        Self {
            items: Vec::new(),
            next_order: 0,
            transform,
            state_stack: Vec::new(),
        }
    }

    /// Clears recorded items and any unbalanced saved state. Keeps allocated
    /// capacity and the current transform.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        if let Some(&base) = self.state_stack.first() {
            self.transform = base;
        }
        self.state_stack.clear();
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &DrawCmd> {
        self.items.iter().map(|item| &item.cmd)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of `save` calls not yet matched by `restore`.
    #[inline]
    pub fn depth(&self) -> usize {
        self.state_stack.len()
    }

    /// Appends a command as is, bypassing the current transform.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            order,
            cmd,
            depth: self.state_stack.len(),
        });
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for DrawList {
    fn draw_polygon(&mut self, points: &[Point], style: &DrawStyle) {
        let t = self.transform;
        let points = points.iter().map(|&p| t * p).collect();
        self.push(DrawCmd::Polygon(PolygonCmd::new(points, *style)));
    }

    fn draw_line(&mut self, from: Point, to: Point, style: &DrawStyle) {
        let t = self.transform;
        self.push(DrawCmd::Line(LineCmd::new(t * from, t * to, *style)));
    }

    fn draw_ellipse(&mut self, bounds: Bounds, style: &DrawStyle) {
        let cmd = EllipseCmd::new(bounds, self.transform, *style);
        self.push(DrawCmd::Ellipse(cmd));
    }

    #[inline]
    fn transform(&self) -> Matrix {
        self.transform
    }

    #[inline]
    fn set_transform(&mut self, transform: Matrix) {
        self.transform = transform;
    }

    #[inline]
    fn save(&mut self) {
        self.state_stack.push(self.transform);
    }

    fn restore(&mut self) {
        match self.state_stack.pop() {
            Some(saved) => self.transform = saved,
            None => log::warn!("DrawList::restore called without matching save"),
        }
    }
}

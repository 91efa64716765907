use core::ops::{Deref, DerefMut};

use crate::coords::{Bounds, Matrix, Point};
use crate::paint::DrawStyle;

/// Drawing target provided by the host.
///
/// Every primitive is mapped through the surface's current transform, which
/// the host typically sets to a scene-to-device mapping. Geometry passed to
/// `draw_polygon` and `draw_line` is already in scene (world) space.
///
/// Styles are explicit per call: a surface holds no selected pen or brush.
pub trait Surface {
    /// Draws a closed polygon, filled with the brush and outlined with the pen.
    fn draw_polygon(&mut self, points: &[Point], style: &DrawStyle);

    /// Draws a line segment with the pen. The brush is ignored.
    fn draw_line(&mut self, from: Point, to: Point, style: &DrawStyle);

    /// Draws the ellipse inscribed in `bounds`, mapped through the current
    /// transform. Callers that need an arbitrary affine mapping (rotation,
    /// shear) install it with [`Surface::set_transform`] inside a
    /// [`SurfaceScope`], which keeps the curve exact.
    fn draw_ellipse(&mut self, bounds: Bounds, style: &DrawStyle);

    /// Current transform applied to all primitives.
    fn transform(&self) -> Matrix;

    fn set_transform(&mut self, transform: Matrix);

    /// Pushes the current transform state.
    fn save(&mut self);

    /// Pops the state pushed by the matching [`Surface::save`].
    fn restore(&mut self);
}

/// Saves a surface's state on creation and restores it on drop.
///
/// ```rust,ignore
/// let mut surface = SurfaceScope::new(surface);
/// let combined = surface.transform() * world;
/// surface.set_transform(combined);
/// surface.draw_ellipse(bounds, &style);
/// // transform restored here
/// ```
pub struct SurfaceScope<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

impl<'a, S: Surface + ?Sized> SurfaceScope<'a, S> {
    #[inline]
    pub fn new(surface: &'a mut S) -> Self {
        surface.save();
        Self { surface }
    }
}

impl<S: Surface + ?Sized> Deref for SurfaceScope<'_, S> {
    type Target = S;
    #[inline]
    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for SurfaceScope<'_, S> {
    #[inline]
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for SurfaceScope<'_, S> {
    #[inline]
    fn drop(&mut self) {
        self.surface.restore();
    }
}

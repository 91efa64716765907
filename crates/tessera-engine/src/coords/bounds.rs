use super::{Point, Vector};

/// Axis-aligned box spanned by two opposite corners.
///
/// The corners are kept as given: in a +Y-up frame `top_left` has the larger
/// `y`. [`Bounds::normalized`] reorders them into min/max form.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Bounds {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Bounds {
    #[inline]
    pub const fn new(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Box of half-width `rx` and half-height `ry` around `center`, in a
    /// +Y-up frame.
    #[inline]
    pub fn from_center_radii(center: Point, rx: f32, ry: f32) -> Self {
        Self {
            top_left: Point::new(center.x - rx, center.y + ry),
            bottom_right: Point::new(center.x + rx, center.y - ry),
        }
    }

    #[inline]
    pub fn center(self) -> Point {
        self.top_left + (self.bottom_right - self.top_left) * 0.5
    }

    #[inline]
    pub fn width(self) -> f32 {
        (self.bottom_right.x - self.top_left.x).abs()
    }

    #[inline]
    pub fn height(self) -> f32 {
        (self.bottom_right.y - self.top_left.y).abs()
    }

    /// Half extents along x and y.
    #[inline]
    pub fn radii(self) -> Vector {
        Vector::new(self.width() * 0.5, self.height() * 0.5)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.top_left.is_finite() && self.bottom_right.is_finite()
    }

    /// Returns `(min, max)` corners regardless of axis orientation.
    #[inline]
    pub fn normalized(self) -> (Point, Point) {
        let (a, b) = (self.top_left, self.bottom_right);
        (
            Point::new(a.x.min(b.x), a.y.min(b.y)),
            Point::new(a.x.max(b.x), a.y.max(b.y)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_center_radii_uses_y_up_corners() {
        let b = Bounds::from_center_radii(Point::new(50.0, 50.0), 3.0, 2.0);
        assert_eq!(b.top_left, Point::new(47.0, 52.0));
        assert_eq!(b.bottom_right, Point::new(53.0, 48.0));
    }

    #[test]
    fn extents_are_orientation_independent() {
        let b = Bounds::from_center_radii(Point::new(-4.0, 1.0), 5.0, 2.5);
        assert_eq!(b.width(), 10.0);
        assert_eq!(b.height(), 5.0);
        assert_eq!(b.center(), Point::new(-4.0, 1.0));
        assert_eq!(b.radii(), Vector::new(5.0, 2.5));
    }

    #[test]
    fn normalized_orders_corners() {
        let b = Bounds::new(Point::new(10.0, 10.0), Point::new(0.0, 20.0));
        let (min, max) = b.normalized();
        assert_eq!(min, Point::new(0.0, 10.0));
        assert_eq!(max, Point::new(10.0, 20.0));
    }

    #[test]
    fn zero_radius_is_empty() {
        let flat = Bounds::from_center_radii(Point::origin(), 0.0, 4.0);
        assert!(flat.is_empty());
        let thin = Bounds::from_center_radii(Point::origin(), 1.0, 4.0);
        assert!(!thin.is_empty());
    }
}

use super::{Matrix, Point};

/// Device surface size in pixels.
///
/// Scene coordinates are centered on the surface with +Y pointing up; device
/// coordinates have their origin top-left with +Y pointing down.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Scene-to-device mapping: origin to the center, Y flipped.
    #[inline]
    pub fn to_device(self) -> Matrix {
        Matrix::new(1.0, 0.0, 0.0, -1.0, self.width * 0.5, self.height * 0.5)
    }

    #[inline]
    pub fn center(self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_origin_maps_to_center() {
        let vp = Viewport::new(200.0, 100.0);
        assert_eq!(vp.to_device() * Point::origin(), vp.center());
    }

    #[test]
    fn scene_up_maps_to_device_up() {
        let vp = Viewport::new(200.0, 100.0);
        assert_eq!(
            vp.to_device() * Point::new(10.0, 20.0),
            Point::new(110.0, 30.0)
        );
    }

    #[test]
    fn zero_size_is_invalid() {
        assert!(!Viewport::new(0.0, 10.0).is_valid());
        assert!(Viewport::default().is_valid());
    }
}

//! Coordinate and geometry types shared by the transform tree, shapes and
//! surfaces.
//!
//! Scene space:
//! - Origin at the center of the surface
//! - +X right, +Y up
//! - Positive angles rotate counter-clockwise
//!
//! Surfaces convert to device pixels themselves (see [`Viewport::to_device`]).

mod bounds;
mod matrix;
mod point;
mod scalar;
mod viewport;

pub use bounds::Bounds;
pub use matrix::Matrix;
pub use point::{Point, Vector};
pub use scalar::{deg_to_rad, distance, feq, rad_to_deg, EPSILON};
pub use viewport::Viewport;

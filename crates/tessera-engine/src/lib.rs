//! Tessera engine crate.
//!
//! A retained 2D scene: affine coordinate math, a transform hierarchy, shape
//! objects grouped into composites, and a backend-neutral drawing surface.

pub mod coords;
pub mod error;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod time;
pub mod transform;

pub use error::{Result, SceneError};

//! Styling model passed to drawing surfaces.
//!
//! Scope:
//! - 8-bit colors
//! - stroke (pen) and fill (brush) descriptions combined into a `DrawStyle`
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod style;

pub use color::Color;
pub use style::{Brush, BrushStyle, DrawStyle, Hatch, Pen, PenStyle};

//! Drawable objects and the scene that groups and places them.
//!
//! Every object owns a node in the scene's [`TransformTree`](crate::transform::TransformTree).
//! Composites group objects; grouping an object re-parents its node, so the
//! object's placement follows the composite from then on.

mod graph;
mod object;

pub mod shapes;

pub use graph::Scene;
pub use object::{Object, ObjectId};
pub use shapes::{Composite, Draw, Ellipse, Line, Polygon, Rectangle, Shape};

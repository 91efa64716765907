//! Drawing surface abstraction.
//!
//! The scene renders through the [`Surface`] trait; hosts supply the
//! implementation (a GDI context, an SVG writer, a GPU batcher). [`DrawList`]
//! is the built-in recording surface.
//!
//! Convention:
//! - geometry reaches the surface in scene (world) space
//! - the surface's own transform maps it to device space

mod cmd;
mod list;
mod surface;

pub use cmd::{DrawCmd, EllipseCmd, LineCmd, PolygonCmd};
pub use list::{DrawItem, DrawList};
pub use surface::{Surface, SurfaceScope};

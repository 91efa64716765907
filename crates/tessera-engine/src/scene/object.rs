use core::fmt;

use crate::paint::DrawStyle;
use crate::transform::NodeId;

use super::shapes::Shape;

/// Stable handle to an object in a [`Scene`](super::Scene).
///
/// An object and its transform node share a lifetime, so the handle wraps the
/// node's generational id.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ObjectId(pub(crate) NodeId);

impl ObjectId {
    /// Transform node owned by this object.
    #[inline]
    pub const fn node(self) -> NodeId {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object#{}v{}", self.0.index, self.0.generation)
    }
}

/// A drawable: shape, style, transform node and optional parent composite.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub(crate) shape: Shape,
    pub(crate) style: DrawStyle,
    pub(crate) parent: Option<ObjectId>,
}

impl Object {
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline]
    pub fn style(&self) -> &DrawStyle {
        &self.style
    }

    /// Composite this object belongs to, if any.
    #[inline]
    pub fn parent(&self) -> Option<ObjectId> {
        self.parent
    }

    #[inline]
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    #[inline]
    pub fn is_composite(&self) -> bool {
        self.shape.is_composite()
    }
}

use core::fmt;

use crate::coords::Matrix;

/// Stable handle to a node in a [`TransformTree`](super::TransformTree).
///
/// Handles carry a generation, so a handle to a destroyed node is rejected
/// even after its slot has been reused.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl NodeId {
    #[inline]
    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    #[inline]
    pub const fn index(self) -> u32 {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}v{}", self.index, self.generation)
    }
}

/// A node of the transform hierarchy.
///
/// `world` is derived state owned by the tree; it is only ever written by
/// the tree's recomputation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformNode {
    pub(crate) local: Matrix,
    pub(crate) world: Matrix,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl TransformNode {
    pub(crate) fn new(local: Matrix) -> Self {
        Self {
            local,
            world: local,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Transform relative to the parent.
    #[inline]
    pub fn local(&self) -> Matrix {
        self.local
    }

    /// Cached transform relative to the scene root.
    #[inline]
    pub fn world(&self) -> Matrix {
        self.world
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[inline]
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Children in attachment order.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

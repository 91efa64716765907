use crate::scene::ObjectId;
use crate::transform::NodeId;

/// Failures reported by the transform tree, the scene and matrix algebra.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SceneError {
    /// A matrix with a zero determinant was inverted, typically a world
    /// transform that collapses an axis.
    #[error("matrix is singular (determinant {determinant}) and has no inverse")]
    SingularMatrix { determinant: f32 },

    #[error("vertex index {index} is out of range for a polygon with {len} vertices")]
    VertexOutOfRange { index: usize, len: usize },

    #[error("attaching {child} under {parent} would introduce a cycle")]
    WouldCycle { parent: NodeId, child: NodeId },

    #[error("{child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },

    #[error("transform node {0} does not exist")]
    StaleNode(NodeId),

    #[error("object {0} does not exist")]
    StaleObject(ObjectId),

    #[error("object {0} is not a composite")]
    NotAComposite(ObjectId),

    #[error("object {0} is a composite and has no geometry of its own")]
    NoGeometry(ObjectId),

    #[error("object {object} is not a member of composite {composite}")]
    NotAMember {
        composite: ObjectId,
        object: ObjectId,
    },

    #[error("the scene root cannot be moved or destroyed")]
    RootObject,
}

pub type Result<T> = std::result::Result<T, SceneError>;

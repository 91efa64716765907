/// Frame a transform mutation is expressed in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Space {
    /// Relative to the node's own axes: the new transform is applied before
    /// the existing local transform.
    #[default]
    Local,
    /// Relative to the global scene frame: the new transform is applied after
    /// the node's current world transform.
    World,
}

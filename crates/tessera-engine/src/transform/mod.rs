//! Transform hierarchy.
//!
//! Responsibilities:
//! - own every transform node in a generational arena (`TransformTree`)
//! - keep each node's cached world matrix equal to `parent.world * local`
//! - expose space-relative mutators and local/world point conversion
//!
//! Recomputation is eager: every mutator refreshes the affected subtree before
//! it returns, so readers never observe a stale world matrix.

mod node;
mod space;
mod tree;

pub use node::{NodeId, TransformNode};
pub use space::Space;
pub use tree::{Ancestors, TransformTree};

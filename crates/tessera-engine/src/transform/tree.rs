use crate::coords::{Matrix, Point, Vector};
use crate::error::{Result, SceneError};

use super::{NodeId, Space, TransformNode};

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<TransformNode>,
}

/// Arena of transform nodes forming a forest.
///
/// Parent/child links are [`NodeId`]s. Every node without a parent is a root
/// whose world matrix equals its local matrix.
///
/// Invariants, re-established before any `&mut self` method returns:
/// - `node.world == parent.world * node.local` (roots: `world == local`)
/// - `child.parent == Some(p)` iff `p.children` contains `child`, exactly once
/// - the parent links never form a cycle
#[derive(Debug, Clone, Default)]
pub struct TransformTree {
    slots: Vec<Slot>,
    free_list: Vec<u32>,
    live: usize,
}

impl TransformTree {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parentless node with an identity local transform.
    #[inline]
    pub fn create(&mut self) -> NodeId {
        self.create_with(Matrix::identity())
    }

    /// Creates a parentless node with the given local transform.
    pub fn create_with(&mut self, local: Matrix) -> NodeId {
        let node = TransformNode::new(local);
        self.live += 1;

        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            slot.generation = slot.generation.wrapping_add(1);
            slot.node = Some(node);
            return NodeId::new(index, slot.generation);
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        NodeId::new(index, 0)
    }

    /// Removes `id` from the tree.
    ///
    /// The node is detached from its parent. Its children become roots that
    /// keep their current world placement: each child's local matrix is set to
    /// its world matrix, so nothing below it moves.
    pub fn destroy(&mut self, id: NodeId) -> Result<()> {
        self.node(id)?;
        self.unlink(id);

        let Some(node) = self.slots[id.index as usize].node.take() else {
            return Err(SceneError::StaleNode(id));
        };

        for child in node.children {
            if let Some(c) = self.get_mut(child) {
                c.parent = None;
                c.local = c.world;
            }
        }

        self.free_list.push(id.index);
        self.live -= 1;
        log::debug!("destroyed {id}");
        Ok(())
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn node(&self, id: NodeId) -> Result<&TransformNode> {
        self.get(id).ok_or(SceneError::StaleNode(id))
    }

    #[inline]
    pub fn local(&self, id: NodeId) -> Result<Matrix> {
        Ok(self.node(id)?.local)
    }

    #[inline]
    pub fn world(&self, id: NodeId) -> Result<Matrix> {
        Ok(self.node(id)?.world)
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        Ok(self.node(id)?.parent)
    }

    #[inline]
    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        Ok(&self.node(id)?.children)
    }

    /// Iterates live nodes in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TransformNode)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            slot.node.as_ref().map(|n| (NodeId::new(i as u32, slot.generation), n))
        })
    }

    /// Iterates nodes without a parent.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.iter().filter(|(_, n)| n.parent.is_none()).map(|(id, _)| id)
    }

    /// Walks the parent chain of `id`, nearest ancestor first. `id` itself is
    /// not yielded. A stale `id` yields nothing.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.get(id).and_then(|n| n.parent),
        }
    }

    /// Returns true if `ancestor` lies strictly above `node`.
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors(node).any(|a| a == ancestor)
    }

    // ── hierarchy ─────────────────────────────────────────────────────────

    /// Attaches `child` as the last child of `parent`.
    ///
    /// A child attached elsewhere is detached from its old parent first.
    /// Attaching a child to its current parent is a no-op. Fails with
    /// [`SceneError::WouldCycle`] if `child` is `parent` or one of its
    /// ancestors; the tree is left untouched in that case.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.node(parent)?;
        if self.node(child)?.parent == Some(parent) {
            return Ok(());
        }
        if parent == child || self.is_ancestor(child, parent) {
            return Err(SceneError::WouldCycle { parent, child });
        }

        self.unlink(child);
        if let Some(p) = self.get_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.get_mut(child) {
            c.parent = Some(parent);
        }
        self.recompute(child);

        log::debug!("attached {child} under {parent}");
        Ok(())
    }

    /// Detaches `child` from `parent`, turning it into a root.
    ///
    /// The child's local matrix is kept, so it jumps to wherever that matrix
    /// places it relative to the scene origin.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.node(parent)?;
        if self.node(child)?.parent != Some(parent) {
            return Err(SceneError::NotAChild { parent, child });
        }

        self.unlink(child);
        self.recompute(child);

        log::debug!("detached {child} from {parent}");
        Ok(())
    }

    /// Re-parents `child` from the child's side. `None` makes it a root.
    pub fn set_parent(&mut self, child: NodeId, parent: Option<NodeId>) -> Result<()> {
        match parent {
            Some(parent) => self.add_child(parent, child),
            None => match self.node(child)?.parent {
                Some(old) => self.remove_child(old, child),
                None => Ok(()),
            },
        }
    }

    // ── local transform ───────────────────────────────────────────────────

    /// Replaces the local matrix of `id`.
    pub fn set_local(&mut self, id: NodeId, local: Matrix) -> Result<()> {
        self.node_mut(id)?.local = local;
        self.recompute(id);
        Ok(())
    }

    /// Composes `m` into the local matrix of `id`.
    ///
    /// - [`Space::Local`]: `local = local * m`; `m` acts in the node's own frame.
    /// - [`Space::World`]: the node's world matrix becomes `m * world`; `m`
    ///   acts in the scene frame. For a root this is `local = m * local`.
    ///   For a child the parent's world matrix is factored out, which fails
    ///   with [`SceneError::SingularMatrix`] if it is not invertible.
    pub fn apply(&mut self, id: NodeId, m: Matrix, space: Space) -> Result<()> {
        let node = self.node(id)?;
        let local = match space {
            Space::Local => node.local * m,
            Space::World => match node.parent {
                None => m * node.local,
                Some(parent) => {
                    let parent_world = self.node(parent)?.world;
                    parent_world.inverse()? * m * parent_world * node.local
                }
            },
        };
        self.set_local(id, local)
    }

    /// Rotates by `degrees`, counter-clockwise for positive angles.
    #[inline]
    pub fn rotate(&mut self, id: NodeId, degrees: f32, space: Space) -> Result<()> {
        self.apply(id, Matrix::rotation(degrees), space)
    }

    /// Rotates by `degrees` about the world-space `pivot`. A world point at
    /// `pivot` is a fixed point of the rotation.
    #[inline]
    pub fn rotate_around(&mut self, id: NodeId, pivot: Point, degrees: f32) -> Result<()> {
        self.apply(id, Matrix::rotation_around(pivot, degrees), Space::World)
    }

    #[inline]
    pub fn translate(&mut self, id: NodeId, offset: Vector, space: Space) -> Result<()> {
        self.apply(id, Matrix::translation(offset), space)
    }

    // ── conversion ────────────────────────────────────────────────────────

    #[inline]
    pub fn local_to_world(&self, id: NodeId, p: Point) -> Result<Point> {
        Ok(self.node(id)?.world * p)
    }

    /// Fails with [`SceneError::SingularMatrix`] if the world matrix of `id`
    /// collapses an axis.
    #[inline]
    pub fn world_to_local(&self, id: NodeId, p: Point) -> Result<Point> {
        Ok(self.world_to_local_matrix(id)? * p)
    }

    #[inline]
    pub fn local_to_world_matrix(&self, id: NodeId) -> Result<Matrix> {
        Ok(self.node(id)?.world)
    }

    /// Inverse of the world matrix, computed on every call.
    #[inline]
    pub fn world_to_local_matrix(&self, id: NodeId) -> Result<Matrix> {
        self.node(id)?.world.inverse()
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn get(&self, id: NodeId) -> Option<&TransformNode> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    #[inline]
    fn get_mut(&mut self, id: NodeId) -> Option<&mut TransformNode> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> Result<&mut TransformNode> {
        self.get_mut(id).ok_or(SceneError::StaleNode(id))
    }

    /// Removes the parent link of `child` on both sides. Does not recompute.
    fn unlink(&mut self, child: NodeId) {
        let Some(old) = self.get_mut(child).and_then(|c| c.parent.take()) else {
            return;
        };
        if let Some(p) = self.get_mut(old) {
            p.children.retain(|&c| c != child);
        }
    }

    /// Refreshes the world matrix of `id` and of every node below it.
    ///
    /// Depth-first pre-order: a parent is always current before its children
    /// are visited.
    fn recompute(&mut self, id: NodeId) {
        let mut stack = vec![id];
        let mut visited = 0usize;

        while let Some(current) = stack.pop() {
            let parent_world = match self.get(current).and_then(|n| n.parent) {
                Some(parent) => self.get(parent).map_or(Matrix::identity(), |p| p.world),
                None => Matrix::identity(),
            };
            let Some(node) = self.get_mut(current) else {
                continue;
            };
            node.world = parent_world * node.local;
            stack.extend(node.children.iter().rev().copied());
            visited += 1;
        }

        log::trace!("recomputed {visited} world matrices from {id}");
    }
}

/// Iterator over the ancestors of a node, see [`TransformTree::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    tree: &'a TransformTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.get(current).and_then(|n| n.parent);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Checks every structural and numeric invariant of the tree.
    fn assert_consistent(tree: &TransformTree) {
        for (id, node) in tree.iter() {
            let expected = match node.parent {
                Some(p) => tree.node(p).unwrap().world * node.local,
                None => node.local,
            };
            assert!(node.world.approx_eq(&expected), "{id}: stale world matrix");

            if let Some(p) = node.parent {
                let siblings = tree.children(p).unwrap();
                assert_eq!(siblings.iter().filter(|&&c| c == id).count(), 1);
            }
            for &child in &node.children {
                assert_eq!(tree.parent(child).unwrap(), Some(id));
            }
        }
    }

    fn shifted(x: f32, y: f32) -> Matrix {
        Matrix::translation(Vector::new(x, y))
    }

    /// root -> a -> b, plus a second root c.
    fn sample() -> (TransformTree, [NodeId; 4]) {
        let mut tree = TransformTree::new();
        let root = tree.create();
        let a = tree.create_with(shifted(10.0, 0.0));
        let b = tree.create_with(shifted(0.0, 5.0));
        let c = tree.create_with(shifted(-3.0, -3.0));
        tree.add_child(root, a).unwrap();
        tree.add_child(a, b).unwrap();
        (tree, [root, a, b, c])
    }

    // ── arena ─────────────────────────────────────────────────────────────

    #[test]
    fn new_node_is_identity_root() {
        let mut tree = TransformTree::new();
        let id = tree.create();
        let node = tree.node(id).unwrap();
        assert_eq!(node.local(), Matrix::identity());
        assert_eq!(node.world(), Matrix::identity());
        assert!(!node.has_parent());
        assert!(node.children().is_empty());
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn destroyed_handle_is_stale_after_slot_reuse() {
        let mut tree = TransformTree::new();
        let old = tree.create();
        tree.destroy(old).unwrap();
        let new = tree.create();

        assert_eq!(old.index(), new.index());
        assert!(!tree.contains(old));
        assert!(tree.contains(new));
        assert_eq!(tree.node(old).unwrap_err(), SceneError::StaleNode(old));
        assert_eq!(tree.destroy(old).unwrap_err(), SceneError::StaleNode(old));
    }

    #[test]
    fn destroy_orphans_children_in_place() {
        let (mut tree, [root, a, b, _]) = sample();
        tree.rotate(a, 30.0, Space::Local).unwrap();
        let before = tree.local_to_world(b, Point::new(1.0, 1.0)).unwrap();

        tree.destroy(a).unwrap();

        assert_eq!(tree.parent(b).unwrap(), None);
        assert!(tree.children(root).unwrap().is_empty());
        assert_eq!(
            tree.local_to_world(b, Point::new(1.0, 1.0)).unwrap(),
            before
        );
        assert_eq!(tree.len(), 3);
        assert_consistent(&tree);
    }

    // ── hierarchy ─────────────────────────────────────────────────────────

    #[test]
    fn child_world_composes_parent_world() {
        let mut tree = TransformTree::new();
        let root = tree.create();
        let a = tree.create_with(shifted(10.0, 0.0));
        tree.add_child(root, a).unwrap();

        assert_eq!(
            tree.local_to_world(a, Point::origin()).unwrap(),
            Point::new(10.0, 0.0)
        );
        assert_consistent(&tree);
    }

    #[test]
    fn parent_mutation_propagates_to_grandchildren() {
        let (mut tree, [root, _, b, _]) = sample();
        tree.translate(root, Vector::new(1.0, 2.0), Space::Local).unwrap();
        tree.rotate(root, 90.0, Space::Local).unwrap();

        // b sits at (10, 5) under root; root rotates it to (-5, 10) then shifts.
        assert_eq!(
            tree.local_to_world(b, Point::origin()).unwrap(),
            Point::new(-4.0, 12.0)
        );
        assert_consistent(&tree);
    }

    #[test]
    fn add_child_reparents_silently() {
        let (mut tree, [root, a, b, c]) = sample();
        tree.add_child(c, b).unwrap();

        assert_eq!(tree.parent(b).unwrap(), Some(c));
        assert!(tree.children(a).unwrap().is_empty());
        assert_eq!(tree.children(c).unwrap(), &[b]);
        assert_eq!(
            tree.local_to_world(b, Point::origin()).unwrap(),
            Point::new(-3.0, 2.0)
        );
        assert_eq!(tree.children(root).unwrap(), &[a]);
        assert_consistent(&tree);
    }

    #[test]
    fn add_child_to_same_parent_keeps_order() {
        let mut tree = TransformTree::new();
        let root = tree.create();
        let first = tree.create();
        let second = tree.create();
        tree.add_child(root, first).unwrap();
        tree.add_child(root, second).unwrap();

        tree.add_child(root, first).unwrap();

        assert_eq!(tree.children(root).unwrap(), &[first, second]);
    }

    #[test]
    fn cycles_are_rejected() {
        let (mut tree, [root, a, b, _]) = sample();

        assert_eq!(
            tree.add_child(b, root).unwrap_err(),
            SceneError::WouldCycle {
                parent: b,
                child: root,
            }
        );
        assert_eq!(
            tree.add_child(a, a).unwrap_err(),
            SceneError::WouldCycle {
                parent: a,
                child: a,
            }
        );
        assert!(tree.set_parent(a, Some(b)).is_err());

        // Untouched.
        assert_eq!(tree.parent(root).unwrap(), None);
        assert_eq!(tree.parent(a).unwrap(), Some(root));
        assert_consistent(&tree);
    }

    #[test]
    fn remove_child_makes_root_with_same_local() {
        let (mut tree, [_, a, b, _]) = sample();
        tree.remove_child(a, b).unwrap();

        assert_eq!(tree.parent(b).unwrap(), None);
        assert_eq!(tree.world(b).unwrap(), shifted(0.0, 5.0));
        assert_consistent(&tree);
    }

    #[test]
    fn remove_non_child_fails() {
        let (mut tree, [root, _, b, _]) = sample();
        assert_eq!(
            tree.remove_child(root, b).unwrap_err(),
            SceneError::NotAChild {
                parent: root,
                child: b,
            }
        );
    }

    #[test]
    fn set_parent_none_detaches() {
        let (mut tree, [_, a, b, _]) = sample();
        tree.set_parent(b, None).unwrap();
        assert!(tree.children(a).unwrap().is_empty());
        tree.set_parent(b, None).unwrap();
        assert_consistent(&tree);
    }

    #[test]
    fn ancestors_walk_to_root() {
        let (tree, [root, a, b, c]) = sample();
        assert_eq!(tree.ancestors(b).collect::<Vec<_>>(), vec![a, root]);
        assert!(tree.is_ancestor(root, b));
        assert!(!tree.is_ancestor(b, root));
        assert!(!tree.is_ancestor(c, b));
        let roots: Vec<_> = tree.roots().collect();
        assert_eq!(roots, vec![root, c]);
    }

    // ── mutators ──────────────────────────────────────────────────────────

    #[test]
    fn rotate_and_unrotate_restores_identity() {
        let mut tree = TransformTree::new();
        let id = tree.create();
        tree.rotate(id, 90.0, Space::Local).unwrap();
        tree.rotate(id, -90.0, Space::Local).unwrap();
        assert!(tree.local(id).unwrap().approx_eq(&Matrix::identity()));
    }

    #[test]
    fn local_translation_follows_node_rotation() {
        let mut tree = TransformTree::new();
        let id = tree.create();
        tree.rotate(id, 90.0, Space::Local).unwrap();
        tree.translate(id, Vector::new(5.0, 0.0), Space::Local).unwrap();
        assert_eq!(
            tree.local_to_world(id, Point::origin()).unwrap(),
            Point::new(0.0, 5.0)
        );
    }

    #[test]
    fn world_translation_ignores_node_rotation() {
        let (mut tree, [root, a, b, _]) = sample();
        tree.rotate(root, 40.0, Space::Local).unwrap();
        tree.rotate(a, 75.0, Space::Local).unwrap();
        tree.rotate(b, -20.0, Space::Local).unwrap();

        for id in [root, a, b] {
            let before = tree.local_to_world(id, Point::origin()).unwrap();
            tree.translate(id, Vector::new(7.0, -2.0), Space::World).unwrap();
            let after = tree.local_to_world(id, Point::origin()).unwrap();
            assert_eq!(after - before, Vector::new(7.0, -2.0));
            assert_consistent(&tree);
        }
    }

    #[test]
    fn world_translation_of_root_composes_on_the_left() {
        let mut tree = TransformTree::new();
        let id = tree.create_with(Matrix::rotation(30.0));
        tree.translate(id, Vector::new(100.0, 0.0), Space::World).unwrap();
        let expected = shifted(100.0, 0.0) * Matrix::rotation(30.0);
        assert!(tree.local(id).unwrap().approx_eq(&expected));
    }

    #[test]
    fn world_rotation_spins_about_scene_origin() {
        let mut tree = TransformTree::new();
        let id = tree.create_with(shifted(10.0, 0.0));
        tree.rotate(id, 90.0, Space::World).unwrap();
        assert_eq!(
            tree.local_to_world(id, Point::origin()).unwrap(),
            Point::new(0.0, 10.0)
        );

        let other = tree.create_with(shifted(10.0, 0.0));
        tree.rotate(other, 90.0, Space::Local).unwrap();
        assert_eq!(
            tree.local_to_world(other, Point::origin()).unwrap(),
            Point::new(10.0, 0.0)
        );
    }

    #[test]
    fn rotate_around_keeps_pivot_fixed() {
        let (mut tree, [root, a, b, _]) = sample();
        tree.rotate(root, 15.0, Space::Local).unwrap();
        let pivot = Point::new(4.0, -6.0);
        let pinned = tree.world_to_local(b, pivot).unwrap();

        tree.rotate_around(b, pivot, 63.0).unwrap();

        assert_eq!(tree.local_to_world(b, pinned).unwrap(), pivot);
        assert_eq!(tree.parent(b).unwrap(), Some(a));
        assert_consistent(&tree);
    }

    #[test]
    fn rotate_around_own_origin_keeps_position() {
        let mut tree = TransformTree::new();
        let id = tree.create_with(shifted(20.0, 20.0));
        tree.rotate_around(id, Point::new(20.0, 20.0), 90.0).unwrap();
        assert_eq!(
            tree.local_to_world(id, Point::origin()).unwrap(),
            Point::new(20.0, 20.0)
        );
        assert_eq!(
            tree.local_to_world(id, Point::new(1.0, 0.0)).unwrap(),
            Point::new(20.0, 21.0)
        );
    }

    #[test]
    fn world_mutation_under_singular_parent_fails_untouched() {
        let (mut tree, [root, a, _, _]) = sample();
        tree.set_local(root, Matrix::scaling(0.0, 1.0)).unwrap();
        let before = tree.local(a).unwrap();

        let err = tree.translate(a, Vector::new(1.0, 1.0), Space::World).unwrap_err();

        assert!(matches!(err, SceneError::SingularMatrix { .. }));
        assert_eq!(tree.local(a).unwrap(), before);
        tree.translate(a, Vector::new(1.0, 1.0), Space::Local).unwrap();
    }

    #[test]
    fn world_mutation_under_near_singular_parent_keeps_matrices_finite() {
        let (mut tree, [root, a, _, _]) = sample();
        tree.set_local(root, Matrix::scaling(1e-20, 1e-20)).unwrap();
        let before = tree.local(a).unwrap();

        let err = tree.rotate(a, 30.0, Space::World).unwrap_err();

        assert!(matches!(err, SceneError::SingularMatrix { .. }));
        assert_eq!(tree.local(a).unwrap(), before);
        let finite = tree.iter().all(|(_, n)| n.local().is_finite() && n.world().is_finite());
        assert!(finite);
        assert!(tree.world_to_local(a, Point::new(1.0, 1.0)).is_err());
    }

    // ── conversion ────────────────────────────────────────────────────────

    #[test]
    fn world_to_local_inverts_local_to_world() {
        let (mut tree, [root, _, b, _]) = sample();
        tree.rotate(root, 33.0, Space::Local).unwrap();
        let p = Point::new(2.5, -1.0);
        let world = tree.local_to_world(b, p).unwrap();
        assert_eq!(tree.world_to_local(b, world).unwrap(), p);
        let m = tree.world_to_local_matrix(b).unwrap() * tree.local_to_world_matrix(b).unwrap();
        assert!(m.approx_eq(&Matrix::identity()));
    }

    #[test]
    fn world_to_local_reports_singular_world() {
        let mut tree = TransformTree::new();
        let id = tree.create_with(Matrix::zero());
        assert!(matches!(
            tree.world_to_local(id, Point::new(1.0, 1.0)),
            Err(SceneError::SingularMatrix { .. })
        ));
        assert!(tree.world_to_local_matrix(id).is_err());
    }

    // ── invariants ────────────────────────────────────────────────────────

    #[test]
    fn invariants_hold_across_mixed_mutations() {
        let (mut tree, [root, a, b, c]) = sample();
        let d = tree.create();
        tree.add_child(b, d).unwrap();

        tree.rotate(root, 12.0, Space::World).unwrap();
        assert_consistent(&tree);
        tree.translate(a, Vector::new(-4.0, 9.0), Space::World).unwrap();
        assert_consistent(&tree);
        tree.add_child(c, a).unwrap();
        assert_consistent(&tree);
        tree.rotate_around(d, Point::new(1.0, 2.0), -47.0).unwrap();
        assert_consistent(&tree);
        tree.set_parent(b, Some(root)).unwrap();
        assert_consistent(&tree);
        tree.destroy(c).unwrap();
        assert_consistent(&tree);
        tree.translate(root, Vector::new(3.0, 3.0), Space::Local).unwrap();
        assert_consistent(&tree);
    }
}

use crate::coords::{Matrix, Point, Vector};
use crate::error::{Result, SceneError};
use crate::paint::DrawStyle;
use crate::render::Surface;
use crate::transform::{NodeId, Space, TransformTree};

use super::shapes::{Composite, Draw, Shape};
use super::{Object, ObjectId};

/// Owner of every drawable object and of the transform tree placing them.
///
/// The scene starts with a root composite. Objects are created detached with
/// [`Scene::insert`] and become visible once grouped under the root, directly
/// or through other composites.
///
/// A composite's child list and its node's children in the transform tree are
/// always the same set, in the same order.
#[derive(Debug, Clone)]
pub struct Scene {
    tree: TransformTree,
    /// Indexed by the owning node's slot index.
    objects: Vec<Option<Object>>,
    root: ObjectId,
}

impl Scene {
    pub fn new() -> Self {
        let mut scene = Self {
            tree: TransformTree::new(),
            objects: Vec::new(),
            root: ObjectId(NodeId::new(0, 0)),
        };
        scene.root = scene.insert(Composite::new());
        scene
    }

    /// The root composite drawn by [`Scene::draw_all`].
    #[inline]
    pub fn root(&self) -> ObjectId {
        self.root
    }

    /// Creates a detached object with the default (invisible) style.
    pub fn insert(&mut self, shape: impl Into<Shape>) -> ObjectId {
        self.insert_with_style(shape, DrawStyle::default())
    }

    /// Creates a detached object with an identity transform.
    pub fn insert_with_style(&mut self, shape: impl Into<Shape>, style: DrawStyle) -> ObjectId {
        let node = self.tree.create();
        let index = node.index as usize;
        if self.objects.len() <= index {
            self.objects.resize_with(index + 1, || None);
        }

        let shape = shape.into();
        log::debug!("inserted {} as {node}", shape.kind());
        self.objects[index] = Some(Object {
            shape,
            style,
            parent: None,
        });
        ObjectId(node)
    }

    #[inline]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live objects, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn object(&self, id: ObjectId) -> Result<&Object> {
        self.get(id).ok_or(SceneError::StaleObject(id))
    }

    /// Iterates live objects in creation-slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &Object)> + '_ {
        self.tree.iter().filter_map(|(node, _)| {
            self.objects.get(node.index as usize)?.as_ref().map(|o| (ObjectId(node), o))
        })
    }

    /// Transform node of `id`.
    #[inline]
    pub fn node(&self, id: ObjectId) -> Result<NodeId> {
        self.object(id)?;
        Ok(id.node())
    }

    /// Read access to the transform tree. Mutation goes through the scene so
    /// that object membership stays in sync.
    #[inline]
    pub fn transforms(&self) -> &TransformTree {
        &self.tree
    }

    /// Mutable geometry of a non-composite object.
    pub fn shape_mut(&mut self, id: ObjectId) -> Result<&mut Shape> {
        let object = self.object_mut(id)?;
        if object.shape.is_composite() {
            return Err(SceneError::NoGeometry(id));
        }
        Ok(&mut object.shape)
    }

    pub fn style_mut(&mut self, id: ObjectId) -> Result<&mut DrawStyle> {
        Ok(&mut self.object_mut(id)?.style)
    }

    /// Children of composite `id`, in draw order.
    pub fn children(&self, id: ObjectId) -> Result<&[ObjectId]> {
        self.object(id)?
            .shape
            .as_composite()
            .map(Composite::children)
            .ok_or(SceneError::NotAComposite(id))
    }

    // ── grouping ──────────────────────────────────────────────────────────

    /// Appends `child` to composite `parent`.
    ///
    /// An object already grouped elsewhere is removed from its old composite
    /// first. Adding to the current composite is a no-op. Fails without side
    /// effects if `parent` is not a composite, if `child` is the root, or if
    /// the grouping would make a composite contain itself.
    pub fn add_object(&mut self, parent: ObjectId, child: ObjectId) -> Result<()> {
        if !self.object(parent)?.is_composite() {
            return Err(SceneError::NotAComposite(parent));
        }
        let old_parent = self.object(child)?.parent;
        if child == self.root {
            return Err(SceneError::RootObject);
        }
        if old_parent == Some(parent) {
            return Ok(());
        }

        self.tree.add_child(parent.node(), child.node())?;

        if let Some(old) = old_parent {
            if let Some(list) = self.composite_mut(old) {
                list.children.retain(|&c| c != child);
            }
        }
        if let Some(list) = self.composite_mut(parent) {
            list.children.push(child);
        }
        if let Some(object) = self.get_mut(child) {
            object.parent = Some(parent);
        }

        log::debug!("grouped {child} under {parent}");
        Ok(())
    }

    /// Appends `child` to the root composite.
    #[inline]
    pub fn add_to_root(&mut self, child: ObjectId) -> Result<()> {
        self.add_object(self.root, child)
    }

    /// Removes `child` from composite `parent`, leaving it detached.
    pub fn remove_object(&mut self, parent: ObjectId, child: ObjectId) -> Result<()> {
        let is_member = self
            .object(parent)?
            .shape
            .as_composite()
            .ok_or(SceneError::NotAComposite(parent))?
            .contains(child);
        self.object(child)?;
        if !is_member {
            return Err(SceneError::NotAMember {
                composite: parent,
                object: child,
            });
        }

        self.tree.remove_child(parent.node(), child.node())?;

        if let Some(list) = self.composite_mut(parent) {
            list.children.retain(|&c| c != child);
        }
        if let Some(object) = self.get_mut(child) {
            object.parent = None;
        }

        log::debug!("ungrouped {child} from {parent}");
        Ok(())
    }

    /// Destroys `id` and its transform node, returning its shape.
    ///
    /// The object leaves its composite. If it is a composite itself, its
    /// children become detached objects that keep their current world
    /// placement; they are not drawn until grouped again.
    pub fn destroy(&mut self, id: ObjectId) -> Result<Shape> {
        let object = self.object(id)?;
        if id == self.root {
            return Err(SceneError::RootObject);
        }
        if let Some(parent) = object.parent {
            self.remove_object(parent, id)?;
        }

        self.tree.destroy(id.node())?;
        let Some(object) = self.objects[id.node().index as usize].take() else {
            return Err(SceneError::StaleObject(id));
        };

        if let Some(composite) = object.shape.as_composite() {
            for &child in composite.children() {
                if let Some(c) = self.get_mut(child) {
                    c.parent = None;
                }
            }
        }

        log::debug!("destroyed {id}");
        Ok(object.shape)
    }

    // ── transforms ────────────────────────────────────────────────────────

    #[inline]
    pub fn translate(&mut self, id: ObjectId, offset: Vector, space: Space) -> Result<()> {
        let node = self.node(id)?;
        self.tree.translate(node, offset, space)
    }

    #[inline]
    pub fn rotate(&mut self, id: ObjectId, degrees: f32, space: Space) -> Result<()> {
        let node = self.node(id)?;
        self.tree.rotate(node, degrees, space)
    }

    #[inline]
    pub fn rotate_around(&mut self, id: ObjectId, pivot: Point, degrees: f32) -> Result<()> {
        let node = self.node(id)?;
        self.tree.rotate_around(node, pivot, degrees)
    }

    /// Composes an arbitrary affine matrix, see [`TransformTree::apply`].
    #[inline]
    pub fn apply(&mut self, id: ObjectId, m: Matrix, space: Space) -> Result<()> {
        let node = self.node(id)?;
        self.tree.apply(node, m, space)
    }

    #[inline]
    pub fn set_local(&mut self, id: ObjectId, local: Matrix) -> Result<()> {
        let node = self.node(id)?;
        self.tree.set_local(node, local)
    }

    #[inline]
    pub fn world_matrix(&self, id: ObjectId) -> Result<Matrix> {
        self.tree.local_to_world_matrix(self.node(id)?)
    }

    #[inline]
    pub fn local_to_world(&self, id: ObjectId, p: Point) -> Result<Point> {
        self.tree.local_to_world(self.node(id)?, p)
    }

    #[inline]
    pub fn world_to_local(&self, id: ObjectId, p: Point) -> Result<Point> {
        self.tree.world_to_local(self.node(id)?, p)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Draws `id` and, for composites, every descendant in insertion order.
    pub fn draw<S: Surface + ?Sized>(&self, id: ObjectId, surface: &mut S) -> Result<()> {
        self.object(id)?;
        self.draw_object(id, surface);
        Ok(())
    }

    /// Draws everything grouped under the root.
    pub fn draw_all<S: Surface + ?Sized>(&self, surface: &mut S) {
        self.draw_object(self.root, surface);
    }

    /// Depth-first pre-order over an explicit stack; siblings in insertion
    /// order.
    fn draw_object<S: Surface + ?Sized>(&self, id: ObjectId, surface: &mut S) {
        let mut stack = vec![id];

        while let Some(current) = stack.pop() {
            let Some(object) = self.get(current) else {
                continue;
            };
            match &object.shape {
                Shape::Composite(composite) => {
                    stack.extend(composite.children().iter().rev().copied());
                }
                shape => {
                    let Ok(world) = self.tree.world(current.node()) else {
                        continue;
                    };
                    shape.draw(&world, &object.style, surface);
                }
            }
        }
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn get(&self, id: ObjectId) -> Option<&Object> {
        if !self.tree.contains(id.node()) {
            return None;
        }
        self.objects.get(id.node().index as usize)?.as_ref()
    }

    #[inline]
    fn get_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        if !self.tree.contains(id.node()) {
            return None;
        }
        self.objects.get_mut(id.node().index as usize)?.as_mut()
    }

    #[inline]
    fn object_mut(&mut self, id: ObjectId) -> Result<&mut Object> {
        self.get_mut(id).ok_or(SceneError::StaleObject(id))
    }

    #[inline]
    fn composite_mut(&mut self, id: ObjectId) -> Option<&mut Composite> {
        self.get_mut(id)?.shape.as_composite_mut()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

use crate::scene::ObjectId;

/// Ordered group of child objects. Has no geometry of its own.
///
/// Membership is managed by [`Scene`](crate::scene::Scene) so that the object
/// list and the transform tree never disagree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composite {
    pub(crate) children: Vec<ObjectId>,
}

impl Composite {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Children in draw order.
    #[inline]
    pub fn children(&self) -> &[ObjectId] {
        &self.children
    }

    #[inline]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.children.contains(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

use crate::{
    iter::{OwnedIter, RefIter},
    node::{remove_recurse, skew, Node, RemoveResult},
};

/// An ordered set of unique keys, backed by a height-balanced (AVL) binary
/// search tree.
///
/// For every node in the tree, the heights of its two subtrees differ by at
/// most one, bounding the depth of any lookup, insertion or removal to
/// O(log n).
#[derive(Debug, Clone)]
pub struct AvlSet<T>(Option<Box<Node<T>>>);

impl<T> Default for AvlSet<T> {
    fn default() -> Self {
        Self(Default::default())
    }
}

impl<T> AvlSet<T>
where
    T: Ord,
{
    /// Add `key` to the set, returning true if it was not already present.
    ///
    /// Inserting a key that already exists in the set is a no-op: the stored
    /// key is kept and `key` is dropped.
    pub fn insert(&mut self, key: T) -> bool {
        match self.0 {
            Some(ref mut v) => v.insert(key),
            None => {
                self.0 = Some(Box::new(Node::new(key)));
                true
            }
        }
    }

    /// Return a reference to the stored key equal to `key`, if any.
    pub fn get(&self, key: &T) -> Option<&T> {
        self.0.as_ref().and_then(|v| v.get(key))
    }

    /// Return true if `key` exists in the set.
    pub fn contains(&self, key: &T) -> bool {
        self.get(key).is_some()
    }

    /// Remove `key` from the set, returning the owned key if it was present.
    pub fn remove(&mut self, key: &T) -> Option<T> {
        match remove_recurse(&mut self.0, key)? {
            RemoveResult::Removed(v) => Some(v),
            RemoveResult::ParentUnlink => unreachable!(),
        }
    }

    /// Iterate over the keys in the set in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter().flat_map(|v| RefIter::new(v)).map(|v| v.key())
    }
}

impl<T> AvlSet<T> {
    /// Return true if the set contains no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// The height of the tree.
    ///
    /// A set containing a single key has a height of 1; an empty set has a
    /// height of 0.
    pub fn height(&self) -> usize {
        self.0.as_deref().map(|v| v.height() as usize).unwrap_or_default()
    }

    /// Return a read-only view of the root node, if any.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.0.as_deref().map(NodeRef)
    }
}

impl<T> FromIterator<T> for AvlSet<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::default();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for AvlSet<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T> IntoIterator for AvlSet<T> {
    type Item = T;
    type IntoIter = OwnedIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        OwnedIter::new(self.0)
    }
}

/// A read-only view of a single node in an [`AvlSet`], exposing the subtree
/// structure to callers such as debug renderers.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a, T>(&'a Node<T>);

impl<'a, T> NodeRef<'a, T> {
    /// The key stored in this node.
    pub fn key(&self) -> &'a T {
        self.0.key()
    }

    /// The height of the subtree rooted at this node (1 for a leaf).
    pub fn height(&self) -> usize {
        self.0.height() as usize
    }

    /// The height of this node's right subtree minus the height of its left
    /// subtree - always in `-1..=1` between mutations.
    pub fn skew(&self) -> i8 {
        skew(self.0)
    }

    /// The left subtree, holding keys less than [`Self::key()`].
    pub fn left(&self) -> Option<Self> {
        self.0.left().map(NodeRef)
    }

    /// The right subtree, holding keys greater than [`Self::key()`].
    pub fn right(&self) -> Option<Self> {
        self.0.right().map(NodeRef)
    }
}

use std::cmp::Ordering;

#[derive(Debug)]
pub(super) enum RemoveResult<T> {
    /// The key was removed from the tree.
    Removed(T),

    /// The direct descendent node contains the key, but contains no children
    /// and must be unlinked by the parent.
    ParentUnlink,
}

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    /// Child node pointers.
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,

    /// The node's AVL height.
    ///
    /// A leaf has a height of 1; an absent subtree counts as 0.
    ///
    /// A u8 holds a maximum value of 255, meaning it can represent the height
    /// of a balanced tree of up to 2.89*10⁷⁶ entries.
    height: u8,

    key: T,
}

impl<T> Node<T> {
    pub(crate) fn new(key: T) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Insert `key` into the subtree rooted at `self`, returning true iff the
    /// key was not already present.
    ///
    /// A duplicate key leaves the tree untouched, including the key already
    /// stored in it.
    pub(crate) fn insert(self: &mut Box<Self>, key: T) -> bool
    where
        T: Ord,
    {
        let child = match key.cmp(&self.key) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => {
                // The key already exists in the tree.
                return false;
            }
            Ordering::Greater => &mut self.right,
        };

        let inserted = match child {
            Some(v) => v.insert(key),
            None => {
                // Insert the key as a new immediate descendent of self.
                *child = Some(Box::new(Self::new(key)));

                // Inserting this new child node cannot skew the tree in the
                // direction of the new addition such that it requires the tree
                // be rebalanced as, at most, it creates an absolute difference
                // of 1 in this direction (from balanced, or slightly skewed in
                // the opposite direction).
                //
                // Update this node and skip the rebalancing checks.
                update_height(self);
                return true;
            }
        };

        if !inserted {
            // The tree structure has not been modified, so it does not require
            // rebalancing.
            return false;
        }

        // Update this node's height.
        update_height(self);

        // Determine the skew of the subtree rooted at self and correct it if
        // the absolute difference in height between branches is > 1.
        match (skew(self), self.left(), self.right()) {
            // Left-heavy
            (-2, Some(l), _) if skew(l) <= 0 => {
                rotate_right(self);
            }
            (-2, Some(_l), _) => {
                rotate_left(self.left_mut().unwrap());
                rotate_right(self);
            }
            // Right-heavy
            (2, _, Some(r)) if skew(r) > 0 => {
                rotate_left(self);
            }
            (2, _, Some(_r)) => {
                rotate_right(self.right_mut().unwrap());
                rotate_left(self);
            }
            (-1..=1, _, _) => { /* The tree is well balanced */ }
            _ => unreachable!(),
        };

        // Invariant: the absolute difference between subtree heights (the
        // "skew") cannot exceed 1.
        debug_assert!(skew(self).abs() <= 1);

        true
    }

    pub(super) fn remove(self: &mut Box<Self>, key: &T) -> Option<RemoveResult<T>>
    where
        T: Ord,
    {
        // Recurse down the subtree rooted at `self`.
        //
        // If the key is not found, or successfully removed, the result is
        // returned. If the direct descendent node contains the key and no
        // children, it returns [`RemoveResult::ParentUnlink`] and the node is
        // unlinked here in the parent before returning the result to the
        // caller.
        match self.key.cmp(key) {
            Ordering::Greater => return remove_recurse(&mut self.left, key),
            Ordering::Less => return remove_recurse(&mut self.right, key),
            Ordering::Equal => {
                // This node holds the key to be removed from the tree.
            }
        };

        // This node may have 0, 1 or 2 child node(s):
        //
        //                          +----------+
        //                          |  parent  |
        //                          +----------+
        //                                |
        //                                v
        //                          +----------+
        //                     +----|   self   |----+
        //                     |    +----------+    |
        //                     |                    |
        //                     v                    v
        //               +-----------+       +------------+
        //               | self.left |       | self.right |
        //               +-----------+       +------------+
        //
        // The minimum successor child (if any) should move to replace this
        // node.
        //
        // If the "self.right" has a left child, descend the left-most edge to
        // locate the successor to "self" returned in an in-order traversal and
        // use it in place of "self". The right child of "self" after removing
        // this successor (if any) is then linked to this replacement.
        //
        // If there is no left node of "self.right", the "self.right" itself
        // replaces the target node (the minimum subtree successor value).
        //
        // If there is no right child, then "self.left" replaces "self".
        let old = if let Some(mut right) = self.right.take() {
            debug_assert_ne!(self.height, 1);

            // Extract the minimum node in the right subtree, if any.
            match extract_subtree_min(&mut right) {
                Some(mut min) => {
                    // This minimum node "min" should be mutated to link
                    // self.right on the right, and self.left (if any) linked on
                    // the left in order to preserve the binary search property.
                    //
                    // The "min" node is guaranteed to have no left pointer as
                    // it is the left-most / minimum node in the subtree.
                    debug_assert!(min.left.is_none());
                    debug_assert!(min.right.is_none());

                    min.left = self.left.take();
                    min.right = Some(right);

                    std::mem::replace(self, min)
                }

                None => {
                    // Otherwise the extracted "right" is the successor, and can
                    // replace "self".
                    //
                    // It is guaranteed that "right" has no left pointer,
                    // otherwise the above branch would be taken.
                    debug_assert!(right.left.is_none());

                    right.left = self.left.take();
                    std::mem::replace(self, right)
                }
            }
        } else if let Some(left) = self.left.take() {
            // Otherwise, if "self" has a left child only, simply replace "self"
            // with the left child (the minimum subtree value).
            debug_assert!(self.right.is_none());
            debug_assert_ne!(self.height, 1);

            std::mem::replace(self, left)
        } else {
            // Otherwise "self" has no children.
            debug_assert!(self.left.is_none());
            debug_assert!(self.right.is_none());
            debug_assert_eq!(self.height, 1);

            // Parent will unlink this "self" node.
            return Some(RemoveResult::ParentUnlink);
        };

        // Invariant: the node being unlinked contains no subtree.
        debug_assert!(old.right.is_none());
        debug_assert!(old.left.is_none());

        // Invariant: the old node being unlinked does contain the target key.
        debug_assert!(old.key == *key);
        debug_assert!(self.key != *key); // The replacement node does not.

        Some(RemoveResult::Removed(old.key))
    }

    pub(crate) fn get(&self, key: &T) -> Option<&T>
    where
        T: Ord,
    {
        let node = match self.key.cmp(key) {
            Ordering::Greater => self.left(),
            Ordering::Equal => return Some(&self.key),
            Ordering::Less => self.right(),
        }?;

        node.get(key)
    }

    pub(crate) fn key(&self) -> &T {
        &self.key
    }

    pub(crate) fn height(&self) -> u8 {
        self.height
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn left_mut(&mut self) -> Option<&mut Box<Self>> {
        self.left.as_mut()
    }

    /// Remove the left child, if any.
    pub(crate) fn take_left(&mut self) -> Option<Box<Self>> {
        self.left.take()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn right_mut(&mut self) -> Option<&mut Box<Self>> {
        self.right.as_mut()
    }

    /// Remove the right child, if any.
    pub(crate) fn take_right(&mut self) -> Option<Box<Self>> {
        self.right.take()
    }

    /// Explode this [`Node`] into the key it contains.
    pub(crate) fn into_key(self) -> T {
        self.key
    }
}

fn height<T>(n: Option<&Node<T>>) -> u8 {
    n.map(|v| v.height()).unwrap_or_default()
}

fn update_height<T>(n: &mut Node<T>) {
    n.height = height(n.left()).max(height(n.right())) + 1;
}

/// Compute the "skew" of the subtree rooted at `n`.
///
/// Returns the subtree height difference / magnitude, which is a positive
/// number when right heavy, and a negative number when left heavy.
pub(crate) fn skew<T>(n: &Node<T>) -> i8 {
    // Correctness: the height is a u8, the maximal value of which fits in an
    // i16 without truncation or sign inversion.
    (height(n.right()) as i16 - height(n.left()) as i16) as i8
}

/// Left rotate the given subtree rooted at `x` around the pivot point `P`.
///
/// ```text
///
///      x
///     / \                               P
///    1   P         Rotate Left        /   \
///       / \      --------------->    x     y
///      2   y                        / \   / \
///         / \                      1   2 3   4
///        3   4
/// ```
///
/// # Panics
///
/// Panics if `x` has no right pointer (cannot be rotated).
fn rotate_left<T>(x: &mut Box<Node<T>>) {
    let mut p = x.right.take().unwrap();
    std::mem::swap(x, &mut p);

    p.right = x.left.take();
    update_height(&mut p);

    x.left = Some(p);
    update_height(x);
}

/// Right rotate the given subtree rooted at `y` around the pivot point `P`.
///
/// ```text
///          y
///         / \                           P
///        P   4     Rotate Right       /   \
///       / \      --------------->    x     y
///      x   3                        / \   / \
///     / \                          1   2 3   4
///    1   2
/// ```
///
/// # Panics
///
/// Panics if `y` has no left pointer (cannot be rotated).
fn rotate_right<T>(y: &mut Box<Node<T>>) {
    let mut p = y.left.take().unwrap();
    std::mem::swap(y, &mut p);

    p.left = y.right.take();
    update_height(&mut p);

    y.right = Some(p);
    update_height(y);
}

/// Extracts the node holding the minimum subtree value in a descendent of
/// `root`, if any, linking the right subtree of the extracted node to in its
/// place.
fn extract_subtree_min<T>(root: &mut Box<Node<T>>) -> Option<Box<Node<T>>> {
    // Descend left to the leaf.
    let v = match extract_subtree_min(root.left_mut()?) {
        Some(v) => Some(v),
        None => {
            // The left child is the end of the left edge.
            //
            // ```text
            //                 6
            //                / \
            //    here ->   <4>   7
            //              / \
            //             2   5
            //              \
            //               3
            // ```
            //
            // Unlink the right node of the left root, which will become the new
            // left node of "root" (if any).
            let left_right = root.left_mut().and_then(|v| v.right.take());

            std::mem::replace(&mut root.left, left_right)
        }
    };

    rebalance_after_remove(root);
    debug_assert!(skew(root).abs() <= 1);
    v
}

/// Recurse into `node`, calling [`Node::remove()`] to remove the provided
/// `key` from the subtree rooted at `node`, if it exists.
///
/// Returns [`None`] if the key is not found.
///
/// Clears the `node` pointer if the [`Node::remove()`] call returns
/// [`RemoveResult::ParentUnlink`], returning the extracted key within a
/// [`RemoveResult::Removed`] variant.
pub(super) fn remove_recurse<T>(
    node: &mut Option<Box<Node<T>>>,
    key: &T,
) -> Option<RemoveResult<T>>
where
    T: Ord,
{
    // Remove the key (if any) and rebalance the tree.
    let remove_ret = node.as_mut().and_then(|v| {
        let ret = v.remove(key)?;
        rebalance_after_remove(v);
        Some(ret)
    })?;

    let v = match remove_ret {
        RemoveResult::Removed(v) => v,
        RemoveResult::ParentUnlink => {
            let node = node.take().unwrap();
            debug_assert!(node.key == *key);

            node.key
        }
    };

    Some(RemoveResult::Removed(v))
}

fn rebalance_after_remove<T>(v: &mut Box<Node<T>>) {
    // Recompute the height of the relocated node.
    update_height(v);

    // And rebalance the subtree.
    match skew(v) {
        (..=-2) if v.left().map(skew).unwrap_or_default() <= 0 => {
            rotate_right(v);
        }
        (..=-2) => {
            v.left_mut().map(rotate_left);
            rotate_right(v);
        }
        (2..) if v.right().map(skew).unwrap_or_default() >= 0 => {
            rotate_left(v);
        }
        (2..) => {
            v.right_mut().map(rotate_right);
            rotate_left(v);
        }

        #[allow(clippy::manual_range_patterns)]
        -1 | 0 | 1 => { /* balanced */ }
    }

    // Invariant: the absolute difference between subtree heights (the "skew")
    // cannot exceed 1 after removing a key.
    debug_assert!(skew(v).abs() <= 1);
}

use std::cmp::{self, Ordering};
use std::mem;

use log::trace;

use crate::error::DuplicateKeyError;

pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A node of a [`Tree`](crate::Tree).
///
/// Nodes are exclusively owned by their parent (the root by the tree itself).
/// [`Tree::search`](crate::Tree::search) hands out shared references for inspection only.
#[derive(Clone)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
    pub(crate) height: usize,
}

/// The four ways a subtree can lean two levels too far to one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Imbalance {
    LeftLeft,
    LeftRight,
    RightRight,
    RightLeft,
}

/// Cached height of the subtree behind a link, 0 for an empty link.
pub(crate) fn height<K>(link: &Link<K>) -> usize {
    match link {
        None => 0,
        Some(node) => node.height,
    }
}

/// Height of the left minus height of the right subtree, 0 for an empty link.
pub(crate) fn balance_factor<K>(link: &Link<K>) -> isize {
    match link {
        None => 0,
        Some(node) => node.balance_factor(),
    }
}

impl<K> Node<K> {
    fn leaf(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Returns the key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the height of the subtree rooted at this node; a leaf has height 1.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the height of the left minus the height of the right subtree.
    /// Always within `-1..=1` for a node reachable from a tree.
    pub fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }

    /// Returns the left child, holding the smaller keys.
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    /// Returns the right child, holding the larger keys.
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    fn adjust_height(&mut self) {
        self.height = 1 + cmp::max(height(&self.left), height(&self.right));
    }

    // Left child becomes the subtree root, its right subtree moves over to `node`.
    fn rotate_right(mut node: Box<Self>) -> Box<Self> {
        match node.left.take() {
            Some(mut left) => {
                node.left = left.right.take();
                node.adjust_height();
                left.right = Some(node);
                left.adjust_height();
                left
            }
            None => node,
        }
    }

    // Mirror image of `rotate_right`.
    fn rotate_left(mut node: Box<Self>) -> Box<Self> {
        match node.right.take() {
            Some(mut right) => {
                node.right = right.left.take();
                node.adjust_height();
                right.left = Some(node);
                right.adjust_height();
                right
            }
            None => node,
        }
    }

    /// Restores balance at the subtree behind `link` with one single or double rotation.
    fn restore(link: &mut Link<K>, imbalance: Imbalance) {
        trace!("restoring balance: {imbalance:?}");
        match imbalance {
            Imbalance::LeftLeft => {}
            Imbalance::LeftRight => {
                if let Some(node) = link.as_deref_mut() {
                    node.left = node.left.take().map(Self::rotate_left);
                }
            }
            Imbalance::RightRight => {}
            Imbalance::RightLeft => {
                if let Some(node) = link.as_deref_mut() {
                    node.right = node.right.take().map(Self::rotate_right);
                }
            }
        }
        *link = match imbalance {
            Imbalance::LeftLeft | Imbalance::LeftRight => link.take().map(Self::rotate_right),
            Imbalance::RightRight | Imbalance::RightLeft => link.take().map(Self::rotate_left),
        };
    }
}

impl<K: Ord> Node<K> {
    /// Inserts `key` into the subtree behind `link` and rebalances on the way back up.
    ///
    /// Returns on which side of this subtree's root the key went (`None` if the key
    /// became the root of a new leaf), so the caller can tell an outer from an inner
    /// imbalance. A duplicate is reported before any node on the path is touched.
    pub(crate) fn insert(
        link: &mut Link<K>,
        key: K,
    ) -> Result<Option<Ordering>, DuplicateKeyError<K>> {
        let Some(node) = link.as_deref_mut() else {
            *link = Some(Box::new(Self::leaf(key)));
            return Ok(None);
        };

        let side = key.cmp(&node.key);
        let below = match side {
            Ordering::Less => Self::insert(&mut node.left, key)?,
            Ordering::Greater => Self::insert(&mut node.right, key)?,
            Ordering::Equal => return Err(DuplicateKeyError::new(key)),
        };

        node.adjust_height();
        let factor = node.balance_factor();

        // Only the child on the insertion side can have grown, and it was not
        // rotated itself (that would have restored its height), so `below`
        // compares the new key against that child's key.
        let imbalance = match below {
            Some(Ordering::Less) if factor > 1 => Some(Imbalance::LeftLeft),
            Some(Ordering::Greater) if factor < -1 => Some(Imbalance::RightRight),
            Some(Ordering::Greater) if factor > 1 => Some(Imbalance::LeftRight),
            Some(Ordering::Less) if factor < -1 => Some(Imbalance::RightLeft),
            _ => None,
        };
        if let Some(imbalance) = imbalance {
            Self::restore(link, imbalance);
        }
        Ok(Some(side))
    }

    /// Removes `key` from the subtree behind `link`, rebalancing every node on the
    /// way back up. Returns whether the key was found.
    pub(crate) fn delete(link: &mut Link<K>, key: &K) -> bool {
        let Some(node) = link.as_deref_mut() else {
            return false;
        };

        let removed = match key.cmp(&node.key) {
            Ordering::Less => Self::delete(&mut node.left, key),
            Ordering::Greater => Self::delete(&mut node.right, key),
            Ordering::Equal => {
                if node.left.is_none() {
                    let right = node.right.take();
                    *link = right;
                    return true;
                }
                if node.right.is_none() {
                    let left = node.left.take();
                    *link = left;
                    return true;
                }
                // Two children: this node stays, the in-order successor's node goes.
                if let Some(successor) = Self::remove_min(&mut node.right) {
                    node.key = successor;
                }
                true
            }
        };

        Self::rebalance_removed(link);
        removed
    }

    /// Unlinks the leftmost node of the subtree behind `link` and returns its key.
    fn remove_min(link: &mut Link<K>) -> Option<K> {
        let node = link.as_deref_mut()?;
        if node.left.is_some() {
            let min = Self::remove_min(&mut node.left);
            Self::rebalance_removed(link);
            min
        } else {
            let right = node.right.take();
            mem::replace(link, right).map(|node| node.key)
        }
    }

    // A removal can leave either grandchild taller, so the choice of rotation
    // looks at the heavy child's balance factor, not at the removed key.
    fn rebalance_removed(link: &mut Link<K>) {
        let Some(node) = link.as_deref_mut() else {
            return;
        };
        node.adjust_height();
        let factor = node.balance_factor();

        let imbalance = if factor > 1 {
            if balance_factor(&node.left) >= 0 {
                Some(Imbalance::LeftLeft)
            } else {
                Some(Imbalance::LeftRight)
            }
        } else if factor < -1 {
            if balance_factor(&node.right) <= 0 {
                Some(Imbalance::RightRight)
            } else {
                Some(Imbalance::RightLeft)
            }
        } else {
            None
        };
        if let Some(imbalance) = imbalance {
            Self::restore(link, imbalance);
        }
    }

    /// Standard binary search descent.
    pub(crate) fn find<'a>(link: &'a Link<K>, key: &K) -> Option<&'a Node<K>> {
        let mut current = link.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Equal => break,
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
            }
        }
        current
    }
}

/// Visits every node below `link` recursively, calling `preorder` before the
/// left subtree, `inorder` between the subtrees and `postorder` after the right one.
pub(crate) fn traverse<K, Pre, In, Post>(
    link: &Link<K>,
    preorder: &mut Pre,
    inorder: &mut In,
    postorder: &mut Post,
) where
    Pre: FnMut(&Node<K>),
    In: FnMut(&Node<K>),
    Post: FnMut(&Node<K>),
{
    if let Some(node) = link {
        preorder(node);
        traverse(&node.left, preorder, inorder, postorder);
        inorder(node);
        traverse(&node.right, preorder, inorder, postorder);
        postorder(node);
    }
}

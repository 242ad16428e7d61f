use std::fmt;

use log::debug;

use crate::error::DuplicateKeyError;
use crate::node::{self, Link, Node};

/// A height-balanced binary search tree (AVL tree) of unique keys.
///
/// Every `add` and `remove` restores the AVL condition with local rotations,
/// so the heights of the two subtrees of any node differ by at most one.
///
/// ```
/// use avl_tree::Tree;
/// let mut tree = Tree::new();
/// for key in [50, 70, 20, 40, 60, 80] {
///     tree.add(key).unwrap();
/// }
/// assert_eq!(tree.in_order(), [20, 40, 50, 60, 70, 80]);
/// assert_eq!(tree.get_min(), Some(&20));
/// assert_eq!(tree.tree_height(), 3);
/// assert!(tree.add(40).is_err());
/// ```
#[derive(Clone)]
pub struct Tree<K> {
    root: Link<K>,
    num_nodes: usize,
}

impl<K: Ord> Tree<K> {
    /// Creates an empty tree.
    /// No memory is allocated until the first key is added.
    pub fn new() -> Self {
        Self {
            root: None,
            num_nodes: 0,
        }
    }

    /// Adds a key to the tree.
    ///
    /// Fails with [`DuplicateKeyError`] if the key is already present,
    /// leaving the tree untouched.
    pub fn add(&mut self, key: K) -> Result<(), DuplicateKeyError<K>> {
        if let Err(err) = Node::insert(&mut self.root, key) {
            debug!("rejected duplicate key");
            return Err(err);
        }
        self.num_nodes += 1;
        #[cfg(feature = "consistency_check")]
        self.check_consistency();
        Ok(())
    }

    /// Removes a key from the tree.
    /// Returns whether the key was present; removing a missing key is a no-op.
    pub fn remove(&mut self, key: &K) -> bool {
        if !Node::delete(&mut self.root, key) {
            debug!("key to remove not found, tree unchanged");
            return false;
        }
        debug_assert!(self.num_nodes >= 1);
        self.num_nodes -= 1;
        #[cfg(feature = "consistency_check")]
        self.check_consistency();
        true
    }

    /// Returns the node holding the key, if any.
    pub fn search(&self, key: &K) -> Option<&Node<K>> {
        Node::find(&self.root, key)
    }

    /// Returns true if the tree contains the key.
    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Asserts that the tree is ordered, balanced and its cached heights
    /// and node count are accurate.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        fn check<K: Ord>(link: &Link<K>, lower: Option<&K>, upper: Option<&K>) -> (usize, usize) {
            let Some(node) = link else {
                return (0, 0);
            };

            // Check ordering against every ancestor, not only the parent
            if let Some(lower) = lower {
                assert!(*lower < node.key);
            }
            if let Some(upper) = upper {
                assert!(node.key < *upper);
            }

            let (left_height, left_nodes) = check(&node.left, lower, Some(&node.key));
            let (right_height, right_nodes) = check(&node.right, Some(&node.key), upper);

            // Check height
            let height = 1 + left_height.max(right_height);
            assert_eq!(node.height, height);

            // Check AVL condition (nearly balance)
            assert!(left_height <= right_height + 1);
            assert!(right_height <= left_height + 1);

            (height, 1 + left_nodes + right_nodes)
        }

        let (height, num_nodes) = check(&self.root, None, None);
        assert_eq!(height, self.tree_height());
        assert_eq!(num_nodes, self.num_nodes);
    }
}

impl<K> Tree<K> {
    /// Returns true if the tree contains no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of keys in the tree, kept up to date by `add` and `remove`.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Counts the nodes of the tree by visiting all of them.
    pub fn size(&self) -> usize {
        fn count<K>(link: &Link<K>) -> usize {
            match link {
                None => 0,
                Some(node) => 1 + count(&node.left) + count(&node.right),
            }
        }
        count(&self.root)
    }

    /// Returns the height of the tree: 0 when empty, 1 for a single key.
    pub fn tree_height(&self) -> usize {
        node::height(&self.root)
    }

    /// Returns true if the AVL condition holds at every node.
    ///
    /// `add` and `remove` keep the tree balanced on their own;
    /// this is meant for diagnostics and tests.
    pub fn is_balanced(&self) -> bool {
        fn balanced<K>(link: &Link<K>) -> bool {
            match link {
                None => true,
                Some(node) => {
                    node.balance_factor().abs() <= 1
                        && balanced(&node.left)
                        && balanced(&node.right)
                }
            }
        }
        balanced(&self.root)
    }

    /// Returns the root node, `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Returns the smallest key, `None` if the tree is empty.
    pub fn get_min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// Returns the largest key, `None` if the tree is empty.
    pub fn get_max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// Removes all keys, deallocating all nodes.
    pub fn clear(&mut self) {
        self.root = None;
        self.num_nodes = 0;
    }

    /// Returns all keys in ascending order.
    pub fn in_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::with_capacity(self.num_nodes);
        self.inorder(|node| keys.push(node.key.clone()));
        keys
    }

    /// Returns all keys, each node before its left and right subtrees.
    pub fn pre_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::with_capacity(self.num_nodes);
        self.preorder(|node| keys.push(node.key.clone()));
        keys
    }

    /// Returns all keys, each node after its left and right subtrees.
    pub fn post_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::with_capacity(self.num_nodes);
        self.postorder(|node| keys.push(node.key.clone()));
        keys
    }

    pub(crate) fn preorder<F: FnMut(&Node<K>)>(&self, mut f: F) {
        node::traverse(&self.root, &mut f, &mut |_: &Node<K>| {}, &mut |_: &Node<K>| {});
    }

    pub(crate) fn inorder<F: FnMut(&Node<K>)>(&self, mut f: F) {
        node::traverse(&self.root, &mut |_: &Node<K>| {}, &mut f, &mut |_: &Node<K>| {});
    }

    pub(crate) fn postorder<F: FnMut(&Node<K>)>(&self, mut f: F) {
        node::traverse(&self.root, &mut |_: &Node<K>| {}, &mut |_: &Node<K>| {}, &mut f);
    }
}

impl<K: Ord> Default for Tree<K> {
    /// Creates an empty tree.
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for Tree<K> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let mut set = fmt.debug_set();
        self.inorder(|node| {
            set.entry(&node.key);
        });
        set.finish()
    }
}

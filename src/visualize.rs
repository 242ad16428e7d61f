//! Sideways rendering of the tree shape, for debugging.
//!
//! The right subtree is drawn above its parent and the left subtree below,
//! so the picture reads as the tree rotated a quarter turn counterclockwise.
//! Each line carries the node's cached height.

use std::fmt::{self, Write};

use crate::node::Node;
use crate::Tree;

impl<K: fmt::Display> Tree<K> {
    /// Renders the tree shape, one key per line.
    ///
    /// ```
    /// use avl_tree::Tree;
    /// let mut tree = Tree::new();
    /// for key in [2, 1, 3] {
    ///     tree.add(key).unwrap();
    /// }
    /// assert_eq!(tree.visualize(), "    ├── 3 (h=1)\n└── 2 (h=2)\n    └── 1 (h=1)\n");
    /// ```
    pub fn visualize(&self) -> String {
        self.to_string()
    }
}

fn render<K: fmt::Display>(
    out: &mut impl Write,
    node: &Node<K>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result {
    let (branch, child_indent) = if is_left {
        ("└── ", "    ")
    } else {
        ("├── ", "│   ")
    };
    let child_prefix = format!("{prefix}{child_indent}");

    if let Some(right) = node.right() {
        render(out, right, &child_prefix, false)?;
    }
    writeln!(out, "{prefix}{branch}{} (h={})", node.key(), node.height())?;
    if let Some(left) = node.left() {
        render(out, left, &child_prefix, true)?;
    }
    Ok(())
}

impl<K: fmt::Display> fmt::Display for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(root) = self.root() {
            render(f, root, "", true)?;
        }
        Ok(())
    }
}

/*
Rendering of ordered trees as `termtree` diagrams.

A node with a single child still gets two branches, the missing one drawn as `·`,
so left and right stay distinguishable in the output.
 */
use std::fmt;

use termtree::Tree;
use tracing::instrument;

use crate::bstree::{OrderedTree, TreeNode};
use crate::element::Element;

const EMPTY_SLOT: &str = "·";

pub trait TreeDisplay {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<V: fmt::Display> TreeDisplay for TreeNode<V> {
    fn to_tree_string(&self) -> Tree<String> {
        let mut tree = Tree::new(self.value.to_string());
        if self.is_leaf() {
            return tree;
        }

        for child in [self.left.as_deref(), self.right.as_deref()] {
            match child {
                Some(node) => tree.push(node.to_tree_string()),
                None => tree.push(Tree::new(EMPTY_SLOT.to_string())),
            };
        }
        tree
    }
}

impl<V: Element + fmt::Display> TreeDisplay for OrderedTree<V> {
    #[instrument(level = "trace", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        match self.root() {
            Some(root) => root.to_tree_string(),
            None => Tree::new("Empty tree".to_string()),
        }
    }
}

impl<V: Element + fmt::Display> fmt::Display for OrderedTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_tree_string())
    }
}

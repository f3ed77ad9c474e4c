use std::fmt::Display;

use termtree::Tree as TermTree;
use tracing::instrument;

use crate::tree::{Tree, TreeNode};

/// Conversion into a `termtree::Tree` for box-drawing display.
pub trait TreeDisplay {
    fn to_tree_string(&self) -> TermTree<String>;
}

impl<T: Display> TreeDisplay for TreeNode<T> {
    #[instrument(level = "trace", skip(self))]
    fn to_tree_string(&self) -> TermTree<String> {
        // Built bottom-up from a post-order walk so deep trees need no recursion.
        let mut finished: Vec<TermTree<String>> = Vec::new();
        for node in self.iter_postorder() {
            let leaves = finished.split_off(finished.len() - node.children.len());
            finished.push(TermTree::new(node.value.to_string()).with_leaves(leaves));
        }
        finished
            .pop()
            .unwrap_or_else(|| TermTree::new(self.value.to_string()))
    }
}

impl<T: Display> TreeDisplay for Tree<T> {
    fn to_tree_string(&self) -> TermTree<String> {
        self.root().to_tree_string()
    }
}

//! Sample inputs used when a subcommand is run without data of its own.

use crate::tree::{Tree, TreeNode};

pub const QUICK_SORT_INPUT: [i64; 6] = [10, 7, 8, 9, 1, 5];
pub const BUBBLE_SORT_INPUT: [i64; 8] = [800, 11, 50, 771, 649, 770, 240, 9];
pub const LINEAR_SEARCH_INPUT: [i64; 6] = [4, 2, 7, 1, 9, 3];
pub const BINARY_SEARCH_INPUT: [i64; 6] = [1, 2, 3, 4, 7, 9];
pub const SEARCH_TARGET: i64 = 7;

pub const FILE_LINES: [&str; 3] = [
    "Line 1: example of writing data to a file",
    "Line 2: another example line",
    "Line 3: last line in the file",
];

/// Edges of the five-node sample graph A..E.
pub const GRAPH_EDGES: [(&str, &str); 5] =
    [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D"), ("D", "E")];

// Root
// ├── Child1
// │   ├── Grandchild1
// │   └── Grandchild2
// └── Child2
//     └── Grandchild3
pub fn sample_tree() -> Tree<String> {
    let mut tree = Tree::new("Root".to_string());
    let child1 = tree.root.add_child(TreeNode::new("Child1".to_string()));
    child1.add_child(TreeNode::new("Grandchild1".to_string()));
    child1.add_child(TreeNode::new("Grandchild2".to_string()));
    let child2 = tree.root.add_child(TreeNode::new("Child2".to_string()));
    child2.add_child(TreeNode::new("Grandchild3".to_string()));
    tree
}

//! Lecture sampler: a generic rooted tree and an adjacency-list graph with
//! depth-first and breadth-first traversals, plus quicksort, bubble sort,
//! linear/binary search and line-oriented file dump/load.

pub mod cli;
pub mod config;
pub mod demo;
pub mod errors;
pub mod exitcode;
pub mod graph;
pub mod lines;
pub mod search;
pub mod sort;
pub mod tree;
pub mod tree_queue;
pub mod tree_stack;
pub mod tree_traits;
pub mod util;

pub use errors::{GraphError, GraphResult, LinesError, LinesResult, SortError, SortResult};
pub use graph::Graph;
pub use tree::{Tree, TreeNode};

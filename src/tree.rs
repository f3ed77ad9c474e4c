use tracing::{instrument, trace};

/// Node of an ordered, multi-child tree.
///
/// Every node owns its children outright, so a node can never end up as its own
/// descendant. Children keep their insertion order, which fixes the traversal order.
///
/// `Clone`, `PartialEq` and `Debug` run over the explicit-stack walks in
/// [`crate::tree_stack`], and dropping unlinks nodes one by one, so none of them is
/// limited by the call stack.
pub struct TreeNode<T> {
    pub value: T,
    pub children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            children: Vec::new(),
        }
    }

    /// Appends `child` and hands back a mutable reference to it, so the caller can
    /// keep growing that subtree after it has been attached.
    pub fn add_child(&mut self, child: TreeNode<T>) -> &mut TreeNode<T> {
        self.children.push(child);
        let idx = self.children.len() - 1;
        &mut self.children[idx]
    }

    /// Builder-style variant of [`TreeNode::add_child`].
    pub fn with_child(mut self, child: TreeNode<T>) -> Self {
        self.children.push(child);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Recursive pre-order walk. Fine for shallow trees; deep trees should go
    /// through [`Tree::traverse`], which keeps its own stack.
    pub fn visit_recursive<F>(&self, visit: &mut F)
    where
        F: FnMut(&T),
    {
        visit(&self.value);
        for child in &self.children {
            child.visit_recursive(visit);
        }
    }
}

/// Rooted tree; a thin handle around its root node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<T> {
    pub root: TreeNode<T>,
}

impl<T> Tree<T> {
    pub fn new(root_value: T) -> Self {
        Self {
            root: TreeNode::new(root_value),
        }
    }

    pub fn root(&self) -> &TreeNode<T> {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut TreeNode<T> {
        &mut self.root
    }

    /// Pre-order depth-first traversal starting at `node`.
    ///
    /// `None` is a valid starting point and visits nothing. Otherwise each value is
    /// handed to `visit` before the subtrees of its children, left to right.
    /// Uses an explicit stack, so tree height is not limited by the call stack.
    #[instrument(level = "trace", skip_all)]
    pub fn traverse<F>(&self, node: Option<&TreeNode<T>>, mut visit: F)
    where
        F: FnMut(&T),
    {
        let Some(node) = node else {
            trace!("traverse: no start node");
            return;
        };
        for current in node.iter() {
            visit(&current.value);
        }
    }

    /// Same contract as [`Tree::traverse`], using plain recursion.
    #[instrument(level = "trace", skip_all)]
    pub fn traverse_recursive<F>(&self, node: Option<&TreeNode<T>>, mut visit: F)
    where
        F: FnMut(&T),
    {
        if let Some(node) = node {
            node.visit_recursive(&mut visit);
        }
    }

    /// Collects the pre-order visitation sequence from the root.
    pub fn preorder(&self) -> Vec<&T> {
        self.root.iter().map(|n| &n.value).collect()
    }
}

// Each popped node is dropped with an empty child list, so drop glue never nests.
impl<T> Drop for TreeNode<T> {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

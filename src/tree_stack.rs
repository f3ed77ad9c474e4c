/*
Stack based tree algorithms.

The iterators keep an explicit Vec as the stack instead of using the call stack,
so depth is bounded by heap memory only. Children are pushed in reverse so they
are popped left to right. Clone, equality and Debug for TreeNode are built on
the same walks.
 */
use std::fmt;

use tracing::instrument;

use crate::tree::TreeNode;

impl<T> TreeNode<T> {
    /// Pre-order iterator over this subtree.
    pub fn iter(&self) -> PreOrderIterator<'_, T> {
        PreOrderIterator { stack: vec![self] }
    }

    /// Post-order iterator over this subtree: every child before its parent.
    pub fn iter_postorder(&self) -> PostOrderIterator<'_, T> {
        PostOrderIterator {
            stack: vec![(self, false)],
        }
    }

    /// Values of all nodes without children, left to right.
    #[instrument(level = "trace", skip(self))]
    pub fn leaf_values(&self) -> Vec<&T> {
        self.iter()
            .filter(|node| node.is_leaf())
            .map(|node| &node.value)
            .collect()
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn size(&self) -> usize {
        self.iter().count()
    }
}

pub struct PreOrderIterator<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

impl<'a, T> Iterator for PreOrderIterator<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        self.stack.extend(current.children.iter().rev());
        Some(current)
    }
}

pub struct PostOrderIterator<'a, T> {
    stack: Vec<(&'a TreeNode<T>, bool)>,
}

impl<'a, T> Iterator for PostOrderIterator<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, expanded)) = self.stack.pop() {
            if expanded {
                return Some(current);
            }
            self.stack.push((current, true));
            for child in current.children.iter().rev() {
                self.stack.push((child, false));
            }
        }
        None
    }
}

impl<T: Clone> Clone for TreeNode<T> {
    /// Rebuilds the subtree bottom-up: in post-order every node's children are the
    /// last finished nodes.
    fn clone(&self) -> Self {
        let mut finished: Vec<TreeNode<T>> = Vec::new();
        for node in self.iter_postorder() {
            let children = finished.split_off(finished.len() - node.children.len());
            finished.push(TreeNode {
                value: node.value.clone(),
                children,
            });
        }
        finished
            .pop()
            .unwrap_or_else(|| TreeNode::new(self.value.clone()))
    }
}

impl<T: PartialEq> PartialEq for TreeNode<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((left, right)) = stack.pop() {
            if left.value != right.value || left.children.len() != right.children.len() {
                return false;
            }
            stack.extend(left.children.iter().zip(right.children.iter()));
        }
        true
    }
}

impl<T: Eq> Eq for TreeNode<T> {}

/// Pre-order values below a node, printed as a flat list.
struct Descendants<'a, T>(&'a TreeNode<T>);

impl<T: fmt::Debug> fmt::Debug for Descendants<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.iter().skip(1).map(|node| &node.value))
            .finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for TreeNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("value", &self.value)
            .field("descendants", &Descendants(self))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //      1
    //    / | \
    //   2  5  6
    //  / \
    // 3   4
    fn numbered() -> TreeNode<u32> {
        TreeNode::new(1)
            .with_child(
                TreeNode::new(2)
                    .with_child(TreeNode::new(3))
                    .with_child(TreeNode::new(4)),
            )
            .with_child(TreeNode::new(5))
            .with_child(TreeNode::new(6))
    }

    #[test]
    fn test_preorder_iterator() {
        let values: Vec<_> = numbered().iter().map(|n| n.value).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_postorder_iterator() {
        let root = numbered();
        let values: Vec<_> = root.iter_postorder().map(|n| n.value).collect();
        assert_eq!(values, vec![3, 4, 2, 5, 6, 1]);
    }

    #[test]
    fn test_leaf_values() {
        let root = numbered();
        assert_eq!(root.leaf_values(), vec![&3, &4, &5, &6]);
    }

    #[test]
    fn test_single_node_is_its_own_leaf() {
        let root = TreeNode::new("only");
        assert_eq!(root.leaf_values(), vec![&"only"]);
        assert_eq!(root.size(), 1);
    }

    #[test]
    fn test_clone_keeps_shape() {
        let root = numbered();
        let copy = root.clone();
        let shape = |n: &TreeNode<u32>| -> Vec<(u32, usize)> {
            n.iter().map(|c| (c.value, c.children.len())).collect()
        };
        assert_eq!(shape(&copy), shape(&root));
    }

    #[test]
    fn test_eq_compares_structure_not_just_values() {
        // same pre-order values, different parents
        let flat = TreeNode::new(1)
            .with_child(TreeNode::new(2))
            .with_child(TreeNode::new(3));
        let chain = TreeNode::new(1).with_child(TreeNode::new(2).with_child(TreeNode::new(3)));
        assert!(flat != chain);
        assert!(numbered() == numbered());
    }

    #[test]
    fn test_debug_lists_descendants_in_preorder() {
        let rendered = format!("{:?}", numbered());
        assert_eq!(
            rendered,
            "TreeNode { value: 1, descendants: [2, 3, 4, 5, 6] }"
        );
    }

    #[test]
    fn test_debug_deep_chain_does_not_overflow() {
        let mut root = TreeNode::new(0u32);
        let mut current = &mut root;
        for i in 1..200_000 {
            current = current.add_child(TreeNode::new(i));
        }
        let rendered = format!("{:?}", root);
        assert!(rendered.ends_with("199999] }"));
    }
}

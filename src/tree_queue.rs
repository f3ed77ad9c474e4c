use std::collections::VecDeque;

use tracing::instrument;

use crate::tree::TreeNode;

impl<T> TreeNode<T> {
    /// Calculates the depth of the tree using a breadth-first traversal.
    /// Each element in the queue is a pair (node, depth).
    #[instrument(level = "trace", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut queue = VecDeque::new();
        queue.push_back((self, 1)); // (node, depth)

        while let Some((node, depth)) = queue.pop_front() {
            max_depth = max_depth.max(depth);
            for child in &node.children {
                queue.push_back((child, depth + 1));
            }
        }

        max_depth
    }

    /// Values grouped per level, root level first.
    #[instrument(level = "trace", skip(self))]
    pub fn levels(&self) -> Vec<Vec<&T>> {
        let mut levels: Vec<Vec<&T>> = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back((self, 0usize));

        while let Some((node, level)) = queue.pop_front() {
            if levels.len() == level {
                levels.push(Vec::new());
            }
            levels[level].push(&node.value);
            for child in &node.children {
                queue.push_back((child, level + 1));
            }
        }

        levels
    }

    /// Breadth-first (level order) sequence of values.
    pub fn level_order(&self) -> Vec<&T> {
        self.levels().into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // root
    // ├── child1
    // │   └── grandchild1
    // └── child2
    fn small() -> TreeNode<&'static str> {
        TreeNode::new("root")
            .with_child(TreeNode::new("child1").with_child(TreeNode::new("grandchild1")))
            .with_child(TreeNode::new("child2"))
    }

    #[test]
    fn test_depth() {
        assert_eq!(small().depth(), 3);
        assert_eq!(TreeNode::new(()).depth(), 1);
    }

    #[test]
    fn test_levels() {
        let root = small();
        let levels = root.levels();
        assert_eq!(levels.len(), 3);
        assert_eq!(levels[0], vec![&"root"]);
        assert_eq!(levels[1], vec![&"child1", &"child2"]);
        assert_eq!(levels[2], vec![&"grandchild1"]);
    }

    #[test]
    fn test_level_order() {
        let root = small();
        assert_eq!(
            root.level_order(),
            vec![&"root", &"child1", &"child2", &"grandchild1"]
        );
    }
}

//! Tests for Tree / TreeNode traversal

use lectkit::tree::{Tree, TreeNode};
use lectkit::tree_traits::TreeDisplay;
use lectkit::util::testing;
use rstest::{fixture, rstest};

#[fixture]
fn lecture_tree() -> Tree<String> {
    testing::init_test_setup();
    lectkit::demo::sample_tree()
}

fn collect(tree: &Tree<String>, node: Option<&TreeNode<String>>) -> Vec<String> {
    let mut seen = Vec::new();
    tree.traverse(node, |v| seen.push(v.clone()));
    seen
}

// ============================================================
// Pre-order traversal
// ============================================================

#[rstest]
fn given_sample_tree_when_traversing_root_then_visits_preorder(lecture_tree: Tree<String>) {
    assert_eq!(
        collect(&lecture_tree, Some(lecture_tree.root())),
        vec!["Root", "Child1", "Grandchild1", "Grandchild2", "Child2", "Grandchild3"]
    );
}

#[rstest]
fn given_sample_tree_when_traversing_none_then_visits_nothing(lecture_tree: Tree<String>) {
    assert!(collect(&lecture_tree, None).is_empty());
}

#[rstest]
fn given_first_subtree_when_traversing_then_finishes_before_second(lecture_tree: Tree<String>) {
    let order = collect(&lecture_tree, Some(lecture_tree.root()));
    let pos = |name: &str| order.iter().position(|v| v == name).unwrap();

    // every node below Child1 comes before Child2 starts
    assert!(pos("Grandchild1") < pos("Child2"));
    assert!(pos("Grandchild2") < pos("Child2"));
    assert!(pos("Child2") < pos("Grandchild3"));
}

#[rstest]
fn given_child_added_after_attach_when_traversing_then_it_is_visited(
    mut lecture_tree: Tree<String>,
) {
    lecture_tree.root.children[1].add_child(TreeNode::new("Late".to_string()));
    let order = collect(&lecture_tree, Some(lecture_tree.root()));
    assert_eq!(order.last().map(String::as_str), Some("Late"));
}

#[rstest]
fn given_sample_tree_when_traversing_recursively_then_same_order(lecture_tree: Tree<String>) {
    let mut recursive = Vec::new();
    lecture_tree.traverse_recursive(Some(lecture_tree.root()), |v| recursive.push(v.clone()));
    assert_eq!(recursive, collect(&lecture_tree, Some(lecture_tree.root())));
}

// ============================================================
// Queries
// ============================================================

#[rstest]
fn given_sample_tree_when_querying_then_reports_shape(lecture_tree: Tree<String>) {
    let root = lecture_tree.root();
    assert_eq!(root.depth(), 3);
    assert_eq!(root.size(), 6);
    assert_eq!(
        root.leaf_values(),
        vec!["Grandchild1", "Grandchild2", "Grandchild3"]
    );
    assert_eq!(
        root.level_order(),
        vec!["Root", "Child1", "Child2", "Grandchild1", "Grandchild2", "Grandchild3"]
    );
}

#[rstest]
fn given_sample_tree_when_postorder_then_children_before_parent(lecture_tree: Tree<String>) {
    let order: Vec<&str> = lecture_tree
        .root()
        .iter_postorder()
        .map(|n| n.value.as_str())
        .collect();
    assert_eq!(
        order,
        vec!["Grandchild1", "Grandchild2", "Child1", "Grandchild3", "Child2", "Root"]
    );
}

#[rstest]
fn given_sample_tree_when_rendering_then_draws_every_node(lecture_tree: Tree<String>) {
    let rendered = lecture_tree.to_tree_string().to_string();
    for name in ["Root", "Child1", "Child2", "Grandchild1", "Grandchild2", "Grandchild3"] {
        assert!(rendered.contains(name), "missing {} in\n{}", name, rendered);
    }
    assert_eq!(rendered.lines().count(), 6);
}

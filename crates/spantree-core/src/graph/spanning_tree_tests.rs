//! Tests for breadth-first spanning tree construction.

use indexmap::IndexMap;

use super::adjacency::AdjacencyGraph;
use super::spanning_tree::{build_spanning_tree, SpanningTree};
use crate::test_support::{disconnected_graph, tree_pairs, word_ladder_graph};

// ── Builder ────────────────────────────────────────────────────────

#[test]
fn test_word_ladder_rooted_at_dot() {
    let graph = word_ladder_graph();
    let tree = build_spanning_tree(&graph, &"dot");

    // `lot` is dequeued before `dog`, so it claims `log`.
    assert_eq!(
        tree_pairs(tree.as_map()),
        vec![
            ("dot", vec!["hot", "lot", "dog"]),
            ("hot", vec!["hoh", "hit"]),
            ("lot", vec!["log"]),
            ("dog", vec!["cog"]),
            ("hoh", vec!["oh"]),
            ("hit", vec!["hi"]),
            ("log", vec![]),
            ("cog", vec![]),
            ("oh", vec![]),
            ("hi", vec![]),
        ]
    );
}

#[test]
fn test_root_is_first_key() {
    let graph = word_ladder_graph();
    let tree = build_spanning_tree(&graph, &"oh");
    assert_eq!(tree.root(), Some(&"oh"));
    assert_eq!(tree.children(&"oh"), ["hoh"]);
    assert_eq!(tree.len(), 10);
    assert_eq!(tree.edge_count(), 9);
}

#[test]
fn test_disconnected_vertex_absent() {
    let graph = disconnected_graph();

    let tree = build_spanning_tree(&graph, &"a");
    assert_eq!(
        tree_pairs(tree.as_map()),
        vec![("a", vec!["b"]), ("b", vec![])]
    );
    assert!(!tree.contains(&"c"));

    let isolated = build_spanning_tree(&graph, &"c");
    assert_eq!(tree_pairs(isolated.as_map()), vec![("c", vec![])]);
}

#[test]
fn test_single_vertex_graph() {
    let graph: AdjacencyGraph<&str> = [("a", vec![])].into_iter().collect();
    let tree = build_spanning_tree(&graph, &"a");
    assert_eq!(tree_pairs(tree.as_map()), vec![("a", vec![])]);
}

#[test]
fn test_undeclared_root_yields_singleton() {
    let graph = disconnected_graph();
    let tree = build_spanning_tree(&graph, &"nowhere");
    assert_eq!(tree_pairs(tree.as_map()), vec![("nowhere", vec![])]);
}

#[test]
fn test_undeclared_neighbor_becomes_leaf() {
    let graph: AdjacencyGraph<&str> = [("a", vec!["ghost", "b"]), ("b", vec!["ghost"])]
        .into_iter()
        .collect();
    let tree = build_spanning_tree(&graph, &"a");
    assert_eq!(
        tree_pairs(tree.as_map()),
        vec![("a", vec!["ghost", "b"]), ("ghost", vec![]), ("b", vec![])]
    );
}

#[test]
fn test_self_loops_and_duplicates_ignored() {
    let graph: AdjacencyGraph<&str> = [("a", vec!["a", "b", "b"]), ("b", vec!["b", "a"])]
        .into_iter()
        .collect();
    let tree = build_spanning_tree(&graph, &"a");
    assert_eq!(
        tree_pairs(tree.as_map()),
        vec![("a", vec!["b"]), ("b", vec![])]
    );
}

#[test]
fn test_asymmetric_edges_followed_one_way() {
    // 1 → 2 → 3, nothing points back.
    let graph: AdjacencyGraph<u64> = [(1, vec![2]), (2, vec![3]), (3, vec![])]
        .into_iter()
        .collect();

    assert_eq!(build_spanning_tree(&graph, &1).len(), 3);
    assert_eq!(build_spanning_tree(&graph, &3).len(), 1);
}

#[test]
fn test_cycle_terminates() {
    let graph: AdjacencyGraph<u64> = [(1, vec![2]), (2, vec![3]), (3, vec![1])]
        .into_iter()
        .collect();
    let tree = build_spanning_tree(&graph, &1);
    assert_eq!(
        tree_pairs(tree.as_map()),
        vec![(1, vec![2]), (2, vec![3]), (3, vec![])]
    );
}

#[test]
fn test_earliest_parent_wins() {
    // Diamond: 1 → {2, 3}, both reach 4. 2 is dequeued first.
    let graph: AdjacencyGraph<u64> = [
        (1, vec![2, 3]),
        (2, vec![4]),
        (3, vec![4]),
        (4, vec![]),
    ]
    .into_iter()
    .collect();
    let tree = build_spanning_tree(&graph, &1);
    assert_eq!(tree.children(&2), [4]);
    assert!(tree.children(&3).is_empty());
}

#[test]
fn test_build_is_deterministic() {
    let graph = word_ladder_graph();
    let first = build_spanning_tree(&graph, &"hi");
    let second = build_spanning_tree(&graph, &"hi");
    assert_eq!(tree_pairs(first.as_map()), tree_pairs(second.as_map()));
}

#[test]
fn test_trees_compare_by_edges() {
    let graph = word_ladder_graph();
    assert_eq!(build_spanning_tree(&graph, &"hi"), build_spanning_tree(&graph, &"hi"));
    assert_ne!(build_spanning_tree(&graph, &"hi"), build_spanning_tree(&graph, &"oh"));
}

// ── SpanningTree accessors ─────────────────────────────────────────

#[test]
fn test_parent_map_covers_non_root_vertices() {
    let graph = word_ladder_graph();
    let tree = build_spanning_tree(&graph, &"dot");
    let parents = tree.parent_map();

    assert_eq!(parents.len(), tree.len() - 1);
    assert!(!parents.contains_key(&"dot"));
    assert_eq!(parents.get(&"log"), Some(&&"lot"));
    assert_eq!(parents.get(&"hi"), Some(&&"hit"));
}

#[test]
fn test_depth_of() {
    let graph = word_ladder_graph();
    let tree = build_spanning_tree(&graph, &"dot");
    assert_eq!(tree.depth_of(&"dot"), Some(0));
    assert_eq!(tree.depth_of(&"hot"), Some(1));
    assert_eq!(tree.depth_of(&"hit"), Some(2));
    assert_eq!(tree.depth_of(&"hi"), Some(3));
    assert_eq!(tree.depth_of(&"missing"), None);
}

#[test]
fn test_vertices_and_iter_in_dequeue_order() {
    let graph = disconnected_graph();
    let tree = build_spanning_tree(&graph, &"b");
    let vertices: Vec<_> = tree.vertices().copied().collect();
    assert_eq!(vertices, vec!["b", "a"]);

    let pairs: Vec<_> = tree.iter().map(|(v, c)| (*v, c.to_vec())).collect();
    assert_eq!(pairs, vec![("b", vec!["a"]), ("a", vec![])]);
}

#[test]
fn test_empty_tree_has_no_root() {
    let tree: SpanningTree<&str> = SpanningTree::from_edges(IndexMap::new());
    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);
    assert!(tree.children(&"x").is_empty());
}

#[test]
fn test_serializes_in_key_order() {
    let graph = disconnected_graph();
    let tree = build_spanning_tree(&graph, &"b");
    assert_eq!(
        serde_json::to_string(&tree).unwrap(),
        r#"{"b":["a"],"a":[]}"#
    );
}

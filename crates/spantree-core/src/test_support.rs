//! Shared graph fixtures for unit tests.

use crate::graph::AdjacencyGraph;

/// Word-ladder graph over ten three-letter (and two-letter) words:
///
/// ```text
/// hi---hit---hot---hoh---oh
///           /  |
///         lot--dot--dog
///           \      / |
///            log--<  |
///                  \ |
///                  cog
/// ```
pub(crate) fn word_ladder_graph() -> AdjacencyGraph<&'static str> {
    [
        ("cog", vec!["dog", "log"]),
        ("dog", vec!["cog", "log", "dot"]),
        ("dot", vec!["hot", "lot", "dog"]),
        ("hi", vec!["hit"]),
        ("hit", vec!["hot", "hi"]),
        ("hoh", vec!["oh", "hot"]),
        ("hot", vec!["hoh", "dot", "lot", "hit"]),
        ("log", vec!["dog", "cog", "lot"]),
        ("lot", vec!["hot", "dot", "log"]),
        ("oh", vec!["hoh"]),
    ]
    .into_iter()
    .collect()
}

/// `a <-> b` plus an isolated `c`.
pub(crate) fn disconnected_graph() -> AdjacencyGraph<&'static str> {
    [("a", vec!["b"]), ("b", vec!["a"]), ("c", vec![])]
        .into_iter()
        .collect()
}

/// Flattens a tree into `(vertex, children)` pairs, preserving key order.
pub(crate) fn tree_pairs<V: Clone>(
    map: &indexmap::IndexMap<V, Vec<V>>,
) -> Vec<(V, Vec<V>)> {
    map.iter().map(|(v, c)| (v.clone(), c.clone())).collect()
}

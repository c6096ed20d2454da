//! Root-to-vertex path lookup in a spanning tree.

use super::adjacency::Vertex;
use super::spanning_tree::SpanningTree;

/// Returns the tree path from `root` to `destination`.
///
/// The path starts with `root` and ends with `destination`. Only the
/// parent/child links are used, so key order in `tree` does not matter.
/// Since trees produced by [`super::build_spanning_tree`] are breadth-first,
/// this is a shortest-hop path in the input graph.
///
/// Returns `None` when `destination` is not in the tree, when `destination`
/// does not descend from `root`, or when the tree is malformed (a parent
/// cycle). The last two only happen for trees decoded from external input.
#[must_use]
pub fn shortest_path<V: Vertex>(
    tree: &SpanningTree<V>,
    root: &V,
    destination: &V,
) -> Option<Vec<V>> {
    if !tree.contains(destination) {
        return None;
    }

    let parents = tree.parent_map();
    let mut path = vec![destination.clone()];
    let mut current = destination;

    while current != root {
        current = parents.get(current).copied()?;
        path.push(current.clone());
        if path.len() > tree.len() {
            return None;
        }
    }

    path.reverse();
    Some(path)
}

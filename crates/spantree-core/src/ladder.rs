//! Word-ladder graphs: words one edit apart are adjacent.
//!
//! Two words are one edit apart when one is obtained from the other by
//! inserting, deleting or replacing a single character. Instead of comparing
//! every pair, each word is filed under its wildcard patterns (`h*t`, `hi*`,
//! `*hit`, ...) and words sharing a pattern become neighbors.

use std::collections::BTreeSet;
use std::io::BufRead;

use indexmap::{IndexMap, IndexSet};

use crate::error::Result;
use crate::graph::AdjacencyGraph;

/// Input line that ends word collection.
pub const EXIT_SENTINEL: &str = "Exit";

/// Wildcard placeholder used in patterns.
pub const WILDCARD: char = '*';

/// Collects words from `reader` until EOF or a line reading [`EXIT_SENTINEL`].
///
/// Lines are split on runs of non-word characters (anything but alphanumerics
/// and `_`). The result is sorted and deduplicated.
pub fn parse_words<R: BufRead>(reader: R) -> Result<BTreeSet<String>> {
    let mut words = BTreeSet::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim_end() == EXIT_SENTINEL {
            break;
        }
        words.extend(
            line.split(|c: char| !(c.is_alphanumeric() || c == '_'))
                .filter(|token| !token.is_empty())
                .map(str::to_string),
        );
    }
    Ok(words)
}

/// Returns the distinct wildcard patterns of `word`.
///
/// For every position `i` in `0..=len` (counted in chars) this yields the
/// insertion pattern `word[..i] * word[i..]` and the replacement pattern
/// `word[..i] * word[i + 1..]`.
#[must_use]
pub fn wildcard_patterns(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut patterns = IndexSet::with_capacity(chars.len() * 2 + 1);

    for i in 0..=chars.len() {
        let prefix = &chars[..i];
        let inserted: String = prefix
            .iter()
            .chain(std::iter::once(&WILDCARD))
            .chain(&chars[i..])
            .collect();
        let replaced: String = prefix
            .iter()
            .chain(std::iter::once(&WILDCARD))
            .chain(chars.get(i + 1..).unwrap_or_default())
            .collect();
        patterns.insert(inserted);
        patterns.insert(replaced);
    }

    patterns.into_iter().collect()
}

/// Builds the word-ladder graph over `words`.
///
/// Every word becomes a vertex, in iteration order, even when it has no
/// neighbors. Neighbor lists are deduplicated and ordered by first
/// discovery, so the output is deterministic for a given word order.
#[must_use]
pub fn build_ladder_graph<I, S>(words: I) -> AdjacencyGraph
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut adjacency: IndexMap<String, IndexSet<String>> = IndexMap::new();
    let mut buckets: IndexMap<String, Vec<String>> = IndexMap::new();

    for word in words {
        let word = word.into();
        if adjacency.contains_key(&word) {
            continue;
        }
        for pattern in wildcard_patterns(&word) {
            buckets.entry(pattern).or_default().push(word.clone());
        }
        adjacency.insert(word, IndexSet::new());
    }

    for bucket in buckets.values() {
        for (i, a) in bucket.iter().enumerate() {
            for b in &bucket[i + 1..] {
                if let Some(neighbors) = adjacency.get_mut(a) {
                    neighbors.insert(b.clone());
                }
                if let Some(neighbors) = adjacency.get_mut(b) {
                    neighbors.insert(a.clone());
                }
            }
        }
    }

    tracing::debug!(
        words = adjacency.len(),
        patterns = buckets.len(),
        "built word-ladder graph"
    );

    adjacency
        .into_iter()
        .map(|(word, neighbors)| (word, neighbors.into_iter().collect()))
        .collect()
}

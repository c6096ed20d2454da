//! Benchmark: all-roots tree construction, sequential vs pooled.
//!
//! Uses a synthetic word-ladder graph over every three-letter word drawn
//! from a small alphabet.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spantree_core::{build_ladder_graph, build_spanning_tree, ParallelConfig, ParallelTreeBuilder};

fn ladder_words(alphabet: &str) -> Vec<String> {
    let letters: Vec<char> = alphabet.chars().collect();
    let mut words = Vec::with_capacity(letters.len().pow(3));
    for a in &letters {
        for b in &letters {
            for c in &letters {
                words.push([*a, *b, *c].iter().collect());
            }
        }
    }
    words
}

fn single_root(c: &mut Criterion) {
    let graph = build_ladder_graph(ladder_words("abcdefgh"));
    let root = "aaa".to_string();

    c.bench_function("build_spanning_tree_512_words", |b| {
        b.iter(|| black_box(build_spanning_tree(&graph, &root)));
    });
}

fn all_roots(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_all");
    group.sample_size(10);

    for alphabet in ["abcd", "abcdef"] {
        let graph = build_ladder_graph(ladder_words(alphabet));
        let vertices = graph.vertex_count();

        for threads in [1usize, 4] {
            let builder = ParallelTreeBuilder::with_config(
                ParallelConfig::new()
                    .with_fixed_threads(threads)
                    .with_parallel_threshold(0),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("threads_{threads}"), vertices),
                &graph,
                |bench, graph| {
                    bench.iter(|| black_box(builder.build_all(graph).unwrap()));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, single_root, all_roots);
criterion_main!(benches);

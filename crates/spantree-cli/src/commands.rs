//! Subcommand handlers.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{bail, Context};
use spantree_core::codec::{encode, read_graph, read_result_set};
use spantree_core::ladder::{build_ladder_graph, parse_words};
use spantree_core::{ParallelTreeBuilder, SpantreeConfig};

/// Printed by `path` when the destination is unreachable.
const NO_PATH: &str = "\"No path found.\"";

/// Opens `path`, or stdin when no path is given.
fn open_input(path: Option<&Path>) -> anyhow::Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn write_output(text: &str) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{text}").context("failed to write output")?;
    out.flush().context("failed to write output")
}

/// `spantree trees`: adjacency JSON in, one tree per root out.
pub fn cmd_trees(config: &SpantreeConfig, input: Option<&Path>) -> anyhow::Result<()> {
    let graph = read_graph(open_input(input)?, config.undeclared_vertices)
        .context("failed to decode adjacency graph")?;
    tracing::info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );

    let results = ParallelTreeBuilder::with_config(config.parallel.clone()).build_all(&graph)?;
    write_output(&encode(&results, config.output.pretty)?)?;

    let summary = results.summary();
    if summary.failed > 0 {
        bail!("{} of {} roots failed", summary.failed, summary.roots);
    }
    Ok(())
}

/// `spantree ladder`: word list in, word-ladder adjacency JSON out.
pub fn cmd_ladder(config: &SpantreeConfig, input: Option<&Path>) -> anyhow::Result<()> {
    let words = parse_words(open_input(input)?).context("failed to read words")?;
    tracing::info!(words = words.len(), "words collected");

    let graph = build_ladder_graph(words);
    write_output(&encode(&graph, config.output.pretty)?)
}

/// `spantree path`: `trees` output in, shortest path out.
pub fn cmd_path(source: &str, destination: &str, input: Option<&Path>) -> anyhow::Result<()> {
    let results = read_result_set(open_input(input)?).context("failed to decode trees")?;

    match results.path(&source.to_string(), &destination.to_string())? {
        Some(path) => write_output(&encode(&path, false)?),
        None => write_output(NO_PATH),
    }
}

/// `spantree config`: print the effective configuration.
pub fn cmd_config(config: &SpantreeConfig) -> anyhow::Result<()> {
    let rendered = config.to_toml()?;
    write_output(rendered.trim_end())
}

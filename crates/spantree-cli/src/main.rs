//! `spantree` - all-roots BFS spanning trees, word ladders and path lookup.
//!
//! Reads from stdin (or `--input`), writes JSON to stdout. Logs go to stderr
//! so the output stays machine-readable.

mod commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use spantree_core::SpantreeConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// spantree - breadth-first spanning trees rooted at every vertex
#[derive(Parser, Debug)]
#[command(name = "spantree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML); ./spantree.toml is used when present
    #[arg(short, long, global = true, env = "SPANTREE_CONFIG")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a BFS spanning tree rooted at every vertex of an adjacency graph
    Trees(TreesArgs),
    /// Build a word-ladder adjacency graph from a word list (stops at "Exit")
    Ladder(InputArgs),
    /// Print the shortest path between two words, read from `trees` output
    Path(PathArgs),
    /// Print the effective configuration as TOML
    Config,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Read from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct TreesArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Worker threads (overrides config)
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Reject neighbor ids that are not declared as vertices
    #[arg(long)]
    strict: bool,

    /// Write compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

#[derive(Args, Debug)]
struct PathArgs {
    /// Start vertex (root of the tree to search)
    source: String,

    /// End vertex
    destination: String,

    #[command(flatten)]
    input: InputArgs,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config =
        SpantreeConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Command::Trees(args) => {
            if let Some(threads) = args.threads {
                config.parallel = config.parallel.with_fixed_threads(threads);
            }
            if args.strict {
                config.undeclared_vertices = spantree_core::UndeclaredVertexPolicy::Reject;
            }
            if args.compact {
                config.output.pretty = false;
            }
            config.validate().context("invalid configuration")?;
            commands::cmd_trees(&config, args.input.input.as_deref())
        }
        Command::Ladder(args) => commands::cmd_ladder(&config, args.input.as_deref()),
        Command::Path(args) => commands::cmd_path(
            &args.source,
            &args.destination,
            args.input.input.as_deref(),
        ),
        Command::Config => commands::cmd_config(&config),
    }
}

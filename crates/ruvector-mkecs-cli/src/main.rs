//! CLI for maximal k-edge-connected subgraph decomposition.
//!
//! Reads an edge list (whitespace-separated integer pairs) from standard
//! input and prints one line per recovered vertex set.

use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ruvector_mkecs::validation::edges_from_signed;
use ruvector_mkecs::{MkecsConfig, MkecsDecomposer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod input;

#[derive(Parser)]
#[command(name = "mkecs")]
#[command(about = "Decompose a graph into maximal k-edge-connected subgraphs", long_about = None)]
#[command(override_usage = "mkecs <K> [NUM_ITERATIONS] < graph")]
#[command(version)]
struct Cli {
    /// Required edge-connectivity
    #[arg(value_name = "K")]
    k: usize,

    /// Number of refinement rounds [default: 100]
    #[arg(value_name = "NUM_ITERATIONS")]
    num_iterations: Option<usize>,

    /// Random seed for reproducible runs (0 = entropy)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON configuration file; positional arguments take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Process the components of each round in parallel
    #[arg(long)]
    parallel: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    debug: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<MkecsConfig> {
        let mut config = match &self.config {
            Some(path) => MkecsConfig::from_json_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => MkecsConfig::default(),
        };
        config.k = self.k;
        if let Some(n) = self.num_iterations {
            config.num_iterations = n;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config.parallel |= self.parallel;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let config = cli.resolve_config()?;
    let decomposer = MkecsDecomposer::new(config).context("invalid configuration")?;

    let mut raw = Vec::new();
    io::stdin()
        .read_to_end(&mut raw)
        .context("failed to read edge list from stdin")?;
    let pairs = input::parse_edge_pairs(&raw);
    let edges = edges_from_signed(&pairs).context("invalid edge list")?;
    info!(edges = edges.len(), "edge list loaded");

    let result = decomposer.decompose(&edges)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for group in &result.components {
        let line = group
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

//! Command line argument parsing for the Synograph CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::search::{DEFAULT_HOP_LIMIT, DEFAULT_ITERMAX};

/// Synograph - thesaurus graph analysis
#[derive(Parser, Debug, Clone)]
#[command(name = "synograph")]
#[command(about = "Thesaurus graph analysis: shortest synonym chains and synonym-set growth")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SynographArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SynographArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build a graph artifact from a thesaurus flat file
    #[command(name = "build-graph")]
    BuildGraph(BuildGraphArgs),

    /// Compute the shortest synonym chain between two words
    Path(PathArgs),

    /// Trace synonym-set growth for a word
    Grow(GrowArgs),

    /// Show graph and degree statistics
    Stats(StatsArgs),
}

/// Arguments for building a graph artifact
#[derive(Parser, Debug, Clone)]
pub struct BuildGraphArgs {
    /// Path to the thesaurus .dat file
    #[arg(value_name = "DAT_FILE")]
    pub dat_file: PathBuf,

    /// Path of the graph artifact to write
    #[arg(value_name = "GRAPH_FILE")]
    pub graph_file: PathBuf,

    /// Overwrite an existing artifact
    #[arg(long)]
    pub force: bool,
}

/// Arguments for shortest-path queries
#[derive(Parser, Debug, Clone)]
pub struct PathArgs {
    /// Path to the graph artifact
    #[arg(value_name = "GRAPH_FILE")]
    pub graph_file: PathBuf,

    /// Starting word
    #[arg(value_name = "WORD1")]
    pub word1: String,

    /// Ending word
    #[arg(value_name = "WORD2")]
    pub word2: String,

    /// Maximum number of hops to search
    #[arg(long, default_value_t = DEFAULT_HOP_LIMIT)]
    pub limit: u32,
}

/// Arguments for growth traces
#[derive(Parser, Debug, Clone)]
pub struct GrowArgs {
    /// Path to the graph artifact
    #[arg(value_name = "GRAPH_FILE")]
    pub graph_file: PathBuf,

    /// Seed word
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum number of iterations
    #[arg(long, default_value_t = DEFAULT_ITERMAX)]
    pub itermax: usize,
}

/// Arguments for degree statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Path to the graph artifact
    #[arg(value_name = "GRAPH_FILE")]
    pub graph_file: PathBuf,

    /// Number of most-connected words to list
    #[arg(short, long, default_value = "10")]
    pub top: usize,

    /// Number of least-connected words (with at least one synonym) to list
    #[arg(short, long, default_value = "10")]
    pub bottom: usize,
}

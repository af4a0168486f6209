//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::SynographArgs;
use crate::error::Result;
use crate::search::GrowthStep;

/// Result structure for graph builds.
#[derive(Debug, Serialize, Deserialize)]
pub struct BuildResult {
    pub graph_file: String,
    pub entries_parsed: usize,
    pub words: usize,
    pub edges: usize,
    pub duration_ms: u64,
}

/// Result structure for shortest-path queries.
///
/// `path` and `hops` are both absent when no chain exists or when a word is
/// unknown (`missing_word` names it in that case).
#[derive(Debug, Serialize, Deserialize)]
pub struct PathQueryResult {
    pub word1: String,
    pub word2: String,
    pub path: Option<Vec<String>>,
    pub hops: Option<u32>,
    pub missing_word: Option<String>,
    pub duration_ms: u64,
}

/// Result structure for growth traces.
#[derive(Debug, Serialize, Deserialize)]
pub struct GrowthResult {
    pub word: String,
    pub itermax: usize,
    pub trace: Vec<GrowthStep>,
    pub saturated: bool,
    pub duration_ms: u64,
}

/// A word with its synonym count.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordDegree {
    pub word: String,
    pub degree: u32,
}

/// Result structure for degree statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResult {
    pub words: usize,
    pub edges: usize,
    pub min_degree: u32,
    pub mean_degree: f64,
    pub max_degree: u32,
    pub most_connected: Vec<WordDegree>,
    pub least_connected: Vec<WordDegree>,
}

/// Serialize a result structure as JSON to stdout.
pub fn print_json<T: Serialize>(result: &T, cli_args: &SynographArgs) -> Result<()> {
    let json = if cli_args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

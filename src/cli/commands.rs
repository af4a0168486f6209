//! Command implementations for the Synograph CLI.

use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, SynographError};
use crate::graph::GraphBundle;
use crate::search::{
    GrowthStep, PathOutcome, definition_lengths, shortest_path_with_limit, synonym_set_growth,
};
use crate::storage::{load_bundle, save_bundle};
use crate::thesaurus::{filter_dangling, parse_dat_file};

/// Execute a CLI command.
pub fn execute_command(args: SynographArgs) -> Result<()> {
    match &args.command {
        Command::BuildGraph(build_args) => build_graph(build_args.clone(), &args),
        Command::Path(path_args) => path_query(path_args.clone(), &args),
        Command::Grow(grow_args) => grow(grow_args.clone(), &args),
        Command::Stats(stats_args) => stats(stats_args.clone(), &args),
    }
}

/// Build a graph artifact from a thesaurus flat file.
fn build_graph(args: BuildGraphArgs, cli_args: &SynographArgs) -> Result<()> {
    if args.graph_file.exists() && !args.force {
        return Err(SynographError::storage(
            "Graph artifact already exists. Use --force to overwrite.".to_string(),
        ));
    }

    if cli_args.verbosity() > 0 {
        println!("Building graph from: {}", args.dat_file.display());
    }

    let start = Instant::now();
    let raw = parse_dat_file(&args.dat_file)?;
    let entries_parsed = raw.len();
    let filtered = filter_dangling(&raw);
    let bundle = GraphBundle::build(&filtered)?;
    save_bundle(&bundle, &args.graph_file)?;
    let duration_ms = start.elapsed().as_millis() as u64;

    let result = BuildResult {
        graph_file: args.graph_file.display().to_string(),
        entries_parsed,
        words: bundle.len(),
        edges: bundle.graph().edge_count(),
        duration_ms,
    };

    match cli_args.output_format {
        OutputFormat::Json => print_json(&result, cli_args)?,
        OutputFormat::Human => {
            if cli_args.verbosity() > 0 {
                println!(
                    "Wrote {} ({} words, {} edges) in {} ms",
                    result.graph_file, result.words, result.edges, result.duration_ms
                );
            }
        }
    }
    Ok(())
}

/// Compute and print the shortest synonym chain between two words.
fn path_query(args: PathArgs, cli_args: &SynographArgs) -> Result<()> {
    let bundle = load_bundle(&args.graph_file)?;

    let start = Instant::now();
    let outcome = shortest_path_with_limit(&bundle, &args.word1, &args.word2, args.limit);
    let duration_ms = start.elapsed().as_millis() as u64;

    let result = match &outcome {
        PathOutcome::Found(path) => PathQueryResult {
            word1: args.word1.clone(),
            word2: args.word2.clone(),
            path: Some(path.words.clone()),
            hops: Some(path.hops),
            missing_word: None,
            duration_ms,
        },
        PathOutcome::NoPath => PathQueryResult {
            word1: args.word1.clone(),
            word2: args.word2.clone(),
            path: None,
            hops: None,
            missing_word: None,
            duration_ms,
        },
        PathOutcome::UnknownWord(word) => PathQueryResult {
            word1: args.word1.clone(),
            word2: args.word2.clone(),
            path: None,
            hops: None,
            missing_word: Some(word.clone()),
            duration_ms,
        },
    };

    match cli_args.output_format {
        OutputFormat::Json => print_json(&result, cli_args)?,
        OutputFormat::Human => match outcome {
            PathOutcome::Found(path) => {
                println!("Path length: {}", path.hops);
                println!("{}", path.words.join(" -> "));
            }
            PathOutcome::NoPath => {
                println!(
                    "No path from '{}' to '{}' within {} hops",
                    args.word1, args.word2, args.limit
                );
            }
            PathOutcome::UnknownWord(word) => {
                println!("Error: '{word}' does not belong to the dictionary");
            }
        },
    }
    Ok(())
}

/// Trace synonym-set growth for a word.
fn grow(args: GrowArgs, cli_args: &SynographArgs) -> Result<()> {
    if args.itermax == 0 {
        return Err(SynographError::query(
            "itermax must be at least 1".to_string(),
        ));
    }

    let bundle = load_bundle(&args.graph_file)?;

    let start = Instant::now();
    let trace = synonym_set_growth(&bundle, &args.word, args.itermax)?;
    let duration_ms = start.elapsed().as_millis() as u64;

    let saturated = trace_saturated(&trace, args.itermax);

    let result = GrowthResult {
        word: args.word.clone(),
        itermax: args.itermax,
        trace,
        saturated,
        duration_ms,
    };

    match cli_args.output_format {
        OutputFormat::Json => print_json(&result, cli_args)?,
        OutputFormat::Human => {
            println!("Synonym-set growth for '{}':", result.word);
            for step in &result.trace {
                println!("  iteration {:>3}: {} words", step.iteration, step.set_size);
            }
            if result.saturated {
                println!("Fixed point reached after {} iterations", result.trace.len());
            }
        }
    }
    Ok(())
}

/// Show graph and degree statistics.
fn stats(args: StatsArgs, cli_args: &SynographArgs) -> Result<()> {
    let bundle = load_bundle(&args.graph_file)?;

    let lengths = definition_lengths(&bundle);

    let degrees: Vec<u32> = lengths.iter().map(|(_, d)| *d).collect();
    let min_degree = degrees.iter().copied().min().unwrap_or(0);
    let max_degree = degrees.iter().copied().max().unwrap_or(0);
    let mean_degree = if degrees.is_empty() {
        0.0
    } else {
        degrees.iter().map(|&d| d as f64).sum::<f64>() / degrees.len() as f64
    };

    let result = StatsResult {
        words: bundle.len(),
        edges: bundle.graph().edge_count(),
        min_degree,
        mean_degree,
        max_degree,
        most_connected: most_connected(&lengths, args.top),
        least_connected: least_connected(&lengths, args.bottom),
    };

    match cli_args.output_format {
        OutputFormat::Json => print_json(&result, cli_args)?,
        OutputFormat::Human => {
            println!("Words: {}", result.words);
            println!("Edges: {}", result.edges);
            println!(
                "Degree: min {}, mean {:.1}, max {}",
                result.min_degree, result.mean_degree, result.max_degree
            );
            println!("Most connected:");
            for entry in &result.most_connected {
                println!("  {:>5}  {}", entry.degree, entry.word);
            }
            println!("Least connected:");
            for entry in &result.least_connected {
                println!("  {:>5}  {}", entry.degree, entry.word);
            }
        }
    }
    Ok(())
}

/// The `k` words with the most synonyms, ties broken alphabetically.
fn most_connected(lengths: &[(&str, u32)], k: usize) -> Vec<WordDegree> {
    let mut sorted = lengths.to_vec();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    sorted
        .into_iter()
        .take(k)
        .map(|(word, degree)| WordDegree {
            word: word.to_string(),
            degree,
        })
        .collect()
}

/// The `k` words with the fewest synonyms, isolated words excluded.
fn least_connected(lengths: &[(&str, u32)], k: usize) -> Vec<WordDegree> {
    let mut sorted: Vec<(&str, u32)> = lengths
        .iter()
        .filter(|(_, degree)| *degree > 0)
        .copied()
        .collect();
    sorted.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
    sorted
        .into_iter()
        .take(k)
        .map(|(word, degree)| WordDegree {
            word: word.to_string(),
            degree,
        })
        .collect()
}

/// Whether a growth trace reached its fixed point.
///
/// A trace shorter than `itermax` stopped because its frontier emptied; a
/// full-length trace is saturated only if its last two sizes agree.
fn trace_saturated(trace: &[GrowthStep], itermax: usize) -> bool {
    if trace.len() < itermax {
        return true;
    }
    trace.len() >= 2 && trace[trace.len() - 1].set_size == trace[trace.len() - 2].set_size
}

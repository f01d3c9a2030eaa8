//! Argument parsing, command execution, and report rendering.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use sortprim_core::{FrontierSelection, GraphGenerator, MstError, SpanningTree, Weight, WeightSum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "sortprim",
    about = "Build a random complete graph and print its minimum spanning tree."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a graph, compute its spanning tree, and report it.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Number of vertices in the generated complete graph.
    #[arg(
        long,
        default_value_t = GraphGenerator::DEFAULT_VERTEX_COUNT,
        value_parser = clap::value_parser!(usize),
    )]
    pub vertices: usize,

    /// Smallest edge weight drawn (inclusive).
    #[arg(
        long = "min-weight",
        default_value_t = GraphGenerator::DEFAULT_MIN_WEIGHT,
        allow_negative_numbers = true,
    )]
    pub min_weight: Weight,

    /// Largest edge weight drawn (inclusive).
    #[arg(
        long = "max-weight",
        default_value_t = GraphGenerator::DEFAULT_MAX_WEIGHT,
        allow_negative_numbers = true,
    )]
    pub max_weight: Weight,

    /// Seed for reproducible graphs; omitted means OS entropy.
    #[arg(long)]
    pub seed: Option<u64>,

    /// How the next vertex is chosen while growing the tree.
    #[arg(long, value_enum, default_value_t = SelectionArg::Blended)]
    pub selection: SelectionArg,

    /// Report format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// CLI spelling of [`FrontierSelection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SelectionArg {
    /// Frontier pops plus a key scan after every round.
    Blended,
    /// Frontier pops only; stale entries are skipped.
    FrontierOnly,
    /// Key scan only.
    KeyScan,
}

impl From<SelectionArg> for FrontierSelection {
    fn from(arg: SelectionArg) -> Self {
        match arg {
            SelectionArg::Blended => Self::Blended,
            SelectionArg::FrontierOnly => Self::FrontierOnly,
            SelectionArg::KeyScan => Self::KeyScan,
        }
    }
}

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Line-oriented text.
    Text,
    /// One JSON document.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Graph generation or tree construction failed.
    #[error(transparent)]
    Core(#[from] MstError),
}

/// Outcome of one `run` command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// The computed tree.
    pub tree: SpanningTree,
    /// Wall-clock time spent computing the tree only.
    pub elapsed: Duration,
    /// Seed the graph was generated with, if one was supplied.
    pub seed: Option<u64>,
    /// Requested report format.
    pub format: OutputFormat,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when generation or tree construction fails.
///
/// # Examples
/// ```
/// use sortprim_cli::cli::{Cli, Command, OutputFormat, RunCommand, SelectionArg, run_cli};
///
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         vertices: 4,
///         min_weight: 1,
///         max_weight: 10,
///         seed: Some(7),
///         selection: SelectionArg::Blended,
///         format: OutputFormat::Text,
///     }),
/// };
/// let summary = run_cli(cli).expect("configuration is valid");
/// assert_eq!(summary.tree.edge_count(), 3);
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(&run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(vertices = command.vertices, selection = field::Empty, seed = field::Empty),
)]
pub(super) fn run_command(command: &RunCommand) -> Result<ExecutionSummary, CliError> {
    let selection = FrontierSelection::from(command.selection);
    let span = Span::current();
    span.record("selection", field::display(selection));

    let mut generator = GraphGenerator::new()
        .with_vertex_count(command.vertices)
        .with_weight_range(command.min_weight, command.max_weight);
    if let Some(seed) = command.seed {
        span.record("seed", seed);
        generator = generator.with_seed(seed);
    }
    let graph = generator.build_graph()?;

    let started = Instant::now();
    let tree = graph.compute_mst_with(selection)?;
    let elapsed = started.elapsed();

    info!(
        tree_edges = tree.edge_count(),
        total_weight = tree.total_weight(),
        elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
        "command completed"
    );
    Ok(ExecutionSummary {
        tree,
        elapsed,
        seed: command.seed,
        format: command.format,
    })
}

#[derive(Serialize)]
struct JsonReport {
    vertices: usize,
    seed: Option<u64>,
    selection: &'static str,
    total_weight: WeightSum,
    spanning: bool,
    edges: Vec<JsonEdge>,
    execution_seconds: f64,
}

#[derive(Serialize)]
struct JsonEdge {
    parent: Option<usize>,
    child: usize,
}

impl JsonReport {
    fn new(summary: &ExecutionSummary) -> Self {
        let tree = &summary.tree;
        Self {
            vertices: tree.vertex_count(),
            seed: summary.seed,
            selection: tree.selection().as_str(),
            total_weight: tree.total_weight(),
            spanning: tree.is_spanning(),
            edges: non_root_parents(tree)
                .map(|(child, parent)| JsonEdge { parent, child })
                .collect(),
            execution_seconds: summary.elapsed.as_secs_f64(),
        }
    }
}

/// Yields `(child, parent)` for every vertex after the root.
fn non_root_parents(tree: &SpanningTree) -> impl Iterator<Item = (usize, Option<usize>)> + '_ {
    tree.parents()
        .iter()
        .enumerate()
        .skip(1)
        .map(|(child, parent)| (child, parent.map(|p| p.get())))
}

/// Renders `summary` to `writer` in its requested format.
///
/// The text format lists one `parent - child` line per vertex after vertex
/// 0, with `none` for vertices the tree did not reach, then the total weight
/// and the execution time in seconds.
///
/// # Errors
/// Returns [`io::Error`] if writing or JSON encoding fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary.format {
        OutputFormat::Text => {
            writeln!(writer, "Minimal Spanning Tree:")?;
            for (child, parent) in non_root_parents(&summary.tree) {
                match parent {
                    Some(parent) => writeln!(writer, "{parent} - {child}")?,
                    None => writeln!(writer, "none - {child}")?,
                }
            }
            writeln!(writer, "Total weight: {}", summary.tree.total_weight())?;
            writeln!(
                writer,
                "Execution time: {} seconds",
                summary.elapsed.as_secs_f64()
            )?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &JsonReport::new(summary))?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

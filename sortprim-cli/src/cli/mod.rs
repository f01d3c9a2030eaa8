//! Command-line interface for generating a random complete graph and
//! reporting its minimum spanning tree.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, OutputFormat, RunCommand, SelectionArg,
    render_summary, run_cli,
};

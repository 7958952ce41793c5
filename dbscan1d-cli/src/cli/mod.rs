//! Command-line interface orchestration for dbscan1d.
//!
//! The `run` command loads values from a text file or a Parquet column,
//! optionally reads per-point weights, and clusters them with the sweep
//! engine.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, ParquetArgs, RunCommand, RunSource, TextArgs,
    render_summary, run_cli,
};

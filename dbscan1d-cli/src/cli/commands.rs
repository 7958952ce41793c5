//! Command implementations and argument parsing for the dbscan1d CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use dbscan1d_core::{ClusteringResult, Dbscan1d, Dbscan1dBuilder, Dbscan1dError, ValueSource};
use dbscan1d_providers_columnar::{ColumnarProvider, ColumnarProviderError};
use dbscan1d_providers_text::{TextProviderError, TextValuesProvider};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_EPS: f64 = 0.5;
const DEFAULT_MIN_SAMPLES: usize = 5;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "dbscan1d", about = "Cluster one-dimensional values with DBSCAN.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Cluster the values of one data source.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Neighbourhood radius; points at most this far apart are neighbours.
    #[arg(long, default_value_t = DEFAULT_EPS)]
    pub eps: f64,

    /// Neighbourhood size, counting the point itself, that makes a core point.
    #[arg(
        long = "min-samples",
        default_value_t = DEFAULT_MIN_SAMPLES,
        value_parser = clap::value_parser!(usize),
    )]
    pub min_samples: usize,

    /// Text file of per-point weights, one per line, in input order.
    #[arg(long)]
    pub weights: Option<PathBuf>,

    /// Data source configuration.
    #[command(subcommand)]
    pub source: RunSource,
}

/// Input data sources accepted by `run`.
#[derive(Debug, Subcommand, Clone)]
pub enum RunSource {
    /// Read a Parquet file containing a non-nullable `Float64` or `Float32` column.
    Parquet(ParquetArgs),
    /// Read a text file with one number per line.
    Text(TextArgs),
}

/// Parquet ingestion arguments.
#[derive(Debug, Args, Clone)]
pub struct ParquetArgs {
    /// Path to the Parquet file.
    pub path: PathBuf,

    /// Column holding the values to cluster.
    #[arg(long)]
    pub column: String,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Text ingestion arguments.
#[derive(Debug, Args, Clone)]
pub struct TextArgs {
    /// Path to a text file with one number per line; `#` starts a comment line.
    pub path: PathBuf,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while opening an input.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Parquet ingestion failed.
    #[error(transparent)]
    Columnar(#[from] ColumnarProviderError),
    /// Text ingestion failed.
    #[error(transparent)]
    Text(#[from] TextProviderError),
    /// The weights file could not be parsed.
    #[error("failed to read weights from `{path}`: {source}")]
    Weights {
        /// Path of the weights file.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: TextProviderError,
    },
    /// Configuration or clustering failed.
    #[error(transparent)]
    Core(#[from] Dbscan1dError),
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name reported by the data source implementation.
    pub data_source: String,
    /// Labels and core flags for every input value.
    pub result: ClusteringResult,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading inputs or clustering fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use dbscan1d_cli::cli::{Cli, Command, RunCommand, RunSource, TextArgs, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "1.0\n1.2\n9.0\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         eps: 0.5,
///         min_samples: 2,
///         weights: None,
///         source: RunSource::Text(TextArgs {
///             path: file.path().to_path_buf(),
///             name: None,
///         }),
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.result.labels(), vec![0, 0, -1]);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        eps = field::Empty,
        min_samples = field::Empty,
        weighted = field::Empty,
        source = field::Empty,
    ),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        eps,
        min_samples,
        weights,
        source,
    } = command;
    let dbscan = Dbscan1dBuilder::new()
        .with_eps(eps)
        .with_min_samples(min_samples)
        .build()?;

    let span = Span::current();
    span.record("eps", eps);
    span.record("min_samples", field::display(min_samples));
    span.record("weighted", weights.is_some());

    let weight_values = weights.as_deref().map(load_weights).transpose()?;
    let summary = match source {
        RunSource::Parquet(args) => {
            span.record("source", field::display("parquet"));
            run_parquet(&dbscan, args, weight_values.as_deref())?
        }
        RunSource::Text(args) => {
            span.record("source", field::display("text"));
            run_text(&dbscan, args, weight_values.as_deref())?
        }
    };

    info!(
        data_source = summary.data_source.as_str(),
        clusters = summary.result.cluster_count(),
        noise = summary.result.noise_count(),
        "command completed"
    );
    Ok(summary)
}

#[instrument(
    name = "cli.run_parquet",
    err,
    skip(dbscan, args, weights),
    fields(path = field::Empty, column = field::Empty, override_name = field::Empty),
)]
pub(super) fn run_parquet(
    dbscan: &Dbscan1d,
    args: ParquetArgs,
    weights: Option<&[f64]>,
) -> Result<ExecutionSummary, CliError> {
    let ParquetArgs { path, column, name } = args;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("column", field::display(&column));
    span.record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );
    let chosen_name = derive_data_source_name(&path, name.as_deref());
    let provider = ColumnarProvider::try_from_parquet_path(chosen_name, &path, &column)?;
    cluster_source(dbscan, &provider, weights)
}

#[instrument(
    name = "cli.run_text",
    err,
    skip(dbscan, args, weights),
    fields(path = field::Empty, override_name = field::Empty),
)]
pub(super) fn run_text(
    dbscan: &Dbscan1d,
    args: TextArgs,
    weights: Option<&[f64]>,
) -> Result<ExecutionSummary, CliError> {
    let TextArgs { path, name } = args;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );
    let chosen_name = derive_data_source_name(&path, name.as_deref());
    let reader = open_text_reader(&path)?;
    let provider = TextValuesProvider::try_from_reader(chosen_name, reader)?;
    cluster_source(dbscan, &provider, weights)
}

fn cluster_source<S: ValueSource>(
    dbscan: &Dbscan1d,
    source: &S,
    weights: Option<&[f64]>,
) -> Result<ExecutionSummary, CliError> {
    let result = match weights {
        Some(weights) => dbscan.run_weighted(source, weights)?,
        None => dbscan.run(source)?,
    };
    Ok(ExecutionSummary {
        data_source: source.name().to_owned(),
        result,
    })
}

#[instrument(name = "cli.load_weights", err, fields(count = field::Empty))]
pub(super) fn load_weights(path: &Path) -> Result<Vec<f64>, CliError> {
    let reader = open_text_reader(path)?;
    let weights = TextValuesProvider::try_from_reader("weights", reader).map_err(|source| {
        CliError::Weights {
            path: path.to_path_buf(),
            source,
        }
    })?;
    Span::current().record("count", weights.len());
    Ok(weights.values().to_vec())
}

#[instrument(name = "cli.open_text_reader", err, fields(path = field::Empty))]
pub(super) fn open_text_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "data_source".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` as summary lines followed by one
/// `index<TAB>label<TAB>core` row per input value. Noise rows carry the
/// label `-1`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use dbscan1d_cli::cli::{ExecutionSummary, render_summary};
/// # use dbscan1d_core::Dbscan1dBuilder;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dbscan = Dbscan1dBuilder::new().with_eps(1.0).with_min_samples(2).build()?;
/// let summary = ExecutionSummary {
///     data_source: "demo".into(),
///     result: dbscan.fit(&[0.0, 0.5, 7.0])?,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.ends_with("2\t-1\tfalse\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let result = &summary.result;
    writeln!(writer, "data source: {}", summary.data_source)?;
    writeln!(writer, "clusters: {}", result.cluster_count())?;
    writeln!(writer, "noise: {}", result.noise_count())?;
    writeln!(writer, "core points: {}", result.core_sample_indices().len())?;
    for (index, (assignment, core)) in result
        .assignments()
        .iter()
        .zip(result.core_flags())
        .enumerate()
    {
        writeln!(writer, "{index}\t{}\t{core}", assignment.label())?;
    }
    Ok(())
}

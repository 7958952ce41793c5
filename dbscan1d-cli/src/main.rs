//! CLI entry point for clustering one-dimensional values.
//!
//! Parses command-line arguments with clap, runs the clustering command,
//! renders labels to stdout, and maps errors to a failing exit status.
//! Logging is initialised first so every later step can emit structured
//! diagnostics via `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use dbscan1d_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse CLI arguments, execute the command, render the summary, and flush the
/// output stream.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render summary")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let core = err.downcast_ref::<CliError>().and_then(|cli_error| match cli_error {
            CliError::Core(core) => Some(core),
            _ => None,
        });

        let code_field = core.map(|core| field::display(core.code().as_str()));
        let input_code_field = core
            .and_then(|core| core.input_code())
            .map(|code| field::display(code.as_str()));
        let source_code_field = core
            .and_then(|core| core.source_code())
            .map(|code| field::display(code.as_str()));

        let message = format!("{err:#}");
        error!(
            error = %message,
            code = code_field,
            input_code = input_code_field,
            source_code = source_code_field,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}

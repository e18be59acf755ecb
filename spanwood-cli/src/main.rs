//! CLI entry point for the spanwood minimum spanning forest tool.
//!
//! Parses arguments with clap, executes the selected command, renders the
//! summary to stdout, and maps failures to a non-zero exit code. Logging is
//! initialised first so every later step can emit structured diagnostics.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use spanwood_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use spanwood_core::MstError;
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
        let mst_error = err
            .downcast_ref::<CliError>()
            .and_then(CliError::mst_error);
        let code_field = mst_error.map(|mst| field::display(mst.code().as_str()));
        let graph_code_field = mst_error
            .and_then(MstError::graph_code)
            .map(|code| field::display(code.as_str()));
        let chain = format!("{err:#}");

        error!(
            error = %chain,
            code = code_field,
            graph_code = graph_code_field,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialised"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialise logging: {err}");
}

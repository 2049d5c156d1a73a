//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::Result;
use tracing::debug;

use compound_cli::presenter::{CLIReportPresenter, ReportPresenter};
use compound_core::observers::LoggingObserver;
use compound_core::DiagnosticSubject;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        compound_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let stdout = io::stdout();
    run_report(config, stdout.lock())
}

/// Print the full report to `out`. Calculation failures are reported in the
/// report itself; only write failures are returned as errors.
pub fn run_report<W: Write>(config: &AppConfig, out: W) -> Result<()> {
    let presenter = CLIReportPresenter::new(out);
    let inputs = config.inputs();
    debug!(?inputs, "running report");

    presenter.present_header()?;
    presenter.present_inputs(&inputs)?;

    let logger = LoggingObserver::new();
    let observers = DiagnosticSubject::new().with(&presenter).with(&logger);
    let growth = inputs.evaluate_or_zero(&observers);
    presenter.present_result(&growth)?;

    Ok(())
}

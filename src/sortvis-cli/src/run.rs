//! Headless and interactive entry points.

use std::io::{IsTerminal, Write};

use anyhow::{Context, Result, bail};
use sortvis_core::{
    Algorithm, CancellationToken, DataGenerator, LogSink, RunOutcome, RunReport, StepContext,
};
use sortvis_tui::{CrosstermBackend, Session};
use tracing::info;

use crate::config::Settings;

/// Sorts one generated sequence without drawing anything and writes the
/// input, the result and the counters to `out`.
///
/// Frames go to a [`LogSink`], so `--log-level trace` shows every step.
pub fn run_headless<W: Write>(
    settings: &Settings,
    cancel: CancellationToken,
    out: &mut W,
) -> Result<RunReport> {
    let mut data = DataGenerator::new(settings.data, settings.seed).next_sequence();

    writeln!(out, "algorithm: {}", settings.algorithm.display_name())?;
    writeln!(out, "input:     {data:?}")?;

    let mut sink = LogSink::new();
    let report = {
        let mut ctx = StepContext::with_cancellation(&mut sink, settings.step_delay(), cancel);
        settings.algorithm.run(&mut data, &mut ctx)?
    };

    let outcome = match report.outcome {
        RunOutcome::Completed => "completed",
        RunOutcome::Cancelled => "cancelled",
    };
    writeln!(out, "output:    {data:?}")?;
    writeln!(out, "{outcome}: {}", report.stats)?;
    out.flush()?;

    info!(
        algorithm = %settings.algorithm,
        outcome,
        stats = %report.stats,
        "headless run finished"
    );
    Ok(report)
}

/// Runs the interactive session on the real terminal. Returns the last sort,
/// if any.
pub fn run_interactive(settings: &Settings) -> Result<Option<(Algorithm, RunReport)>> {
    if !std::io::stdout().is_terminal() {
        bail!("stdout is not a terminal; use --headless to sort without the UI");
    }

    let palette = settings
        .palette()
        .context("Invalid [palette] entry in config")?;
    let mut session = Session::new(CrosstermBackend::new(), palette, settings.session_settings())
        .context("Failed to initialize the terminal")?;
    session.run().context("Interactive session failed")?;
    Ok(session.last_run())
}

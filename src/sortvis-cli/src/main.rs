use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use sortvis_cli::logging::init_logging;
use sortvis_cli::{Cli, Settings, load_config, run_headless, run_interactive};
use sortvis_core::CancellationToken;
use tracing::debug;

/// Exit code for a headless run stopped by Ctrl+C.
const EXIT_INTERRUPTED: u8 = 130;

fn main() -> Result<ExitCode> {
    sortvis_cli::install_panic_hook();

    let cli = Cli::parse();
    let _log_guard = init_logging(
        cli.effective_log_level(),
        cli.log_file.as_deref(),
        !cli.headless,
    )?;

    let file = load_config(cli.config.as_deref())?;
    let settings = Settings::resolve(&cli, file)?;
    debug!(?settings, "resolved settings");

    if cli.headless {
        let cancel = CancellationToken::new();
        sortvis_cli::install_interrupt_handler(cancel.clone());

        let report = run_headless(&settings, cancel, &mut std::io::stdout().lock())?;
        if report.is_cancelled() {
            return Ok(ExitCode::from(EXIT_INTERRUPTED));
        }
        return Ok(ExitCode::SUCCESS);
    }

    match run_interactive(&settings)? {
        Some((algorithm, report)) => {
            let state = if report.is_cancelled() { " (stopped)" } else { "" };
            println!("{}{}: {}", algorithm.display_name(), state, report.stats);
        }
        None => debug!("session ended without a sort"),
    }
    Ok(ExitCode::SUCCESS)
}

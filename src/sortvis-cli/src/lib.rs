//! `sortvis` command line front end.
//!
//! Parses flags, merges them with the config file, sets up logging and runs
//! either the interactive terminal session or a single headless sort.

pub mod cli;
pub mod config;
pub mod logging;
pub mod run;

use std::sync::atomic::{AtomicBool, Ordering};

use sortvis_core::CancellationToken;
use sortvis_tui::restore_terminal;

pub use cli::{Cli, LogLevel};
pub use config::{ConfigError, FileConfig, Settings, load_config};
pub use run::{run_headless, run_interactive};

static PANIC_HOOK_INSTALLED: AtomicBool = AtomicBool::new(false);

/// Restores the terminal before the default panic message is printed, so the
/// message is readable even when a panic hits mid-animation.
pub fn install_panic_hook() {
    if PANIC_HOOK_INSTALLED.swap(true, Ordering::SeqCst) {
        return;
    }

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));
}

/// Ctrl+C cancels `cancel`; a second Ctrl+C exits with code 130.
pub fn install_interrupt_handler(cancel: CancellationToken) {
    let result = ctrlc::set_handler(move || {
        if cancel.is_cancelled() {
            restore_terminal();
            std::process::exit(130);
        }
        cancel.cancel();
    });

    if let Err(err) = result {
        tracing::warn!(error = %err, "Could not install Ctrl+C handler");
    }
}

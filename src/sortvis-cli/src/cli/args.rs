//! CLI argument structures.

use std::path::PathBuf;

use clap::Parser;
use sortvis_core::{Algorithm, Speed};

/// Animate sorting algorithms in the terminal.
///
/// Without `--headless` the terminal is taken over: `g` generates new data,
/// `s` or Enter sorts, `a`/`A` switch the algorithm, `v` cycles the speed and
/// `q` quits (also in the middle of a sort).
#[derive(Debug, Parser)]
#[command(name = "sortvis", version)]
pub struct Cli {
    /// Sorting algorithm to start with (bubble, unoptimized-bubble,
    /// quicksort, shellsort, insertion; menu names like "Insert sort" work too)
    #[arg(short, long)]
    pub algorithm: Option<Algorithm>,

    /// Animation speed preset (slow, medium, fast, realtime); anything else
    /// means fast
    #[arg(short, long)]
    pub speed: Option<Speed>,

    /// Fixed pause after each step, in seconds; overrides --speed
    #[arg(short, long, value_name = "SECS")]
    pub delay: Option<f64>,

    /// Number of values to sort
    #[arg(short = 'n', long, value_name = "N")]
    pub size: Option<usize>,

    /// Largest generated value (inclusive)
    #[arg(long, value_name = "V")]
    pub max_value: Option<u32>,

    /// Seed for reproducible data
    #[arg(long)]
    pub seed: Option<u64>,

    /// Config file (default: $SORTVIS_CONFIG, then <config dir>/sortvis/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Sort once without a terminal UI and print the result
    #[arg(long)]
    pub headless: bool,

    /// Log verbosity
    #[arg(long, value_enum, default_value_t = LogLevel::default())]
    pub log_level: LogLevel,

    /// Shorthand for --log-level debug
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// The level after `--verbose` and `SORTVIS_LOG_LEVEL` are applied.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.verbose {
            return LogLevel::Debug;
        }
        std::env::var("SORTVIS_LOG_LEVEL")
            .ok()
            .and_then(|value| LogLevel::from_str_loose(&value))
            .unwrap_or(self.log_level)
    }
}

/// Log verbosity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors (default)
    #[default]
    Warn,
    /// Show run summaries as well
    Info,
    /// Show per-run engine events
    Debug,
    /// Show every frame
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<LogLevel> {
        match s.trim().to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

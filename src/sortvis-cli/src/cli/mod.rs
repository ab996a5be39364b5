//! Command line definition.

mod args;

pub use args::{Cli, LogLevel};

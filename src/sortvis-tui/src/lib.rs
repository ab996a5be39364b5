//! Terminal front end for sortvis.
//!
//! [`TerminalSink`] implements [`sortvis_core::RenderSink`] by drawing each
//! frame as colored bars through a double-buffered [`Renderer`]. While it
//! pauses it keeps reading keys, so `q`, `Esc` or `Ctrl+C` cancel a running
//! sort. [`Session`] wraps that in the interactive loop: generate data, pick
//! an engine and a speed, sort.

pub mod backend;
pub mod buffer;
pub mod canvas;
pub mod color;
pub mod error;
pub mod input;
pub mod palette;
pub mod renderer;
pub mod session;
pub mod sink;

pub use backend::{CrosstermBackend, TerminalBackend, restore_terminal};
pub use buffer::{Buffer, Cell};
pub use color::{Color, ColorParseError};
pub use error::{Result, TuiError};
pub use input::Command;
pub use palette::Palette;
pub use renderer::Renderer;
pub use session::{Session, SessionSettings};
pub use sink::TerminalSink;

#[cfg(test)]
mod tests;

//! Instrumented sorting engines for step-by-step visualization.
//!
//! Each engine sorts a `&mut [u32]` in place and, after every comparison or
//! move, hands a [`Frame`] (the sequence plus one [`ColorTag`] per index) to
//! a [`RenderSink`]. The sink draws it and pauses, which is what turns a
//! sort into an animation.
//!
//! - [`engines`]: bubble, unoptimized bubble, quicksort, shellsort, insertion
//! - [`StepContext`]: sink + delay + [`CancellationToken`] + counters
//! - [`Algorithm`] / [`Speed`]: selection by name, as a driver needs it
//! - [`DataGenerator`]: random input
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use sortvis_core::{Algorithm, RecordingSink, RunOutcome, StepContext};
//!
//! let mut data = vec![5, 3, 4, 1, 2];
//! let mut sink = RecordingSink::new();
//! let report = {
//!     let mut ctx = StepContext::new(&mut sink, Duration::ZERO);
//!     Algorithm::Bubble.run(&mut data, &mut ctx).unwrap()
//! };
//!
//! assert_eq!(data, vec![1, 2, 3, 4, 5]);
//! assert_eq!(report.outcome, RunOutcome::Completed);
//! assert_eq!(sink.frames().len() as u64, report.stats.frames);
//! ```

pub mod algorithm;
pub mod cancel;
pub mod context;
pub mod data;
pub mod engines;
pub mod error;
pub mod frame;
pub mod sink;
pub mod speed;
pub mod tag;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use cancel::CancellationToken;
pub use context::{RunOutcome, RunReport, RunStats, StepContext};
pub use data::{DataGenerator, DataSpec};
pub use error::{Result, SortError};
pub use frame::{Frame, OwnedFrame};
pub use sink::{LogSink, RecordingSink, RenderSink};
pub use speed::{Speed, delay_from_secs};
pub use tag::ColorTag;

#[cfg(test)]
mod tests;

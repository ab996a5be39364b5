//! The step context engines report through.
//!
//! A [`StepContext`] owns everything an engine needs besides the sequence:
//! the sink, the per-step delay, the cancellation token and the run's
//! counters. Engines never touch the sink directly; every frame goes through
//! [`StepContext::emit_with`], which is also the only cancellation point.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::cancel::CancellationToken;
use crate::error::{Result, SortError};
use crate::frame::Frame;
use crate::sink::RenderSink;
use crate::tag::ColorTag;

/// Counters collected while a run is in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Element comparisons.
    pub comparisons: u64,
    /// Two-slot exchanges.
    pub swaps: u64,
    /// Single-slot moves (shellsort, insertion sort).
    pub shifts: u64,
    /// Frames delivered to the sink.
    pub frames: u64,
    /// Partition calls (quicksort only).
    pub partitions: u64,
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} comparisons, {} swaps, {} shifts, {} frames",
            self.comparisons, self.swaps, self.shifts, self.frames
        )?;
        if self.partitions > 0 {
            write!(f, ", {} partitions", self.partitions)?;
        }
        Ok(())
    }
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The engine returned normally; the sequence is sorted.
    Completed,
    /// Cancellation was requested; the sequence is partially sorted.
    Cancelled,
}

/// Result of one sort run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// How the run ended.
    pub outcome: RunOutcome,
    /// Counters at the moment the run ended.
    pub stats: RunStats,
    /// Wall time spent in the engine, pauses included.
    pub elapsed: Duration,
}

impl RunReport {
    /// Returns true if the run was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.outcome == RunOutcome::Cancelled
    }
}

/// Why an engine stopped early.
#[derive(Debug)]
pub(crate) enum Interrupt {
    Cancelled,
    Failed(SortError),
}

impl From<SortError> for Interrupt {
    fn from(err: SortError) -> Self {
        Interrupt::Failed(err)
    }
}

/// Engine-internal step result; `?` unwinds out of nested loops and
/// recursion on cancellation or sink failure.
pub(crate) type Step<T = ()> = std::result::Result<T, Interrupt>;

/// Per-run state shared by every engine.
pub struct StepContext<'s> {
    sink: &'s mut dyn RenderSink,
    delay: Duration,
    cancel: CancellationToken,
    stats: RunStats,
    tags: Vec<ColorTag>,
}

impl<'s> StepContext<'s> {
    /// Creates a context with a fresh, uncancelled token.
    pub fn new(sink: &'s mut dyn RenderSink, delay: Duration) -> Self {
        Self::with_cancellation(sink, delay, CancellationToken::new())
    }

    /// Creates a context observing an existing token.
    pub fn with_cancellation(
        sink: &'s mut dyn RenderSink,
        delay: Duration,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            sink,
            delay,
            cancel,
            stats: RunStats::default(),
            tags: Vec::new(),
        }
    }

    /// The pause applied after each frame.
    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The token this context checks.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Counters for the current (or last) run.
    #[inline]
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// Runs an engine body, turning its [`Step`] into a public result.
    pub(crate) fn run<F>(
        &mut self,
        engine: &'static str,
        len: usize,
        body: F,
    ) -> Result<RunReport>
    where
        F: FnOnce(&mut Self) -> Step,
    {
        self.stats = RunStats::default();
        let started = Instant::now();
        debug!(engine, len, delay_ms = self.delay.as_millis() as u64, "sort run started");

        let outcome = match body(self) {
            Ok(()) => RunOutcome::Completed,
            Err(Interrupt::Cancelled) => RunOutcome::Cancelled,
            Err(Interrupt::Failed(err)) => {
                debug!(engine, error = %err, "sort run failed");
                return Err(err);
            }
        };

        let report = RunReport {
            outcome,
            stats: self.stats,
            elapsed: started.elapsed(),
        };
        debug!(engine, ?outcome, stats = %report.stats, "sort run finished");
        Ok(report)
    }

    /// Emits a frame tagging the given indices and leaving the rest
    /// [`ColorTag::Normal`].
    pub(crate) fn emit(&mut self, values: &[u32], marks: &[(usize, ColorTag)]) -> Step {
        self.emit_with(values, |tags| {
            for &(index, tag) in marks {
                tags[index] = tag;
            }
        })
    }

    /// Emits a frame whose tags are filled in by `mark`, then pauses.
    ///
    /// Cancellation is checked before the frame is rendered and again after
    /// the pause, so a sink that cancels while drawing never sees another
    /// frame from this run.
    pub(crate) fn emit_with<F>(&mut self, values: &[u32], mark: F) -> Step
    where
        F: FnOnce(&mut [ColorTag]),
    {
        if self.cancel.is_cancelled() {
            return Err(Interrupt::Cancelled);
        }

        self.tags.clear();
        self.tags.resize(values.len(), ColorTag::Normal);
        mark(&mut self.tags);

        let frame = Frame::new(values, &self.tags)?;
        self.sink.render(&frame)?;
        self.stats.frames += 1;
        self.sink.pause(self.delay)?;

        if self.cancel.is_cancelled() {
            return Err(Interrupt::Cancelled);
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn count_comparison(&mut self) {
        self.stats.comparisons += 1;
    }

    #[inline]
    pub(crate) fn count_swap(&mut self) {
        self.stats.swaps += 1;
    }

    #[inline]
    pub(crate) fn count_shift(&mut self) {
        self.stats.shifts += 1;
    }

    #[inline]
    pub(crate) fn count_partition(&mut self) {
        self.stats.partitions += 1;
    }
}

impl fmt::Debug for StepContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepContext")
            .field("delay", &self.delay)
            .field("cancel", &self.cancel)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

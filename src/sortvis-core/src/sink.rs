//! Render sinks: the consumers of frames.

use std::time::Duration;

use tracing::trace;

use crate::error::Result;
use crate::frame::{Frame, OwnedFrame};

/// Consumer of frames.
///
/// Engines call [`render`](Self::render) once per observable step and then
/// [`pause`](Self::pause) with the run's delay. The pause is what makes the
/// animation watchable; sinks that are not real-time may skip it.
pub trait RenderSink {
    /// Draws (or otherwise consumes) one frame.
    fn render(&mut self, frame: &Frame<'_>) -> Result<()>;

    /// Blocks for roughly `delay` after a frame.
    fn pause(&mut self, delay: Duration) -> Result<()> {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
        Ok(())
    }
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn render(&mut self, frame: &Frame<'_>) -> Result<()> {
        (**self).render(frame)
    }

    fn pause(&mut self, delay: Duration) -> Result<()> {
        (**self).pause(delay)
    }
}

/// Keeps a copy of every frame. Does not sleep.
#[derive(Debug, Default)]
pub struct RecordingSink {
    frames: Vec<OwnedFrame>,
    pauses: Vec<Duration>,
}

impl RecordingSink {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames recorded so far.
    pub fn frames(&self) -> &[OwnedFrame] {
        &self.frames
    }

    /// Delays requested so far, one per frame.
    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }
}

impl RenderSink for RecordingSink {
    fn render(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.frames.push(frame.to_owned_frame());
        Ok(())
    }

    fn pause(&mut self, delay: Duration) -> Result<()> {
        self.pauses.push(delay);
        Ok(())
    }
}

/// Logs each frame at `trace` level. Frames are not paced.
#[derive(Debug, Default)]
pub struct LogSink {
    frames: u64,
}

impl LogSink {
    /// Creates a log sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames logged.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for LogSink {
    fn render(&mut self, frame: &Frame<'_>) -> Result<()> {
        self.frames += 1;
        trace!(
            frame = self.frames,
            values = ?frame.values(),
            highlighted = ?frame.highlighted(),
            "frame"
        );
        Ok(())
    }

    fn pause(&mut self, _delay: Duration) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::ColorTag;

    #[test]
    fn test_recording_sink_copies_frames() {
        let mut sink = RecordingSink::new();
        let mut values = vec![2, 1];
        let tags = [ColorTag::Compared, ColorTag::Compared];

        sink.render(&Frame::new(&values, &tags).unwrap()).unwrap();
        sink.pause(Duration::from_millis(10)).unwrap();
        values.swap(0, 1);

        assert_eq!(sink.frames()[0].values, vec![2, 1]);
        assert_eq!(sink.pauses(), &[Duration::from_millis(10)]);
    }

    #[test]
    fn test_log_sink_counts() {
        let mut sink = LogSink::new();
        let values = [1];
        let tags = [ColorTag::Normal];
        let frame = Frame::new(&values, &tags).unwrap();
        sink.render(&frame).unwrap();
        sink.render(&frame).unwrap();
        assert_eq!(sink.frames(), 2);
    }
}

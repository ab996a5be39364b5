//! The terminal [`RenderSink`].

use std::time::{Duration, Instant};

use crossterm::event::Event;
use sortvis_core::tag::tag_string;
use sortvis_core::{CancellationToken, Frame, OwnedFrame, RenderSink, SortError};
use tracing::{debug, trace};

use crate::backend::TerminalBackend;
use crate::canvas;
use crate::error::Result;
use crate::input::{Command, command_for_event};
use crate::palette::Palette;
use crate::renderer::Renderer;

/// Longest single wait on input during a pause.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Draws frames as bars and keeps the terminal responsive while pausing.
///
/// A quit key during [`pause`](RenderSink::pause) cancels the token, which
/// the engine observes before its next frame. A resize redraws the last
/// frame at the new size.
pub struct TerminalSink<'r, B: TerminalBackend> {
    renderer: &'r mut Renderer<B>,
    palette: &'r Palette,
    cancel: CancellationToken,
    status: [String; 2],
    last: Option<OwnedFrame>,
}

impl<'r, B: TerminalBackend> TerminalSink<'r, B> {
    pub fn new(
        renderer: &'r mut Renderer<B>,
        palette: &'r Palette,
        cancel: CancellationToken,
        status: [String; 2],
    ) -> Self {
        Self {
            renderer,
            palette,
            cancel,
            status,
            last: None,
        }
    }

    fn draw(&mut self, frame: &Frame<'_>) -> Result<()> {
        let palette = self.palette;
        let tags = frame.tags();
        canvas::compose(
            self.renderer.buffer(),
            [self.status[0].as_str(), self.status[1].as_str()],
            palette.text,
            frame.values(),
            |i| palette.color(tags[i]),
        );
        self.renderer.render()
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Resize(width, height) => {
                self.renderer.resize_to(width, height);
                if let Some(last) = self.last.take() {
                    let drawn = self.draw(&last.as_frame());
                    self.last = Some(last);
                    drawn?;
                }
            }
            other => {
                if command_for_event(&other) == Some(Command::Quit) {
                    debug!("quit requested during sort");
                    self.cancel.cancel();
                }
            }
        }
        Ok(())
    }

    fn wait(&mut self, delay: Duration) -> Result<()> {
        let deadline = Instant::now() + delay;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            let polled = self
                .renderer
                .backend_mut()
                .poll_event(remaining.min(POLL_INTERVAL))?;
            if let Some(event) = polled {
                self.handle_event(event)?;
                if self.cancel.is_cancelled() {
                    return Ok(());
                }
            }
            if remaining.is_zero() {
                return Ok(());
            }
        }
    }
}

impl<B: TerminalBackend> RenderSink for TerminalSink<'_, B> {
    fn render(&mut self, frame: &Frame<'_>) -> sortvis_core::Result<()> {
        trace!(tags = %tag_string(frame.tags()), "drawing frame");
        self.draw(frame)?;
        let last = self.last.get_or_insert_with(|| OwnedFrame {
            values: Vec::new(),
            tags: Vec::new(),
        });
        last.values.clear();
        last.values.extend_from_slice(frame.values());
        last.tags.clear();
        last.tags.extend_from_slice(frame.tags());
        Ok(())
    }

    fn pause(&mut self, delay: Duration) -> sortvis_core::Result<()> {
        self.wait(delay).map_err(SortError::from)
    }
}

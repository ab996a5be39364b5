//! Double-buffered renderer.

use tracing::debug;

use crate::backend::TerminalBackend;
use crate::buffer::{Buffer, changed_cells};
use crate::color::Color;
use crate::error::Result;

/// Owns a backend plus the on-screen and in-progress buffers.
///
/// Draw into [`buffer`](Self::buffer), then call [`render`](Self::render) to
/// write only the cells that changed since the last render.
pub struct Renderer<B: TerminalBackend> {
    backend: B,
    front: Buffer,
    back: Buffer,
    force_full_redraw: bool,
}

impl<B: TerminalBackend> Renderer<B> {
    /// Creates a renderer sized to the backend's terminal.
    pub fn new(backend: B) -> Result<Self> {
        let (width, height) = backend.size()?;
        Ok(Self {
            backend,
            front: Buffer::new(width, height),
            back: Buffer::new(width, height),
            force_full_redraw: true,
        })
    }

    #[inline]
    pub fn size(&self) -> (u16, u16) {
        self.back.size()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// The buffer the next frame is drawn into.
    pub fn buffer(&mut self) -> &mut Buffer {
        &mut self.back
    }

    /// Makes the next render write every cell.
    pub fn force_redraw(&mut self) {
        self.force_full_redraw = true;
    }

    /// Resizes both buffers and forces a full redraw.
    pub fn resize_to(&mut self, width: u16, height: u16) {
        debug!(width, height, "terminal resized");
        self.front.resize(width, height);
        self.back.resize(width, height);
        self.force_redraw();
    }

    /// Writes the changed cells of the back buffer and swaps the buffers.
    pub fn render(&mut self) -> Result<()> {
        if self.force_full_redraw {
            self.backend.clear()?;
            // An all-default front makes every painted cell a change.
            self.front.resize(self.back.width(), self.back.height());
        }

        let mut current: Option<(Option<Color>, Option<Color>)> = None;
        for (x, y, cell) in changed_cells(&self.front, &self.back) {
            if current != Some((cell.fg, cell.bg)) {
                self.backend.set_foreground(cell.fg)?;
                self.backend.set_background(cell.bg)?;
                current = Some((cell.fg, cell.bg));
            }
            self.backend.move_cursor(x, y)?;
            let mut utf8 = [0u8; 4];
            self.backend.write_str(cell.symbol.encode_utf8(&mut utf8))?;
        }

        if current.is_some() {
            self.backend.set_foreground(None)?;
            self.backend.set_background(None)?;
        }
        self.backend.flush()?;

        std::mem::swap(&mut self.front, &mut self.back);
        self.back.clear();
        self.force_full_redraw = false;
        Ok(())
    }

    /// Prepares the terminal for rendering.
    pub fn setup(&mut self) -> Result<()> {
        self.backend.enter_raw_mode()?;
        self.backend.enter_alternate_screen()?;
        self.backend.hide_cursor()?;
        self.backend.clear()?;
        self.force_redraw();
        Ok(())
    }

    /// Restores the terminal. Every step runs even if an earlier one fails;
    /// the first error is returned.
    pub fn teardown(&mut self) -> Result<()> {
        let results = [
            self.backend.show_cursor(),
            self.backend.leave_alternate_screen(),
            self.backend.exit_raw_mode(),
        ];
        results.into_iter().collect()
    }
}

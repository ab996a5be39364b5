//! Terminal backend abstraction and crossterm implementation.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event},
    execute, queue,
    style::{Color as CrosstermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode, size,
    },
};

use crate::color::Color;
use crate::error::Result;

/// What the renderer and the input loop need from a terminal.
///
/// Output calls may be queued; nothing is guaranteed visible before
/// [`flush`](Self::flush).
pub trait TerminalBackend {
    /// Enters raw mode for the terminal.
    fn enter_raw_mode(&mut self) -> Result<()>;

    /// Exits raw mode, restoring normal terminal behavior.
    fn exit_raw_mode(&mut self) -> Result<()>;

    /// Enters the alternate screen buffer.
    fn enter_alternate_screen(&mut self) -> Result<()>;

    /// Leaves the alternate screen buffer.
    fn leave_alternate_screen(&mut self) -> Result<()>;

    fn hide_cursor(&mut self) -> Result<()>;

    fn show_cursor(&mut self) -> Result<()>;

    /// Moves the cursor to the specified position (0-based).
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()>;

    /// Current terminal size (columns, rows).
    fn size(&self) -> Result<(u16, u16)>;

    /// Clears the entire screen.
    fn clear(&mut self) -> Result<()>;

    fn flush(&mut self) -> Result<()>;

    /// Sets the foreground color; `None` is the terminal default.
    fn set_foreground(&mut self, color: Option<Color>) -> Result<()>;

    /// Sets the background color; `None` is the terminal default.
    fn set_background(&mut self, color: Option<Color>) -> Result<()>;

    /// Writes a string at the current cursor position.
    fn write_str(&mut self, s: &str) -> Result<()>;

    /// Waits up to `timeout` for an input event.
    fn poll_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Crossterm-based terminal backend on stdout.
///
/// Dropping it restores whatever terminal modes it changed.
pub struct CrosstermBackend {
    stdout: Stdout,
    in_raw_mode: bool,
    in_alternate_screen: bool,
    cursor_hidden: bool,
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            in_raw_mode: false,
            in_alternate_screen: false,
            cursor_hidden: false,
        }
    }

    #[inline]
    fn to_crossterm_color(color: Option<Color>) -> CrosstermColor {
        color.map_or(CrosstermColor::Reset, CrosstermColor::from)
    }
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter_raw_mode(&mut self) -> Result<()> {
        if !self.in_raw_mode {
            enable_raw_mode()?;
            self.in_raw_mode = true;
        }
        Ok(())
    }

    fn exit_raw_mode(&mut self) -> Result<()> {
        if self.in_raw_mode {
            disable_raw_mode()?;
            self.in_raw_mode = false;
        }
        Ok(())
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        if !self.in_alternate_screen {
            execute!(self.stdout, EnterAlternateScreen)?;
            self.in_alternate_screen = true;
        }
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        if self.in_alternate_screen {
            execute!(self.stdout, LeaveAlternateScreen)?;
            self.in_alternate_screen = false;
        }
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        if !self.cursor_hidden {
            execute!(self.stdout, Hide)?;
            self.cursor_hidden = true;
        }
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        if self.cursor_hidden {
            execute!(self.stdout, Show)?;
            self.cursor_hidden = false;
        }
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        queue!(self.stdout, MoveTo(x, y))?;
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        Ok(size()?)
    }

    fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, Clear(ClearType::All))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    fn set_foreground(&mut self, color: Option<Color>) -> Result<()> {
        queue!(self.stdout, SetForegroundColor(Self::to_crossterm_color(color)))?;
        Ok(())
    }

    fn set_background(&mut self, color: Option<Color>) -> Result<()> {
        queue!(self.stdout, SetBackgroundColor(Self::to_crossterm_color(color)))?;
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        queue!(self.stdout, Print(s))?;
        Ok(())
    }

    fn poll_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

/// Puts stdout back into cooked mode on the main screen.
///
/// For panic hooks and signal handlers, where the backend's `Drop` may never
/// run.
pub fn restore_terminal() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, ResetColor, Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        // Best-effort cleanup on drop
        let _ = queue!(self.stdout, ResetColor);
        let _ = self.show_cursor();
        let _ = self.leave_alternate_screen();
        let _ = self.exit_raw_mode();
    }
}

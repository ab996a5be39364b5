//! In-memory terminal for tests.

use std::collections::VecDeque;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::backend::TerminalBackend;
use crate::buffer::{Buffer, Cell};
use crate::color::Color;
use crate::error::Result;

pub fn key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

/// Records output into a [`Buffer`] and replays scripted input.
///
/// Zero-timeout polls never see input, like a real terminal with nothing
/// typed yet. Once the script runs out, a poll returns `q` when
/// `quit_when_idle` is set and nothing otherwise.
pub struct ScriptedBackend {
    pub screen: Buffer,
    pub events: VecDeque<Event>,
    pub quit_when_idle: bool,
    pub cells_written: usize,
    pub clears: usize,
    pub raw_mode: bool,
    pub alternate_screen: bool,
    pub cursor_hidden: bool,
    cursor: (u16, u16),
    fg: Option<Color>,
    bg: Option<Color>,
}

impl ScriptedBackend {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            screen: Buffer::new(width, height),
            events: VecDeque::new(),
            quit_when_idle: false,
            cells_written: 0,
            clears: 0,
            raw_mode: false,
            alternate_screen: false,
            cursor_hidden: false,
            cursor: (0, 0),
            fg: None,
            bg: None,
        }
    }

    pub fn with_events(mut self, events: impl IntoIterator<Item = Event>) -> Self {
        self.events.extend(events);
        self
    }

    pub fn quitting_when_idle(mut self) -> Self {
        self.quit_when_idle = true;
        self
    }

    /// Background color on screen at (x, y).
    pub fn bg_at(&self, x: u16, y: u16) -> Option<Color> {
        self.screen.get(x, y).and_then(|c| c.bg)
    }
}

impl TerminalBackend for ScriptedBackend {
    fn enter_raw_mode(&mut self) -> Result<()> {
        self.raw_mode = true;
        Ok(())
    }

    fn exit_raw_mode(&mut self) -> Result<()> {
        self.raw_mode = false;
        Ok(())
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        self.alternate_screen = true;
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        self.alternate_screen = false;
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.cursor_hidden = true;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.cursor_hidden = false;
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.cursor = (x, y);
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        Ok(self.screen.size())
    }

    fn clear(&mut self) -> Result<()> {
        self.screen.clear();
        self.clears += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn set_foreground(&mut self, color: Option<Color>) -> Result<()> {
        self.fg = color;
        Ok(())
    }

    fn set_background(&mut self, color: Option<Color>) -> Result<()> {
        self.bg = color;
        Ok(())
    }

    fn write_str(&mut self, s: &str) -> Result<()> {
        for symbol in s.chars() {
            let (x, y) = self.cursor;
            self.screen.set(
                x,
                y,
                Cell {
                    symbol,
                    fg: self.fg,
                    bg: self.bg,
                },
            );
            self.cursor = (x + 1, y);
            self.cells_written += 1;
        }
        Ok(())
    }

    fn poll_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if timeout.is_zero() {
            return Ok(None);
        }
        match self.events.pop_front() {
            Some(Event::Resize(width, height)) => {
                self.screen.resize(width, height);
                Ok(Some(Event::Resize(width, height)))
            }
            Some(event) => Ok(Some(event)),
            None if self.quit_when_idle => Ok(Some(key('q'))),
            None => Ok(None),
        }
    }
}

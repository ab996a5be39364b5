//! Key bindings.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the front end to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Replace the data with a fresh random sequence.
    Generate,
    /// Sort the current data with the selected algorithm.
    Sort,
    NextAlgorithm,
    PreviousAlgorithm,
    NextSpeed,
    /// Leave the session; during a sort this also cancels the run.
    Quit,
}

/// Maps a key press to a command. Releases and repeats map to nothing.
pub fn command_for_key(key: &KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c' | 'C')).then_some(Command::Quit);
    }
    match key.code {
        KeyCode::Char('g') => Some(Command::Generate),
        KeyCode::Char('s') | KeyCode::Enter => Some(Command::Sort),
        KeyCode::Char('a') => Some(Command::NextAlgorithm),
        KeyCode::Char('A') => Some(Command::PreviousAlgorithm),
        KeyCode::Char('v') => Some(Command::NextSpeed),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Like [`command_for_key`] for any event; non-key events map to nothing.
pub fn command_for_event(event: &Event) -> Option<Command> {
    match event {
        Event::Key(key) => command_for_key(key),
        _ => None,
    }
}

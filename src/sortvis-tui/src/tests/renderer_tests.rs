//! Diff rendering against the in-memory terminal.

use pretty_assertions::assert_eq;

use super::support::ScriptedBackend;
use crate::buffer::Cell;
use crate::color::Color;
use crate::renderer::Renderer;

#[test]
fn test_only_changed_cells_are_written() {
    let mut renderer = Renderer::new(ScriptedBackend::new(10, 4)).unwrap();

    renderer.buffer().set(1, 1, Cell::filled(Color::WHITE));
    renderer.render().unwrap();
    assert_eq!(renderer.backend().cells_written, 1);
    assert_eq!(renderer.backend().bg_at(1, 1), Some(Color::WHITE));

    // Same picture again: nothing to write.
    renderer.buffer().set(1, 1, Cell::filled(Color::WHITE));
    renderer.render().unwrap();
    assert_eq!(renderer.backend().cells_written, 1);

    // The old cell goes back to blank and the new one is painted.
    renderer.buffer().set(2, 1, Cell::filled(Color::WHITE));
    renderer.render().unwrap();
    assert_eq!(renderer.backend().cells_written, 3);
    assert_eq!(renderer.backend().bg_at(1, 1), None);
    assert_eq!(renderer.backend().bg_at(2, 1), Some(Color::WHITE));
}

#[test]
fn test_resize_forces_full_redraw() {
    let mut renderer = Renderer::new(ScriptedBackend::new(10, 4)).unwrap();
    renderer.render().unwrap();
    let clears = renderer.backend().clears;

    renderer.resize_to(6, 3);
    assert_eq!(renderer.size(), (6, 3));
    renderer.buffer().set(5, 2, Cell::filled(Color::BLACK));
    renderer.render().unwrap();

    assert_eq!(renderer.backend().clears, clears + 1);
    assert_eq!(renderer.backend().bg_at(5, 2), Some(Color::BLACK));
}

#[test]
fn test_setup_and_teardown_restore_terminal() {
    let mut renderer = Renderer::new(ScriptedBackend::new(4, 4)).unwrap();
    renderer.setup().unwrap();
    {
        let backend = renderer.backend();
        assert!(backend.raw_mode && backend.alternate_screen && backend.cursor_hidden);
    }

    renderer.teardown().unwrap();
    let backend = renderer.backend();
    assert!(!backend.raw_mode);
    assert!(!backend.alternate_screen);
    assert!(!backend.cursor_hidden);
}

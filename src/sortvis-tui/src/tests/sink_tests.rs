//! The terminal sink driven directly and through an engine.

use std::time::Duration;

use crossterm::event::Event;
use pretty_assertions::assert_eq;
use sortvis_core::{
    Algorithm, CancellationToken, ColorTag, Frame, RenderSink, RunOutcome, StepContext,
};

use super::support::{ScriptedBackend, key};
use crate::palette::Palette;
use crate::renderer::Renderer;
use crate::sink::TerminalSink;

fn status() -> [String; 2] {
    [" status".to_string(), String::new()]
}

#[test]
fn test_frame_is_drawn_with_palette_colors() {
    let palette = Palette::default();
    let mut renderer = Renderer::new(ScriptedBackend::new(12, 12)).unwrap();
    let tags = [ColorTag::Pivot, ColorTag::Normal];
    {
        let mut sink = TerminalSink::new(&mut renderer, &palette, CancellationToken::new(), status());
        sink.render(&Frame::new(&[1, 2], &tags).unwrap()).unwrap();
    }

    // slot 4, offset 2: bars start in columns 2 and 6; bottom row is 11
    let backend = renderer.backend();
    assert_eq!(backend.bg_at(2, 11), Some(palette.color(ColorTag::Pivot)));
    assert_eq!(backend.bg_at(6, 11), Some(palette.color(ColorTag::Normal)));
    assert_eq!(backend.bg_at(2, 2), None);
    assert_eq!(backend.bg_at(6, 2), Some(palette.color(ColorTag::Normal)));
    assert!(backend.screen.row_text(0).starts_with(" status"));
}

#[test]
fn test_quit_key_during_pause_cancels() {
    let palette = Palette::default();
    let mut renderer = Renderer::new(ScriptedBackend::new(12, 12).with_events([key('q')])).unwrap();
    let token = CancellationToken::new();

    let mut sink = TerminalSink::new(&mut renderer, &palette, token.clone(), status());
    sink.pause(Duration::from_millis(50)).unwrap();

    assert!(token.is_cancelled());
}

#[test]
fn test_zero_delay_pause_does_not_block() {
    let palette = Palette::default();
    let mut renderer = Renderer::new(ScriptedBackend::new(12, 12).with_events([key('q')])).unwrap();
    let token = CancellationToken::new();

    let mut sink = TerminalSink::new(&mut renderer, &palette, token.clone(), status());
    sink.pause(Duration::ZERO).unwrap();

    assert!(!token.is_cancelled());
}

#[test]
fn test_other_keys_are_ignored_while_sorting() {
    let palette = Palette::default();
    let backend = ScriptedBackend::new(12, 12).with_events([key('g'), key('a')]);
    let mut renderer = Renderer::new(backend).unwrap();
    let token = CancellationToken::new();

    let mut sink = TerminalSink::new(&mut renderer, &palette, token.clone(), status());
    sink.pause(Duration::from_millis(30)).unwrap();

    assert!(!token.is_cancelled());
    drop(sink);
    assert!(renderer.backend().events.is_empty());
}

#[test]
fn test_resize_redraws_last_frame() {
    let palette = Palette::default();
    let backend = ScriptedBackend::new(12, 12).with_events([Event::Resize(20, 8)]);
    let mut renderer = Renderer::new(backend).unwrap();
    let tags = [ColorTag::Pivot, ColorTag::Normal];
    {
        let mut sink = TerminalSink::new(&mut renderer, &palette, CancellationToken::new(), status());
        sink.render(&Frame::new(&[1, 2], &tags).unwrap()).unwrap();
        sink.pause(Duration::from_millis(30)).unwrap();
    }

    assert_eq!(renderer.size(), (20, 8));
    // slot 6, offset 3: the second bar starts in column 9; bottom row is 7
    let backend = renderer.backend();
    assert_eq!(backend.bg_at(9, 7), Some(palette.color(ColorTag::Normal)));
    assert_eq!(backend.bg_at(3, 7), Some(palette.color(ColorTag::Pivot)));
}

#[test]
fn test_quit_during_sort_stops_the_engine() {
    let palette = Palette::default();
    let mut renderer = Renderer::new(ScriptedBackend::new(40, 12).with_events([key('q')])).unwrap();
    let token = CancellationToken::new();
    let mut data: Vec<u32> = (0..10).rev().collect();

    let report = {
        let mut sink = TerminalSink::new(&mut renderer, &palette, token.clone(), status());
        let mut ctx = StepContext::with_cancellation(&mut sink, Duration::from_millis(50), token);
        Algorithm::Quicksort.run(&mut data, &mut ctx).unwrap()
    };

    assert_eq!(report.outcome, RunOutcome::Cancelled);
    assert_eq!(report.stats.frames, 1);
}

#[test]
fn test_engine_completes_without_input() {
    let palette = Palette::default();
    let mut renderer = Renderer::new(ScriptedBackend::new(40, 12)).unwrap();
    let token = CancellationToken::new();
    let mut data = vec![4, 1, 3, 2];

    let report = {
        let mut sink = TerminalSink::new(&mut renderer, &palette, token.clone(), status());
        let mut ctx = StepContext::with_cancellation(&mut sink, Duration::ZERO, token);
        Algorithm::Shellsort.run(&mut data, &mut ctx).unwrap()
    };

    assert_eq!(report.outcome, RunOutcome::Completed);
    assert_eq!(data, vec![1, 2, 3, 4]);
    assert_eq!(report.stats.frames, 9);
    assert!(renderer.backend().cells_written > 0);
}

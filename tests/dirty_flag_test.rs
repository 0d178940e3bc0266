//! Tests for the dirty flag mechanism
//!
//! The event loop only redraws when `needs_redraw` is set. These tests check
//! that every user-visible state change sets it.

mod common;

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use common::{press, press_at, type_text, TestAppBuilder};
use marquee::app::Screen;

#[test]
fn test_app_initializes_with_needs_redraw_true() {
    let (app, _) = TestAppBuilder::new().build();
    assert!(app.needs_redraw, "App should initialize with needs_redraw=true");
}

#[test]
fn test_key_press_marks_dirty() {
    let (mut app, _) = TestAppBuilder::new().build();
    app.needs_redraw = false;
    press(&mut app, KeyCode::Right);
    assert!(app.needs_redraw);
}

#[test]
fn test_update_terminal_dimensions_marks_dirty() {
    let (mut app, _) = TestAppBuilder::new().build();
    app.needs_redraw = false;
    app.update_terminal_dimensions(120, 40);
    assert!(app.needs_redraw);
    assert_eq!(app.layout().grid_columns(), 3);
}

#[test]
fn test_idle_tick_does_not_mark_dirty() {
    let (mut app, _) = TestAppBuilder::new().build();
    app.needs_redraw = false;
    app.tick(Instant::now());
    assert!(!app.needs_redraw, "Nothing changed, so no redraw");
}

#[test]
fn test_blur_dismissal_on_tick_marks_dirty() {
    let (mut app, _) = TestAppBuilder::new().build();
    let start = Instant::now();
    app.navigate_to(Screen::Search);
    type_text(&mut app, "a");
    press_at(&mut app, KeyCode::Esc, start);

    app.needs_redraw = false;
    app.tick(start + Duration::from_millis(500));
    assert!(app.needs_redraw, "Closing the dropdown must redraw");
}

#[test]
fn test_open_link_marks_dirty() {
    let (mut app, _) = TestAppBuilder::new().build();
    app.needs_redraw = false;
    app.open_link("https://example.com");
    assert!(app.needs_redraw);
}

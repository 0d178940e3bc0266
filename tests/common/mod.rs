//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let (mut app, opener) = TestAppBuilder::new().with_user("Asha").build();
//! press(&mut app, KeyCode::Char('3'));
//! let text = render_to_string(&mut app, 80, 24);
//! ```

#![allow(dead_code)]

use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::TestBackend, Terminal};

use marquee::adapters::RecordingOpener;
use marquee::app::App;
use marquee::config::Config;
use marquee::ui;
use marquee::ui::interaction::ClickAction;

/// Builds an `App` wired to a `RecordingOpener`.
#[derive(Default)]
pub struct TestAppBuilder {
    config: Config,
    size: Option<(u16, u16)>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user: &str) -> Self {
        self.config = self.config.with_user(user);
        self
    }

    pub fn with_links_disabled(mut self) -> Self {
        self.config = self.config.with_open_links(false);
        self
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.size = Some((width, height));
        self
    }

    /// Returns the app and a handle onto the links it opens.
    pub fn build(self) -> (App, RecordingOpener) {
        let opener = RecordingOpener::new();
        let mut app = App::new(&self.config, Box::new(opener.clone()));
        if let Some((width, height)) = self.size {
            app.update_terminal_dimensions(width, height);
        }
        (app, opener)
    }
}

pub fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), Instant::now());
}

pub fn press_at(app: &mut App, code: KeyCode, now: Instant) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now);
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Draw one frame into a `width` x `height` test buffer.
pub fn draw(app: &mut App, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    terminal
}

/// Buffer contents, one line per row.
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    buffer_text(&draw(app, width, height))
}

/// Top-left corner of the first registered area with `action`.
pub fn position_of(app: &App, action: &ClickAction) -> Option<(u16, u16)> {
    app.hit_areas
        .areas()
        .iter()
        .find(|area| &area.action == action)
        .map(|area| (area.rect.x, area.rect.y))
}

/// Left click at a cell.
pub fn click(app: &mut App, column: u16, row: u16) {
    mouse(app, MouseEventKind::Down(MouseButton::Left), column, row);
}

pub fn hover(app: &mut App, column: u16, row: u16) {
    mouse(app, MouseEventKind::Moved, column, row);
}

fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
    let event = MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    };
    app.handle_mouse(event, Instant::now());
}

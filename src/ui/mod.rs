//! UI rendering for the Marquee storefront
//!
//! Every frame is laid out top to bottom:
//! - Header: brand, page tabs and the viewer greeting
//! - Status line: the last side-effect message, or key hints
//! - Page body: Home, Search, Watchlist or the movie detail view
//! - Footer: external link columns
//!
//! Renderers register clickable regions in `App::hit_areas` as they draw, so
//! the registry always describes the frame currently on screen.

mod carousel;
mod footer;
mod header;
mod helpers;
mod home;
pub mod interaction;
pub mod layout;
pub mod movie_view;
mod search;
pub mod theme;
mod watchlist;

pub use helpers::truncate_to_width;
pub use layout::{
    breakpoints, is_terminal_too_small, LayoutContext, SizeCategory, MIN_TERMINAL_HEIGHT,
    MIN_TERMINAL_WIDTH,
};

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Screen};
use theme::{COLOR_DIM, COLOR_ERROR, COLOR_HEADER};

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_areas.clear();

    let area = frame.area();
    let ctx = LayoutContext::new(area.width, area.height);
    if ctx.is_too_small() {
        render_too_small(frame, area);
        return;
    }

    let [header_area, status_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(ctx.footer_height()),
    ])
    .areas(area);

    header::render_header(frame, app, header_area);
    render_status(frame, app, status_area);

    match app.screen {
        Screen::Home => home::render_home(frame, app, body_area, &ctx),
        Screen::Search => search::render_search(frame, app, body_area),
        Screen::WatchList => watchlist::render_watchlist(frame, app, body_area, &ctx),
        Screen::MovieView => movie_view::render_movie_view(frame, app, body_area),
    }

    footer::render_footer(frame, app, footer_area, &ctx);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status {
        Some(status) => {
            let color = if status.is_error { COLOR_ERROR } else { COLOR_HEADER };
            Line::styled(
                truncate_to_width(&status.text, area.width as usize),
                Style::default().fg(color),
            )
        }
        None => Line::styled(
            truncate_to_width(key_hints(app), area.width as usize),
            Style::default().fg(COLOR_DIM),
        ),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn key_hints(app: &App) -> &'static str {
    match app.screen {
        Screen::Home => " ←/→ slides · Tab focus · ↑/↓ titles · Enter open · 1-3 pages · q quit",
        Screen::Search if app.search_input_focused() => {
            " type a genre · ↑/↓ suggestions · Enter select · Tab/Esc leave box"
        }
        Screen::Search => " ←/→ cards · Enter more info · Tab search box · q quit",
        Screen::WatchList => " arrows move · Enter play · i details · 1-3 pages · q quit",
        Screen::MovieView => " Enter/i movie info · p play · Esc back · q quit",
    }
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled(
            "Terminal too small",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            format!("Need at least {MIN_TERMINAL_WIDTH}x{MIN_TERMINAL_HEIGHT}"),
            Style::default().fg(COLOR_DIM),
        ),
    ];
    let rect = helpers::centered_rect(area.width, 2, area);
    frame.render_widget(
        Paragraph::new(lines).alignment(ratatui::layout::Alignment::Center),
        rect,
    );
}

//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which page is currently displayed
//! - [`HomeFocus`] / [`SearchFocus`] - Per-page keyboard focus
//! - [`StatusLine`] - Feedback for link launches and other side effects

mod handlers;
mod navigation;
mod types;

pub use types::{HomeFocus, Screen, SearchFocus, StatusLine};

use crate::catalog::{self, MovieCard, MovieRecord};
use crate::config::Config;
use crate::state::{CarouselState, GridCursor, ListCursor, SearchState, Session};
use crate::traits::LinkOpener;
use crate::ui::interaction::HitAreaRegistry;
use crate::ui::layout::LayoutContext;

/// Main application state
pub struct App {
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Current screen being displayed
    pub screen: Screen,
    /// Where `back()` returns to from the detail view
    pub previous_screen: Screen,
    /// Viewer display context, fixed after startup
    pub session: Session,

    // Home
    pub carousel: CarouselState,
    pub home_focus: HomeFocus,
    /// Selected row in the featured table
    pub featured: ListCursor,
    /// Selected link in the footer (flattened across sections)
    pub footer: ListCursor,

    // Search
    pub search: SearchState,
    pub search_focus: SearchFocus,
    /// Selected card among the revealed genre results
    pub results: ListCursor,

    // Watch list
    pub watchlist: GridCursor,

    // Movie view
    /// Navigation payload; `None` renders the placeholder
    pub payload: Option<MovieRecord>,
    /// Whether the "Movie Info" section is expanded
    pub info_open: bool,

    pub status: Option<StatusLine>,
    /// Click regions registered by the last frame
    pub hit_areas: HitAreaRegistry,
    /// Flag indicating the UI needs to be redrawn
    pub needs_redraw: bool,
    /// Terminal width in columns
    pub terminal_width: u16,
    /// Terminal height in rows
    pub terminal_height: u16,

    links: Box<dyn LinkOpener>,
    links_enabled: bool,
}

impl App {
    /// Create the app from resolved configuration and a link opener.
    pub fn new(config: &Config, links: Box<dyn LinkOpener>) -> Self {
        let layout = LayoutContext::default();
        Self {
            should_quit: false,
            screen: Screen::default(),
            previous_screen: Screen::default(),
            session: Session::new(config.user.clone()),
            carousel: CarouselState::new(catalog::SLIDE_COUNT, layout.carousel_viewport_width()),
            home_focus: HomeFocus::default(),
            featured: ListCursor::new(catalog::FEATURED.len()),
            footer: ListCursor::new(catalog::footer_links().count()),
            search: SearchState::new(config.blur_grace()),
            search_focus: SearchFocus::default(),
            results: ListCursor::new(0),
            watchlist: GridCursor::new(catalog::WATCH_LIST.len()),
            payload: None,
            info_open: false,
            status: None,
            hit_areas: HitAreaRegistry::new(),
            needs_redraw: true,
            terminal_width: layout.width,
            terminal_height: layout.height,
            links,
            links_enabled: config.open_links,
        }
    }

    /// Layout rules for the current terminal size.
    pub fn layout(&self) -> LayoutContext {
        LayoutContext::new(self.terminal_width, self.terminal_height)
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn links_enabled(&self) -> bool {
        self.links_enabled
    }

    /// Whether typed characters go to the search box.
    pub fn search_input_focused(&self) -> bool {
        self.screen == Screen::Search && self.search_focus == SearchFocus::Input
    }

    /// Card under the results cursor, if any genre is selected.
    pub fn selected_result(&self) -> Option<&'static MovieCard> {
        let cards = self.search.revealed_cards();
        self.results.selected().and_then(|i| cards.get(i))
    }

    pub fn set_status(&mut self, status: StatusLine) {
        self.status = Some(status);
        self.mark_dirty();
    }

    /// Track a terminal resize. The carousel keeps its slide and re-derives
    /// its scroll offset for the new viewport width.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        let viewport = self.layout().carousel_viewport_width();
        self.carousel.set_viewport_width(viewport);
        self.mark_dirty();
    }
}

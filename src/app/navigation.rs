//! Navigation methods for the App.

use std::time::Instant;

use tracing::{info, warn};

use crate::catalog::MovieRecord;

use super::{App, Screen, SearchFocus, StatusLine};

impl App {
    /// Switch to `screen`.
    pub fn navigate_to(&mut self, screen: Screen) {
        self.switch_screen(screen, Instant::now());
    }

    pub(super) fn switch_screen(&mut self, screen: Screen, now: Instant) {
        if screen == self.screen {
            return;
        }
        if self.search_input_focused() {
            self.search.on_blur(now);
        }
        if screen == Screen::Search {
            self.search_focus = SearchFocus::Input;
            self.search.on_focus();
        }
        if screen == Screen::MovieView {
            self.previous_screen = self.screen;
        }
        info!(from = ?self.screen, to = ?screen, "navigate");
        self.screen = screen;
        self.mark_dirty();
    }

    /// Show the detail view for `record`.
    pub fn open_movie(&mut self, record: MovieRecord) {
        if self.screen != Screen::MovieView {
            self.previous_screen = self.screen;
        }
        info!(id = record.id, name = record.name, "open movie");
        self.payload = Some(record);
        self.info_open = false;
        self.screen = Screen::MovieView;
        self.mark_dirty();
    }

    /// Leave the detail view for the page that opened it.
    pub fn back(&mut self) {
        if self.screen == Screen::MovieView {
            self.screen = self.previous_screen;
            self.mark_dirty();
        }
    }

    /// Expand or collapse "Movie Info". No-op without a payload.
    pub fn toggle_movie_info(&mut self) {
        if self.payload.is_some() {
            self.info_open = !self.info_open;
            self.mark_dirty();
        }
    }

    /// Hand `url` to the link opener, reporting the outcome in the status line.
    pub fn open_link(&mut self, url: &str) {
        if !self.links_enabled {
            self.set_status(StatusLine::info(format!("Link: {url}")));
            return;
        }
        match self.links.open(url) {
            Ok(()) => {
                info!(url, "opened link");
                self.set_status(StatusLine::info(format!("Opened {url}")));
            }
            Err(err) => {
                warn!(url, code = err.error_code(), error = %err, "failed to open link");
                self.set_status(StatusLine::error(err.user_message()));
            }
        }
    }

    /// Play the movie in the detail view.
    pub fn play_current(&mut self) {
        if let Some(record) = self.payload {
            self.open_link(record.video);
        }
    }

    pub fn quit(&mut self) {
        info!("quit requested");
        self.should_quit = true;
    }
}

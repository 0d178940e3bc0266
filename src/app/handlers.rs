//! Input handling for the App.
//!
//! Every handler takes the event time explicitly so the search blur grace
//! period can be driven deterministically.

use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::catalog::{self, FEATURED, WATCH_LIST};
use crate::state::Direction;
use crate::ui::interaction::ClickAction;

use super::{App, HomeFocus, Screen, SearchFocus};

impl App {
    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.mark_dirty();

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        if !self.search_input_focused() {
            match key.code {
                KeyCode::Char('q') => {
                    self.quit();
                    return;
                }
                KeyCode::Char(c @ '1'..='3') => {
                    let tab = c as usize - '1' as usize;
                    self.switch_screen(Screen::TABS[tab], now);
                    return;
                }
                _ => {}
            }
        }

        match self.screen {
            Screen::Home => self.handle_home_key(key),
            Screen::Search => self.handle_search_key(key, now),
            Screen::WatchList => self.handle_watchlist_key(key),
            Screen::MovieView => self.handle_movie_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.home_focus = self.home_focus.next(),
            KeyCode::BackTab => self.home_focus = self.home_focus.previous(),
            KeyCode::Left if self.home_focus == HomeFocus::Footer => self.footer.previous(),
            KeyCode::Right if self.home_focus == HomeFocus::Footer => self.footer.next(),
            KeyCode::Left => self.carousel.advance(Direction::Previous),
            KeyCode::Right => self.carousel.advance(Direction::Next),
            KeyCode::Up | KeyCode::Down if self.home_focus != HomeFocus::Featured => {
                self.home_focus = HomeFocus::Featured;
            }
            KeyCode::Up => self.featured.previous(),
            KeyCode::Down => self.featured.next(),
            KeyCode::Enter => self.activate_home_focus(),
            _ => {}
        }
    }

    fn activate_home_focus(&mut self) {
        match self.home_focus {
            HomeFocus::PreviousControl => self.carousel.advance(Direction::Previous),
            HomeFocus::NextControl => self.carousel.advance(Direction::Next),
            HomeFocus::Featured => {
                if let Some(record) = self.featured.selected().and_then(|i| FEATURED.get(i)) {
                    self.open_movie(*record);
                }
            }
            HomeFocus::Footer => {
                let link = self
                    .footer
                    .selected()
                    .and_then(|i| catalog::footer_links().nth(i));
                if let Some(link) = link {
                    self.open_link(link.url);
                }
            }
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) {
        match self.search_focus {
            SearchFocus::Input => match key.code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.search.push_char(c)
                }
                KeyCode::Backspace => self.search.pop_char(),
                KeyCode::Down => self.search.on_arrow_down(),
                KeyCode::Up => self.search.on_arrow_up(),
                KeyCode::Enter => {
                    if self.search.on_confirm().is_some() {
                        self.reset_results();
                    }
                }
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Esc => self.blur_search(now),
                _ => {}
            },
            SearchFocus::Results => match key.code {
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('/') => self.focus_search(),
                KeyCode::Left => self.results.previous(),
                KeyCode::Right => self.results.next(),
                KeyCode::Enter => {
                    if let Some(card) = self.selected_result() {
                        self.open_link(card.link);
                    }
                }
                _ => {}
            },
        }
    }

    fn handle_watchlist_key(&mut self, key: KeyEvent) {
        let columns = self.layout().grid_columns();
        match key.code {
            KeyCode::Left => self.watchlist.left(columns),
            KeyCode::Right => self.watchlist.right(columns),
            KeyCode::Up => self.watchlist.up(columns),
            KeyCode::Down => self.watchlist.down(columns),
            KeyCode::Enter => {
                if let Some(item) = self.watchlist.selected().and_then(|i| WATCH_LIST.get(i)) {
                    self.open_link(item.trailer);
                }
            }
            KeyCode::Char('i') => {
                if let Some(item) = self.watchlist.selected().and_then(|i| WATCH_LIST.get(i)) {
                    self.open_movie(catalog::record_for_watch_item(item));
                }
            }
            _ => {}
        }
    }

    fn handle_movie_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('i') => self.toggle_movie_info(),
            KeyCode::Char('p') => self.play_current(),
            KeyCode::Esc | KeyCode::Backspace => self.back(),
            _ => {}
        }
    }

    /// Handle a mouse event against the hit areas of the last frame.
    pub fn handle_mouse(&mut self, event: MouseEvent, now: Instant) {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let action = self.hit_areas.hit_test(event.column, event.row);
                let keeps_search_focus = matches!(
                    action,
                    Some(ClickAction::FocusSearchInput | ClickAction::Suggestion(_))
                );
                if self.search_input_focused() && !keeps_search_focus {
                    self.blur_search(now);
                }
                if let Some(action) = action {
                    self.handle_click(action, now);
                }
                self.mark_dirty();
            }
            MouseEventKind::Moved => {
                if self.hit_areas.update_hover(event.column, event.row) {
                    if let Some(ClickAction::Suggestion(index)) = self.hit_areas.hovered_action() {
                        let index = *index;
                        self.search.on_hover(index);
                    }
                    self.mark_dirty();
                }
            }
            _ => {}
        }
    }

    /// Handle a bracketed paste. Only the search box accepts text.
    pub fn handle_paste(&mut self, text: &str) {
        if self.search_input_focused() {
            self.search.append(text);
            self.mark_dirty();
        }
    }

    /// Apply a resolved click.
    pub fn handle_click(&mut self, action: ClickAction, now: Instant) {
        tracing::debug!(?action, "click");
        match action {
            ClickAction::NavigateTo(screen) => self.switch_screen(screen, now),
            ClickAction::OpenLink(url) => self.open_link(url),
            ClickAction::CarouselPrevious => {
                self.home_focus = HomeFocus::PreviousControl;
                self.carousel.advance(Direction::Previous);
            }
            ClickAction::CarouselNext => {
                self.home_focus = HomeFocus::NextControl;
                self.carousel.advance(Direction::Next);
            }
            ClickAction::OpenFeatured(index) => {
                if let Some(record) = FEATURED.get(index) {
                    self.home_focus = HomeFocus::Featured;
                    self.featured.select(index);
                    self.open_movie(*record);
                }
            }
            ClickAction::FocusSearchInput => self.focus_search(),
            ClickAction::Suggestion(index) => {
                if self.search.select_index(index).is_some() {
                    self.reset_results();
                }
            }
            ClickAction::ShowWatchItem(index) => {
                if let Some(item) = WATCH_LIST.get(index) {
                    self.watchlist.select(index);
                    self.open_movie(catalog::record_for_watch_item(item));
                }
            }
            ClickAction::ToggleMovieInfo => self.toggle_movie_info(),
            ClickAction::Back => self.back(),
        }
        self.mark_dirty();
    }

    /// Advance timers. Called on every event-loop tick.
    pub fn tick(&mut self, now: Instant) {
        if self.search.tick(now) {
            self.mark_dirty();
        }
    }

    fn blur_search(&mut self, now: Instant) {
        self.search_focus = SearchFocus::Results;
        self.search.on_blur(now);
    }

    fn focus_search(&mut self) {
        self.search_focus = SearchFocus::Input;
        self.search.on_focus();
    }

    /// Point the results cursor at the first card of a new selection.
    fn reset_results(&mut self) {
        self.results.set_len(self.search.revealed_cards().len());
        self.results.select(0);
        self.search_focus = SearchFocus::Results;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::adapters::RecordingOpener;
    use crate::config::Config;

    fn app() -> (App, RecordingOpener) {
        let opener = RecordingOpener::new();
        let app = App::new(&Config::default(), Box::new(opener.clone()));
        (app, opener)
    }

    fn press(app: &mut App, code: KeyCode, now: Instant) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    #[test]
    fn test_q_is_typed_into_search_box() {
        let (mut app, _) = app();
        let now = Instant::now();
        press(&mut app, KeyCode::Char('2'), now);
        assert_eq!(app.screen, Screen::Search);

        press(&mut app, KeyCode::Char('q'), now);
        assert!(!app.should_quit);
        assert_eq!(app.search.query(), "q");
    }

    #[test]
    fn test_enter_on_focused_control_matches_click() {
        let (mut app, _) = app();
        let now = Instant::now();
        app.home_focus = HomeFocus::PreviousControl;
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.carousel.current_index(), catalog::SLIDES.len() - 1);

        app.handle_click(ClickAction::CarouselNext, now);
        assert_eq!(app.carousel.current_index(), 0);
        assert_eq!(app.carousel.scroll_offset(), 0);
    }

    #[test]
    fn test_blur_dismisses_after_grace_period() {
        let (mut app, _) = app();
        let now = Instant::now();
        app.navigate_to(Screen::Search);
        press(&mut app, KeyCode::Char('a'), now);
        assert!(app.search.is_expanded());

        press(&mut app, KeyCode::Tab, now);
        app.tick(now + Duration::from_millis(50));
        assert!(app.search.is_expanded());
        app.tick(now + Duration::from_millis(150));
        assert!(!app.search.is_expanded());
    }

    #[test]
    fn test_click_on_suggestion_inside_grace_period_wins() {
        let (mut app, _) = app();
        let now = Instant::now();
        app.navigate_to(Screen::Search);
        press(&mut app, KeyCode::Char('t'), now);
        press(&mut app, KeyCode::Esc, now);

        app.handle_click(ClickAction::Suggestion(0), now + Duration::from_millis(40));
        app.tick(now + Duration::from_millis(200));
        assert_eq!(app.search.selected_genre(), Some("Thriller"));
        assert_eq!(app.search.query(), "Thriller");
        assert_eq!(app.results.selected(), Some(0));
    }

    #[test]
    fn test_first_arrow_only_focuses_featured_table() {
        let (mut app, _) = app();
        let now = Instant::now();
        press(&mut app, KeyCode::Up, now);
        assert_eq!(app.home_focus, HomeFocus::Featured);
        assert_eq!(app.featured.selected(), Some(0));

        press(&mut app, KeyCode::Down, now);
        press(&mut app, KeyCode::Down, now);
        press(&mut app, KeyCode::Up, now);
        assert_eq!(app.featured.selected(), Some(1));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let (mut app, _) = app();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key, Instant::now());
        assert!(!app.should_quit);
    }
}

//! Genre search combobox state.
//!
//! A synchronous prefix filter over the static genre list plus a highlighted
//! cursor for keyboard navigation. Dismissal on blur is deferred by a short
//! grace period so a pointer press on a suggestion can land first.

use std::time::{Duration, Instant};

use crate::catalog::{self, MovieCard};

/// Default delay between losing focus and closing the dropdown (milliseconds)
pub const BLUR_GRACE_MS: u64 = 100;

/// Genres whose name starts with `query`, ignoring case, in table order.
///
/// An empty query matches nothing.
pub fn filter_genres(query: &str) -> Vec<&'static str> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    catalog::genre_names()
        .filter(|genre| genre.to_lowercase().starts_with(&needle))
        .collect()
}

#[derive(Debug, Clone)]
pub struct SearchState {
    query: String,
    suggestions: Vec<&'static str>,
    /// `None` means nothing highlighted
    highlighted: Option<usize>,
    selected_genre: Option<&'static str>,
    blur_deadline: Option<Instant>,
    grace: Duration,
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new(Duration::from_millis(BLUR_GRACE_MS))
    }
}

impl SearchState {
    pub fn new(grace: Duration) -> Self {
        Self {
            query: String::new(),
            suggestions: Vec::new(),
            highlighted: None,
            selected_genre: None,
            blur_deadline: None,
            grace,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[&'static str] {
        &self.suggestions
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Whether the dropdown is showing.
    pub fn is_expanded(&self) -> bool {
        !self.suggestions.is_empty()
    }

    pub fn selected_genre(&self) -> Option<&'static str> {
        self.selected_genre
    }

    /// Cards revealed by the last committed selection.
    pub fn revealed_cards(&self) -> &'static [MovieCard] {
        self.selected_genre
            .and_then(catalog::cards_for)
            .unwrap_or(&[])
    }

    pub fn blur_pending(&self) -> bool {
        self.blur_deadline.is_some()
    }

    /// Replace the query text and refilter.
    pub fn on_query_change(&mut self, text: &str) {
        self.query.clear();
        self.query.push_str(text);
        self.suggestions = filter_genres(&self.query);
        self.highlighted = None;
    }

    /// Append a typed character.
    pub fn push_char(&mut self, c: char) {
        let mut text = std::mem::take(&mut self.query);
        text.push(c);
        self.on_query_change(&text);
    }

    /// Append pasted text. Line breaks are dropped.
    pub fn append(&mut self, pasted: &str) {
        let mut text = std::mem::take(&mut self.query);
        text.extend(pasted.chars().filter(|c| !c.is_control()));
        self.on_query_change(&text);
    }

    /// Delete the last character, if any.
    pub fn pop_char(&mut self) {
        let mut text = std::mem::take(&mut self.query);
        text.pop();
        self.on_query_change(&text);
    }

    pub fn on_arrow_down(&mut self) {
        if self.suggestions.is_empty() {
            self.suggestions = filter_genres(&self.query);
        }
        let Some(last) = self.suggestions.len().checked_sub(1) else {
            self.highlighted = None;
            return;
        };
        self.highlighted = Some(match self.highlighted {
            None => 0,
            Some(i) => (i + 1).min(last),
        });
    }

    pub fn on_arrow_up(&mut self) {
        if self.suggestions.is_empty() {
            self.highlighted = None;
            return;
        }
        self.highlighted = Some(self.highlighted.map_or(0, |i| i.saturating_sub(1)));
    }

    /// Pointer entered suggestion `index`.
    pub fn on_hover(&mut self, index: usize) {
        if index < self.suggestions.len() {
            self.highlighted = Some(index);
        }
    }

    /// Commit the highlighted suggestion. Returns the committed genre.
    pub fn on_confirm(&mut self) -> Option<&'static str> {
        let genre = self
            .highlighted
            .and_then(|i| self.suggestions.get(i).copied())?;
        self.select(genre);
        Some(genre)
    }

    /// Commit `genre` as the query and reveal its cards.
    pub fn select(&mut self, genre: &'static str) {
        self.query.clear();
        self.query.push_str(genre);
        self.suggestions.clear();
        self.highlighted = None;
        self.selected_genre = Some(genre);
        self.blur_deadline = None;
        tracing::info!(genre, "genre selected");
    }

    /// Pointer press on suggestion `index`.
    pub fn select_index(&mut self, index: usize) -> Option<&'static str> {
        let genre = self.suggestions.get(index).copied()?;
        self.select(genre);
        Some(genre)
    }

    /// Input lost focus; the dropdown closes once the grace period elapses.
    pub fn on_blur(&mut self, now: Instant) {
        self.blur_deadline = Some(now + self.grace);
    }

    /// Input regained focus; a pending dismissal is dropped.
    pub fn on_focus(&mut self) {
        self.blur_deadline = None;
    }

    /// Apply a due blur dismissal. Returns true when state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.blur_deadline {
            Some(deadline) if now >= deadline => {
                self.blur_deadline = None;
                self.suggestions.clear();
                self.highlighted = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_query_has_no_suggestions() {
        let mut s = SearchState::default();
        s.on_query_change("");
        assert!(s.suggestions().is_empty());
        assert_eq!(s.highlighted(), None);
    }

    #[test]
    fn test_prefix_match_is_case_insensitive() {
        let mut s = SearchState::default();
        s.on_query_change("Co");
        assert_eq!(s.suggestions(), &["Comedy"]);
        s.on_query_change("cO");
        assert_eq!(s.suggestions(), &["Comedy"]);
        s.on_query_change("a");
        assert_eq!(s.suggestions(), &["Action"]);
        s.on_query_change("x");
        assert!(s.suggestions().is_empty());
    }

    #[test]
    fn test_filter_matches_prefix_only() {
        assert!(filter_genres("omedy").is_empty());
        assert_eq!(filter_genres("THRILLER"), vec!["Thriller"]);
    }

    #[test]
    fn test_query_change_resets_highlight() {
        let mut s = SearchState::default();
        s.on_query_change("t");
        s.on_arrow_down();
        assert_eq!(s.highlighted(), Some(0));
        s.push_char('h');
        assert_eq!(s.highlighted(), None);
        assert_eq!(s.query(), "th");
    }

    #[test]
    fn test_append_drops_control_characters() {
        let mut s = SearchState::default();
        s.on_query_change("Th");
        s.on_arrow_down();
        s.append("ril\r\nler");
        assert_eq!(s.query(), "Thriller");
        assert_eq!(s.suggestions(), &["Thriller"]);
        assert_eq!(s.highlighted(), None);
    }

    #[test]
    fn test_arrow_down_repopulates_after_dismissal() {
        let start = Instant::now();
        let mut s = SearchState::default();
        s.on_query_change("c");
        s.on_blur(start);
        assert!(s.tick(start + Duration::from_millis(BLUR_GRACE_MS)));
        assert!(s.suggestions().is_empty());

        s.on_arrow_down();
        assert_eq!(s.suggestions(), &["Comedy"]);
        assert_eq!(s.highlighted(), Some(0));
    }

    #[test]
    fn test_arrow_down_with_empty_query_is_noop() {
        let mut s = SearchState::default();
        s.on_arrow_down();
        assert!(s.suggestions().is_empty());
        assert_eq!(s.highlighted(), None);
    }

    #[test]
    fn test_arrow_keys_clamp() {
        // No prefix matches all three genres, so seed the list directly
        let mut s = SearchState::default();
        s.suggestions = vec!["Action", "Comedy", "Thriller"];
        s.on_arrow_up();
        assert_eq!(s.highlighted(), Some(0));
        for _ in 0..5 {
            s.on_arrow_down();
        }
        assert_eq!(s.highlighted(), Some(2));
        s.on_arrow_up();
        assert_eq!(s.highlighted(), Some(1));
        for _ in 0..5 {
            s.on_arrow_up();
        }
        assert_eq!(s.highlighted(), Some(0));
    }

    #[test]
    fn test_confirm_commits_highlighted() {
        let mut s = SearchState::default();
        s.on_query_change("th");
        assert_eq!(s.on_confirm(), None);
        s.on_arrow_down();
        assert_eq!(s.on_confirm(), Some("Thriller"));
        assert_eq!(s.query(), "Thriller");
        assert!(s.suggestions().is_empty());
        assert_eq!(s.highlighted(), None);
        assert_eq!(s.selected_genre(), Some("Thriller"));
        assert_eq!(s.revealed_cards().len(), 2);
        assert_eq!(s.revealed_cards()[0].title, "Se7en");
    }

    #[test]
    fn test_pointer_select_inside_grace_period_wins() {
        let start = Instant::now();
        let mut s = SearchState::default();
        s.on_query_change("A");
        s.on_blur(start);
        assert!(!s.tick(start + Duration::from_millis(10)));
        assert_eq!(s.select_index(0), Some("Action"));
        assert!(!s.blur_pending());
        assert_eq!(s.query(), "Action");
    }

    #[test]
    fn test_blur_dismisses_after_grace() {
        let start = Instant::now();
        let mut s = SearchState::new(Duration::from_millis(50));
        s.on_query_change("C");
        s.on_arrow_down();
        s.on_blur(start);
        assert!(!s.tick(start + Duration::from_millis(49)));
        assert!(s.is_expanded());
        assert!(s.tick(start + Duration::from_millis(50)));
        assert!(!s.is_expanded());
        assert_eq!(s.highlighted(), None);
        // Query text survives a blur
        assert_eq!(s.query(), "C");
    }

    #[test]
    fn test_focus_cancels_pending_blur() {
        let start = Instant::now();
        let mut s = SearchState::default();
        s.on_query_change("C");
        s.on_blur(start);
        s.on_focus();
        assert!(!s.tick(start + Duration::from_secs(1)));
        assert!(s.is_expanded());
    }

    #[test]
    fn test_hover_out_of_range_is_ignored() {
        let mut s = SearchState::default();
        s.on_query_change("C");
        s.on_hover(3);
        assert_eq!(s.highlighted(), None);
        s.on_hover(0);
        assert_eq!(s.highlighted(), Some(0));
    }

    #[derive(Debug, Clone)]
    enum Key {
        Down,
        Up,
        Type(char),
        Backspace,
    }

    fn key() -> impl Strategy<Value = Key> {
        prop_oneof![
            Just(Key::Down),
            Just(Key::Up),
            Just(Key::Backspace),
            prop::sample::select(vec!['a', 'c', 't', 'o', 'h', 'z']).prop_map(Key::Type),
        ]
    }

    proptest! {
        #[test]
        fn highlight_stays_in_bounds(keys in proptest::collection::vec(key(), 0..64)) {
            let mut s = SearchState::default();
            for k in keys {
                match k {
                    Key::Down => s.on_arrow_down(),
                    Key::Up => s.on_arrow_up(),
                    Key::Type(c) => s.push_char(c),
                    Key::Backspace => s.pop_char(),
                }
                if let Some(i) = s.highlighted() {
                    prop_assert!(i < s.suggestions().len());
                }
                if s.query().is_empty() {
                    prop_assert!(s.suggestions().is_empty());
                }
            }
        }
    }
}

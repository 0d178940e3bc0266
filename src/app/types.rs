//! Type definitions for the application state.
//!
//! Contains enums and structs used for tracking UI state:
//! - [`Screen`] - Which page is currently displayed
//! - [`HomeFocus`] - Which Home control has keyboard focus
//! - [`SearchFocus`] - Input box or result cards on the Search page
//! - [`StatusLine`] - Transient message under the header

/// Represents which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Search,
    WatchList,
    /// Detail page; reached only through `App::open_movie`
    MovieView,
}

impl Screen {
    /// Screens reachable from the header tabs, in tab order.
    pub const TABS: [Screen; 3] = [Screen::Home, Screen::Search, Screen::WatchList];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Search => "Search",
            Screen::WatchList => "Watchlist",
            Screen::MovieView => "Movie",
        }
    }
}

/// Keyboard focus on the Home page. Tab order follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeFocus {
    /// Carousel "previous" arrow
    PreviousControl,
    /// Carousel "next" arrow
    #[default]
    NextControl,
    Featured,
    Footer,
}

impl HomeFocus {
    pub fn next(self) -> Self {
        match self {
            HomeFocus::PreviousControl => HomeFocus::NextControl,
            HomeFocus::NextControl => HomeFocus::Featured,
            HomeFocus::Featured => HomeFocus::Footer,
            HomeFocus::Footer => HomeFocus::PreviousControl,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            HomeFocus::PreviousControl => HomeFocus::Footer,
            HomeFocus::NextControl => HomeFocus::PreviousControl,
            HomeFocus::Featured => HomeFocus::NextControl,
            HomeFocus::Footer => HomeFocus::Featured,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchFocus {
    #[default]
    Input,
    Results,
}

/// One-line message shown under the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub is_error: bool,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_focus_cycle_is_closed() {
        let mut focus = HomeFocus::PreviousControl;
        for _ in 0..4 {
            focus = focus.next();
        }
        assert_eq!(focus, HomeFocus::PreviousControl);
        assert_eq!(HomeFocus::Featured.next().previous(), HomeFocus::Featured);
    }

    #[test]
    fn test_tabs_exclude_detail_view() {
        assert!(!Screen::TABS.contains(&Screen::MovieView));
        assert_eq!(Screen::WatchList.title(), "Watchlist");
    }
}

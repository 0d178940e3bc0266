//! Hit area system for pointer interactions.
//!
//! Components register clickable regions while rendering; the event loop asks
//! the registry which action sits under a mouse event.

use ratatui::layout::{Position, Rect};

use crate::app::Screen;

/// Represents an action that can be triggered by clicking a hit area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    // Chrome
    /// Header tab
    NavigateTo(Screen),
    /// Any outbound link (footer, cards, play buttons)
    OpenLink(&'static str),

    // Home
    CarouselPrevious,
    CarouselNext,
    /// Row in the featured table
    OpenFeatured(usize),

    // Search
    FocusSearchInput,
    /// Suggestion row; press selects, hover highlights
    Suggestion(usize),

    // Watch list
    /// "Details" button on a watch-list card
    ShowWatchItem(usize),

    // Movie view
    ToggleMovieInfo,
    Back,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self { rect, action }
    }

    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Registry for managing hit areas across the UI.
///
/// Areas are cleared at the start of every frame and refilled by the
/// renderers, so they always match what is on screen. The pointer position
/// survives the clear so hover styling can be applied while rendering.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// Registration order; later areas sit on top
    areas: Vec<HitArea>,
    pointer: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call this at the start of each render cycle.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        self.areas.push(HitArea::new(rect, action));
    }

    /// Action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.find_index(x, y).map(|i| self.areas[i].action.clone())
    }

    /// Record the pointer position. Returns true when the action under the
    /// pointer changed.
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let before = self.hovered_action().cloned();
        self.pointer = Some((x, y));
        self.hovered_action() != before.as_ref()
    }

    /// Action of the topmost area under the pointer.
    pub fn hovered_action(&self) -> Option<&ClickAction> {
        let (x, y) = self.pointer?;
        self.find_index(x, y).map(|i| &self.areas[i].action)
    }

    /// Whether the pointer sits inside `rect`. Used for hover styling while
    /// the frame is still being registered.
    pub fn is_pointer_over(&self, rect: Rect) -> bool {
        self.pointer
            .is_some_and(|(x, y)| rect.contains(Position::new(x, y)))
    }

    fn find_index(&self, x: u16, y: u16) -> Option<usize> {
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(i, _)| i)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }
}

//! Responsive Layout System
//!
//! `LayoutContext` wraps the terminal dimensions and answers the sizing
//! questions the pages ask: how many grid columns fit, how wide one carousel
//! slide is, how tall the hero area should be.

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;

    /// Small terminal height (< 24 rows)
    pub const SM_HEIGHT: u16 = 24;
}

/// Below this width nothing but a resize notice is drawn.
pub const MIN_TERMINAL_WIDTH: u16 = 40;
/// Below this height nothing but a resize notice is drawn.
pub const MIN_TERMINAL_HEIGHT: u16 = 12;

/// Columns taken by the carousel chrome: two 3-wide arrow buttons plus a
/// 2-column gutter on each side.
pub const CAROUSEL_CHROME_WIDTH: u16 = 10;

/// Size category for responsive design decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    /// < 60 cols
    ExtraSmall,
    /// < 80 cols
    Small,
    /// < 120 cols
    Medium,
    /// >= 120 cols
    Large,
}

/// Terminal dimensions plus the sizing rules derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Calculate a height as a percentage of terminal height, minimum 1.
    pub fn percent_height(&self, percentage: u16) -> u16 {
        ((self.height as u32 * percentage as u32) / 100).max(1) as u16
    }

    pub fn width_category(&self) -> SizeCategory {
        if self.width < breakpoints::XS_WIDTH {
            SizeCategory::ExtraSmall
        } else if self.width < breakpoints::SM_WIDTH {
            SizeCategory::Small
        } else if self.width < breakpoints::MD_WIDTH {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    /// Check if the terminal is in a "short" state (less than 24 rows).
    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    pub fn is_too_small(&self) -> bool {
        is_terminal_too_small(self.width, self.height)
    }

    // ========================================================================
    // Page Geometry
    // ========================================================================

    /// Watch-list grid columns: one on narrow terminals, two on medium,
    /// three on wide.
    pub fn grid_columns(&self) -> usize {
        match self.width_category() {
            SizeCategory::ExtraSmall | SizeCategory::Small => 1,
            SizeCategory::Medium => 2,
            SizeCategory::Large => 3,
        }
    }

    /// Width of one carousel slide (the viewport between the arrows).
    pub fn carousel_viewport_width(&self) -> u16 {
        self.width.saturating_sub(CAROUSEL_CHROME_WIDTH)
    }

    /// Hero carousel height: 40% of the terminal, within [5, 14].
    pub fn carousel_height(&self) -> u16 {
        self.percent_height(40).clamp(5, 14)
    }

    /// Footer height; a single link row on short terminals.
    pub fn footer_height(&self) -> u16 {
        if self.is_short() {
            3
        } else {
            6
        }
    }

    /// Maximum display width for a title in a card or table row.
    pub fn max_title_length(&self) -> usize {
        match self.width_category() {
            SizeCategory::ExtraSmall => 20,
            SizeCategory::Small => 30,
            SizeCategory::Medium => 40,
            SizeCategory::Large => 60,
        }
    }
}

impl Default for LayoutContext {
    /// Standard 80x24 terminal.
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

pub fn is_terminal_too_small(width: u16, height: u16) -> bool {
    width < MIN_TERMINAL_WIDTH || height < MIN_TERMINAL_HEIGHT
}

// ============================================================================
// Tests
// ============================================================================

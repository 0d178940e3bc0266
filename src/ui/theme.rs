//! Color theme constants for the Marquee UI
//!
//! Dark storefront palette: near-black panels, white text, a warm accent for
//! focus and a blue for outbound links.

use ratatui::style::Color;

// ============================================================================
// Base Palette
// ============================================================================

/// Border color for unfocused panels
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border and marker color for the focused control
pub const COLOR_FOCUS: Color = Color::Rgb(250, 204, 21); // yellow-400

/// Primary text and brand color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for captions and hints
pub const COLOR_DIM: Color = Color::DarkGray;

/// Outbound link text
pub const COLOR_LINK: Color = Color::Rgb(59, 130, 246); // blue-500

/// Highlighted suggestion background
pub const COLOR_HIGHLIGHT_BG: Color = Color::Rgb(59, 130, 246);

/// Background for dropdowns and overlays
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

/// Hero slide fill
pub const COLOR_SLIDE_BG: Color = Color::Rgb(16, 24, 48);

/// Card panel background
pub const COLOR_CARD_BG: Color = Color::Rgb(31, 41, 55); // gray-800

/// Status bar error text
pub const COLOR_ERROR: Color = Color::Red;

// Integration tests for responsive layout behavior
// Sizes exercised:
// - 39x12 / 40x11 (just under the minimum)
// - 40x12 (minimum)
// - 80x24 (standard terminal)
// - 120x40 (wide terminal)

use marquee::ui::{
    breakpoints, is_terminal_too_small, LayoutContext, SizeCategory, MIN_TERMINAL_HEIGHT,
    MIN_TERMINAL_WIDTH,
};

#[test]
fn test_minimum_size_boundary() {
    assert!(!is_terminal_too_small(MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT));
    assert!(is_terminal_too_small(MIN_TERMINAL_WIDTH - 1, MIN_TERMINAL_HEIGHT));
    assert!(is_terminal_too_small(MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT - 1));
}

#[test]
fn test_standard_terminal() {
    let layout = LayoutContext::new(80, 24);
    assert_eq!(layout.width_category(), SizeCategory::Medium);
    assert!(!layout.is_short());
    assert_eq!(layout.grid_columns(), 2);
    assert_eq!(layout.carousel_viewport_width(), 70);
    assert_eq!(layout.footer_height(), 6);
}

#[test]
fn test_wide_terminal() {
    let layout = LayoutContext::new(120, 40);
    assert_eq!(layout.width_category(), SizeCategory::Large);
    assert_eq!(layout.grid_columns(), 3);
    assert_eq!(layout.carousel_height(), 14);
}

#[test]
fn test_minimum_terminal() {
    let layout = LayoutContext::new(MIN_TERMINAL_WIDTH, MIN_TERMINAL_HEIGHT);
    assert_eq!(layout.width_category(), SizeCategory::ExtraSmall);
    assert!(layout.is_short());
    assert_eq!(layout.grid_columns(), 1);
    assert_eq!(layout.carousel_height(), 5);
    assert_eq!(layout.footer_height(), 3);
}

#[test]
fn test_breakpoints_are_ordered() {
    assert!(breakpoints::XS_WIDTH < breakpoints::SM_WIDTH);
    assert!(breakpoints::SM_WIDTH < breakpoints::MD_WIDTH);
}

//! Hero carousel cursor.
//!
//! The carousel behaves like a horizontal scroll container holding one slide
//! per viewport width. `current_index` and `scroll_offset` move together: a
//! step moves the offset by exactly one viewport width, and crossing either
//! end jumps to the opposite end in a single step.

use std::num::NonZeroUsize;

/// Direction of a carousel step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Cursor and scroll position of the home carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    current_index: usize,
    count: NonZeroUsize,
    /// Width of one slide (the visible viewport), in columns
    viewport_width: u16,
    /// Horizontal scroll of the slide strip, in columns
    scroll_offset: u32,
}

impl CarouselState {
    /// Create a carousel over `count` slides, starting at the first one.
    pub fn new(count: NonZeroUsize, viewport_width: u16) -> Self {
        Self {
            current_index: 0,
            count,
            viewport_width,
            scroll_offset: 0,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }

    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    pub fn viewport_width(&self) -> u16 {
        self.viewport_width
    }

    /// Largest reachable scroll offset: the start of the last slide.
    fn max_offset(&self) -> u32 {
        (self.count.get() as u32 - 1) * u32::from(self.viewport_width)
    }

    /// Step one slide in `direction`, wrapping at either end.
    pub fn advance(&mut self, direction: Direction) {
        let n = self.count.get();
        let width = u32::from(self.viewport_width);

        match direction {
            Direction::Next => {
                if self.current_index == n - 1 {
                    self.current_index = 0;
                    self.scroll_offset = 0;
                } else {
                    self.current_index += 1;
                    self.scroll_offset = (self.scroll_offset + width).min(self.max_offset());
                }
            }
            Direction::Previous => {
                if self.current_index == 0 {
                    self.current_index = n - 1;
                    self.scroll_offset = self.max_offset();
                } else {
                    self.current_index -= 1;
                    self.scroll_offset = self.scroll_offset.saturating_sub(width);
                }
            }
        }

        tracing::debug!(
            index = self.current_index,
            offset = self.scroll_offset,
            ?direction,
            "carousel advanced"
        );
    }

    /// Jump straight to a slide. Out-of-range indices clamp to the last slide.
    pub fn jump_to(&mut self, index: usize) {
        self.current_index = index.min(self.count.get() - 1);
        self.scroll_offset = self.current_index as u32 * u32::from(self.viewport_width);
    }

    /// Track a viewport resize. The index is kept and the offset re-derived.
    pub fn set_viewport_width(&mut self, width: u16) {
        if width == self.viewport_width {
            return;
        }
        self.viewport_width = width;
        self.scroll_offset = self.current_index as u32 * u32::from(width);
    }

    /// Index of the slide whose left edge sits at the scroll offset.
    ///
    /// This is what the renderer shows; it always agrees with
    /// `current_index` unless the viewport has zero width.
    pub fn visible_slide(&self) -> usize {
        if self.viewport_width == 0 {
            return self.current_index;
        }
        ((self.scroll_offset / u32::from(self.viewport_width)) as usize).min(self.count.get() - 1)
    }

    /// Screen-reader style position text.
    pub fn announcement(&self) -> String {
        format!("Slider {}/{} image", self.current_index + 1, self.count.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn carousel(n: usize, width: u16) -> CarouselState {
        CarouselState::new(NonZeroUsize::new(n).unwrap(), width)
    }

    #[test]
    fn test_next_moves_one_viewport() {
        let mut c = carousel(8, 100);
        c.advance(Direction::Next);
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.scroll_offset(), 100);
        c.advance(Direction::Next);
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.scroll_offset(), 200);
    }

    #[test]
    fn test_next_from_last_wraps_to_start() {
        let mut c = carousel(3, 50);
        c.jump_to(2);
        c.advance(Direction::Next);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.scroll_offset(), 0);
    }

    #[test]
    fn test_previous_from_first_wraps_to_end() {
        let mut c = carousel(8, 40);
        c.advance(Direction::Previous);
        assert_eq!(c.current_index(), 7);
        assert_eq!(c.scroll_offset(), 7 * 40);
        assert_eq!(c.visible_slide(), 7);
    }

    #[test]
    fn test_single_slide_stays_put() {
        let mut c = carousel(1, 80);
        c.advance(Direction::Next);
        assert_eq!(c.current_index(), 0);
        c.advance(Direction::Previous);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.scroll_offset(), 0);
    }

    #[test]
    fn test_jump_to_clamps() {
        let mut c = carousel(4, 10);
        c.jump_to(99);
        assert_eq!(c.current_index(), 3);
        assert_eq!(c.scroll_offset(), 30);
    }

    #[test]
    fn test_resize_keeps_index() {
        let mut c = carousel(8, 100);
        c.advance(Direction::Next);
        c.advance(Direction::Next);
        c.set_viewport_width(60);
        assert_eq!(c.current_index(), 2);
        assert_eq!(c.scroll_offset(), 120);
        assert_eq!(c.visible_slide(), 2);
    }

    #[test]
    fn test_announcement_is_one_based() {
        let mut c = carousel(8, 10);
        assert_eq!(c.announcement(), "Slider 1/8 image");
        c.advance(Direction::Previous);
        assert_eq!(c.announcement(), "Slider 8/8 image");
    }

    proptest! {
        #[test]
        fn next_n_times_returns_to_start(n in 2usize..32, start in 0usize..32, width in 1u16..300) {
            let mut c = carousel(n, width);
            c.jump_to(start);
            let before = c.clone();
            for _ in 0..n {
                c.advance(Direction::Next);
            }
            prop_assert_eq!(c, before);
        }

        #[test]
        fn previous_inverts_next(n in 1usize..32, start in 0usize..32, width in 1u16..300) {
            let mut c = carousel(n, width);
            c.jump_to(start);
            let before = c.clone();
            c.advance(Direction::Next);
            c.advance(Direction::Previous);
            prop_assert_eq!(&c, &before);
            c.advance(Direction::Previous);
            c.advance(Direction::Next);
            prop_assert_eq!(&c, &before);
        }

        #[test]
        fn index_and_offset_stay_in_bounds(
            n in 1usize..16,
            width in 0u16..200,
            steps in proptest::collection::vec(any::<bool>(), 0..64),
        ) {
            let mut c = carousel(n, width);
            for forward in steps {
                c.advance(if forward { Direction::Next } else { Direction::Previous });
                prop_assert!(c.current_index() < n);
                prop_assert_eq!(c.scroll_offset(), c.current_index() as u32 * u32::from(width));
            }
        }
    }
}

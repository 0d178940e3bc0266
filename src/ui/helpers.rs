//! Helper functions for UI rendering

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal columns.
pub fn display_width(s: &str) -> u16 {
    u16::try_from(s.width()).unwrap_or(u16::MAX)
}

/// Truncate to at most `max_width` columns, ending with an ellipsis when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// File name of an image path, used as a caption where the image would be.
pub fn image_caption(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Lay labels out left to right on the first row of `area`, `gap` columns
/// apart. Labels that do not fit are returned with zero width.
pub fn inline_rects<'a>(area: Rect, labels: impl IntoIterator<Item = &'a str>, gap: u16) -> Vec<Rect> {
    let right = area.x.saturating_add(area.width);
    let mut x = area.x;
    labels
        .into_iter()
        .map(|label| {
            let width = display_width(label);
            let rect = if x.saturating_add(width) <= right {
                Rect::new(x, area.y, width, 1.min(area.height))
            } else {
                Rect::new(x.min(right), area.y, 0, 0)
            };
            x = x.saturating_add(width).saturating_add(gap);
            rect
        })
        .collect()
}

/// A `width` x `height` rectangle centered in `area`, clipped to it.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// First index of a window of `visible` items that keeps `selected` in view.
pub fn scroll_window(selected: usize, visible: usize) -> usize {
    selected.saturating_sub(visible.saturating_sub(1))
}

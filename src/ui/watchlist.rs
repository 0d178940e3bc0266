//! Watch-list page: a responsive grid of trailer cards.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::helpers::{image_caption, inline_rects, scroll_window, truncate_to_width};
use super::interaction::ClickAction;
use super::layout::LayoutContext;
use super::theme::{COLOR_BORDER, COLOR_CARD_BG, COLOR_DIM, COLOR_FOCUS, COLOR_HEADER, COLOR_LINK};
use crate::app::App;
use crate::catalog::{WatchItem, WATCH_LIST};

const CARD_HEIGHT: u16 = 5;
const PLAY_LABEL: &str = "▶ Play";
const DETAILS_LABEL: &str = "Details";

pub fn render_watchlist(frame: &mut Frame, app: &mut App, area: Rect, ctx: &LayoutContext) {
    let columns = ctx.grid_columns().max(1);
    let [title_area, grid_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
    frame.render_widget(
        Paragraph::new(Line::styled(
            "  My Watchlist",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        title_area,
    );

    let visible_rows = (grid_area.height / CARD_HEIGHT).max(1) as usize;
    let selected = app.watchlist.selected();
    let first_row = scroll_window(selected.unwrap_or(0) / columns, visible_rows);
    let card_width = grid_area.width / columns as u16;

    for (index, item) in WATCH_LIST.iter().enumerate().skip(first_row * columns) {
        let row = (index / columns - first_row) as u16;
        if row as usize >= visible_rows {
            break;
        }
        let col = (index % columns) as u16;
        let rect = Rect::new(
            grid_area.x + col * card_width,
            grid_area.y + row * CARD_HEIGHT,
            card_width,
            CARD_HEIGHT.min(grid_area.height.saturating_sub(row * CARD_HEIGHT)),
        );
        render_card(frame, app, index, item, rect, selected == Some(index));
    }
}

fn render_card(
    frame: &mut Frame,
    app: &mut App,
    index: usize,
    item: &'static WatchItem,
    area: Rect,
    selected: bool,
) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let block = Block::bordered()
        .title(format!(" {} ", truncate_to_width(item.title, inner_width.saturating_sub(2))))
        .border_style(Style::default().fg(if selected { COLOR_FOCUS } else { COLOR_BORDER }))
        .style(Style::default().bg(COLOR_CARD_BG));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    frame.render_widget(
        Paragraph::new(Line::styled(
            truncate_to_width(&format!("[{}]", image_caption(item.image)), inner_width),
            Style::default().fg(COLOR_DIM),
        )),
        Rect { height: 1, ..inner },
    );

    // Buttons sit on the last inner row.
    let button_row = Rect {
        y: inner.y + inner.height - 1,
        height: 1,
        ..inner
    };
    let rects = inline_rects(button_row, [PLAY_LABEL, DETAILS_LABEL], 3);
    let mut spans = Vec::new();
    for (i, (label, rect)) in [PLAY_LABEL, DETAILS_LABEL].iter().zip(&rects).enumerate() {
        if rect.width == 0 {
            break;
        }
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        let mut style = Style::default().fg(COLOR_LINK);
        if app.hit_areas.is_pointer_over(*rect) {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        spans.push(Span::styled(*label, style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), button_row);

    app.hit_areas.register(rects[0], ClickAction::OpenLink(item.trailer));
    app.hit_areas.register(rects[1], ClickAction::ShowWatchItem(index));
}

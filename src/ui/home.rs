//! Home page: hero carousel, studio strip and the featured titles table.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::carousel::render_carousel;
use super::helpers::{scroll_window, truncate_to_width};
use super::interaction::ClickAction;
use super::layout::LayoutContext;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_FOCUS, COLOR_HEADER, COLOR_HIGHLIGHT_BG};
use crate::app::{App, HomeFocus};
use crate::catalog::{FEATURED, PRODUCTION_HOUSES};

pub fn render_home(frame: &mut Frame, app: &mut App, area: Rect, ctx: &LayoutContext) {
    let [carousel_area, studio_area, featured_area] = Layout::vertical([
        Constraint::Length(ctx.carousel_height()),
        Constraint::Length(1),
        Constraint::Min(3),
    ])
    .areas(area);

    render_carousel(frame, app, carousel_area);
    render_studios(frame, studio_area);
    render_featured(frame, app, featured_area, ctx);
}

fn render_studios(frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::styled("  Studios  ", Style::default().fg(COLOR_DIM))];
    for (i, house) in PRODUCTION_HOUSES.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(COLOR_DIM)));
        }
        spans.push(Span::styled(
            house.name,
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_featured(frame: &mut Frame, app: &mut App, area: Rect, ctx: &LayoutContext) {
    let focused = app.home_focus == HomeFocus::Featured;
    let block = Block::bordered()
        .title(" Featured ")
        .border_style(Style::default().fg(if focused { COLOR_FOCUS } else { COLOR_BORDER }));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let [header_row, rows_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
    frame.render_widget(
        Paragraph::new(Line::styled(
            format!(" {:<4}{}", "#", "Title"),
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::BOLD),
        )),
        header_row,
    );

    let visible = rows_area.height as usize;
    let selected = app.featured.selected();
    let first = scroll_window(selected.unwrap_or(0), visible);
    let title_width = ctx.max_title_length();

    for (row, (index, record)) in FEATURED
        .iter()
        .enumerate()
        .skip(first)
        .take(visible)
        .enumerate()
    {
        let rect = Rect::new(rows_area.x, rows_area.y + row as u16, rows_area.width, 1);
        let is_selected = focused && selected == Some(index);
        let style = if is_selected {
            Style::default().fg(COLOR_HEADER).bg(COLOR_HIGHLIGHT_BG)
        } else if app.hit_areas.is_pointer_over(rect) {
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_HEADER)
        };
        let text = format!(
            " {:<4}{}",
            record.id,
            truncate_to_width(record.name, title_width)
        );
        frame.render_widget(Paragraph::new(Line::styled(text, style)).style(style), rect);
        app.hit_areas.register(rect, ClickAction::OpenFeatured(index));
    }
}

//! Footer: columns of external links.
//!
//! On short terminals the columns collapse into a single row of links.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::helpers::{display_width, inline_rects, truncate_to_width};
use super::interaction::ClickAction;
use super::layout::LayoutContext;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_FOCUS, COLOR_HEADER, COLOR_LINK};
use crate::app::{App, HomeFocus, Screen};
use crate::catalog::{self, FooterLink, FOOTER};

const LINK_GAP: u16 = 3;

pub fn render_footer(frame: &mut Frame, app: &mut App, area: Rect, ctx: &LayoutContext) {
    let focused = app.screen == Screen::Home && app.home_focus == HomeFocus::Footer;
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(if focused { COLOR_FOCUS } else { COLOR_BORDER }));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let selected = if focused { app.footer.selected() } else { None };
    if ctx.is_short() {
        render_compact(frame, app, inner, selected);
    } else {
        render_columns(frame, app, inner, selected);
    }
}

fn link_style(app: &App, rect: Rect, is_selected: bool) -> Style {
    let style = Style::default().fg(COLOR_LINK);
    if is_selected {
        style.fg(COLOR_FOCUS).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else if app.hit_areas.is_pointer_over(rect) {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

fn render_compact(frame: &mut Frame, app: &mut App, area: Rect, selected: Option<usize>) {
    let links: Vec<&'static FooterLink> = catalog::footer_links().collect();
    let row = Rect { height: 1, ..area };

    // Scroll the row so the selected link stays visible.
    let mut start = 0;
    if let Some(sel) = selected {
        while start < sel && row_width(&links[start..=sel]) > row.width {
            start += 1;
        }
    }
    let shown = &links[start..];
    let rects = inline_rects(row, shown.iter().map(|l| l.label), LINK_GAP);

    let mut spans = Vec::new();
    for (i, (link, rect)) in shown.iter().zip(&rects).enumerate() {
        if rect.width == 0 {
            break;
        }
        if i > 0 {
            spans.push(Span::raw(" ".repeat(LINK_GAP as usize)));
        }
        let is_selected = selected == Some(start + i);
        spans.push(Span::styled(link.label, link_style(app, *rect, is_selected)));
        app.hit_areas.register(*rect, ClickAction::OpenLink(link.url));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), row);
}

fn row_width(links: &[&FooterLink]) -> u16 {
    let labels: u16 = links.iter().map(|l| display_width(l.label)).sum();
    labels + LINK_GAP * (links.len().saturating_sub(1) as u16)
}

fn render_columns(frame: &mut Frame, app: &mut App, area: Rect, selected: Option<usize>) {
    let columns = Layout::horizontal(FOOTER.iter().map(|_| Constraint::Ratio(1, FOOTER.len() as u32)))
        .split(area);

    let mut flat_index = 0;
    for (section, column) in FOOTER.iter().zip(columns.iter()) {
        let column = *column;
        let width = column.width.saturating_sub(1) as usize;
        frame.render_widget(
            Paragraph::new(Line::styled(
                truncate_to_width(section.heading, width),
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            )),
            Rect { height: 1, ..column },
        );

        for (row, link) in section.links.iter().enumerate() {
            let y = column.y + 1 + row as u16;
            if y >= column.y + column.height {
                break;
            }
            let label = truncate_to_width(link.label, width);
            let rect = Rect::new(column.x, y, display_width(&label), 1);
            let style = link_style(app, rect, selected == Some(flat_index + row));
            frame.render_widget(Paragraph::new(Span::styled(label, style)), rect);
            app.hit_areas.register(rect, ClickAction::OpenLink(link.url));
        }
        flat_index += section.links.len();
    }

    // Copyright row under the columns when there is room.
    let last = area.y + area.height.saturating_sub(1);
    if area.height > 3 {
        frame.render_widget(
            Paragraph::new(Line::styled(
                "© Marquee. All rights reserved.",
                Style::default().fg(COLOR_DIM),
            )),
            Rect::new(area.x, last, area.width, 1),
        );
    }
}

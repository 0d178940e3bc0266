//! Header: brand, page tabs and greeting.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::helpers::{display_width, inline_rects};
use super::interaction::ClickAction;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_FOCUS, COLOR_HEADER};
use crate::app::{App, Screen};

/// Content row plus the bottom rule.
pub const HEADER_HEIGHT: u16 = 2;

const BRAND: &str = " MARQUEE ";
const TAB_GAP: u16 = 2;

pub fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let greeting = app.session.greeting();
    let greeting_width = display_width(&greeting) + 1;

    // Tabs start after the brand; the greeting is right-aligned.
    let brand_width = display_width(BRAND) + 1;
    let tab_area = Rect {
        x: inner.x + brand_width.min(inner.width),
        width: inner
            .width
            .saturating_sub(brand_width)
            .saturating_sub(greeting_width),
        ..inner
    };
    let labels: Vec<&str> = Screen::TABS.iter().map(|s| s.title()).collect();
    let rects = inline_rects(tab_area, labels.iter().copied(), TAB_GAP);

    let mut spans = vec![
        Span::styled(
            BRAND,
            Style::default().fg(COLOR_FOCUS).add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
    ];
    for (i, (screen, rect)) in Screen::TABS.iter().zip(&rects).enumerate() {
        if rect.width == 0 {
            break;
        }
        if i > 0 {
            spans.push(Span::raw(" ".repeat(TAB_GAP as usize)));
        }
        let active = *screen == app.screen;
        let mut style = Style::default().fg(if active { COLOR_HEADER } else { COLOR_DIM });
        if active {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        } else if app.hit_areas.is_pointer_over(*rect) {
            style = style.fg(COLOR_HEADER);
        }
        spans.push(Span::styled(screen.title(), style));
        app.hit_areas
            .register(*rect, ClickAction::NavigateTo(*screen));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);

    if inner.width > greeting_width + brand_width {
        frame.render_widget(
            Paragraph::new(Line::styled(
                format!("{greeting} "),
                Style::default().fg(COLOR_HEADER),
            ))
            .alignment(Alignment::Right),
            inner,
        );
    }
}

//! Hero carousel: previous/next arrows around a one-slide viewport.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};

use super::helpers::{centered_rect, image_caption};
use super::interaction::ClickAction;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_FOCUS, COLOR_HEADER, COLOR_SLIDE_BG};
use crate::app::{App, HomeFocus, Screen};
use crate::catalog::SLIDES;

const GUTTER: u16 = 2;
const ARROW_WIDTH: u16 = 3;

pub fn render_carousel(frame: &mut Frame, app: &mut App, area: Rect) {
    let [_, prev_area, viewport, next_area, _] = Layout::horizontal([
        Constraint::Length(GUTTER),
        Constraint::Length(ARROW_WIDTH),
        Constraint::Min(0),
        Constraint::Length(ARROW_WIDTH),
        Constraint::Length(GUTTER),
    ])
    .areas(area);

    render_arrow(frame, app, prev_area, "‹", HomeFocus::PreviousControl);
    render_arrow(frame, app, next_area, "›", HomeFocus::NextControl);
    render_slide(frame, app, viewport);

    app.hit_areas.register(prev_area, ClickAction::CarouselPrevious);
    app.hit_areas.register(next_area, ClickAction::CarouselNext);
}

fn render_arrow(frame: &mut Frame, app: &App, area: Rect, glyph: &str, control: HomeFocus) {
    let focused = app.screen == Screen::Home && app.home_focus == control;
    let hovered = app.hit_areas.is_pointer_over(area);
    let mut style = Style::default().fg(if focused { COLOR_FOCUS } else { COLOR_DIM });
    if focused || hovered {
        style = style.add_modifier(Modifier::BOLD);
    }
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(style);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let row = centered_rect(inner.width, 1, inner);
    frame.render_widget(
        Paragraph::new(Span::styled(glyph, style)).alignment(Alignment::Center),
        row,
    );
}

/// Draw the slide at the carousel's scroll offset.
fn render_slide(frame: &mut Frame, app: &App, area: Rect) {
    let carousel = &app.carousel;
    let Some(slide) = SLIDES.get(carousel.visible_slide()) else {
        return;
    };

    let block = Block::bordered()
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_SLIDE_BG));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let dots: String = (0..carousel.count())
        .map(|i| if i == carousel.current_index() { '●' } else { '○' })
        .flat_map(|c| [c, ' '])
        .collect();

    let lines = vec![
        Line::styled(
            image_caption(slide.image),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Line::styled(carousel.announcement(), Style::default().fg(COLOR_DIM)),
        Line::styled(dots.trim_end().to_string(), Style::default().fg(COLOR_FOCUS)),
    ];
    let height = (lines.len() as u16).min(inner.height);
    let text_area = centered_rect(inner.width, height, inner);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        text_area,
    );
}

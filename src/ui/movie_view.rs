//! Movie detail view.
//!
//! Shows the navigation payload; without one a placeholder is drawn instead.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Wrap},
    Frame,
};

use super::helpers::{centered_rect, display_width, inline_rects, truncate_to_width};
use super::interaction::ClickAction;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_FOCUS, COLOR_HEADER, COLOR_LINK};
use crate::app::App;
use crate::catalog::{self, MovieRecord};

pub const PLACEHOLDER: &str = "Nothing selected";

const BACK_LABEL: &str = "← Back";
const PLAY_LABEL: &str = "▶ Play";
const BUTTON_GAP: u16 = 3;

pub fn render_movie_view(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.payload {
        Some(record) => render_details(frame, app, record, area),
        None => render_placeholder(frame, app, area),
    }
}

fn render_placeholder(frame: &mut Frame, app: &mut App, area: Rect) {
    let rect = centered_rect(area.width, 3, area);
    let lines = vec![
        Line::styled(
            PLACEHOLDER,
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            "Pick a title on Home or in your Watchlist.",
            Style::default().fg(COLOR_DIM),
        ),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rect);

    let back = centered_rect(display_width(BACK_LABEL), 1, Rect {
        y: rect.y + 2,
        height: 1,
        ..rect
    });
    frame.render_widget(Paragraph::new(Span::styled(BACK_LABEL, button_style(app, back))), back);
    app.hit_areas.register(back, ClickAction::Back);
}

fn render_details(frame: &mut Frame, app: &mut App, record: MovieRecord, area: Rect) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .title(Line::styled(
            format!(" {} ", record.name),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 3 {
        return;
    }
    let row = |offset: u16| Rect {
        y: inner.y + offset,
        height: 1,
        ..inner
    };

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Video  ", Style::default().fg(COLOR_DIM)),
            Span::styled(
                truncate_to_width(record.video, inner.width.saturating_sub(7) as usize),
                Style::default().fg(COLOR_LINK),
            ),
        ])),
        row(0),
    );

    let toggle_label = if app.info_open {
        "▾ Movie Info"
    } else {
        "▸ Movie Info"
    };
    let labels = [PLAY_LABEL, toggle_label, BACK_LABEL];
    let actions = [
        ClickAction::OpenLink(record.video),
        ClickAction::ToggleMovieInfo,
        ClickAction::Back,
    ];
    let buttons = row(2);
    let rects = inline_rects(buttons, labels, BUTTON_GAP);
    let mut spans = Vec::new();
    for (i, (label, rect)) in labels.iter().zip(&rects).enumerate() {
        if rect.width == 0 {
            break;
        }
        if i > 0 {
            spans.push(Span::raw(" ".repeat(BUTTON_GAP as usize)));
        }
        let mut style = button_style(app, *rect);
        if i == 1 && app.info_open {
            style = style.fg(COLOR_FOCUS);
        }
        spans.push(Span::styled(*label, style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), buttons);
    for (rect, action) in rects.into_iter().zip(actions) {
        app.hit_areas.register(rect, action);
    }

    if app.info_open && inner.height > 4 {
        let text = catalog::description_for(record.id).unwrap_or("No description available.");
        let info = Rect {
            y: inner.y + 4,
            height: inner.height - 4,
            ..inner
        };
        frame.render_widget(
            Paragraph::new(Line::styled(text, Style::default().fg(COLOR_HEADER)))
                .wrap(Wrap { trim: true }),
            info,
        );
    }
}

fn button_style(app: &App, rect: Rect) -> Style {
    let style = Style::default().fg(COLOR_LINK).add_modifier(Modifier::BOLD);
    if app.hit_areas.is_pointer_over(rect) {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

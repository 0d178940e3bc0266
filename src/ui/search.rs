//! Search page: genre combobox and the revealed movie cards.

use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Clear, Paragraph, Wrap},
    Frame,
};

use super::helpers::{display_width, image_caption, truncate_to_width};
use super::interaction::ClickAction;
use super::theme::{
    COLOR_BORDER, COLOR_CARD_BG, COLOR_DIALOG_BG, COLOR_DIM, COLOR_FOCUS, COLOR_HEADER,
    COLOR_HIGHLIGHT_BG, COLOR_LINK,
};
use crate::app::{App, SearchFocus};
use crate::catalog::{self, MovieCard};

const INPUT_HEIGHT: u16 = 3;
const CARD_HEIGHT: u16 = 7;
const MAX_CARD_WIDTH: u16 = 36;

pub fn render_search(frame: &mut Frame, app: &mut App, area: Rect) {
    let [input_area, results_area] =
        Layout::vertical([Constraint::Length(INPUT_HEIGHT), Constraint::Min(0)]).areas(area);

    // Cards first so the dropdown (drawn last) overlays them.
    render_input(frame, app, input_area);
    render_results(frame, app, results_area);
    render_dropdown(frame, app, input_area, results_area);
}

fn render_input(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.search_focus == SearchFocus::Input;
    let mut block = Block::bordered()
        .border_type(BorderType::Rounded)
        .title(" Search genres ")
        .border_style(Style::default().fg(if focused { COLOR_FOCUS } else { COLOR_BORDER }));
    if app.search.is_expanded() {
        let count = app.search.suggestions().len();
        let noun = if count == 1 { "suggestion" } else { "suggestions" };
        block = block.title_bottom(format!(" {count} {noun} "));
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let query = app.search.query();
    let line = if query.is_empty() && !focused {
        Line::styled("Action, Comedy, Thriller…", Style::default().fg(COLOR_DIM))
    } else {
        Line::styled(
            truncate_to_width(query, inner.width.saturating_sub(1) as usize),
            Style::default().fg(COLOR_HEADER),
        )
    };
    frame.render_widget(Paragraph::new(line), inner);

    if focused && inner.width > 0 && inner.height > 0 {
        let cursor = display_width(query).min(inner.width - 1);
        frame.set_cursor_position(Position::new(inner.x + cursor, inner.y));
    }
    app.hit_areas.register(area, ClickAction::FocusSearchInput);
}

fn render_dropdown(frame: &mut Frame, app: &mut App, input: Rect, below: Rect) {
    if !app.search.is_expanded() || below.height < 3 {
        return;
    }
    let suggestions = app.search.suggestions();
    let height = (suggestions.len() as u16 + 2).min(below.height);
    let width = input.width.min(MAX_CARD_WIDTH).max(12).min(below.width);
    let area = Rect::new(input.x, below.y, width, height);

    frame.render_widget(Clear, area);
    let block = Block::bordered()
        .border_style(Style::default().fg(COLOR_FOCUS))
        .style(Style::default().bg(COLOR_DIALOG_BG));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let highlighted = app.search.highlighted();
    let rows: Vec<(usize, &'static str)> = suggestions.iter().copied().enumerate().collect();
    for (i, genre) in rows.into_iter().take(inner.height as usize) {
        let rect = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
        let style = if highlighted == Some(i) {
            Style::default()
                .fg(COLOR_HEADER)
                .bg(COLOR_HIGHLIGHT_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_HEADER).bg(COLOR_DIALOG_BG)
        };
        frame.render_widget(
            Paragraph::new(Line::raw(format!(" {genre}"))).style(style),
            rect,
        );
        app.hit_areas.register(rect, ClickAction::Suggestion(i));
    }
}

fn render_results(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(genre) = app.search.selected_genre() else {
        let hint = Paragraph::new(vec![
            Line::raw(""),
            Line::styled(
                "  Start typing a genre, then pick a suggestion to see its titles.",
                Style::default().fg(COLOR_DIM),
            ),
        ])
        .wrap(Wrap { trim: false });
        frame.render_widget(hint, area);
        return;
    };

    let [title_area, cards_area] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);
    frame.render_widget(
        Paragraph::new(Line::styled(
            format!("  {genre}"),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        title_area,
    );

    let cards = catalog::cards_for(genre).unwrap_or(&[]);
    if cards.is_empty() {
        return;
    }
    let card_width = (cards_area.width / cards.len() as u16).min(MAX_CARD_WIDTH);
    let selected = match app.search_focus {
        SearchFocus::Results => app.results.selected(),
        SearchFocus::Input => None,
    };

    for (i, card) in cards.iter().enumerate() {
        let rect = Rect::new(
            cards_area.x + i as u16 * card_width,
            cards_area.y,
            card_width,
            CARD_HEIGHT.min(cards_area.height),
        );
        render_card(frame, app, card, rect, selected == Some(i));
        app.hit_areas.register(rect, ClickAction::OpenLink(card.link));
    }
}

fn render_card(frame: &mut Frame, app: &App, card: &MovieCard, area: Rect, selected: bool) {
    let border = if selected {
        COLOR_FOCUS
    } else if app.hit_areas.is_pointer_over(area) {
        COLOR_HEADER
    } else {
        COLOR_BORDER
    };
    let inner_width = area.width.saturating_sub(2) as usize;
    let block = Block::bordered()
        .title(format!(" {} ", truncate_to_width(card.title, inner_width.saturating_sub(2))))
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(COLOR_CARD_BG));

    let lines = vec![
        Line::styled(
            format!("[{}]", image_caption(card.image)),
            Style::default().fg(COLOR_DIM),
        ),
        Line::styled(card.description, Style::default().fg(COLOR_HEADER)),
        Line::raw(""),
        Line::styled(
            "More Info ↗",
            Style::default().fg(COLOR_LINK).add_modifier(Modifier::UNDERLINED),
        ),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

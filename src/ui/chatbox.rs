//! The floating chat box.
//!
//! Drawn fresh from [`App`] every frame. Clickable parts (chips, refresh,
//! send) record their rectangles in `app.hits` as they are drawn.

use crate::app::{App, AppState, HitTarget};
use crate::chat_message::MessageView;
use crate::constants::{
    greeting, CHATBOX_HEIGHT, CHATBOX_WIDTH, HEADER_TITLE, INPUT_HINT, REFRESH_LABEL, SEND_LABEL,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Area above the launcher, right-aligned with it.
pub fn chatbox_area(page: Rect, launcher: Rect) -> Rect {
    let width = CHATBOX_WIDTH.min(page.width.saturating_sub(2));
    let height = CHATBOX_HEIGHT.min(launcher.y.saturating_sub(page.y));
    Rect {
        x: page.right().saturating_sub(width + 1).max(page.x),
        y: launcher.y.saturating_sub(height),
        width,
        height,
    }
}

pub fn draw_chatbox(f: &mut Frame<'_>, area: Rect, app: &mut App) {
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", HEADER_TITLE))
        .border_style(Style::default().fg(Color::LightMagenta))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let suggestions = app.widget.suggestions();
    let chip_rows = if suggestions.is_panel_visible() || suggestions.is_exhausted() {
        1
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1),
                Constraint::Length(chip_rows),
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(inner);

    draw_greeting(f, chunks[0], &app.bot_name);
    draw_chips(f, chunks[1], app);
    draw_messages(f, chunks[2], app);
    draw_separator(f, chunks[3]);
    draw_input(f, chunks[4], app);
}

fn draw_greeting(f: &mut Frame<'_>, area: Rect, bot_name: &str) {
    let line = Line::from(vec![
        Span::styled("◉ ", Style::default().fg(Color::LightMagenta)),
        Span::styled(
            greeting(bot_name),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_chips(f: &mut Frame<'_>, area: Rect, app: &mut App) {
    if area.height == 0 {
        return;
    }

    let chip_style = Style::default().fg(Color::LightCyan);

    if app.widget.suggestions().is_exhausted() {
        let label = format!("[ ↻ {} ]", REFRESH_LABEL);
        let width = (label.width() as u16).min(area.width);
        app.hits.record(Rect { width, ..area }, HitTarget::Refresh);
        f.render_widget(
            Paragraph::new(Span::styled(label, chip_style.add_modifier(Modifier::BOLD))),
            area,
        );
        return;
    }

    let highlighted = app.widget.suggestions().highlighted().map(str::to_string);
    let chips: Vec<String> = app
        .widget
        .suggestions()
        .visible()
        .into_iter()
        .map(str::to_string)
        .collect();

    let mut spans = Vec::new();
    let mut x = area.x;
    for question in chips {
        let label = format!("[ {} ]", question);
        let width = label.width() as u16;
        if x + width > area.right() {
            break;
        }

        let style = if highlighted.as_deref() == Some(question.as_str()) {
            chip_style.add_modifier(Modifier::REVERSED)
        } else {
            chip_style
        };

        app.hits.record(
            Rect {
                x,
                y: area.y,
                width,
                height: 1,
            },
            HitTarget::Chip(question),
        );
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
        x += width + 1;
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_messages(f: &mut Frame<'_>, area: Rect, app: &mut App) {
    let placeholder_idx = app
        .widget
        .is_typing()
        .then(|| app.widget.messages().len());
    let spinner = app.typing.frame();

    let mut lines = Vec::new();
    for (idx, message) in app.widget.transcript().enumerate() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        let view = MessageView::new(message, &app.bot_name);
        let view = if Some(idx) == placeholder_idx {
            view.typing(spinner)
        } else {
            view
        };
        lines.extend(view.render(area.width));
    }

    let total_lines = u16::try_from(lines.len()).unwrap_or(u16::MAX);
    let max_scroll = total_lines.saturating_sub(area.height);
    app.scroll = app.scroll.min(max_scroll);
    let offset = max_scroll - app.scroll;

    f.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
}

fn draw_separator(f: &mut Frame<'_>, area: Rect) {
    let separator = "─".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            separator,
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
}

fn draw_input(f: &mut Frame<'_>, area: Rect, app: &mut App) {
    let send_label = format!(" {} ", SEND_LABEL);
    let send_width = (send_label.width() as u16).min(area.width);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(send_width)].as_ref())
        .split(area);
    let input_area = chunks[0];
    let send_area = chunks[1];

    let visible_width = input_area.width.saturating_sub(2);
    let tail = visible_tail(app.widget.input(), usize::from(visible_width));
    let tail_width = u16::try_from(tail.width()).unwrap_or(u16::MAX);

    let body = if tail.is_empty() {
        Span::styled(INPUT_HINT, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(tail.to_string(), Style::default().fg(Color::White))
    };
    let line = Line::from(vec![
        Span::styled("→ ", Style::default().fg(Color::DarkGray)),
        body,
    ]);
    f.render_widget(Paragraph::new(line), input_area);

    f.render_widget(
        Paragraph::new(Span::styled(
            send_label,
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )),
        send_area,
    );
    app.hits.record(send_area, HitTarget::Send);

    if app.state == AppState::Running {
        let cursor_x = input_area.x.saturating_add(2).saturating_add(tail_width);
        f.set_cursor_position((cursor_x.min(input_area.right()), input_area.y));
    }
}

/// Longest suffix of `input` that fits in `max_width` columns.
fn visible_tail(input: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = input.len();
    for (idx, ch) in input.char_indices().rev() {
        width += ch.width().unwrap_or(0);
        if width > max_width {
            break;
        }
        start = idx;
    }
    &input[start..]
}

use crate::constants::greeting;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const HEADER_HEIGHT: u16 = 7;

/// Draws the page behind the chat box.
pub fn draw_header(f: &mut Frame<'_>, area: Rect, bot_name: &str, endpoint: &str) {
    let logo = r#"
   ___ _         _   _
  / __| |_  __ _| |_| |__  _____ __
 | (__| ' \/ _` |  _| '_ \/ _ \ \ /
  \___|_||_\__,_|\__|_.__/\___/_\_\
"#;

    let block = Block::default()
        .style(Style::default().fg(Color::LightCyan).bg(Color::Black))
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(area);

    let logo_paragraph = Paragraph::new(logo)
        .style(
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Left);

    f.render_widget(logo_paragraph, chunks[0]);

    let about = vec![
        Line::from(""),
        Line::from(Span::styled(
            greeting(bot_name),
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("endpoint: {}", endpoint),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    f.render_widget(
        Paragraph::new(about).alignment(Alignment::Center),
        chunks[1],
    );
}

use crate::constants::{LAUNCHER_HEIGHT, LAUNCHER_WIDTH};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Bottom-right corner of `page`, one column in from the edge.
pub fn launcher_area(page: Rect) -> Rect {
    let width = LAUNCHER_WIDTH.min(page.width);
    let height = LAUNCHER_HEIGHT.min(page.height);
    Rect {
        x: page.right().saturating_sub(width + 1).max(page.x),
        y: page.bottom().saturating_sub(height),
        width,
        height,
    }
}

pub fn draw_launcher(f: &mut Frame<'_>, area: Rect, open: bool) {
    let (icon, color) = if open {
        ("✕", Color::LightRed)
    } else {
        ("◉", Color::LightMagenta)
    };

    let button = Paragraph::new(icon)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );

    f.render_widget(button, area);
}

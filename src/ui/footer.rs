use crate::app::{App, AppState};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Draws the footer with dynamic instructions
pub fn draw_footer(f: &mut Frame<'_>, area: Rect, app: &App) {
    let footer = Paragraph::new(instructions(app))
        .style(Style::default().fg(Color::LightCyan))
        .alignment(Alignment::Center);

    f.render_widget(footer, area);
}

fn instructions(app: &App) -> &'static str {
    let suggestions = app.widget.suggestions();
    match app.state {
        AppState::QuitConfirm => "Press 'y' to confirm quit or 'n' to cancel.",
        _ if !app.widget.is_open() => {
            "Click the chat button or press Ctrl+T to chat. 'q' or Esc to quit."
        }
        _ if suggestions.is_exhausted() => {
            "Enter to send, Ctrl+R to refresh options, Esc to close, Ctrl+C to quit."
        }
        _ if suggestions.is_panel_visible() => {
            "Enter to send, Tab to pick a suggestion, PgUp/PgDn to scroll, Esc to close."
        }
        _ => "Enter to send and show options, PgUp/PgDn to scroll, Esc to close.",
    }
}

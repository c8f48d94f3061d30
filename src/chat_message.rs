use crate::markup::to_plain_text;
use crate::models::{Message, Sender};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

/// Renders one transcript entry as a bubble of lines.
#[derive(Debug)]
pub struct MessageView<'a> {
    message: &'a Message,
    bot_name: &'a str,
    spinner: Option<&'a str>,
}

impl<'a> MessageView<'a> {
    pub fn new(message: &'a Message, bot_name: &'a str) -> Self {
        Self {
            message,
            bot_name,
            spinner: None,
        }
    }

    /// Marks the entry as the typing placeholder, drawn dimmed with a spinner frame.
    pub fn typing(mut self, spinner: &'a str) -> Self {
        self.spinner = Some(spinner);
        self
    }

    fn from_user(&self) -> bool {
        self.message.sender == Sender::User
    }

    pub fn render(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let base_style = self.get_base_style();

        self.render_header(&mut lines, base_style);
        self.render_content(&mut lines, width, base_style);
        self.render_footer(&mut lines, base_style);

        lines
    }

    fn get_base_style(&self) -> Style {
        let style = Style::default().fg(if self.from_user() {
            Color::Rgb(255, 223, 128)
        } else {
            Color::Rgb(144, 238, 144)
        });

        if self.spinner.is_some() {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    }

    fn indent(&self) -> &'static str {
        if self.from_user() {
            "  "
        } else {
            ""
        }
    }

    fn render_header(&self, lines: &mut Vec<Line<'static>>, style: Style) {
        let timestamp = self.message.timestamp.format("%H:%M").to_string();
        let author = if self.from_user() {
            "You".to_string()
        } else {
            self.bot_name.to_string()
        };

        lines.push(Line::from(vec![
            Span::styled(self.indent().to_string(), style),
            Span::styled("┌─".to_string(), style),
            Span::styled(author, style.add_modifier(Modifier::BOLD)),
            Span::styled(" ", style),
            Span::styled(timestamp, style.add_modifier(Modifier::DIM)),
        ]));
    }

    fn render_content(&self, lines: &mut Vec<Line<'static>>, width: u16, style: Style) {
        if let Some(frame) = self.spinner {
            lines.push(Line::from(vec![
                Span::styled(self.indent().to_string(), style),
                Span::styled("│ ".to_string(), style),
                Span::styled(format!("{} ", frame), Style::default().fg(Color::Gray)),
                Span::styled(self.message.text.clone(), style.add_modifier(Modifier::ITALIC)),
            ]));
            return;
        }

        let text = match self.message.sender {
            Sender::Bot => to_plain_text(&self.message.text),
            Sender::User => self.message.text.clone(),
        };

        let gutter = self.indent().len() + 2;
        let wrap_width = (width as usize).saturating_sub(gutter).max(1);

        for wrapped_line in wrap(&text, wrap_width) {
            lines.push(Line::from(vec![
                Span::styled(self.indent().to_string(), style),
                Span::styled("│ ".to_string(), style),
                Span::styled(wrapped_line.to_string(), style),
            ]));
        }
    }

    fn render_footer(&self, lines: &mut Vec<Line<'static>>, style: Style) {
        lines.push(Line::from(vec![
            Span::styled(self.indent().to_string(), style),
            Span::styled("╰─".to_string(), style),
        ]));
    }
}

//! Chat widget state.
//!
//! Everything the chat box shows is derived from [`ChatWidget`]: whether it
//! is open, the committed transcript, the "Typing..." placeholder, the input
//! buffer and the suggestion chips. Network calls live elsewhere; the widget
//! hands out a [`Submission`] and later receives the outcome through
//! [`ChatWidget::complete_reply`].

use crate::constants::TYPING_PLACEHOLDER;
use crate::errors::ChatboxResult;
use crate::models::{Message, Sender};
use crate::suggestions::Suggestions;
use log::{debug, error};

/// Text accepted by [`ChatWidget::submit_message`] that still needs to be
/// posted to the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub text: String,
}

#[derive(Debug)]
pub struct ChatWidget {
    open: bool,
    messages: Vec<Message>,
    placeholder: Option<Message>,
    pending: usize,
    input: String,
    suggestions: Suggestions,
}

impl ChatWidget {
    pub fn new(suggestions: Suggestions) -> Self {
        Self {
            open: false,
            messages: Vec::new(),
            placeholder: None,
            pending: 0,
            input: String::new(),
            suggestions,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
        debug!("chat box {}", if self.open { "opened" } else { "closed" });
    }

    /// Committed messages. Append-only for the lifetime of the widget.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Everything that should be drawn, placeholder last.
    pub fn transcript(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().chain(self.placeholder.iter())
    }

    pub fn is_typing(&self) -> bool {
        self.placeholder.is_some()
    }

    pub fn pending_requests(&self) -> usize {
        self.pending
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn suggestions(&self) -> &Suggestions {
        &self.suggestions
    }

    pub fn suggestions_mut(&mut self) -> &mut Suggestions {
        &mut self.suggestions
    }

    /// Appends the user's text and shows the placeholder. Blank text is
    /// ignored. The input buffer is left alone until the reply resolves.
    pub fn submit_message(&mut self, text: &str) -> Option<Submission> {
        if text.trim().is_empty() {
            return None;
        }

        self.messages.push(Message::user(text));
        if self.placeholder.is_none() {
            self.placeholder = Some(Message::bot(TYPING_PLACEHOLDER));
        }
        self.pending += 1;

        debug!("submitted message ({} pending)", self.pending);
        Some(Submission {
            text: text.to_string(),
        })
    }

    /// Submits whatever is in the input buffer.
    pub fn submit_input(&mut self) -> Option<Submission> {
        let text = self.input.clone();
        self.submit_message(&text)
    }

    /// Enter key: re-shows the chips and submits the input buffer.
    pub fn press_enter(&mut self) -> Option<Submission> {
        self.suggestions.on_enter();
        self.submit_input()
    }

    /// Applies the result of one submission. Failures are logged and leave
    /// no trace in the transcript. On either path the placeholder goes
    /// first (once no request is outstanding) and the input is cleared last.
    pub fn complete_reply(&mut self, outcome: ChatboxResult<String>) {
        self.pending = self.pending.saturating_sub(1);
        if self.pending == 0 {
            self.placeholder = None;
        }

        match outcome {
            Ok(answer) => self.messages.push(Message::new(Sender::Bot, answer)),
            Err(e) => error!("Error: {}", e),
        }

        self.input.clear();
    }

    pub fn select_suggestion(&mut self, question: &str) -> bool {
        if !self.suggestions.select(question) {
            return false;
        }
        self.input = question.to_string();
        true
    }

    pub fn refresh_suggestions(&mut self) {
        self.suggestions.refresh();
    }
}

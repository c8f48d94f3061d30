//! Suggested-question chips.
//!
//! A fixed list of quick replies. Selecting one consumes it and hides the
//! rest until the user presses Enter; once every chip is consumed only the
//! refresh action remains.

#[derive(Debug, Clone)]
pub struct Suggestions {
    questions: Vec<String>,
    consumed: Vec<String>,
    shown: bool,
    highlight: Option<usize>,
}

impl Suggestions {
    pub fn new<I, S>(questions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for question in questions.into_iter().map(Into::into) {
            if !unique.contains(&question) {
                unique.push(question);
            }
        }
        Self {
            questions: unique,
            consumed: Vec::new(),
            shown: true,
            highlight: None,
        }
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn is_exhausted(&self) -> bool {
        self.consumed.len() == self.questions.len()
    }

    pub fn is_panel_visible(&self) -> bool {
        self.shown && !self.is_exhausted()
    }

    /// Chips currently on screen, in their original order.
    pub fn visible(&self) -> Vec<&str> {
        if !self.is_panel_visible() {
            return Vec::new();
        }
        self.questions
            .iter()
            .filter(|q| !self.consumed.contains(q))
            .map(String::as_str)
            .collect()
    }

    /// Marks `question` consumed and hides the panel. Returns false for
    /// unknown or already consumed questions.
    pub fn select(&mut self, question: &str) -> bool {
        let known = self.questions.iter().any(|q| q == question);
        if !known || self.consumed.iter().any(|q| q == question) {
            return false;
        }
        self.consumed.push(question.to_string());
        self.shown = false;
        self.highlight = None;
        true
    }

    pub fn on_enter(&mut self) {
        if !self.is_exhausted() {
            self.shown = true;
        }
    }

    pub fn refresh(&mut self) {
        self.consumed.clear();
        self.shown = true;
        self.highlight = None;
    }

    pub fn highlighted(&self) -> Option<&str> {
        let idx = self.highlight?;
        self.visible().get(idx).copied()
    }

    pub fn clear_highlight(&mut self) {
        self.highlight = None;
    }

    /// Moves the highlight through the visible chips, wrapping at both ends.
    pub fn cycle_highlight(&mut self, forward: bool) {
        let count = self.visible().len();
        if count == 0 {
            self.highlight = None;
            return;
        }
        self.highlight = Some(match (self.highlight, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => {
                if i == 0 {
                    count - 1
                } else {
                    (i - 1).min(count - 1)
                }
            }
        });
    }
}

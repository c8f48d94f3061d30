use std::time::{Duration, Instant};

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];
const FRAME_INTERVAL: Duration = Duration::from_millis(120);

/// Spinner shown next to the "Typing..." placeholder.
#[derive(Debug)]
pub struct TypingIndicator {
    spinner_idx: usize,
    last_frame_update: Instant,
}

impl TypingIndicator {
    pub fn new() -> Self {
        Self {
            spinner_idx: 0,
            last_frame_update: Instant::now(),
        }
    }

    /// Advances the spinner when enough time has passed since the last frame.
    pub fn tick(&mut self, typing: bool) {
        if !typing {
            self.spinner_idx = 0;
            return;
        }
        if self.last_frame_update.elapsed() >= FRAME_INTERVAL {
            self.advance();
        }
    }

    pub fn advance(&mut self) {
        self.spinner_idx = self.spinner_idx.wrapping_add(1);
        self.last_frame_update = Instant::now();
    }

    pub fn frame(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_idx % SPINNER_FRAMES.len()]
    }
}

impl Default for TypingIndicator {
    fn default() -> Self {
        Self::new()
    }
}

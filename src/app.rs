use crate::config::Config;
use crate::suggestions::Suggestions;
use crate::typing_indicator::TypingIndicator;
use crate::widget::ChatWidget;
use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Running,
    QuitConfirm,
    Quit,
}

/// Something on screen that reacts to a mouse click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    Launcher,
    Send,
    Refresh,
    Chip(String),
}

/// Clickable regions recorded while drawing the last frame.
#[derive(Debug, Default)]
pub struct HitRegions {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitRegions {
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn record(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// Topmost target under the given cell. Later records win.
    pub fn target_at(&self, column: u16, row: u16) -> Option<&HitTarget> {
        let pos = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, target)| target)
    }
}

#[derive(Debug)]
pub struct App {
    pub state: AppState,
    pub widget: ChatWidget,
    pub bot_name: String,
    pub endpoint: String,
    pub typing: TypingIndicator,
    pub hits: HitRegions,
    /// Lines scrolled up from the newest message.
    pub scroll: u16,
}

impl App {
    pub fn new(config: &Config) -> App {
        App {
            state: AppState::Running,
            widget: ChatWidget::new(Suggestions::new(config.suggestions.clone())),
            bot_name: config.bot_name.clone(),
            endpoint: config.endpoint.clone(),
            typing: TypingIndicator::new(),
            hits: HitRegions::default(),
            scroll: 0,
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = 0;
    }

    pub fn on_tick(&mut self) {
        self.typing.tick(self.widget.is_typing());
    }
}

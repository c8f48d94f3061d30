use crate::app::{App, AppState, HitTarget};
use crate::widget::{ChatWidget, Submission};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Routes a terminal event. Returns a submission when the event sent a
/// message that now needs a reply.
pub fn handle_event(app: &mut App, event: Event) -> Option<Submission> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Paste(text) if app.widget.is_open() => {
            for c in text.chars().filter(|c| !c.is_control()) {
                app.widget.push_char(c);
            }
            None
        }
        _ => None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<Submission> {
    if app.state == AppState::QuitConfirm {
        handle_quit_confirm_input(key, app);
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.state = AppState::QuitConfirm,
            KeyCode::Char('t') => app.widget.toggle_open(),
            KeyCode::Char('r') if app.widget.is_open() => app.widget.refresh_suggestions(),
            _ => {}
        }
        return None;
    }

    if !app.widget.is_open() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => app.state = AppState::QuitConfirm,
            KeyCode::Enter => app.widget.toggle_open(),
            _ => {}
        }
        return None;
    }

    match key.code {
        KeyCode::Esc => app.widget.toggle_open(),
        KeyCode::Enter => {
            let highlighted = app
                .widget
                .suggestions()
                .highlighted()
                .map(|q| q.to_string());
            match highlighted {
                Some(question) => {
                    app.widget.select_suggestion(&question);
                }
                None => return submit(app, |w| w.press_enter()),
            }
        }
        KeyCode::Tab => app.widget.suggestions_mut().cycle_highlight(true),
        KeyCode::BackTab => app.widget.suggestions_mut().cycle_highlight(false),
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::Backspace => app.widget.backspace(),
        KeyCode::Char(c) => {
            app.widget.suggestions_mut().clear_highlight();
            app.widget.push_char(c);
        }
        _ => {}
    }
    None
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) -> Option<Submission> {
    if app.state != AppState::Running {
        return None;
    }

    match mouse.kind {
        MouseEventKind::ScrollUp if app.widget.is_open() => app.scroll_up(),
        MouseEventKind::ScrollDown if app.widget.is_open() => app.scroll_down(),
        MouseEventKind::Down(MouseButton::Left) => {
            let target = app.hits.target_at(mouse.column, mouse.row).cloned();
            match target {
                Some(HitTarget::Launcher) => app.widget.toggle_open(),
                Some(HitTarget::Send) => return submit(app, |w| w.submit_input()),
                Some(HitTarget::Refresh) => app.widget.refresh_suggestions(),
                Some(HitTarget::Chip(question)) => {
                    app.widget.select_suggestion(&question);
                }
                None => {}
            }
        }
        _ => {}
    }
    None
}

fn submit(
    app: &mut App,
    send: impl FnOnce(&mut ChatWidget) -> Option<Submission>,
) -> Option<Submission> {
    let submission = send(&mut app.widget);
    if submission.is_some() {
        app.scroll_to_bottom();
    }
    submission
}

pub fn handle_quit_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            app.state = AppState::Quit;
        }
        KeyCode::Char('n') | KeyCode::Esc => {
            app.state = AppState::Running;
        }
        _ => {}
    }
}

// src/ui.rs

pub mod chatbox;
pub mod footer;
pub mod header;
pub mod launcher;
pub mod quit_confirm;

use crate::api::PredictClient;
use crate::app::{App, AppState, HitTarget};
use crate::config::Config;
use crate::dispatch::schedule_reply;
use crate::errors::{ChatboxError, ChatboxResult};
use crate::key_handlers::handle_event;
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
        Event as CEvent,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::{
    io,
    time::{Duration, Instant},
};
use tokio::sync::mpsc;

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const TICK_RATE: Duration = Duration::from_millis(120);

/// Enum for different types of events.
#[derive(Debug)]
enum Event {
    Input(CEvent),
    Tick,
}

/// Runs the terminal UI until the user quits.
pub async fn run_ui(config: Config, client: PredictClient) -> ChatboxResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (event_tx, event_rx) = mpsc::channel::<Event>(100);
    spawn_input_reader(event_tx);

    let app = App::new(&config);
    let res = run_app(&mut terminal, app, client, config.reply_delay(), event_rx).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    res
}

/// Main loop of the application.
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    client: PredictClient,
    reply_delay: Duration,
    mut event_rx: mpsc::Receiver<Event>,
) -> ChatboxResult<()> {
    let (reply_tx, mut reply_rx) = mpsc::channel::<ChatboxResult<String>>(100);

    info!("chat box ready, endpoint {}", client.endpoint());

    loop {
        terminal
            .draw(|f| draw(f, &mut app))
            .map_err(|e| ChatboxError::terminal_error(format!("draw failed: {}", e)))?;

        tokio::select! {
            event = event_rx.recv() => {
                match event {
                    Some(Event::Input(event)) => {
                        if let Some(submission) = handle_event(&mut app, event) {
                            schedule_reply(client.clone(), reply_delay, submission, reply_tx.clone());
                        }
                    }
                    Some(Event::Tick) => app.on_tick(),
                    None => {
                        error!("terminal input stream closed");
                        return Err(ChatboxError::terminal_error("terminal input stream closed"));
                    }
                }
            }
            Some(outcome) = reply_rx.recv() => {
                app.widget.complete_reply(outcome);
            }
        }

        if app.state == AppState::Quit {
            break;
        }
    }

    Ok(())
}

/// Polls crossterm on a dedicated thread; the poll call blocks.
fn spawn_input_reader(tx: mpsc::Sender<Event>) {
    std::thread::spawn(move || {
        let mut last_tick = Instant::now();
        loop {
            match event::poll(POLL_INTERVAL) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if tx.blocking_send(Event::Input(event)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        error!("failed to read terminal event: {}", e);
                        return;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    error!("failed to poll terminal events: {}", e);
                    return;
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                if tx.blocking_send(Event::Tick).is_err() {
                    return;
                }
                last_tick = Instant::now();
            }
        }
    });
}

/// Renders the whole screen from `app`.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    app.hits.clear();

    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)].as_ref())
        .split(size);
    let page = chunks[0];

    let header_area = Rect {
        height: header::HEADER_HEIGHT.min(page.height),
        ..page
    };
    header::draw_header(f, header_area, &app.bot_name, &app.endpoint);
    footer::draw_footer(f, chunks[1], app);

    let launcher_area = launcher::launcher_area(page);
    launcher::draw_launcher(f, launcher_area, app.widget.is_open());
    app.hits.record(launcher_area, HitTarget::Launcher);

    if app.widget.is_open() {
        let box_area = chatbox::chatbox_area(page, launcher_area);
        if box_area.height >= 6 {
            chatbox::draw_chatbox(f, box_area, app);
        }
    }

    if app.state == AppState::QuitConfirm {
        quit_confirm::draw_quit_confirm(f, centered_rect(50, 7, size));
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        screen_text(terminal.backend().buffer())
    }

    #[test]
    fn test_closed_widget_shows_only_launcher() {
        let mut app = App::new(&Config::default());
        let screen = render(&mut app, 100, 40);

        assert!(screen.contains("◉"));
        assert!(!screen.contains("Write a message..."));
        assert!(screen.contains("Ctrl+T"));
        assert!(app.hits.target_at(94, 37).is_some());
    }

    #[test]
    fn test_open_widget_shows_chips_and_hint() {
        let mut app = App::new(&Config::default());
        app.widget.toggle_open();
        let screen = render(&mut app, 100, 40);

        assert!(screen.contains("[ !info ]"));
        assert!(screen.contains("[ !commands ]"));
        assert!(screen.contains("Write a message..."));
        assert!(screen.contains("Send"));
        assert!(screen.contains("How can I help you?"));
    }

    #[test]
    fn test_chip_hit_region_selects_question() {
        let mut app = App::new(&Config::default());
        app.widget.toggle_open();
        let screen = render(&mut app, 100, 40);

        let (row, line) = screen
            .lines()
            .enumerate()
            .find(|(_, l)| l.contains("[ !links ]"))
            .unwrap();
        let before = line.split("[ !links ]").next().unwrap_or("");
        let column = before.chars().count() as u16 + 2;

        assert_eq!(
            app.hits.target_at(column, row as u16),
            Some(&HitTarget::Chip("!links".to_string()))
        );
    }

    #[test]
    fn test_transcript_and_placeholder_render() {
        let mut app = App::new(&Config::default());
        app.widget.toggle_open();
        app.widget.submit_message("hello").unwrap();
        let screen = render(&mut app, 100, 40);
        assert!(screen.contains("│ hello"));
        assert!(screen.contains("Typing..."));

        app.widget
            .complete_reply(Ok("Greetings!<br>Type !commands".to_string()));
        let screen = render(&mut app, 100, 40);
        assert!(!screen.contains("Typing..."));
        assert!(screen.contains("│ Greetings!"));
        assert!(screen.contains("│ Type !commands"));
    }

    #[test]
    fn test_exhausted_chips_show_refresh() {
        let mut app = App::new(&Config::default());
        app.widget.toggle_open();
        for q in ["!info", "!commands", "!links"] {
            app.widget.select_suggestion(q);
        }
        let screen = render(&mut app, 100, 40);
        assert!(screen.contains("Refresh options"));
        assert!(!screen.contains("[ !info ]"));
    }

    #[test]
    fn test_long_transcript_keeps_newest_visible() {
        let mut app = App::new(&Config::default());
        app.widget.toggle_open();
        for i in 0..20 {
            app.widget.submit_message(&format!("message {}", i)).unwrap();
            app.widget.complete_reply(Ok(format!("reply {}", i)));
        }
        let screen = render(&mut app, 100, 40);
        assert!(screen.contains("reply 19"));
        assert!(!screen.contains("message 0 "));

        app.scroll = u16::MAX;
        let screen = render(&mut app, 100, 40);
        assert!(screen.contains("message 0"));
    }

    #[test]
    fn test_huge_input_renders_its_end() {
        let mut app = App::new(&Config::default());
        app.widget.toggle_open();
        let mut input = "x".repeat(70_000);
        input.push_str("END");
        app.widget.set_input(&input);

        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, &mut app)).unwrap();
        let screen = screen_text(terminal.backend().buffer());

        let (row, line) = screen
            .lines()
            .enumerate()
            .find(|(_, l)| l.contains("END"))
            .unwrap();
        let end_column = line.split("END").next().unwrap_or("").chars().count() as u16 + 3;
        let cursor = terminal.get_cursor_position().unwrap();
        assert_eq!(cursor.y, row as u16);
        assert_eq!(cursor.x, end_column);
    }

    #[tokio::test]
    async fn test_closed_input_stream_ends_loop() {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let client =
            PredictClient::new("http://127.0.0.1:9/predict", Duration::from_secs(1)).unwrap();
        let (event_tx, event_rx) = mpsc::channel::<Event>(4);
        drop(event_tx);

        let app = App::new(&Config::default());
        let res = tokio::time::timeout(
            Duration::from_secs(5),
            run_app(&mut terminal, app, client, Duration::ZERO, event_rx),
        )
        .await
        .expect("loop should not hang");
        assert!(matches!(res, Err(ChatboxError::Terminal(_))));
    }

    #[tokio::test]
    async fn test_quit_key_ends_loop() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let client =
            PredictClient::new("http://127.0.0.1:9/predict", Duration::from_secs(1)).unwrap();
        let (event_tx, event_rx) = mpsc::channel::<Event>(4);
        for code in [KeyCode::Char('q'), KeyCode::Char('y')] {
            let key = KeyEvent::new(code, KeyModifiers::NONE);
            event_tx.send(Event::Input(CEvent::Key(key))).await.unwrap();
        }

        let app = App::new(&Config::default());
        let res = run_app(&mut terminal, app, client, Duration::ZERO, event_rx).await;
        assert!(res.is_ok());
    }

    #[test]
    fn test_quit_confirm_overlay() {
        let mut app = App::new(&Config::default());
        app.state = AppState::QuitConfirm;
        let screen = render(&mut app, 100, 40);
        assert!(screen.contains("Are you sure you want to quit?"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = App::new(&Config::default());
        app.widget.toggle_open();
        render(&mut app, 10, 4);
    }
}

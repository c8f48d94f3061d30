//! Line-mode front end for terminals where the full-screen box is not wanted.

use crate::api::PredictClient;
use crate::config::Config;
use crate::constants::TYPING_PLACEHOLDER;
use crate::dispatch::fetch_reply;
use crate::errors::{ChatboxError, ChatboxResult};
use crate::markup::to_plain_text;
use crate::models::Sender;
use crate::suggestions::Suggestions;
use crate::widget::ChatWidget;
use colored::Colorize;
use crossterm::{
    cursor::MoveToColumn,
    execute,
    terminal::{Clear, ClearType},
};
use log::{info, warn};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::io::{self, Write};

pub const QUIT_COMMAND: &str = "quit";

/// Runs one submit/reply cycle and returns the bot's text, if any arrived.
pub async fn exchange(
    widget: &mut ChatWidget,
    client: &PredictClient,
    config: &Config,
    line: &str,
) -> Option<String> {
    widget.set_input(line);
    let submission = widget.press_enter()?;

    let before = widget.messages().len();
    let outcome = fetch_reply(client, config.reply_delay(), &submission.text).await;
    widget.complete_reply(outcome);

    widget.messages()[before..]
        .iter()
        .rev()
        .find(|m| m.sender == Sender::Bot)
        .map(|m| m.text.clone())
}

/// Adds `line` to the editor history. Returns false when it was skipped.
fn remember(rl: &mut DefaultEditor, line: &str) -> bool {
    match rl.add_history_entry(line) {
        Ok(added) => added,
        Err(e) => {
            warn!("failed to record history entry: {}", e);
            false
        }
    }
}

pub async fn run_repl(config: &Config, client: PredictClient) -> ChatboxResult<()> {
    let mut widget = ChatWidget::new(Suggestions::new(config.suggestions.clone()));
    widget.toggle_open();

    let mut rl = DefaultEditor::new()
        .map_err(|e| ChatboxError::terminal_error(format!("Failed to start line editor: {}", e)))?;

    println!("Let's chat! (type '{}' to exit)", QUIT_COMMAND);
    println!(
        "{}",
        format!("Try: {}", widget.suggestions().visible().join("  ")).dimmed()
    );
    info!("repl started, endpoint {}", client.endpoint());

    let bot_label = format!("{}:", config.bot_name);
    loop {
        match rl.readline("You: ") {
            Ok(line) => {
                if line == QUIT_COMMAND {
                    break;
                }
                if line.trim().is_empty() {
                    continue;
                }
                remember(&mut rl, &line);

                print!("{} {}", bot_label.green().bold(), TYPING_PLACEHOLDER.dimmed());
                io::stdout().flush()?;

                let reply = exchange(&mut widget, &client, config, &line).await;

                execute!(io::stdout(), MoveToColumn(0), Clear(ClearType::CurrentLine))?;
                if let Some(reply) = reply {
                    println!("{} {}", bot_label.green().bold(), to_plain_text(&reply));
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                return Err(ChatboxError::terminal_error(format!("Readline error: {}", e)));
            }
        }
    }

    info!("repl finished after {} messages", widget.messages().len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustyline::history::History;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::{matchers::method, Mock, MockServer, ResponseTemplate};

    fn quick_config(endpoint: String) -> Config {
        Config {
            endpoint,
            reply_delay_ms: 0,
            ..Config::default()
        }
    }

    #[test]
    fn test_remember_skips_repeated_line() {
        let mut rl = DefaultEditor::new().unwrap();
        assert!(remember(&mut rl, "!info"));
        assert!(!remember(&mut rl, "!info"));
        assert_eq!(rl.history().len(), 1);
    }

    #[tokio::test]
    async fn test_exchange_returns_answer() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": "Hey :-)" })))
            .mount(&mock_server)
            .await;

        let config = quick_config(format!("{}/predict", mock_server.uri()));
        let client = PredictClient::from_config(&config).unwrap();
        let mut widget = ChatWidget::new(Suggestions::new(config.suggestions.clone()));

        let reply = exchange(&mut widget, &client, &config, "Hi").await;
        assert_eq!(reply.as_deref(), Some("Hey :-)"));
        assert_eq!(widget.messages().len(), 2);
        assert_eq!(widget.input(), "");
    }

    #[tokio::test]
    async fn test_exchange_failure_prints_nothing() {
        let config = quick_config("http://127.0.0.1:9/predict".to_string());
        let client = PredictClient::new(config.endpoint.clone(), Duration::from_secs(2)).unwrap();
        let mut widget = ChatWidget::new(Suggestions::new(config.suggestions.clone()));

        let reply = exchange(&mut widget, &client, &config, "hello").await;
        assert!(reply.is_none());
        assert_eq!(widget.messages().len(), 1);
        assert!(!widget.is_typing());
    }

    #[tokio::test]
    async fn test_exchange_blank_line_skipped() {
        let config = quick_config("http://127.0.0.1:9/predict".to_string());
        let client = PredictClient::from_config(&config).unwrap();
        let mut widget = ChatWidget::new(Suggestions::new(config.suggestions.clone()));

        assert!(exchange(&mut widget, &client, &config, "  ").await.is_none());
        assert!(widget.messages().is_empty());
    }
}

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// A floating terminal chat box backed by a remote prediction endpoint.
#[derive(Debug, Parser)]
#[command(name = "chatbox", version, about)]
pub struct Cli {
    /// Line-by-line chat instead of the full-screen box
    #[arg(long)]
    pub repl: bool,

    /// Prediction endpoint URL, overrides the config file and CHATBOX_ENDPOINT
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Config file to use instead of ~/.config/chatbox/config.json
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Milliseconds to wait before sending each message
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(delay) = self.delay_ms {
            config.reply_delay_ms = delay;
        }
    }
}

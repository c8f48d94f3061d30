// src/lib.rs

pub mod api;
pub mod app;
pub mod chat_message;
pub mod cli;
pub mod config;
pub mod constants;
pub mod dispatch;
pub mod errors;
pub mod key_handlers;
pub mod logging;
pub mod markup;
pub mod models;
pub mod repl;
pub mod suggestions;
pub mod typing_indicator;
pub mod ui;
pub mod widget;

pub use app::{App, AppState};
pub use errors::{ChatboxError, ChatboxResult};
pub use models::{Message, Sender};
pub use widget::{ChatWidget, Submission};

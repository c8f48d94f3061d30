// src/errors.rs

use thiserror::Error;

/// Errors raised across the chat box.
#[derive(Debug, Error)]
pub enum ChatboxError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The only failure the prediction call can produce. Covers connect
    /// errors, timeouts and bodies that are not `{ "answer": ... }`.
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl ChatboxError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        ChatboxError::Config(msg.into())
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        ChatboxError::RequestFailed(msg.into())
    }

    pub fn terminal_error(msg: impl Into<String>) -> Self {
        ChatboxError::Terminal(msg.into())
    }
}

impl From<reqwest::Error> for ChatboxError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            "timed out"
        } else if err.is_connect() {
            "could not connect"
        } else if err.is_decode() {
            "invalid response body"
        } else {
            "transport error"
        };
        ChatboxError::RequestFailed(format!("{}: {}", kind, err))
    }
}

pub type ChatboxResult<T> = Result<T, ChatboxError>;

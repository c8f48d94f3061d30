// src/logging.rs

use crate::errors::{ChatboxError, ChatboxResult};
use crate::models::ApiCallLog;
use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};
use log::info;
use std::path::Path;

pub const API_LOG_TARGET: &str = "chatbox::api";

/// Starts the file logger. `RUST_LOG` wins over `level` when set. The
/// returned handle must stay alive for buffered lines to be flushed.
pub fn init_logger(level: &str, log_dir: &Path) -> ChatboxResult<LoggerHandle> {
    Logger::try_with_env_or_str(level)
        .and_then(|logger| {
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(log_dir)
                        .basename("chatbox")
                        .suppress_timestamp(),
                )
                .append()
                .write_mode(WriteMode::BufferAndFlush)
                .format(flexi_logger::detailed_format)
                .start()
        })
        .map_err(|e| ChatboxError::config_error(format!("Failed to start logger: {}", e)))
}

pub fn format_api_call(log: &ApiCallLog) -> String {
    format!(
        "[{}] {} - {} - Status: {} - Time: {}ms",
        log.timestamp.to_rfc3339(),
        log.endpoint,
        log.request_summary,
        log.response_status,
        log.response_time_ms
    )
}

/// Records an API call on the dedicated log target.
pub fn log_api_call(log: &ApiCallLog) {
    info!(target: API_LOG_TARGET, "{}", format_api_call(log));
}

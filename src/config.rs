use crate::constants::{
    DEFAULT_BOT_NAME, DEFAULT_PREDICT_URL, DEFAULT_REPLY_DELAY_MS, DEFAULT_REQUEST_TIMEOUT_SECS,
    INITIAL_QUESTIONS,
};
use crate::errors::{ChatboxError, ChatboxResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::RwLock,
    time::Duration,
};

pub const ENDPOINT_ENV_VAR: &str = "CHATBOX_ENDPOINT";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub reply_delay_ms: u64,
    pub request_timeout_secs: u64,
    pub bot_name: String,
    pub suggestions: Vec<String>,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_PREDICT_URL.to_string(),
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            bot_name: DEFAULT_BOT_NAME.to_string(),
            suggestions: INITIAL_QUESTIONS.iter().map(|q| q.to_string()).collect(),
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl Config {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Directory for log files, `~/.config/chatbox/logs` unless overridden.
    pub fn resolved_log_dir(&self) -> ChatboxResult<PathBuf> {
        match &self.log_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(config_dir()?.join("logs")),
        }
    }

    /// Reads `path`, writing a default file first when none exists.
    pub fn load_or_create(path: &Path) -> ChatboxResult<Self> {
        if path.exists() {
            let config_str = fs::read_to_string(path).map_err(|e| {
                ChatboxError::config_error(format!("Failed to read config file: {}", e))
            })?;
            let config: Config = serde_json::from_str(&config_str).map_err(|e| {
                ChatboxError::config_error(format!("Failed to parse config: {}", e))
            })?;
            validate_config(&config)?;
            return Ok(config);
        }

        let config = Config::default();
        save_config(path, &config)?;
        Ok(config)
    }

    /// Environment override for the endpoint, applied after the file is read.
    pub fn apply_env(&mut self) {
        if let Ok(endpoint) = env::var(ENDPOINT_ENV_VAR) {
            if !endpoint.trim().is_empty() {
                self.endpoint = endpoint;
            }
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

/// Loads the config file (or `path_override`), applies the environment and
/// validates the result before publishing it process-wide.
pub fn initialize_config(path_override: Option<&Path>) -> ChatboxResult<Config> {
    let config_path = match path_override {
        Some(path) => path.to_path_buf(),
        None => get_config_path()?,
    };

    let mut config = Config::load_or_create(&config_path)?;
    config.apply_env();
    validate_config(&config)?;

    set_config(config.clone())?;
    Ok(config)
}

pub fn get_config_path() -> ChatboxResult<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

fn config_dir() -> ChatboxResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ChatboxError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("chatbox"))
}

fn save_config(path: &Path, config: &Config) -> ChatboxResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ChatboxError::config_error(format!("Failed to create config directory: {}", e))
        })?;
    }

    let config_str = serde_json::to_string_pretty(config)
        .map_err(|e| ChatboxError::config_error(format!("Failed to serialize config: {}", e)))?;

    fs::write(path, config_str)
        .map_err(|e| ChatboxError::config_error(format!("Failed to write config file: {}", e)))
}

pub fn validate_config(config: &Config) -> ChatboxResult<()> {
    let endpoint = config.endpoint.trim();
    if endpoint.is_empty() {
        return Err(ChatboxError::config_error("endpoint is required"));
    }
    if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        return Err(ChatboxError::config_error(format!(
            "endpoint must be an http(s) URL, got {}",
            endpoint
        )));
    }

    if config.request_timeout_secs == 0 {
        return Err(ChatboxError::config_error(
            "request_timeout_secs must be greater than 0",
        ));
    }

    if config.bot_name.trim().is_empty() {
        return Err(ChatboxError::config_error("bot_name is required"));
    }

    if config.suggestions.is_empty() {
        return Err(ChatboxError::config_error(
            "at least one suggestion is required",
        ));
    }
    if config.suggestions.iter().any(|s| s.trim().is_empty()) {
        return Err(ChatboxError::config_error("suggestions must not be blank"));
    }
    for (idx, suggestion) in config.suggestions.iter().enumerate() {
        if config.suggestions[..idx].contains(suggestion) {
            return Err(ChatboxError::config_error(format!(
                "duplicate suggestion {}",
                suggestion
            )));
        }
    }

    if !LOG_LEVELS.contains(&config.log_level.as_str()) {
        return Err(ChatboxError::config_error(format!(
            "log_level must be one of {}",
            LOG_LEVELS.join(", ")
        )));
    }

    Ok(())
}

pub fn get_config() -> Config {
    match CONFIG.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

pub fn set_config(config: Config) -> ChatboxResult<()> {
    validate_config(&config)?;
    let mut guard = CONFIG
        .write()
        .map_err(|_| ChatboxError::config_error("config lock poisoned"))?;
    *guard = config;
    Ok(())
}

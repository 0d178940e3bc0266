//! Unified error type.

use std::path::PathBuf;

use thiserror::Error;

use super::category::ErrorCategory;

#[derive(Debug, Error)]
pub enum MarqueeError {
    /// Config file exists but could not be read.
    #[error("failed to read config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for `Config`.
    #[error("invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Environment override holds a value we cannot interpret.
    #[error("invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },

    /// The OS refused to open a link.
    #[error("failed to open {url}: {message}")]
    LinkOpen { url: String, message: String },

    /// Log file or subscriber setup failed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MarqueeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MarqueeError::Config { .. }
            | MarqueeError::ConfigParse { .. }
            | MarqueeError::InvalidEnv { .. } => ErrorCategory::Configuration,
            MarqueeError::LinkOpen { .. } => ErrorCategory::External,
            MarqueeError::Logging(_) | MarqueeError::Io(_) => ErrorCategory::System,
        }
    }

    /// One-line message for the status bar.
    pub fn user_message(&self) -> String {
        match self {
            MarqueeError::LinkOpen { url, .. } => {
                format!("Could not open browser. Please navigate to: {}", url)
            }
            MarqueeError::Config { path, .. } | MarqueeError::ConfigParse { path, .. } => {
                format!("Could not load config from {}", path.display())
            }
            MarqueeError::InvalidEnv { var, .. } => format!("Invalid value for {}", var),
            MarqueeError::Logging(_) => "Logging is unavailable".to_string(),
            MarqueeError::Io(_) => "A system error occurred".to_string(),
        }
    }

    /// Short code for log lines.
    pub fn error_code(&self) -> &'static str {
        match self {
            MarqueeError::Config { .. } => "CONFIG_READ",
            MarqueeError::ConfigParse { .. } => "CONFIG_PARSE",
            MarqueeError::InvalidEnv { .. } => "CONFIG_ENV",
            MarqueeError::LinkOpen { .. } => "LINK_OPEN",
            MarqueeError::Logging(_) => "LOGGING",
            MarqueeError::Io(_) => "IO",
        }
    }
}

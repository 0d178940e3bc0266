//! Runtime configuration.
//!
//! Sources, lowest to highest precedence:
//! 1. Built-in defaults
//! 2. JSON file (`--config <path>` or `<config_dir>/marquee/config.json`)
//! 3. Environment (`MARQUEE_USER`, `MARQUEE_OPEN_LINKS`)
//! 4. Command-line flags (applied by the caller)

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{MarqueeError, MarqueeResult};
use crate::state::BLUR_GRACE_MS;

/// Env var naming the signed-in viewer.
pub const ENV_USER: &str = "MARQUEE_USER";
/// Env var toggling browser launches (`1/0`, `true/false`, `yes/no`).
pub const ENV_OPEN_LINKS: &str = "MARQUEE_OPEN_LINKS";

/// Default redraw tick (milliseconds).
pub const DEFAULT_TICK_RATE_MS: u64 = 16;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display name shown in the header
    pub user: Option<String>,
    /// Delay before a blurred search dropdown closes
    pub blur_grace_ms: u64,
    /// Event-loop tick used for redraws and timers
    pub tick_rate_ms: u64,
    /// Launch the system browser for outbound links
    pub open_links: bool,
    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user: None,
            blur_grace_ms: BLUR_GRACE_MS,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            open_links: true,
            log_filter: "marquee=info".to_string(),
        }
    }
}

impl Config {
    /// `<config_dir>/marquee/config.json`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("marquee").join("config.json"))
    }

    /// Load from `path`, or the default location when `None`.
    ///
    /// A missing file yields defaults. An unreadable or malformed file is an
    /// error.
    pub fn load(path: Option<&Path>) -> MarqueeResult<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path).map_err(|source| MarqueeError::Config {
            path: path.clone(),
            source,
        })?;
        let config = serde_json::from_str(&raw)
            .map_err(|source| MarqueeError::ConfigParse { path, source })?;
        Ok(config)
    }

    /// Apply environment overrides.
    pub fn apply_env(mut self) -> MarqueeResult<Self> {
        if let Ok(user) = std::env::var(ENV_USER) {
            self.user = Some(user);
        }
        if let Ok(value) = std::env::var(ENV_OPEN_LINKS) {
            self.open_links = parse_bool(&value).ok_or(MarqueeError::InvalidEnv {
                var: ENV_OPEN_LINKS,
                value,
            })?;
        }
        Ok(self)
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_open_links(mut self, open_links: bool) -> Self {
        self.open_links = open_links;
        self
    }

    pub fn blur_grace(&self) -> Duration {
        Duration::from_millis(self.blur_grace_ms)
    }

    /// Tick interval, never below one millisecond.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("nope.json"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"user": "asha", "blur_grace_ms": 250}}"#).unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.user.as_deref(), Some("asha"));
        assert_eq!(config.blur_grace(), Duration::from_millis(250));
        assert_eq!(config.tick_rate_ms, DEFAULT_TICK_RATE_MS);
        assert!(config.open_links);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, MarqueeError::ConfigParse { .. }));
    }

    #[test]
    fn test_tick_rate_has_floor() {
        let config = Config {
            tick_rate_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(1));
    }

    #[test]
    fn test_parse_bool_variants() {
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool(" 0 "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        std::env::set_var(ENV_USER, "ravi");
        std::env::set_var(ENV_OPEN_LINKS, "false");
        let config = Config::default().apply_env().unwrap();
        std::env::remove_var(ENV_USER);
        std::env::remove_var(ENV_OPEN_LINKS);

        assert_eq!(config.user.as_deref(), Some("ravi"));
        assert!(!config.open_links);
    }

    #[test]
    #[serial]
    fn test_invalid_env_value_is_error() {
        std::env::remove_var(ENV_USER);
        std::env::set_var(ENV_OPEN_LINKS, "sometimes");
        let result = Config::default().apply_env();
        std::env::remove_var(ENV_OPEN_LINKS);

        assert!(matches!(
            result,
            Err(MarqueeError::InvalidEnv { var: ENV_OPEN_LINKS, .. })
        ));
    }
}

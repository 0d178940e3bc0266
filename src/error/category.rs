//! Error category classification.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Invalid or unreadable configuration.
    /// Not recoverable until the file or flags are corrected.
    Configuration,

    /// OS-level failures (terminal, filesystem, log file).
    System,

    /// Something outside the app refused a hand-off, such as the browser.
    /// The UI keeps running and shows a message.
    External,
}

impl ErrorCategory {
    /// Whether the UI can keep running after an error of this category.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ErrorCategory::External)
    }

    /// Short label for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::System => "system",
            ErrorCategory::External => "external",
        }
    }

    /// Suggested recovery action for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => {
                "Fix or remove the config file, or pass --config with a valid path"
            }
            ErrorCategory::System => "Check file permissions and that stdout is a terminal",
            ErrorCategory::External => "Open the link manually in a browser",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_external_is_recoverable() {
        assert!(ErrorCategory::External.is_recoverable());
        assert!(!ErrorCategory::Configuration.is_recoverable());
        assert!(!ErrorCategory::System.is_recoverable());
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(ErrorCategory::Configuration.to_string(), "configuration");
    }
}

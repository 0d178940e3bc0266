//! Recording link opener for tests.

use std::sync::{Arc, Mutex};

use crate::error::{MarqueeError, MarqueeResult};
use crate::traits::LinkOpener;

/// Records opened URLs instead of launching anything.
///
/// Clones share the same log, so a test can keep one handle and give the
/// other to the `App`.
///
/// # Example
///
/// ```ignore
/// let opener = RecordingOpener::new();
/// let mut app = App::new(config, Box::new(opener.clone()));
/// app.open_link("https://example.com");
/// assert_eq!(opener.opened(), vec!["https://example.com"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingOpener {
    opened: Arc<Mutex<Vec<String>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `open` fail.
    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    /// URLs opened so far, oldest first.
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.opened.lock().unwrap().last().cloned()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) -> MarqueeResult<()> {
        if *self.should_fail.lock().unwrap() {
            return Err(MarqueeError::LinkOpen {
                url: url.to_string(),
                message: "mock failure".to_string(),
            });
        }
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_log() {
        let opener = RecordingOpener::new();
        let handle = opener.clone();
        opener.open("https://a.example").unwrap();
        assert_eq!(handle.opened(), vec!["https://a.example".to_string()]);
    }

    #[test]
    fn test_failure_does_not_record() {
        let opener = RecordingOpener::new();
        opener.set_should_fail(true);
        assert!(opener.open("https://a.example").is_err());
        assert!(opener.last().is_none());
    }
}

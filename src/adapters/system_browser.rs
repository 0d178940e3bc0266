//! Link opener backed by the platform URL handler.

use crate::error::{MarqueeError, MarqueeResult};
use crate::traits::LinkOpener;

/// Opens URLs in the user's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&self, url: &str) -> MarqueeResult<()> {
        tracing::info!(url, "opening link");
        open::that_detached(url).map_err(|e| MarqueeError::LinkOpen {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

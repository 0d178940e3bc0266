//! Outbound link launching.

use crate::error::MarqueeResult;

/// Hands a URL to something that can show it.
///
/// Nothing is read back: a successful return only means the hand-off was
/// accepted. Implementations must not block the event loop for long.
///
/// # Example
///
/// ```ignore
/// use marquee::traits::LinkOpener;
///
/// fn play<O: LinkOpener>(opener: &O, trailer: &str) {
///     if let Err(e) = opener.open(trailer) {
///         eprintln!("{}", e.user_message());
///     }
/// }
/// ```
pub trait LinkOpener: Send {
    fn open(&self, url: &str) -> MarqueeResult<()>;
}

//! Error handling for Marquee.
//!
//! Browsing the catalog cannot fail; errors only come from the edges:
//!
//! | Category | Source | UI keeps running |
//! |----------|--------|------------------|
//! | Configuration | config file, env overrides | No (startup) |
//! | System | terminal, log file | No |
//! | External | browser launch | Yes, status message |

mod category;
mod marquee_error;

pub use category::ErrorCategory;
pub use marquee_error::MarqueeError;

/// Result alias for fallible Marquee operations.
pub type MarqueeResult<T> = Result<T, MarqueeError>;

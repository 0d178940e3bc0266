//! Trait seams for side effects the UI hands off to the OS.
//!
//! - [`LinkOpener`] - launch an external URL (browser, app store, socials)

pub mod link;

pub use link::LinkOpener;

//! Concrete implementations of the trait seams in `crate::traits`.
//!
//! - [`SystemBrowser`] - opens links with the platform handler via `open`
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::RecordingOpener`] - records every URL instead of launching it

pub mod mock;
pub mod system_browser;

pub use mock::RecordingOpener;
pub use system_browser::SystemBrowser;

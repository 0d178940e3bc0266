//! Test doubles for the trait seams.

pub mod link;

pub use link::RecordingOpener;

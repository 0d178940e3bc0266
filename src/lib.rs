//! Marquee - a terminal storefront for a small streaming catalog
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;

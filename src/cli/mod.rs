//! Command-line interface.
//!
//! `--version` and `--help` are answered by clap before the terminal is
//! touched; everything else feeds into [`crate::config::Config`].

pub mod args;

pub use args::{parse_args, CliArgs};

/// Crate version, as shown by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

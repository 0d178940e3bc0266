//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Browse the Marquee streaming catalog in your terminal.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "marquee", version, about)]
pub struct CliArgs {
    /// Path to a JSON config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Display name shown in the header
    #[arg(long, value_name = "NAME")]
    pub user: Option<String>,

    /// Show outbound links in the status bar instead of opening a browser
    #[arg(long)]
    pub no_links: bool,
}

impl CliArgs {
    /// Flags win over every other config source.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(user) = &self.user {
            config = config.with_user(user.clone());
        }
        if self.no_links {
            config = config.with_open_links(false);
        }
        config
    }
}

/// Parse an argument list (program name first).
pub fn parse_args<I, T>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    CliArgs::try_parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_args() {
        let args = parse_args(["marquee"]).unwrap();
        assert_eq!(args.config, None);
        assert_eq!(args.user, None);
        assert!(!args.no_links);
    }

    #[test]
    fn test_parse_all_flags() {
        let args = parse_args([
            "marquee",
            "--config",
            "/tmp/m.json",
            "--user",
            "asha",
            "--no-links",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/m.json")));
        assert_eq!(args.user.as_deref(), Some("asha"));
        assert!(args.no_links);
    }

    #[test]
    fn test_version_flag_short_circuits() {
        let err = parse_args(["marquee", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = parse_args(["marquee", "--sync"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_flags_override_config() {
        let args = parse_args(["marquee", "--user", "ravi", "--no-links"]).unwrap();
        let config = args.apply(Config::default().with_user("asha"));
        assert_eq!(config.user.as_deref(), Some("ravi"));
        assert!(!config.open_links);
    }
}

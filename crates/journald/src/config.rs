//! Configuration for journald

use clap::{Args, Parser, Subcommand};
use journal_sync::config::{BASE_URL_ENV, DEFAULT_BASE_URL};
use journal_sync::GatewayConfig;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base URL cannot be empty")]
    EmptyBaseUrl,
    #[error("timeout must be at least one second")]
    ZeroTimeout,
    #[error("unknown log format: {0} (expected pretty or json)")]
    LogFormat(String),
}

/// journald - journal session host
#[derive(Parser, Debug, Clone)]
#[command(name = "journald")]
#[command(author, version, about = "Edit journal entries and mirror them to a content store")]
pub struct Config {
    /// Content store API base URL
    #[arg(long, global = true, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Remote request timeout in seconds
    #[arg(long, global = true, default_value = "10")]
    pub timeout_secs: u64,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log format (json or pretty)
    #[arg(long, global = true, default_value = "pretty")]
    pub log_format: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add one entry and print the journal
    Add(AddArgs),
    /// Add every entry from a JSON array file, in order
    Import(ImportArgs),
    /// Apply a JSON script of add/update/delete operations
    Edit(EditArgs),
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long, default_value = "")]
    pub content: String,

    /// Date the entry is about (defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Creation timestamp (defaults to now, RFC 3339)
    #[arg(long)]
    pub created_at: Option<String>,

    /// Image file to embed as a data URL
    #[arg(long)]
    pub photo: Option<PathBuf>,

    /// Mirror the entry to the content store
    #[arg(long)]
    pub sync: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ImportArgs {
    /// JSON file holding an array of entries without ids
    pub file: PathBuf,

    /// Mirror each imported entry to the content store
    #[arg(long)]
    pub sync: bool,
}

#[derive(Args, Debug, Clone)]
pub struct EditArgs {
    /// JSON file holding an array of operations
    pub script: PathBuf,
}

impl Config {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if !matches!(self.log_format.as_str(), "pretty" | "json") {
            return Err(ConfigError::LogFormat(self.log_format.clone()));
        }
        Ok(())
    }

    /// Remote endpoint settings
    pub fn gateway(&self) -> GatewayConfig {
        GatewayConfig::new(self.base_url.clone()).with_timeout(Duration::from_secs(self.timeout_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("journald").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_add_arguments() {
        let config = parse(&[
            "add",
            "--title",
            "A",
            "--content",
            "c1",
            "--date",
            "2024-01-01",
            "--sync",
            "--base-url",
            "https://cms.example.com/api",
        ]);
        assert!(config.validate().is_ok());
        assert_eq!(
            config.gateway().journals_url(),
            "https://cms.example.com/api/journals"
        );

        match config.command {
            Command::Add(args) => {
                assert_eq!(args.title, "A");
                assert_eq!(args.date.as_deref(), Some("2024-01-01"));
                assert!(args.created_at.is_none());
                assert!(args.sync);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_timeout_flag() {
        let config = parse(&["--timeout-secs", "3", "edit", "ops.json"]);
        assert_eq!(config.gateway().timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_validation() {
        let mut config = parse(&["import", "entries.json", "--base-url", "http://x/api"]);
        assert!(config.validate().is_ok());

        config.log_format = "xml".into();
        assert_eq!(config.validate(), Err(ConfigError::LogFormat("xml".into())));

        config.log_format = "json".into();
        config.timeout_secs = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroTimeout));

        config.timeout_secs = 1;
        config.base_url = " ".into();
        assert_eq!(config.validate(), Err(ConfigError::EmptyBaseUrl));
    }

    #[test]
    fn test_title_required() {
        assert!(Config::try_parse_from(["journald", "add"]).is_err());
    }
}

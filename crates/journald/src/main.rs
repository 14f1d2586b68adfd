//! journald - journal session host
//!
//! Runs one journal session per invocation: entries are edited in memory,
//! printed as JSON on stdout and optionally mirrored to a content store.

use clap::Parser;
use journal_core::Snapshot;
use journald::config::{Command, Config};
use journald::session::{self, Session};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_logging(config: &Config) {
    let level = if config.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "journald={level},journal_core={level},journal_sync={level}"
        ))
    });

    let layer = if config.log_format == "json" {
        fmt::layer().json().with_writer(std::io::stderr).boxed()
    } else {
        fmt::layer().with_writer(std::io::stderr).boxed()
    };

    tracing_subscriber::registry().with(layer).with(filter).init();
}

fn print(entries: &Snapshot) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&entries[..])?);
    Ok(())
}

async fn run(config: Config) -> anyhow::Result<()> {
    config.validate()?;

    match config.command.clone() {
        Command::Add(args) => {
            let mut session = Session::from_config(&config)?;
            let entry = session.run_add(args)?;
            info!(id = %entry.id, "entry added");
            let stats = session.finish().await;
            info!(delivered = stats.delivered, failed = stats.failed, "session finished");
            print(&session.snapshot())
        }
        Command::Import(args) => {
            let mut session = Session::from_config(&config)?;
            session.run_import(&args.file, args.sync)?;
            let stats = session.finish().await;
            info!(delivered = stats.delivered, failed = stats.failed, "session finished");
            print(&session.snapshot())
        }
        Command::Edit(args) => {
            let (entries, report) = session::run_edit(&args.script)?;
            info!(
                added = report.added.len(),
                updated = report.updated,
                deleted = report.deleted,
                ignored = report.ignored,
                "script applied"
            );
            print(&entries)
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();
    init_logging(&config);

    info!("journald v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(config).await {
        error!("{e:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

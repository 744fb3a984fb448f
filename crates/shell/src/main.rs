//! `schoolhub` CLI entry point.
//!
//! # Environment Variables
//!
//! - `SCHOOLHUB_STORAGE_FILE`: local storage file (overridden by `--storage`)
//! - `SCHOOLHUB_STORAGE_KEY`, `SCHOOLHUB_SHARED_SECRET`,
//!   `SCHOOLHUB_HISTORY_LIMIT`: session configuration
//! - `RUST_LOG`: log filter (default `info`)

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use schoolhub_auth::PrincipalRegistry;
use schoolhub_session::{FileStorage, Session, SessionConfig};
use schoolhub_shell::{Cli, Shell};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    schoolhub_observability::init_with(cli.log_format);

    let storage = match cli
        .storage
        .or_else(|| std::env::var_os("SCHOOLHUB_STORAGE_FILE").map(Into::into))
    {
        Some(path) => FileStorage::new(path),
        None => FileStorage::open_default().context("failed to locate local storage")?,
    };
    tracing::debug!(path = %storage.path().display(), "using local storage");

    let config = SessionConfig::from_env();
    let shell = Shell::start(Session::new(PrincipalRegistry::sample(), storage, config));

    let outcome = shell.execute(cli.command).await?;
    if outcome.success {
        println!("{}", outcome.output);
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("{}", outcome.output);
        Ok(ExitCode::FAILURE)
    }
}

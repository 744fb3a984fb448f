//! `schoolhub-shell`: the top-level application shell.
//!
//! The shell owns the process-wide [`Session`](schoolhub_session::Session):
//! it restores the persisted sign-in on start and drives login, logout, role
//! switching and access checks from CLI commands.

pub mod cli;
pub mod shell;

pub use cli::{Cli, Command};
pub use shell::{Outcome, Shell};

//! Command-line surface of the shell.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use schoolhub_observability::LogFormat;

/// SchoolHub session shell
#[derive(Parser, Debug)]
#[command(name = "schoolhub")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Local storage file (also: SCHOOLHUB_STORAGE_FILE)
    #[arg(long)]
    pub storage: Option<PathBuf>,

    /// Log output format: json or pretty
    #[arg(long, default_value = "pretty")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Sign in with email and the shared secret
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Sign out and erase the stored session
    Logout,

    /// Show the signed-in principal
    Whoami,

    /// List navigation items (current role, or --role)
    Nav {
        #[arg(long)]
        role: Option<String>,
    },

    /// Assume another role's identity (system administrators only)
    SwitchRole { role: String },

    /// Check whether the current principal may open a page
    Check {
        path: String,
        /// Print the full access decision as JSON
        #[arg(long)]
        explain: bool,
    },

    /// List roles with their capabilities
    Roles,
}

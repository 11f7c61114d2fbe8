// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rosterrs - the library behind the `roster` CLI.
//!
//! `roster` loads a site config (TOML) and a member dataset (JSON), and runs
//! the member filter engine from `roster-core` over them: listing and
//! searching members, showing the fields a site offers, and compiling and
//! restoring filter queries.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - clap definitions of the command line
//! - [`Config`] - site configuration and its lookup order
//! - [`Error`] - error type for all operations
//!
//! ```rust,ignore
//! use clap::Parser;
//!
//! let cli = rosterrs::Cli::parse_from(["roster", "compile", "-w", "email_count is 5"]);
//! rosterrs::run(cli)?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
mod env;
pub mod help;
mod schema;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, GlobalArgs, OutputFormat, SchemaCommand, WhereArgs, WhereClause};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

use commands::Context;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process
/// execution.
pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        global, command, ..
    } = cli;
    match command {
        Command::List {
            filter,
            search,
            clauses,
            output,
        } => {
            let ctx = Context::from_args(&global)?;
            commands::list::run(&ctx, filter, search, clauses.clauses, output)
        }
        Command::Fields { output } => {
            let ctx = Context::from_args(&global)?;
            commands::fields::run(&ctx, output)
        }
        Command::Compile { clauses, output } => {
            let ctx = Context::from_args(&global)?;
            commands::compile::run(&ctx, clauses.clauses, output)
        }
        Command::Parse {
            query,
            strict,
            output,
        } => {
            let ctx = Context::from_args(&global)?;
            commands::parse::run(&ctx, &query, strict, output)
        }
        Command::Schema { command } => commands::schema::run(command),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "roster", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Log filter used when `ROSTER_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the stderr log subscriber, filtered by `ROSTER_LOG`.
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = env::log_filter()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::{parse_now, GlobalArgs, WhereArgs, WhereClause};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "roster")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Filter, search and inspect a site's member list")]
#[command(
    long_about = "Filter, search and inspect a site's member list.\n\n\
    Filters are built from clauses (field, operator, value) and compiled into the \
    query strings used by the members API and the admin URL."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List members, optionally filtered and searched
    #[command(after_help = colors::examples("\
Examples:
  roster list                                      List all members
  roster list --where \"label is vip\"               Members labelled vip
  roster list -w \"status is-not free\" -w \"subscribed is true\"
                                                   Combine clauses with AND
  roster list --where \"email_open_rate is-greater 50\"
                                                   Open rate above 50%
  roster list --filter \"last_seen_at:>'2022-02-04 11:50:00'\"
                                                   Restore a compiled query
  roster list --search ada                         Search name and email
  roster list --now 2022-02-10T11:50:00Z -o json   Evaluate as of a fixed time

Clauses:
  Syntax: FIELD [OPERATOR] [VALUE]
  Operators: is, is-not, is-greater, is-less, is-or-greater, is-or-less
  Values: relations take comma-separated slugs, dates use YYYY-MM-DD"))]
    List {
        /// Compiled filter query, as in the `filter` URL parameter
        #[arg(long, short = 'f', value_name = "query")]
        filter: Option<String>,

        /// Case-insensitive search on name and email
        #[arg(long, short = 's', value_name = "text")]
        search: Option<String>,

        #[command(flatten)]
        clauses: WhereArgs,

        /// Output format
        #[arg(long, short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the filter fields this site offers
    #[command(after_help = colors::examples("\
Examples:
  roster fields                              Fields for the configured site
  roster fields --data members.json          Include label and tier values
  roster fields -o json                      Output as JSON"))]
    Fields {
        /// Output format
        #[arg(long, short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Compile filter clauses into a query
    #[command(after_help = colors::examples("\
Examples:
  roster compile -w \"email_count is 5\"               Prints email_count:5
  roster compile -w \"created_at is-or-less 2022-02-01\"
                                                     Date in the site timezone
  roster compile -w \"last_seen_at is-less 6\" --now 2022-02-10T11:50:00Z
                                                     Relative days as of --now"))]
    Compile {
        #[command(flatten)]
        clauses: WhereArgs,

        /// Output format
        #[arg(long, short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Restore filter clauses from a query
    #[command(after_help = colors::examples("\
Examples:
  roster parse 'status:paid+email_count:>5'        Show the clauses
  roster parse --strict 'label:[vip'               Fail on malformed input
  roster parse \"created_at:<='2022-02-01 23:59:59'\" -o json"))]
    Parse {
        /// Compiled filter query
        query: String,

        /// Fail instead of skipping predicates that cannot be restored
        #[arg(long)]
        strict: bool,

        /// Output format
        #[arg(long, short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Output JSON Schema for outputs and datasets
    #[command(after_help = colors::examples("\
Examples:
  roster schema list      Schema for list -o json
  roster schema dataset   Schema for --data files"))]
    Schema {
        #[command(subcommand)]
        command: SchemaCommand,
    },

    /// Generate shell completions
    #[command(after_help = colors::examples("\
Examples:
  roster completion bash > /etc/bash_completion.d/roster
  roster completion zsh > ~/.zfunc/_roster"))]
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaCommand {
    /// Schema for `roster list -o json`
    List,
    /// Schema for `roster fields -o json`
    Fields,
    /// Schema for `roster compile -o json`
    Compile,
    /// Schema for `roster parse -o json`
    Parse,
    /// Schema for member dataset files
    Dataset,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;

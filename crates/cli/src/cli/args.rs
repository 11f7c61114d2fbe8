// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs and value parsers for CLI commands.

use std::path::PathBuf;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use clap::Args;
use roster_core::{date, Operator};

use crate::error::Error;

/// Options that locate the site config and member data.
#[derive(Args, Clone, Debug, Default)]
pub struct GlobalArgs {
    /// Site config file (default: ROSTER_CONFIG, ./roster.toml, then the user config dir)
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Member dataset as JSON (default: ROSTER_DATA)
    #[arg(long, global = true, value_name = "path")]
    pub data: Option<PathBuf>,

    /// Override the site timezone (IANA name)
    #[arg(long, global = true, value_name = "zone")]
    pub timezone: Option<String>,

    /// Evaluate dates as of this instant instead of the current time
    #[arg(long, global = true, value_name = "time", value_parser = parse_now)]
    pub now: Option<DateTime<Utc>>,
}

/// Filter clauses given as `--where` options.
#[derive(Args, Clone, Debug, Default)]
pub struct WhereArgs {
    /// Filter clause "FIELD [OPERATOR] [VALUE]" (repeat to combine with AND)
    #[arg(long = "where", short = 'w', value_name = "clause")]
    pub clauses: Vec<WhereClause>,
}

/// One `--where` clause as typed on the command line.
///
/// The operator is optional and defaults to the field's first operator. A
/// missing value keeps the field's default value.
#[derive(Clone, Debug, PartialEq)]
pub struct WhereClause {
    pub field: String,
    pub operator: Option<Operator>,
    pub value: Option<String>,
}

impl FromStr for WhereClause {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| Error::InvalidWhere {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let mut words = s.split_whitespace();
        let field = words.next().ok_or_else(|| invalid("missing field"))?;
        let mut rest: Vec<&str> = words.collect();

        let operator = match rest.first().map(|w| w.parse::<Operator>()) {
            Some(Ok(op)) => {
                rest.remove(0);
                Some(op)
            }
            _ => None,
        };
        let value = if rest.is_empty() {
            None
        } else {
            Some(rest.join(" "))
        };

        Ok(WhereClause {
            field: field.to_string(),
            operator,
            value,
        })
    }
}

/// Parse `--now` as RFC 3339 or a UTC wire timestamp.
pub fn parse_now(s: &str) -> Result<DateTime<Utc>, Error> {
    date::parse_timestamp(s).map_err(|_| Error::InvalidNow(s.trim().to_string()))
}

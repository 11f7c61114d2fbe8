// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for roster-core operations.

use thiserror::Error;

/// All possible errors that can occur in roster-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown filter field: '{0}'\n  hint: run 'roster fields' to list the fields available on this site")]
    UnknownField(String),

    #[error("unknown operator: '{0}'\n  hint: valid operators are: is, is-not, is-greater, is-less, is-or-greater, is-or-less")]
    UnknownOperator(String),

    #[error("invalid operator '{op}' for field '{field}'\n  hint: '{field}' accepts: {valid}")]
    InvalidOperator {
        field: String,
        op: String,
        valid: String,
    },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("malformed filter expression at \"{token}\": {reason}")]
    MalformedExpression { token: String, reason: String },

    #[error("unknown timezone: '{0}'\n  hint: use an IANA zone name such as 'Europe/London' or 'Etc/UTC'")]
    UnknownTimezone(String),

    #[error("invalid timestamp: '{0}'\n  hint: expected 'YYYY-MM-DD HH:MM:SS' (UTC) or RFC 3339")]
    InvalidTimestamp(String),

    #[error("no filter at position {0}")]
    ClauseNotFound(usize),

    #[error("no filter fields are available for this site")]
    NoFilterFields,

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for roster-core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an error raised while reading one predicate of a compiled query.
    pub(crate) fn malformed(token: &str, source: Error) -> Error {
        match source {
            Error::MalformedExpression { .. } => source,
            other => Error::MalformedExpression {
                token: token.to_string(),
                reason: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

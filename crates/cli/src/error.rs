// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use thiserror::Error;

/// All possible errors that can occur in the rosterrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Filter(#[from] roster_core::Error),

    #[error("no member data\n  hint: pass --data <path> or set ROSTER_DATA")]
    DataRequired,

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid member data in {path}: {source}\n  hint: run 'roster schema dataset' for the expected format")]
    Data {
        path: PathBuf,
        source: roster_core::Error,
    },

    #[error("invalid config {path}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid --where '{input}': {reason}\n  hint: expected \"FIELD [OPERATOR] [VALUE]\", e.g. \"email_count is-greater 5\"")]
    InvalidWhere { input: String, reason: String },

    #[error("invalid --now '{0}'\n  hint: use RFC 3339 (2022-02-10T11:50:00Z) or 'YYYY-MM-DD HH:MM:SS' in UTC")]
    InvalidNow(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for rosterrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

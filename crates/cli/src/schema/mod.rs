// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Types for JSON output structures.
//!
//! These are separate from the runtime types in roster-core so the JSON
//! shape stays stable and carries schema annotations. `roster schema`
//! derives its JSON Schema definitions from them.

use roster_core::{Clause, SkippedPredicate};
use schemars::JsonSchema;
use serde::Serialize;

pub mod compile;
pub mod fields;
pub mod list;
pub mod parse;

/// JSON representation of one filter clause.
#[derive(Debug, JsonSchema, Serialize)]
pub struct ClauseJson {
    /// Field key, e.g. `email_count`.
    pub field: String,
    /// Operator name, e.g. `is-greater`.
    pub operator: String,
    /// Value as a user would type it; empty when none is set.
    pub value: String,
    /// Whether the clause narrows the member list.
    pub constrains: bool,
}

impl From<&Clause> for ClauseJson {
    fn from(clause: &Clause) -> Self {
        ClauseJson {
            field: clause.key().to_string(),
            operator: clause.operator().to_string(),
            value: clause.value().to_string(),
            constrains: clause.is_constraint(),
        }
    }
}

/// A predicate of a compiled query that could not be restored.
#[derive(Debug, JsonSchema, Serialize)]
pub struct SkippedJson {
    /// The predicate as it appeared in the query.
    pub token: String,
    /// Why it was skipped.
    pub reason: String,
}

impl From<&SkippedPredicate> for SkippedJson {
    fn from(skipped: &SkippedPredicate) -> Self {
        SkippedJson {
            token: skipped.token.clone(),
            reason: skipped.reason.clone(),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

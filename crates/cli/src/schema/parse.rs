// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `roster parse` JSON output.

use schemars::JsonSchema;
use serde::Serialize;

use super::{ClauseJson, SkippedJson};

/// JSON output structure for the parse command.
#[derive(Debug, JsonSchema, Serialize)]
pub struct ParseOutputJson {
    /// Restored clauses, in query order.
    pub clauses: Vec<ClauseJson>,
    /// The query recompiled from the restored clauses.
    pub canonical: String,
    /// Predicates that could not be restored.
    pub skipped: Vec<SkippedJson>,
}

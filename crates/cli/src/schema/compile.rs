// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `roster compile` JSON output.

use schemars::JsonSchema;
use serde::Serialize;

use super::ClauseJson;

/// JSON output structure for the compile command.
#[derive(Debug, JsonSchema, Serialize)]
pub struct CompileOutputJson {
    /// Compiled query; empty when no clause constrains.
    pub filter: String,
    /// URL query string carrying the filter.
    pub query_string: String,
    /// Clauses as entered.
    pub clauses: Vec<ClauseJson>,
    /// Extra table columns contributed by the clauses.
    pub columns: Vec<String>,
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `roster list` JSON output.

use roster_core::{BulkAction, Member, ViewState};
use schemars::JsonSchema;
use serde::Serialize;

use super::SkippedJson;

/// JSON output structure for the list command.
#[derive(Debug, JsonSchema, Serialize)]
pub struct ListOutputJson {
    /// What the list shows.
    pub state: ListState,
    /// Number of members shown.
    pub count: usize,
    /// Number of members in the dataset.
    pub total: usize,
    /// Applied compiled filter, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Applied search term, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// URL query string that restores this list.
    pub query_string: String,
    /// Extra table columns contributed by the active filters.
    pub columns: Vec<String>,
    /// Actions offered on the shown selection.
    pub bulk_actions: Vec<BulkActionJson>,
    /// Whether the shown selection can be exported.
    pub export_enabled: bool,
    /// Filter predicates that could not be restored.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedJson>,
    /// The shown members.
    pub members: Vec<Member>,
}

/// State of the member list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, JsonSchema, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListState {
    /// Neither filtered nor searched.
    All,
    /// Filtered or searched, with results.
    Matching,
    /// Filtered or searched, without results.
    NoMatches,
}

impl ListState {
    /// Convert a settled view state, with the number of members it shows.
    pub fn from_view(state: ViewState) -> (Self, usize) {
        match state {
            ViewState::All(n) => (ListState::All, n),
            ViewState::Matching(n) => (ListState::Matching, n),
            ViewState::NoMatches | ViewState::Pending => (ListState::NoMatches, 0),
        }
    }
}

/// A bulk action on the shown members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, JsonSchema, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkActionJson {
    AddLabel,
    RemoveLabel,
    Unsubscribe,
    Delete,
}

impl From<BulkAction> for BulkActionJson {
    fn from(action: BulkAction) -> Self {
        match action {
            BulkAction::AddLabel => BulkActionJson::AddLabel,
            BulkAction::RemoveLabel => BulkActionJson::RemoveLabel,
            BulkAction::Unsubscribe => BulkActionJson::Unsubscribe,
            BulkAction::Delete => BulkActionJson::Delete,
        }
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory member store answering list requests with compiled queries.

use serde::Serialize;

use crate::error::Result;
use crate::member::{Dataset, Member};
use crate::nql;
use crate::view::ListRequest;

/// Result of a list request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListResponse {
    pub members: Vec<Member>,
    pub total: usize,
}

#[derive(Debug, Clone, Default)]
pub struct MemberStore {
    dataset: Dataset,
}

impl MemberStore {
    /// A store over a dataset; members are kept in creation order.
    pub fn new(mut dataset: Dataset) -> Self {
        dataset
            .members
            .sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        MemberStore { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn members(&self) -> &[Member] {
        &self.dataset.members
    }

    /// Members matching a compiled filter and a search term.
    ///
    /// Predicates on unknown fields are ignored; any other malformed
    /// predicate fails the request.
    pub fn list(&self, filter: Option<&str>, search: Option<&str>) -> Result<ListResponse> {
        let predicates = nql::parse_predicates(filter.unwrap_or_default())?;
        let search = search.unwrap_or_default();
        let members: Vec<Member> = self
            .dataset
            .members
            .iter()
            .filter(|m| m.matches_search(search))
            .filter(|m| predicates.iter().all(|p| p.matches(m)))
            .cloned()
            .collect();
        tracing::debug!(
            filter = filter.unwrap_or_default(),
            search,
            total = members.len(),
            "listed members"
        );
        Ok(ListResponse {
            total: members.len(),
            members,
        })
    }

    pub fn handle(&self, request: &ListRequest) -> Result<ListResponse> {
        self.list(request.filter.as_deref(), request.search.as_deref())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;

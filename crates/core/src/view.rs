// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Member list view: URL parameters, list requests and result state.
//!
//! Every change to the filter or search term bumps a revision and yields a
//! [`ListRequest`]. Responses are matched against the latest revision, so a
//! slow response to an older request never overwrites a newer result.

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::form_urlencoded;

use crate::bar::FilterBar;
use crate::error::Result;
use crate::member::Member;
use crate::settings::SiteSettings;
use crate::store::{ListResponse, MemberStore};

/// URL query parameters of the member list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryParams {
    pub filter: Option<String>,
    pub search: Option<String>,
}

impl QueryParams {
    /// Parse a URL query string (with or without the leading `?`).
    ///
    /// Blank values count as absent; the first occurrence of a key wins.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = QueryParams::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "filter" => &mut params.filter,
                "search" => &mut params.search,
                _ => continue,
            };
            if slot.is_none() && !value.trim().is_empty() {
                *slot = Some(value.into_owned());
            }
        }
        params
    }

    /// Encode as a URL query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if let Some(filter) = self.filter.as_deref().filter(|f| !f.is_empty()) {
            serializer.append_pair("filter", filter);
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            serializer.append_pair("search", search);
        }
        serializer.finish()
    }
}

/// One request for a page of members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRequest {
    pub revision: u64,
    pub filter: Option<String>,
    pub search: Option<String>,
}

/// What the member list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "count", rename_all = "snake_case")]
pub enum ViewState {
    /// Waiting for the response to the latest request.
    Pending,
    /// Unfiltered, unsearched list.
    All(usize),
    /// Filtered or searched list with results.
    Matching(usize),
    /// Filtered or searched list without results.
    NoMatches,
}

/// Actions offered on a filtered selection of members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkAction {
    AddLabel,
    RemoveLabel,
    Unsubscribe,
    Delete,
}

impl BulkAction {
    pub const ALL: [BulkAction; 4] = [
        BulkAction::AddLabel,
        BulkAction::RemoveLabel,
        BulkAction::Unsubscribe,
        BulkAction::Delete,
    ];
}

#[derive(Debug, Clone)]
pub struct MembersView {
    bar: FilterBar,
    search: String,
    revision: u64,
    state: ViewState,
    members: Vec<Member>,
}

impl MembersView {
    /// Mount the view from URL parameters.
    pub fn mount(settings: SiteSettings, now: DateTime<Utc>, params: &QueryParams) -> Self {
        let bar = match params.filter.as_deref() {
            Some(filter) => FilterBar::mount_with_query(settings, now, filter),
            None => FilterBar::mount(settings, now),
        };
        MembersView {
            bar,
            search: params.search.clone().unwrap_or_default(),
            revision: 1,
            state: ViewState::Pending,
            members: Vec::new(),
        }
    }

    pub fn bar(&self) -> &FilterBar {
        &self.bar
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Members of the latest accepted response.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Edit the filter bar and request the resulting list.
    pub fn edit<F>(&mut self, f: F) -> Result<ListRequest>
    where
        F: FnOnce(&mut FilterBar) -> Result<()>,
    {
        f(&mut self.bar)?;
        Ok(self.bump())
    }

    pub fn set_search(&mut self, term: &str) -> ListRequest {
        self.search = term.to_string();
        self.bump()
    }

    /// Clear filter and search.
    pub fn show_all(&mut self) -> ListRequest {
        self.bar.reset();
        self.search.clear();
        self.bump()
    }

    /// Request for the current filter and search term.
    pub fn request(&self) -> ListRequest {
        let params = self.params();
        ListRequest {
            revision: self.revision,
            filter: params.filter,
            search: params.search,
        }
    }

    /// URL parameters reflecting the live filter and search term.
    pub fn params(&self) -> QueryParams {
        let filter = self.bar.live_query();
        let search = self.search.trim();
        QueryParams {
            filter: (!filter.is_empty()).then(|| filter.to_string()),
            search: (!search.is_empty()).then(|| search.to_string()),
        }
    }

    /// Accept a response; responses to superseded requests are dropped.
    ///
    /// Returns whether the response was accepted.
    pub fn receive(&mut self, revision: u64, response: ListResponse) -> bool {
        if revision != self.revision {
            tracing::debug!(revision, latest = self.revision, "dropping stale list response");
            return false;
        }
        self.state = if !self.is_narrowed() {
            ViewState::All(response.total)
        } else if response.total == 0 {
            ViewState::NoMatches
        } else {
            ViewState::Matching(response.total)
        };
        self.members = response.members;
        true
    }

    /// Fetch the current request from a store and accept the response.
    pub fn refresh(&mut self, store: &MemberStore) -> Result<()> {
        let request = self.request();
        let response = store.handle(&request)?;
        self.receive(request.revision, response);
        Ok(())
    }

    /// Whether a filter or a search term narrows the list.
    pub fn is_narrowed(&self) -> bool {
        !self.bar.live_query().is_empty() || !self.search.trim().is_empty()
    }

    /// Bulk actions offered for the current result.
    pub fn bulk_actions(&self) -> &'static [BulkAction] {
        if self.bulk_actions_available() {
            &BulkAction::ALL
        } else {
            &[]
        }
    }

    pub fn bulk_actions_available(&self) -> bool {
        self.is_narrowed() && matches!(self.state, ViewState::Matching(n) if n > 0)
    }

    pub fn export_enabled(&self) -> bool {
        !matches!(self.state, ViewState::NoMatches | ViewState::Pending)
    }

    fn bump(&mut self) -> ListRequest {
        self.revision += 1;
        self.state = ViewState::Pending;
        self.request()
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::{clause, TestContext};
use roster_core::Operator;

fn ids(view: &MembersView) -> Vec<&str> {
    view.members().iter().map(|m| m.id.as_str()).collect()
}

fn list(
    test: &TestContext,
    filter: Option<&str>,
    search: Option<&str>,
    clauses: &[WhereClause],
) -> (MemberStore, MembersView) {
    let store = test.ctx.store().unwrap();
    let view = run_impl(
        &test.ctx,
        &store,
        filter.map(str::to_string),
        search.map(str::to_string),
        clauses,
    )
    .unwrap();
    (store, view)
}

#[test]
fn unfiltered_lists_everyone() {
    let test = TestContext::new();
    let (store, view) = list(&test, None, None, &[]);
    assert_eq!(view.state(), ViewState::All(3));
    assert_eq!(ids(&view), ["m1", "m2", "m3"]);
    let lines = render_text(&test.ctx, &store, &view);
    assert_eq!(lines.last().unwrap(), "3 members");
}

#[test]
fn where_clause_filters_and_adds_column() {
    let test = TestContext::new();
    let (store, view) = list(&test, None, None, &[clause("label", None, Some("vip"))]);
    assert_eq!(view.state(), ViewState::Matching(2));
    assert_eq!(ids(&view), ["m1", "m3"]);
    assert_eq!(view.bar().columns(), ["label"]);

    let lines = render_text(&test.ctx, &store, &view);
    assert!(lines[0].contains("Label"));
    assert!(lines.contains(&"2 of 3 members match".to_string()));
    assert_eq!(lines.last().unwrap(), "filter: label:[vip]");
}

#[test]
fn compiled_filter_is_restored() {
    let test = TestContext::new();
    let (_, view) = list(&test, Some("status:-free"), None, &[]);
    assert_eq!(ids(&view), ["m1", "m3"]);
}

#[test]
fn filter_and_where_combine() {
    let test = TestContext::new();
    let (_, view) = list(
        &test,
        Some("label:[press]"),
        None,
        &[clause("subscribed", None, Some("false"))],
    );
    assert_eq!(ids(&view), ["m2"]);
    assert_eq!(
        view.bar().applied(),
        "label:[press]+subscribed:false"
    );
}

#[test]
fn search_matches_name_and_email() {
    let test = TestContext::new();
    let (_, view) = list(&test, None, Some("BOB"), &[]);
    assert_eq!(view.state(), ViewState::Matching(1));
    let (_, view) = list(&test, None, Some("example.org"), &[]);
    assert_eq!(ids(&view), ["m3"]);
}

#[test]
fn last_seen_relative_to_now() {
    let test = TestContext::new();
    let (_, view) = list(
        &test,
        None,
        None,
        &[clause("last_seen_at", Some(Operator::IsLess), Some("2"))],
    );
    assert_eq!(ids(&view), ["m1"]);
}

#[test]
fn no_matches_state_and_hint() {
    let test = TestContext::new();
    let (store, view) = list(&test, None, None, &[clause("email_count", None, Some("9"))]);
    assert_eq!(view.state(), ViewState::NoMatches);
    let lines = render_text(&test.ctx, &store, &view);
    assert_eq!(lines[0], "No members match the current filter");
    assert!(lines[1].contains("hint:"));

    let json = to_json(&store, &view);
    assert_eq!(json.state, ListState::NoMatches);
    assert!(!json.export_enabled);
    assert!(json.bulk_actions.is_empty());
    assert!(json.members.is_empty());
}

#[test]
fn malformed_filter_is_skipped() {
    let test = TestContext::new();
    let (store, view) = list(&test, Some("label:[vip"), None, &[]);
    assert_eq!(view.state(), ViewState::All(3));
    assert_eq!(view.bar().skipped().len(), 1);
    assert_eq!(to_json(&store, &view).skipped.len(), 1);
}

#[test]
fn json_output_carries_url_params() {
    let test = TestContext::new();
    let (store, view) = list(&test, None, Some("ada"), &[clause("label", None, Some("vip"))]);
    let json = to_json(&store, &view);
    assert_eq!(json.state, ListState::Matching);
    assert_eq!(json.count, 1);
    assert_eq!(json.total, 3);
    assert_eq!(json.filter.as_deref(), Some("label:[vip]"));
    assert_eq!(json.query_string, "filter=label%3A%5Bvip%5D&search=ada");
    assert_eq!(json.bulk_actions.len(), 4);
}

#[test]
fn invalid_where_operator_fails() {
    let test = TestContext::new();
    let store = test.ctx.store().unwrap();
    let result = run_impl(
        &test.ctx,
        &store,
        None,
        None,
        &[clause("subscribed", Some(Operator::IsGreater), None)],
    );
    assert!(result.is_err());
}

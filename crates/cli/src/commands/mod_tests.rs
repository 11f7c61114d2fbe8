// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

//! Test infrastructure for command testing.
//!
//! [`TestContext`] writes a small member dataset to a temp file and builds a
//! [`Context`] around it with a fixed clock and every field group enabled.

use super::*;
use chrono::TimeZone;
use chrono_tz::Tz;
use roster_core::Operator;
use tempfile::TempDir;

pub const DATASET: &str = r#"{
  "labels": [
    { "slug": "vip", "name": "VIP", "created_at": "2022-01-01T00:00:00Z" },
    { "slug": "press", "name": "Press", "created_at": "2022-01-02T00:00:00Z" }
  ],
  "tiers": [
    { "slug": "gold", "name": "Gold", "created_at": "2022-01-01T00:00:00Z" }
  ],
  "members": [
    {
      "id": "m1", "name": "Ada Lovelace", "email": "ada@example.com",
      "status": "paid", "labels": ["vip"], "tiers": ["gold"],
      "email_count": 5, "email_opened_count": 4, "email_open_rate": 80,
      "last_seen_at": "2022-02-09T10:00:00Z", "created_at": "2022-02-01T12:00:00Z"
    },
    {
      "id": "m2", "name": "Bob Stone", "email": "bob@example.com",
      "subscribed": false, "labels": ["press"],
      "email_count": 2, "email_opened_count": 0, "email_open_rate": 0,
      "created_at": "2022-02-03T12:00:00Z"
    },
    {
      "id": "m3", "email": "cy@example.org",
      "status": "comped", "labels": ["vip", "press"],
      "last_seen_at": "2022-01-20T08:00:00Z", "created_at": "2022-02-05T12:00:00Z"
    }
  ]
}"#;

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 2, 10, 11, 50, 0).unwrap()
}

/// A command context backed by [`DATASET`] on disk.
pub struct TestContext {
    pub ctx: Context,
    _temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_settings(SiteSettings::all_enabled(Tz::UTC))
    }

    pub fn with_settings(settings: SiteSettings) -> Self {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("members.json");
        fs::write(&path, DATASET).unwrap();
        TestContext {
            ctx: Context::new(settings, now(), Some(path)),
            _temp_dir: temp,
        }
    }
}

pub fn clause(field: &str, operator: Option<Operator>, value: Option<&str>) -> WhereClause {
    WhereClause {
        field: field.to_string(),
        operator,
        value: value.map(str::to_string),
    }
}

#[test]
fn fixture_dataset_loads() {
    let test = TestContext::new();
    let dataset = test.ctx.dataset().unwrap();
    assert_eq!(dataset.members.len(), 3);
    assert_eq!(dataset.labels.len(), 2);
}

#[test]
fn dataset_without_path_is_required() {
    let ctx = Context::new(SiteSettings::default(), now(), None);
    assert!(matches!(ctx.dataset(), Err(Error::DataRequired)));
    assert!(ctx.dataset_or_empty().unwrap().members.is_empty());
}

#[test]
fn malformed_dataset_names_the_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.json");
    fs::write(&path, "{ \"members\": [ { \"id\": 1 } ] }").unwrap();
    let err = load_dataset(&path).unwrap_err();
    assert!(matches!(err, Error::Data { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn add_clauses_builds_bar_in_order() {
    let test = TestContext::new();
    let mut bar = test.ctx.bar();
    add_clauses(
        &mut bar,
        &[
            clause("label", None, Some("vip")),
            clause("email_count", Some(Operator::IsGreater), Some("3")),
        ],
    )
    .unwrap();
    bar.apply();
    assert_eq!(bar.applied(), "label:[vip]+email_count:>3");
}

#[test]
fn add_clauses_rejects_invalid_operator() {
    let test = TestContext::new();
    let mut bar = test.ctx.bar();
    let err = add_clauses(&mut bar, &[clause("label", Some(Operator::IsGreater), None)]);
    assert!(err.is_err());
}

#[test]
fn add_clauses_rejects_hidden_field() {
    let test = TestContext::with_settings(SiteSettings::default());
    let mut bar = test.ctx.bar();
    let err = add_clauses(&mut bar, &[clause("status", None, Some("paid"))]).unwrap_err();
    assert!(err.to_string().contains("unknown filter field"));
}

#[test]
fn mismatched_value_constrains_nothing() {
    let test = TestContext::new();
    let mut bar = test.ctx.bar();
    add_clauses(&mut bar, &[clause("email_count", None, Some("lots"))]).unwrap();
    bar.apply();
    assert_eq!(bar.applied(), "");
}

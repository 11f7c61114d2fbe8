// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

const NEW_YORK: &str = r#"
timezone = "America/New_York"
paid_members = true

[labs]
members_time_filters = true
members_last_seen_filter = true
"#;

#[test]
fn compile_prints_query_and_url() {
    let site = Site::all_enabled();
    site.roster()
        .args(["compile", "-w", "status is paid", "-w", "email_count is-less 3"])
        .assert()
        .success()
        .stdout("status:paid+email_count:<3\n?filter=status%3Apaid%2Bemail_count%3A%3C3\n");
}

#[test]
fn compile_relative_days_uses_now() {
    let site = Site::all_enabled();
    site.roster()
        .args(["compile", "-w", "last_seen_at is-less 6"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "last_seen_at:>'2022-02-04 11:50:00'\n",
        ));
}

#[test]
fn compile_date_in_site_timezone() {
    let site = Site::new(NEW_YORK);
    site.roster()
        .args(["compile", "-w", "created_at is-or-less 2022-02-21"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "created_at:<='2022-02-22 04:59:59'\n",
        ));
}

#[test]
fn compile_timezone_flag_overrides_config() {
    let site = Site::new(NEW_YORK);
    site.roster()
        .args([
            "--timezone",
            "Etc/UTC",
            "compile",
            "-w",
            "created_at is-or-less 2022-02-21",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "created_at:<='2022-02-21 23:59:59'\n",
        ));
}

#[test]
fn compile_json() {
    let site = Site::all_enabled();
    let value = json(
        site.roster()
            .args(["compile", "-o", "json", "-w", "email_open_rate is-greater 50"]),
    );
    assert_eq!(value["filter"], "email_open_rate:>50");
    assert_eq!(value["clauses"][0]["operator"], "is-greater");
    assert_eq!(value["clauses"][0]["constrains"], true);
}

#[test]
fn compile_without_constraint_warns() {
    let site = Site::all_enabled();
    site.roster()
        .args(["compile", "-w", "email_count"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("no clause constrains"));
}

#[test]
fn compile_rejects_malformed_where() {
    let site = Site::all_enabled();
    site.roster()
        .args(["compile", "-w", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing field"));
}

#[test]
fn parse_prints_clauses() {
    let site = Site::all_enabled();
    site.roster()
        .args(["parse", "status:paid+email_count:>5"])
        .assert()
        .success()
        .stdout(
            "status is paid\nemail_count is-greater 5\n\ncanonical: status:paid+email_count:>5\n",
        );
}

#[test]
fn parse_restores_date_in_site_timezone() {
    let site = Site::new(NEW_YORK);
    site.roster()
        .args(["parse", "created_at:<='2022-02-22 04:59:59'"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "created_at is-or-less 2022-02-21\n",
        ));
}

#[test]
fn parse_skips_malformed_with_warning() {
    let site = Site::all_enabled();
    site.roster()
        .args(["parse", "status:paid+email_count:lots"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("status is paid\n"))
        .stderr(predicate::str::contains(
            "warning: skipped filter \"email_count:lots\"",
        ));
}

#[test]
fn parse_strict_fails_on_malformed() {
    let site = Site::all_enabled();
    site.roster()
        .args(["parse", "--strict", "status:paid+email_count:lots"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: malformed filter expression"));
}

#[test]
fn parse_json_lists_skipped() {
    let site = Site::new("");
    let value = json(
        site.roster()
            .args(["parse", "-o", "json", "status:paid+label:[vip]"]),
    );
    assert_eq!(value["clauses"].as_array().unwrap().len(), 1);
    assert_eq!(value["clauses"][0]["field"], "label");
    assert_eq!(value["skipped"][0]["token"], "status:paid");
    assert_eq!(value["canonical"], "label:[vip]");
}

#[test]
fn parse_text_output() {
    let site = Site::all_enabled();
    let output = site
        .roster()
        .args(["parse", "label:-[vip,press]+subscribed:false"])
        .output()
        .unwrap();
    assert!(output.status.success());
    similar_asserts::assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "label is-not vip,press\nsubscribed is false\n\ncanonical: label:-[vip,press]+subscribed:false"
    );
}

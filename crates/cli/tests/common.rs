// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const NOW: &str = "2022-02-10T11:50:00Z";

pub const MEMBERS: &str = r#"{
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
      "subscriptions": [{ "status": "active", "plan_interval": "month" }],
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
    },
    {
      "id": "m4", "name": "Dee Ray", "email": "dee@example.net",
      "email_count": 5, "email_opened_count": 1, "email_open_rate": 20,
      "last_seen_at": "2022-02-06T12:00:00Z", "created_at": "2022-02-07T12:00:00Z"
    }
  ]
}"#;

pub const ALL_ENABLED: &str = r#"
timezone = "Etc/UTC"
paid_members = true
email = true

[labs]
members_last_seen_filter = true
members_time_filters = true
multiple_products = true
"#;

/// A temp site with a config and member data, isolated from the user's
/// environment.
pub struct Site {
    pub dir: TempDir,
}

impl Site {
    pub fn new(config: &str) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("roster.toml"), config).unwrap();
        std::fs::write(dir.path().join("members.json"), MEMBERS).unwrap();
        Site { dir }
    }

    pub fn all_enabled() -> Self {
        Site::new(ALL_ENABLED)
    }

    pub fn data(&self) -> PathBuf {
        self.dir.path().join("members.json")
    }

    /// `roster` run inside the site dir with `--data` and `--now` set.
    pub fn roster(&self) -> Command {
        let mut cmd = roster_in(self.dir.path());
        cmd.arg("--data").arg(self.data()).arg("--now").arg(NOW);
        cmd
    }
}

/// `roster` run in `dir` with no ambient config, data or colors.
pub fn roster_in(dir: &std::path::Path) -> Command {
    let mut cmd = cargo_bin_cmd!("roster");
    cmd.current_dir(dir)
        .env_remove("ROSTER_CONFIG")
        .env_remove("ROSTER_DATA")
        .env_remove("ROSTER_LOG")
        .env_remove("COLOR")
        .env("NO_COLOR", "1")
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("HOME", dir);
    cmd
}

pub fn roster() -> Command {
    let mut cmd = cargo_bin_cmd!("roster");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Run and parse stdout as JSON.
pub fn json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

pub fn ids(value: &serde_json::Value) -> Vec<String> {
    value["members"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_str().unwrap().to_string())
        .collect()
}

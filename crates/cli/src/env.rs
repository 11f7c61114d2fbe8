// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! The variable name constants are generated by `build.rs` and live in the
//! [`vars`] submodule.

use std::path::PathBuf;

/// Generated environment variable name constants.
pub mod vars {
    include!(concat!(env!("OUT_DIR"), "/env_vars.rs"));
}

/// Log filter directives from `ROSTER_LOG`, if set.
pub fn log_filter() -> Option<String> {
    std::env::var(vars::ROSTER_LOG)
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Site config path from `ROSTER_CONFIG`, if set.
pub fn config_path() -> Option<PathBuf> {
    non_empty_path(vars::ROSTER_CONFIG)
}

/// Member dataset path from `ROSTER_DATA`, if set.
pub fn data_path() -> Option<PathBuf> {
    non_empty_path(vars::ROSTER_DATA)
}

/// Returns `true` if `NO_COLOR=1`.
pub fn no_color() -> bool {
    std::env::var(vars::NO_COLOR).is_ok_and(|v| v == "1")
}

/// Returns `true` if `COLOR=1`.
pub fn force_color() -> bool {
    std::env::var(vars::COLOR).is_ok_and(|v| v == "1")
}

fn non_empty_path(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;

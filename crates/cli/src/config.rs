// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Site configuration.
//!
//! The config is a small TOML file describing the site the member list
//! belongs to:
//! - `timezone`: IANA zone that calendar dates in filters are read in
//! - `paid_members`, `email`: whether the subscription and email field groups apply
//! - `[labs]`: flags for the last-seen, created-at and tier fields
//!
//! It is looked up from `--config`, then `ROSTER_CONFIG`, then
//! `./roster.toml`, then `<user config dir>/roster/config.toml`. Without any
//! of those the defaults apply.

use std::fs;
use std::path::{Path, PathBuf};

use roster_core::settings::parse_timezone;
use roster_core::{Labs, SiteSettings};
use serde::{Deserialize, Serialize};

use crate::env;
use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "roster.toml";
const USER_CONFIG_DIR: &str = "roster";
const USER_CONFIG_FILE: &str = "config.toml";

/// Site configuration as written in TOML.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// IANA timezone name (default: Etc/UTC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// A payment provider is connected (default: false).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_members: Option<bool>,
    /// Outbound email is enabled (default: true).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<bool>,
    #[serde(default)]
    pub labs: Labs,
}

impl Config {
    /// Read a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| Error::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded site config");
        Ok(config)
    }

    /// Load the config found by [`locate`], or the defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let user_dir = dirs::config_dir().map(|d| d.join(USER_CONFIG_DIR));
        match locate(explicit, env::config_path(), &cwd, user_dir.as_deref()) {
            Some(path) => Config::load(&path),
            None => {
                tracing::debug!("no site config found, using defaults");
                Ok(Config::default())
            }
        }
    }

    /// The settings snapshot the filter engine works with.
    pub fn site_settings(&self) -> Result<SiteSettings> {
        let mut settings = SiteSettings::default();
        if let Some(name) = &self.timezone {
            settings.timezone = parse_timezone(name)?;
        }
        if let Some(paid) = self.paid_members {
            settings.paid_members = paid;
        }
        if let Some(email) = self.email {
            settings.email = email;
        }
        settings.labs = self.labs.clone();
        Ok(settings)
    }
}

/// Find the config file to load.
///
/// An explicit path or `ROSTER_CONFIG` is returned even if it does not
/// exist, so that loading it reports the problem. The working directory and
/// user config dir are only used when the file is present.
pub fn locate(
    explicit: Option<&Path>,
    from_env: Option<PathBuf>,
    cwd: &Path,
    user_dir: Option<&Path>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = from_env {
        return Some(path);
    }
    let local = cwd.join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }
    user_dir
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.is_file())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

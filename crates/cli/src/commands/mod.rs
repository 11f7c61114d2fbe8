// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod compile;
pub mod fields;
pub mod list;
pub mod parse;
pub mod schema;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use roster_core::settings::parse_timezone;
use roster_core::{Dataset, FilterBar, FilterContext, MemberStore, SiteSettings};

use crate::cli::{GlobalArgs, WhereClause};
use crate::config::Config;
use crate::env;
use crate::error::{Error, Result};

/// Everything a command needs from the environment: the site settings, the
/// clock and where the member data lives.
#[derive(Debug, Clone)]
pub struct Context {
    pub settings: SiteSettings,
    pub now: DateTime<Utc>,
    data: Option<PathBuf>,
}

impl Context {
    /// Resolve config, timezone override, clock and data path from flags
    /// and the environment.
    pub fn from_args(global: &GlobalArgs) -> Result<Self> {
        let config = Config::resolve(global.config.as_deref())?;
        let mut settings = config.site_settings()?;
        if let Some(name) = &global.timezone {
            settings.timezone = parse_timezone(name)?;
        }
        Ok(Context::new(
            settings,
            global.now.unwrap_or_else(Utc::now),
            global.data.clone().or_else(env::data_path),
        ))
    }

    pub fn new(settings: SiteSettings, now: DateTime<Utc>, data: Option<PathBuf>) -> Self {
        Context {
            settings,
            now,
            data,
        }
    }

    pub fn filter_context(&self) -> FilterContext {
        FilterContext::for_site(&self.settings, self.now)
    }

    /// A filter bar freshly mounted for this site.
    pub fn bar(&self) -> FilterBar {
        FilterBar::mount(self.settings.clone(), self.now)
    }

    /// The member dataset; required.
    pub fn dataset(&self) -> Result<Dataset> {
        match &self.data {
            Some(path) => load_dataset(path),
            None => Err(Error::DataRequired),
        }
    }

    /// The member dataset if one was given, else an empty one.
    pub fn dataset_or_empty(&self) -> Result<Dataset> {
        match &self.data {
            Some(path) => load_dataset(path),
            None => Ok(Dataset::default()),
        }
    }

    pub fn store(&self) -> Result<MemberStore> {
        Ok(MemberStore::new(self.dataset()?))
    }
}

/// Read a member dataset from a JSON file.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = Dataset::from_json(&content).map_err(|source| Error::Data {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        members = dataset.members.len(),
        "loaded member data"
    );
    Ok(dataset)
}

/// Add `--where` clauses to a bar, in order.
///
/// Values that do not fit the field are kept but constrain nothing; they are
/// reported with a warning.
pub fn add_clauses(bar: &mut FilterBar, clauses: &[WhereClause]) -> roster_core::Result<()> {
    for clause in clauses {
        let index = bar.add_clause_for(&clause.field)?;
        if let Some(op) = clause.operator {
            bar.set_operator(index, op)?;
        }
        if let Some(value) = &clause.value {
            bar.set_value(index, value)?;
            if bar.clauses().get(index).is_some_and(|c| !c.is_constraint()) {
                tracing::warn!(
                    field = clause.field.as_str(),
                    value = value.as_str(),
                    "value does not fit the field, clause ignored"
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

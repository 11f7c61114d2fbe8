// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter bar state.
//!
//! The bar owns the clauses being edited and the query they compile to.
//! It moves between three states:
//!
//! ```text
//!            add_clause / edits              apply
//!   Idle ─────────────────────────▶ Editing ───────▶ Applied
//!    ▲                                 │                │
//!    └──── reset / last clause removed ┴────────────────┘
//! ```
//!
//! The compiled query is recomputed after every edit and the member list
//! follows it live (see [`FilterBar::live_query`]). The *applied* query only
//! changes on [`FilterBar::apply`], [`FilterBar::reset`] and removal of the
//! last clause.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::clause::{Clause, Expression};
use crate::compile::{self, SkippedPredicate};
use crate::error::{Error, Result};
use crate::registry::{self, FieldDescriptor, Operator};
use crate::settings::{FilterContext, SiteSettings};

/// Lifecycle state of the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarState {
    Idle,
    Editing,
    Applied,
}

#[derive(Debug, Clone)]
pub struct FilterBar {
    settings: SiteSettings,
    ctx: FilterContext,
    expression: Expression,
    state: BarState,
    compiled: String,
    applied: String,
    skipped: Vec<SkippedPredicate>,
}

impl FilterBar {
    /// A fresh bar for the current settings and time.
    pub fn mount(settings: SiteSettings, now: DateTime<Utc>) -> Self {
        let ctx = FilterContext::for_site(&settings, now);
        FilterBar {
            settings,
            ctx,
            expression: Expression::new(),
            state: BarState::Idle,
            compiled: String::new(),
            applied: String::new(),
            skipped: Vec::new(),
        }
    }

    /// A bar restored from a compiled query, e.g. the `filter` URL parameter.
    ///
    /// Predicates that cannot be restored, or that name fields this site does
    /// not offer, are skipped with a warning. The bar is applied when at
    /// least one clause survives.
    pub fn mount_with_query(settings: SiteSettings, now: DateTime<Utc>, query: &str) -> Self {
        let mut bar = FilterBar::mount(settings, now);
        let parsed = compile::parse_lenient(query, &bar.ctx);
        bar.skipped = parsed.skipped;

        for clause in parsed.clauses {
            if clause.field().is_visible(&bar.settings) {
                bar.expression.push(clause);
            } else {
                tracing::warn!(
                    field = clause.key(),
                    "skipping filter on field not offered by this site"
                );
                bar.skipped.push(SkippedPredicate {
                    token: compile::compile(std::slice::from_ref(&clause), &bar.ctx),
                    reason: format!("field '{}' is not available on this site", clause.key()),
                });
            }
        }

        bar.recompile();
        if !bar.expression.is_empty() {
            bar.apply();
        }
        bar
    }

    pub fn state(&self) -> BarState {
        self.state
    }

    pub fn settings(&self) -> &SiteSettings {
        &self.settings
    }

    pub fn context(&self) -> &FilterContext {
        &self.ctx
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn clauses(&self) -> &[Clause] {
        self.expression.clauses()
    }

    /// Predicates dropped while restoring from a query.
    pub fn skipped(&self) -> &[SkippedPredicate] {
        &self.skipped
    }

    /// Fields this bar offers, in display order.
    pub fn fields(&self) -> Vec<&'static FieldDescriptor> {
        registry::visible_fields(&self.settings)
    }

    /// Append a clause on the first offered field.
    pub fn add_clause(&mut self) -> Result<usize> {
        let field = self
            .fields()
            .first()
            .copied()
            .ok_or(Error::NoFilterFields)?;
        self.add_clause_for(field.key)
    }

    /// Append a clause on a specific field.
    pub fn add_clause_for(&mut self, key: &str) -> Result<usize> {
        let field = self.offered(key)?;
        let index = self.expression.push(Clause::new(field.key, &self.ctx)?);
        self.edited();
        Ok(index)
    }

    /// Change the field of a clause; operator and value reset to its defaults.
    pub fn set_field(&mut self, index: usize, key: &str) -> Result<()> {
        let field = self.offered(key)?;
        let ctx = self.ctx;
        self.expression.get_mut(index)?.set_field(field.key, &ctx)?;
        self.edited();
        Ok(())
    }

    pub fn set_operator(&mut self, index: usize, op: Operator) -> Result<()> {
        self.expression.get_mut(index)?.set_operator(op)?;
        self.edited();
        Ok(())
    }

    /// Set a clause value from raw input. Input that does not parse is kept
    /// and constrains nothing.
    pub fn set_value(&mut self, index: usize, raw: &str) -> Result<()> {
        self.expression.get_mut(index)?.set_input(raw);
        self.edited();
        Ok(())
    }

    /// Remove a clause. Removing the last one clears the applied filter.
    pub fn remove_clause(&mut self, index: usize) -> Result<()> {
        self.expression.remove(index)?;
        if self.expression.is_empty() {
            self.reset();
        } else {
            self.edited();
        }
        Ok(())
    }

    /// Apply the current clauses to the member list.
    pub fn apply(&mut self) {
        self.applied = self.compiled.clone();
        self.state = if self.expression.is_empty() {
            BarState::Idle
        } else {
            BarState::Applied
        };
        tracing::debug!(filter = %self.applied, "applied filter");
    }

    /// Drop every clause and the applied filter.
    pub fn reset(&mut self) {
        self.expression.clear();
        self.skipped.clear();
        self.compiled.clear();
        self.applied.clear();
        self.state = BarState::Idle;
    }

    /// Query compiled from the clauses as currently edited.
    pub fn compiled(&self) -> &str {
        &self.compiled
    }

    /// Query last applied to the member list; empty when unfiltered.
    pub fn applied(&self) -> &str {
        &self.applied
    }

    /// Query the member list is filtered by: the compiled query while
    /// editing, the applied one otherwise.
    pub fn live_query(&self) -> &str {
        match self.state {
            BarState::Editing => &self.compiled,
            BarState::Idle | BarState::Applied => &self.applied,
        }
    }

    /// Number of clauses that constrain the result.
    pub fn active_count(&self) -> usize {
        self.expression.active_count()
    }

    /// Whether the member list is currently filtered.
    pub fn is_applied(&self) -> bool {
        !self.applied.is_empty()
    }

    /// Extra member table columns for the applied clauses.
    pub fn columns(&self) -> Vec<&'static str> {
        if self.state == BarState::Idle {
            return Vec::new();
        }
        self.expression.columns()
    }

    fn offered(&self, key: &str) -> Result<&'static FieldDescriptor> {
        let field = registry::descriptor(key)?;
        if !field.is_visible(&self.settings) {
            return Err(Error::UnknownField(key.to_string()));
        }
        Ok(field)
    }

    fn edited(&mut self) {
        self.state = BarState::Editing;
        self.recompile();
    }

    fn recompile(&mut self) {
        self.compiled = compile::compile(self.expression.clauses(), &self.ctx);
    }
}

#[cfg(test)]
#[path = "bar_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Editable filter clauses and the expression that owns them.
//!
//! A [`Clause`] is one filter row: field, operator and value. Its fields are
//! private so the invariants hold after every edit:
//!
//! - the operator is always one the field allows;
//! - changing the field resets the operator and value to the new field's
//!   defaults;
//! - user input that does not fit the field's type is kept verbatim as
//!   [`ClauseValue::Invalid`] and constrains nothing.

use chrono::NaiveDate;
use std::fmt;

use crate::date;
use crate::error::{Error, Result};
use crate::registry::{self, FieldDescriptor, Operator, ValueType};
use crate::settings::FilterContext;

/// Largest day count a relative-days clause accepts.
pub const MAX_RELATIVE_DAYS: u32 = 1_000_000;

/// Value of a filter clause.
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseValue {
    /// Nothing entered yet.
    Empty,
    Bool(bool),
    /// One value of a fixed enumeration.
    Text(String),
    Number(f64),
    /// Number of days ago.
    Days(u32),
    Date(NaiveDate),
    /// Related entity slugs.
    Set(Vec<String>),
    /// Input that does not parse for the field's type.
    Invalid(String),
}

impl ClauseValue {
    /// Whether this value narrows the result set.
    pub fn is_constraint(&self) -> bool {
        match self {
            ClauseValue::Empty | ClauseValue::Invalid(_) => false,
            ClauseValue::Set(slugs) => !slugs.is_empty(),
            _ => true,
        }
    }

    /// Parse raw user input for a value type.
    ///
    /// Never fails: blank input becomes [`ClauseValue::Empty`] and input that
    /// does not fit becomes [`ClauseValue::Invalid`].
    pub fn parse_input(value_type: ValueType, raw: &str) -> ClauseValue {
        let input = raw.trim();
        if input.is_empty() {
            return ClauseValue::Empty;
        }
        let parsed = match value_type {
            ValueType::Boolean(_) => match input.to_lowercase().as_str() {
                "true" => Some(ClauseValue::Bool(true)),
                "false" => Some(ClauseValue::Bool(false)),
                _ => None,
            },
            ValueType::Enum(values) => values
                .iter()
                .find(|(value, _)| *value == input)
                .map(|(value, _)| ClauseValue::Text((*value).to_string())),
            ValueType::Integer => input
                .parse::<u64>()
                .ok()
                .map(|n| ClauseValue::Number(n as f64)),
            ValueType::Percentage => input
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite() && (0.0..=100.0).contains(n))
                .map(ClauseValue::Number),
            ValueType::RelativeDays => input
                .parse::<u32>()
                .ok()
                .filter(|days| *days <= MAX_RELATIVE_DAYS)
                .map(ClauseValue::Days),
            ValueType::Date => date::parse_date(input).map(ClauseValue::Date),
            ValueType::Relation(_) => {
                let mut slugs: Vec<String> = Vec::new();
                for slug in input.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                    if !slugs.iter().any(|s| s == slug) {
                        slugs.push(slug.to_string());
                    }
                }
                Some(ClauseValue::Set(slugs))
            }
        };
        parsed.unwrap_or_else(|| ClauseValue::Invalid(raw.to_string()))
    }

    /// Whether a typed value is acceptable for a value type.
    fn fits(&self, value_type: ValueType) -> bool {
        match (self, value_type) {
            (ClauseValue::Empty, _) => true,
            (ClauseValue::Invalid(_), _) => true,
            (ClauseValue::Bool(_), ValueType::Boolean(_)) => true,
            (ClauseValue::Text(text), ValueType::Enum(values)) => {
                values.iter().any(|(value, _)| *value == text.as_str())
            }
            (ClauseValue::Number(n), ValueType::Integer) => *n >= 0.0 && n.fract() == 0.0,
            (ClauseValue::Number(n), ValueType::Percentage) => (0.0..=100.0).contains(n),
            (ClauseValue::Days(_), ValueType::RelativeDays) => true,
            (ClauseValue::Date(_), ValueType::Date) => true,
            (ClauseValue::Set(_), ValueType::Relation(_)) => true,
            _ => false,
        }
    }
}

/// Render a number the way a user would type it.
pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

impl fmt::Display for ClauseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClauseValue::Empty => Ok(()),
            ClauseValue::Bool(b) => write!(f, "{b}"),
            ClauseValue::Text(text) => write!(f, "{text}"),
            ClauseValue::Number(n) => write!(f, "{}", format_number(*n)),
            ClauseValue::Days(days) => write!(f, "{days}"),
            ClauseValue::Date(d) => write!(f, "{}", d.format(date::DATE_FORMAT)),
            ClauseValue::Set(slugs) => write!(f, "{}", slugs.join(",")),
            ClauseValue::Invalid(raw) => write!(f, "{raw}"),
        }
    }
}

/// One filter row.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    field: &'static FieldDescriptor,
    operator: Operator,
    value: ClauseValue,
}

impl Clause {
    /// A clause on `key` with the field's default operator and value.
    pub fn new(key: &str, ctx: &FilterContext) -> Result<Self> {
        let field = registry::descriptor(key)?;
        Ok(Clause::defaults_for(field, ctx))
    }

    /// A fully specified clause, validated against the field.
    pub fn with(key: &str, operator: Operator, value: ClauseValue) -> Result<Self> {
        let field = registry::descriptor(key)?;
        if !field.allows(operator) {
            return Err(field.invalid_operator(operator.as_str()));
        }
        if !value.fits(field.value_type) {
            return Err(Error::InvalidValue {
                field: field.key.to_string(),
                reason: format!("'{value}' is not a valid {} value", field.value_type.name()),
            });
        }
        Ok(Clause {
            field,
            operator,
            value,
        })
    }

    fn defaults_for(field: &'static FieldDescriptor, ctx: &FilterContext) -> Self {
        Clause {
            field,
            operator: field.default_operator(),
            value: field.default_value(ctx),
        }
    }

    pub fn field(&self) -> &'static FieldDescriptor {
        self.field
    }

    pub fn key(&self) -> &'static str {
        self.field.key
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn value(&self) -> &ClauseValue {
        &self.value
    }

    /// Whether this clause narrows the result set.
    pub fn is_constraint(&self) -> bool {
        self.value.is_constraint()
    }

    /// Switch to another field, resetting operator and value to its defaults.
    pub fn set_field(&mut self, key: &str, ctx: &FilterContext) -> Result<()> {
        let field = registry::descriptor(key)?;
        *self = Clause::defaults_for(field, ctx);
        Ok(())
    }

    pub fn set_operator(&mut self, operator: Operator) -> Result<()> {
        if !self.field.allows(operator) {
            return Err(self.field.invalid_operator(operator.as_str()));
        }
        self.operator = operator;
        Ok(())
    }

    /// Set the value from raw user input; never rejects the input.
    pub fn set_input(&mut self, raw: &str) {
        self.value = ClauseValue::parse_input(self.field.value_type, raw);
    }

    /// Set an already typed value.
    pub fn set_value(&mut self, value: ClauseValue) -> Result<()> {
        if !value.fits(self.field.value_type) {
            return Err(Error::InvalidValue {
                field: self.field.key.to_string(),
                reason: format!(
                    "'{value}' is not a valid {} value",
                    self.field.value_type.name()
                ),
            });
        }
        self.value = value;
        Ok(())
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field.key, self.operator, self.value)
    }
}

/// Ordered, AND-combined list of clauses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expression {
    clauses: Vec<Clause>,
}

impl Expression {
    pub fn new() -> Self {
        Expression::default()
    }

    pub fn from_clauses(clauses: Vec<Clause>) -> Self {
        Expression { clauses }
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn push(&mut self, clause: Clause) -> usize {
        self.clauses.push(clause);
        self.clauses.len() - 1
    }

    pub fn get(&self, index: usize) -> Result<&Clause> {
        self.clauses.get(index).ok_or(Error::ClauseNotFound(index))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Clause> {
        self.clauses
            .get_mut(index)
            .ok_or(Error::ClauseNotFound(index))
    }

    pub fn remove(&mut self, index: usize) -> Result<Clause> {
        if index >= self.clauses.len() {
            return Err(Error::ClauseNotFound(index));
        }
        Ok(self.clauses.remove(index))
    }

    pub fn clear(&mut self) {
        self.clauses.clear();
    }

    /// Number of clauses that narrow the result set.
    pub fn active_count(&self) -> usize {
        self.clauses.iter().filter(|c| c.is_constraint()).count()
    }

    /// Extra member table columns, in clause order, without duplicates.
    pub fn columns(&self) -> Vec<&'static str> {
        let mut columns: Vec<&'static str> = Vec::new();
        for clause in &self.clauses {
            if clause.is_constraint() && clause.field.column && !columns.contains(&clause.key()) {
                columns.push(clause.key());
            }
        }
        columns
    }
}

#[cfg(test)]
#[path = "clause_tests.rs"]
mod tests;

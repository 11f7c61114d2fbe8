// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Translation between filter clauses and compiled queries.
//!
//! [`lower`] turns one clause into a wire predicate and [`raise`] turns one
//! back. Dates are where the two forms differ:
//!
//! - `last_seen_at` clauses count days; their predicates carry the UTC
//!   instant that many days before `now`. `is-less 6` (seen within the last
//!   6 days) becomes `>'now-6d'`, `is-greater 6` becomes `<='now-6d'`.
//! - `created_at` clauses hold site-local dates; their predicates carry the
//!   UTC start or end of that local day, picked so that each operator keeps
//!   its meaning for the whole day.

use serde::Serialize;

use crate::clause::{Clause, ClauseValue};
use crate::date::{self, DayEdge};
use crate::error::{Error, Result};
use crate::nql::{self, Comparator, Operand, Predicate};
use crate::registry::{Operator, ValueType};
use crate::settings::FilterContext;

/// Lower a clause to its wire predicate.
///
/// Returns `None` when the clause does not constrain anything.
pub fn lower(clause: &Clause, ctx: &FilterContext) -> Option<Predicate> {
    if !clause.is_constraint() {
        return None;
    }
    let field = clause.field();
    let op = clause.operator();

    let (comparator, operand) = match (field.value_type, clause.value()) {
        (ValueType::Relation(_), ClauseValue::Set(slugs)) => {
            (Comparator::from(op), Operand::Set(slugs.clone()))
        }
        (ValueType::Boolean(_), ClauseValue::Bool(b)) => (Comparator::from(op), Operand::Bool(*b)),
        (ValueType::Enum(_), ClauseValue::Text(text)) => {
            (Comparator::from(op), Operand::Text(text.clone()))
        }
        (ValueType::Integer | ValueType::Percentage, ClauseValue::Number(n)) => {
            (Comparator::from(op), Operand::Number(*n))
        }
        (ValueType::RelativeDays, ClauseValue::Days(days)) => {
            let comparator = match op {
                Operator::IsLess => Comparator::Gt,
                Operator::IsGreater => Comparator::Le,
                Operator::IsOrLess => Comparator::Ge,
                Operator::IsOrGreater => Comparator::Lt,
                Operator::Is | Operator::IsNot => return None,
            };
            let Some(instant) = date::days_before(ctx.now, *days) else {
                tracing::debug!(field = field.key, days, "day count out of range, not compiled");
                return None;
            };
            (comparator, Operand::Timestamp(instant))
        }
        (ValueType::Date, ClauseValue::Date(day)) => {
            let edge = match op {
                Operator::IsLess | Operator::IsOrGreater => DayEdge::Start,
                Operator::IsOrLess | Operator::IsGreater => DayEdge::End,
                Operator::Is | Operator::IsNot => return None,
            };
            let instant = date::to_utc_boundary(*day, ctx.timezone, edge);
            (Comparator::from(op), Operand::Timestamp(instant))
        }
        (_, value) => {
            tracing::debug!(field = field.key, %value, "value does not fit field, not compiled");
            return None;
        }
    };

    Some(Predicate {
        field,
        comparator,
        operand,
    })
}

/// Raise a wire predicate back to an editable clause.
pub fn raise(predicate: &Predicate, ctx: &FilterContext) -> Result<Clause> {
    let field = predicate.field;
    let (operator, value) = match (&predicate.operand, field.value_type) {
        (Operand::Timestamp(instant), ValueType::RelativeDays) => {
            let operator = match predicate.comparator {
                Comparator::Gt | Comparator::Ge => Operator::IsLess,
                Comparator::Lt | Comparator::Le => Operator::IsGreater,
                other => return Err(field.invalid_operator(other.name())),
            };
            let days = date::whole_days_between(*instant, ctx.now);
            (operator, ClauseValue::Days(days))
        }
        (Operand::Timestamp(instant), ValueType::Date) => (
            Operator::from(predicate.comparator),
            ClauseValue::Date(date::to_local_date(*instant, ctx.timezone)),
        ),
        (Operand::Timestamp(instant), _) => {
            return Err(Error::InvalidValue {
                field: field.key.to_string(),
                reason: format!(
                    "unexpected timestamp '{}'",
                    date::format_timestamp(*instant)
                ),
            });
        }
        (Operand::Set(slugs), _) => (
            Operator::from(predicate.comparator),
            ClauseValue::Set(slugs.clone()),
        ),
        (Operand::Bool(b), _) => (Operator::from(predicate.comparator), ClauseValue::Bool(*b)),
        (Operand::Text(text), _) => (
            Operator::from(predicate.comparator),
            ClauseValue::Text(text.clone()),
        ),
        (Operand::Number(n), _) => (
            Operator::from(predicate.comparator),
            ClauseValue::Number(*n),
        ),
    };
    Clause::with(field.key, operator, value)
}

/// Compile clauses into a query, omitting those that constrain nothing.
pub fn compile(clauses: &[Clause], ctx: &FilterContext) -> String {
    let predicates: Vec<Predicate> = clauses.iter().filter_map(|c| lower(c, ctx)).collect();
    let query = nql::render(&predicates);
    tracing::debug!(clauses = clauses.len(), %query, "compiled filter");
    query
}

/// Parse a query into clauses, failing on the first malformed predicate.
///
/// Predicates on unknown fields are skipped with a warning.
pub fn parse(query: &str, ctx: &FilterContext) -> Result<Vec<Clause>> {
    nql::parse_predicates(query)?
        .iter()
        .map(|p| raise(p, ctx).map_err(|e| Error::malformed(&p.to_string(), e)))
        .collect()
}

/// A predicate that [`parse_lenient`] could not restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedPredicate {
    pub token: String,
    pub reason: String,
}

/// Result of a lenient parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedQuery {
    pub clauses: Vec<Clause>,
    pub skipped: Vec<SkippedPredicate>,
}

/// Parse a query into clauses, skipping anything that cannot be restored.
pub fn parse_lenient(query: &str, ctx: &FilterContext) -> ParsedQuery {
    let mut parsed = ParsedQuery::default();
    for segment in nql::split_predicates(query) {
        let restored = nql::parse_predicate(segment).and_then(|p| raise(&p, ctx));
        match restored {
            Ok(clause) => parsed.clauses.push(clause),
            Err(e) => {
                tracing::warn!(segment, error = %e, "skipping filter predicate");
                parsed.skipped.push(SkippedPredicate {
                    token: segment.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }
    tracing::debug!(
        restored = parsed.clauses.len(),
        skipped = parsed.skipped.len(),
        "parsed filter"
    );
    parsed
}

/// Normalize a query by restoring and recompiling it.
pub fn canonicalize(query: &str, ctx: &FilterContext) -> String {
    compile(&parse_lenient(query, ctx).clauses, ctx)
}

#[cfg(test)]
#[path = "compile_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Evaluation of compiled predicates against members.

use chrono::{DateTime, Utc};

use crate::member::Member;

use super::expr::{Comparator, Operand, Predicate};

/// A member attribute as seen by a predicate.
enum Attribute<'a> {
    Bool(bool),
    Text(&'a str),
    Number(f64),
    Timestamp(DateTime<Utc>),
    /// Multi-valued attribute; `is` means any element matches.
    Set(Vec<&'a str>),
    /// Attribute has no value.
    Null,
}

fn attribute<'a>(member: &'a Member, key: &str) -> Attribute<'a> {
    match key {
        "label" => Attribute::Set(member.labels.iter().map(String::as_str).collect()),
        "product" => Attribute::Set(member.tiers.iter().map(String::as_str).collect()),
        "subscribed" => Attribute::Bool(member.subscribed),
        "status" => Attribute::Text(member.status.as_str()),
        "subscriptions.plan_interval" => Attribute::Set(
            member
                .subscriptions
                .iter()
                .map(|s| s.plan_interval.as_str())
                .collect(),
        ),
        "subscriptions.status" => Attribute::Set(
            member
                .subscriptions
                .iter()
                .map(|s| s.status.as_str())
                .collect(),
        ),
        "email_count" => Attribute::Number(f64::from(member.email_count)),
        "email_opened_count" => Attribute::Number(f64::from(member.email_opened_count)),
        "email_open_rate" => member
            .email_open_rate
            .map_or(Attribute::Null, Attribute::Number),
        "last_seen_at" => member
            .last_seen_at
            .map_or(Attribute::Null, Attribute::Timestamp),
        "created_at" => Attribute::Timestamp(member.created_at),
        _ => Attribute::Null,
    }
}

impl Comparator {
    /// Apply an ordering comparator to two ordered values.
    fn compare<T: PartialOrd>(&self, left: T, right: T) -> bool {
        match self {
            Comparator::Eq => left == right,
            Comparator::Ne => left != right,
            Comparator::Gt => left > right,
            Comparator::Lt => left < right,
            Comparator::Ge => left >= right,
            Comparator::Le => left <= right,
        }
    }
}

impl Predicate {
    /// Whether a member satisfies this predicate.
    ///
    /// A member without a value for the field only satisfies `-` (is-not).
    pub fn matches(&self, member: &Member) -> bool {
        let attr = attribute(member, self.field.key);
        match (&attr, &self.operand) {
            (Attribute::Null, _) => self.comparator == Comparator::Ne,
            (Attribute::Set(have), Operand::Set(want)) => {
                let any = want.iter().any(|w| have.contains(&w.as_str()));
                self.equality(any)
            }
            (Attribute::Set(have), Operand::Text(want)) => {
                self.equality(have.contains(&want.as_str()))
            }
            (Attribute::Text(have), Operand::Text(want)) => self.equality(*have == want.as_str()),
            (Attribute::Text(have), Operand::Set(want)) => {
                self.equality(want.iter().any(|w| w == have))
            }
            (Attribute::Bool(have), Operand::Bool(want)) => self.equality(have == want),
            (Attribute::Number(have), Operand::Number(want)) => {
                self.comparator.compare(*have, *want)
            }
            (Attribute::Timestamp(have), Operand::Timestamp(want)) => {
                self.comparator.compare(*have, *want)
            }
            _ => {
                tracing::debug!(predicate = %self, "operand does not fit attribute");
                false
            }
        }
    }

    fn equality(&self, matched: bool) -> bool {
        match self.comparator {
            Comparator::Ne => !matched,
            _ => matched,
        }
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod tests;

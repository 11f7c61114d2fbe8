// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed predicates of a compiled query and their textual rendering.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::clause::format_number;
use crate::date;
use crate::registry::{FieldDescriptor, Operator};

/// Comparison of a compiled predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// No symbol.
    Eq,
    /// `-`
    Ne,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Ge,
    /// `<=`
    Le,
}

impl Comparator {
    /// Symbol written between the colon and the operand.
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparator::Eq => "",
            Comparator::Ne => "-",
            Comparator::Gt => ">",
            Comparator::Lt => "<",
            Comparator::Ge => ">=",
            Comparator::Le => "<=",
        }
    }

    /// Human-readable name for error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Comparator::Eq => "=",
            other => other.symbol(),
        }
    }
}

impl From<Operator> for Comparator {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Is => Comparator::Eq,
            Operator::IsNot => Comparator::Ne,
            Operator::IsGreater => Comparator::Gt,
            Operator::IsLess => Comparator::Lt,
            Operator::IsOrGreater => Comparator::Ge,
            Operator::IsOrLess => Comparator::Le,
        }
    }
}

impl From<Comparator> for Operator {
    fn from(cmp: Comparator) -> Self {
        match cmp {
            Comparator::Eq => Operator::Is,
            Comparator::Ne => Operator::IsNot,
            Comparator::Gt => Operator::IsGreater,
            Comparator::Lt => Operator::IsLess,
            Comparator::Ge => Operator::IsOrGreater,
            Comparator::Le => Operator::IsOrLess,
        }
    }
}

/// Typed right-hand side of a predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Bool(bool),
    Text(String),
    Number(f64),
    Timestamp(DateTime<Utc>),
    Set(Vec<String>),
}

/// One `field:op operand` term of a compiled query.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub field: &'static FieldDescriptor,
    pub comparator: Comparator,
    pub operand: Operand,
}

/// Characters that force an atom to be quoted.
const RESERVED: &[char] = &['+', ',', ':', '[', ']', '\'', '"', '(', ')', '\\'];

fn needs_quotes(atom: &str) -> bool {
    atom.is_empty()
        || atom.starts_with(['-', '<', '>'])
        || atom.chars().any(|c| c.is_whitespace() || RESERVED.contains(&c))
}

/// Render an atom, quoting it when it would not survive parsing bare.
pub(crate) fn render_atom(atom: &str) -> String {
    if needs_quotes(atom) {
        format!("'{}'", atom.replace('\\', "\\\\").replace('\'', "\\'"))
    } else {
        atom.to_string()
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Bool(b) => write!(f, "{b}"),
            Operand::Text(text) => write!(f, "{}", render_atom(text)),
            Operand::Number(n) => write!(f, "{}", format_number(*n)),
            Operand::Timestamp(ts) => write!(f, "'{}'", date::format_timestamp(*ts)),
            Operand::Set(items) => {
                let items: Vec<String> = items.iter().map(|s| render_atom(s)).collect();
                write!(f, "[{}]", items.join(","))
            }
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}{}",
            self.field.key,
            self.comparator.symbol(),
            self.operand
        )
    }
}

/// Render predicates as one compiled query.
pub fn render(predicates: &[Predicate]) -> String {
    predicates
        .iter()
        .map(Predicate::to_string)
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
#[path = "expr_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser for compiled queries.
//!
//! Parsing happens in two steps: [`split_predicates`] cuts a query at the
//! top-level `+` separators, then each segment is read into a syntactic
//! predicate and typed against the field registry.

use crate::date;
use crate::error::{Error, Result};
use crate::registry::{self, FieldDescriptor, ValueType};

use super::expr::{Comparator, Operand, Predicate};

/// Right-hand side before typing.
#[derive(Debug, Clone, PartialEq)]
enum RawOperand {
    Atom(String),
    List(Vec<String>),
}

/// A predicate as written, before its field is resolved.
#[derive(Debug, Clone, PartialEq)]
struct RawPredicate<'a> {
    field: &'a str,
    comparator: Comparator,
    operand: RawOperand,
}

/// Split a query into predicate segments at top-level `+`.
///
/// Separators inside quotes or brackets are kept. A blank query yields no
/// segments; empty segments between separators are kept so that parsing
/// can report them.
pub fn split_predicates(input: &str) -> Vec<&str> {
    if input.trim().is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;
    let mut in_quote = false;
    let mut escaped = false;

    for (i, c) in input.char_indices() {
        if in_quote {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '\'' => in_quote = false,
                _ => {}
            }
            continue;
        }
        match c {
            '\'' => in_quote = true,
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            '+' if depth == 0 => {
                segments.push(input[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(input[start..].trim());
    segments
}

/// Parse one `field:op operand` segment into a typed predicate.
///
/// # Errors
///
/// [`Error::UnknownField`] when the field is not in the registry,
/// [`Error::MalformedExpression`] for anything else that does not parse or
/// does not fit the field.
pub fn parse_predicate(segment: &str) -> Result<Predicate> {
    let segment = segment.trim();
    let raw = read_predicate(segment).map_err(|reason| Error::MalformedExpression {
        token: segment.to_string(),
        reason,
    })?;
    let field = registry::descriptor(raw.field)?;
    type_predicate(field, raw.comparator, raw.operand).map_err(|e| Error::malformed(segment, e))
}

/// Parse a whole compiled query.
///
/// Predicates on unknown fields are skipped with a warning; any other
/// problem fails the whole query.
pub fn parse_predicates(input: &str) -> Result<Vec<Predicate>> {
    let mut predicates = Vec::new();
    for segment in split_predicates(input) {
        match parse_predicate(segment) {
            Ok(predicate) => predicates.push(predicate),
            Err(Error::UnknownField(key)) => {
                tracing::warn!(field = %key, segment, "skipping predicate on unknown field");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(predicates)
}

fn read_predicate(segment: &str) -> std::result::Result<RawPredicate<'_>, String> {
    if segment.is_empty() {
        return Err("empty predicate".to_string());
    }
    let colon = segment
        .find(':')
        .ok_or_else(|| "expected ':' after the field name".to_string())?;

    let field = segment[..colon].trim();
    if field.is_empty() {
        return Err("missing field name".to_string());
    }
    if !field
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
    {
        return Err(format!("invalid field name '{field}'"));
    }

    let (comparator, rest) = read_comparator(segment[colon + 1..].trim_start());
    let (operand, rest) = read_operand(rest.trim_start())?;
    if !rest.trim().is_empty() {
        return Err(format!("unexpected input '{}'", rest.trim()));
    }

    Ok(RawPredicate {
        field,
        comparator,
        operand,
    })
}

fn read_comparator(s: &str) -> (Comparator, &str) {
    for (symbol, comparator) in [
        (">=", Comparator::Ge),
        ("<=", Comparator::Le),
        (">", Comparator::Gt),
        ("<", Comparator::Lt),
        ("-", Comparator::Ne),
    ] {
        if let Some(rest) = s.strip_prefix(symbol) {
            return (comparator, rest);
        }
    }
    (Comparator::Eq, s)
}

fn read_operand(s: &str) -> std::result::Result<(RawOperand, &str), String> {
    let Some(mut rest) = s.strip_prefix('[') else {
        let (atom, rest) = read_atom(s, false)?;
        return Ok((RawOperand::Atom(atom), rest));
    };

    let mut items = Vec::new();
    loop {
        rest = rest.trim_start();
        if let Some(after) = rest.strip_prefix(']') {
            if items.is_empty() {
                return Ok((RawOperand::List(items), after));
            }
            return Err("expected a value after ','".to_string());
        }
        let (item, after) = read_atom(rest, true)?;
        items.push(item);
        rest = after.trim_start();
        if let Some(after) = rest.strip_prefix(',') {
            rest = after;
        } else if let Some(after) = rest.strip_prefix(']') {
            return Ok((RawOperand::List(items), after));
        } else {
            return Err("unterminated list, expected ',' or ']'".to_string());
        }
    }
}

/// Read a quoted or bare atom from the start of `s`.
fn read_atom(s: &str, in_list: bool) -> std::result::Result<(String, &str), String> {
    if let Some(body) = s.strip_prefix('\'') {
        let mut atom = String::new();
        let mut escaped = false;
        for (i, c) in body.char_indices() {
            match c {
                _ if escaped => {
                    atom.push(c);
                    escaped = false;
                }
                '\\' => escaped = true,
                '\'' => return Ok((atom, &body[i + 1..])),
                _ => atom.push(c),
            }
        }
        return Err("unterminated quote".to_string());
    }

    let end = s
        .find(|c: char| c.is_whitespace() || (in_list && (c == ',' || c == ']')))
        .unwrap_or(s.len());
    if end == 0 {
        return Err("missing value".to_string());
    }
    let atom = &s[..end];
    if let Some(bad) = atom.chars().find(|c| matches!(c, '[' | ']' | '\'' | ',')) {
        return Err(format!("unexpected '{bad}' in value '{atom}'"));
    }
    Ok((atom.to_string(), &s[end..]))
}

fn type_predicate(
    field: &'static FieldDescriptor,
    comparator: Comparator,
    operand: RawOperand,
) -> Result<Predicate> {
    if !accepts(field.value_type, comparator) {
        return Err(field.invalid_operator(comparator.name()));
    }
    let operand = type_operand(field, operand)?;
    Ok(Predicate {
        field,
        comparator,
        operand,
    })
}

/// Comparators a value type supports on the wire.
fn accepts(value_type: ValueType, comparator: Comparator) -> bool {
    use Comparator::*;
    match value_type {
        ValueType::Boolean(_) | ValueType::Enum(_) | ValueType::Relation(_) => {
            matches!(comparator, Eq | Ne)
        }
        ValueType::Integer | ValueType::Percentage => matches!(comparator, Eq | Gt | Lt),
        ValueType::Date | ValueType::RelativeDays => matches!(comparator, Gt | Lt | Ge | Le),
    }
}

fn type_operand(field: &FieldDescriptor, operand: RawOperand) -> Result<Operand> {
    let invalid = |reason: String| Error::InvalidValue {
        field: field.key.to_string(),
        reason,
    };

    if let ValueType::Relation(_) = field.value_type {
        let items = match operand {
            RawOperand::Atom(atom) => vec![atom],
            RawOperand::List(items) => items,
        };
        if items.is_empty() {
            return Err(invalid("empty list".to_string()));
        }
        return Ok(Operand::Set(items));
    }

    let atom = match operand {
        RawOperand::Atom(atom) => atom,
        RawOperand::List(_) => return Err(invalid("expected a single value".to_string())),
    };

    match field.value_type {
        ValueType::Boolean(_) => match atom.as_str() {
            "true" => Ok(Operand::Bool(true)),
            "false" => Ok(Operand::Bool(false)),
            _ => Err(invalid(format!("'{atom}' is not true or false"))),
        },
        ValueType::Enum(values) => {
            if values.iter().any(|(value, _)| *value == atom.as_str()) {
                Ok(Operand::Text(atom))
            } else {
                let valid: Vec<&str> = values.iter().map(|(value, _)| *value).collect();
                Err(invalid(format!(
                    "'{atom}' is not one of: {}",
                    valid.join(", ")
                )))
            }
        }
        ValueType::Integer => atom
            .parse::<u64>()
            .map(|n| Operand::Number(n as f64))
            .map_err(|_| invalid(format!("'{atom}' is not a whole number"))),
        ValueType::Percentage => atom
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(Operand::Number)
            .ok_or_else(|| invalid(format!("'{atom}' is not a number"))),
        ValueType::Date | ValueType::RelativeDays => {
            date::parse_timestamp(&atom).map(Operand::Timestamp)
        }
        ValueType::Relation(_) => Err(invalid("expected a list".to_string())),
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;

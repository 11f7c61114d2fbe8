// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema types for `roster fields` JSON output.

use roster_core::{FieldDescriptor, ValueOption};
use schemars::JsonSchema;
use serde::Serialize;

/// JSON output structure for the fields command.
#[derive(Debug, JsonSchema, Serialize)]
pub struct FieldsOutputJson {
    /// Timezone calendar dates are read in.
    pub timezone: String,
    /// Fields offered on this site, in display order.
    pub fields: Vec<FieldJson>,
}

/// One filterable field.
#[derive(Debug, JsonSchema, Serialize)]
pub struct FieldJson {
    /// Key used in clauses and compiled queries.
    pub key: String,
    /// Display label.
    pub label: String,
    /// Heading the field is listed under.
    pub group: String,
    /// Kind of value the field takes.
    pub value_type: String,
    /// Allowed operators; the first is the default.
    pub operators: Vec<String>,
    /// Whether an active filter on this field adds a table column.
    pub column: bool,
    /// Selectable values, for fields with a fixed or related set.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<ValueJson>,
}

impl FieldJson {
    pub fn new(field: &FieldDescriptor, values: Vec<ValueOption>) -> Self {
        FieldJson {
            key: field.key.to_string(),
            label: field.label.to_string(),
            group: field.group.label().to_string(),
            value_type: field.value_type.name().to_string(),
            operators: field.operators.iter().map(|op| op.to_string()).collect(),
            column: field.column,
            values: values.into_iter().map(ValueJson::from).collect(),
        }
    }
}

/// A selectable value.
#[derive(Debug, JsonSchema, Serialize)]
pub struct ValueJson {
    pub value: String,
    pub label: String,
}

impl From<ValueOption> for ValueJson {
    fn from(option: ValueOption) -> Self {
        ValueJson {
            value: option.value,
            label: option.label,
        }
    }
}

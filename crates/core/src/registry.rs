// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Declarative table of filterable member fields.
//!
//! Each [`FieldDescriptor`] names its value type, the operators it accepts
//! (first one is the default, order is the display order) and the
//! capabilities the site needs for the field to be offered at all.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::clause::ClauseValue;
use crate::date;
use crate::error::{Error, Result};
use crate::member::NamedEntity;
use crate::settings::{Capability, FilterContext, SiteSettings};

/// Operator of a filter clause as chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operator {
    Is,
    IsNot,
    IsGreater,
    IsLess,
    IsOrGreater,
    IsOrLess,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Is => "is",
            Operator::IsNot => "is-not",
            Operator::IsGreater => "is-greater",
            Operator::IsLess => "is-less",
            Operator::IsOrGreater => "is-or-greater",
            Operator::IsOrLess => "is-or-less",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "is" => Ok(Operator::Is),
            "is-not" => Ok(Operator::IsNot),
            "is-greater" => Ok(Operator::IsGreater),
            "is-less" => Ok(Operator::IsLess),
            "is-or-greater" => Ok(Operator::IsOrGreater),
            "is-or-less" => Ok(Operator::IsOrLess),
            _ => Err(Error::UnknownOperator(s.to_string())),
        }
    }
}

/// Heading a field is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldGroup {
    Basic,
    Subscription,
    Email,
}

impl FieldGroup {
    pub fn label(&self) -> &'static str {
        match self {
            FieldGroup::Basic => "Basic",
            FieldGroup::Subscription => "Subscription",
            FieldGroup::Email => "Email",
        }
    }
}

/// Which live entity list a relation field draws its values from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    Labels,
    Tiers,
}

/// Value type of a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueType {
    /// `true` / `false`, with display labels.
    Boolean(&'static [(&'static str, &'static str)]),
    /// One value out of a fixed enumeration of `(value, label)` pairs.
    Enum(&'static [(&'static str, &'static str)]),
    /// Non-negative whole number.
    Integer,
    /// Number between 0 and 100.
    Percentage,
    /// Calendar date in the site timezone.
    Date,
    /// Absolute timestamp addressed as a number of days ago.
    RelativeDays,
    /// Membership in a set of related entities.
    Relation(RelationKind),
}

impl ValueType {
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Boolean(_) => "boolean",
            ValueType::Enum(_) => "enum",
            ValueType::Integer => "integer",
            ValueType::Percentage => "percentage",
            ValueType::Date => "date",
            ValueType::RelativeDays => "days",
            ValueType::Relation(_) => "relation",
        }
    }
}

/// Description of one filterable field.
#[derive(Debug)]
pub struct FieldDescriptor {
    /// Key used in compiled queries.
    pub key: &'static str,
    pub label: &'static str,
    pub group: FieldGroup,
    pub value_type: ValueType,
    /// Allowed operators; the first is the default.
    pub operators: &'static [Operator],
    /// Capabilities the site must have for the field to be visible.
    pub requires: &'static [Capability],
    /// Whether an active filter on this field adds a column to the member table.
    pub column: bool,
}

impl PartialEq for FieldDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl FieldDescriptor {
    pub fn default_operator(&self) -> Operator {
        self.operators.first().copied().unwrap_or(Operator::Is)
    }

    pub fn allows(&self, op: Operator) -> bool {
        self.operators.contains(&op)
    }

    pub fn is_visible(&self, settings: &SiteSettings) -> bool {
        settings.capabilities().satisfies(self.requires)
    }

    /// Comma-separated operator names, for error hints.
    pub fn operator_names(&self) -> String {
        self.operators
            .iter()
            .map(Operator::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Default value for a freshly selected field.
    ///
    /// Booleans and enumerations apply their first value immediately; date
    /// filters start at today in the site timezone; everything else starts
    /// empty and constrains nothing until a value is entered.
    pub fn default_value(&self, ctx: &FilterContext) -> ClauseValue {
        match self.value_type {
            ValueType::Boolean(_) => ClauseValue::Bool(true),
            ValueType::Enum(values) => values
                .first()
                .map(|(value, _)| ClauseValue::Text((*value).to_string()))
                .unwrap_or(ClauseValue::Empty),
            ValueType::Date => ClauseValue::Date(date::today(ctx.now, ctx.timezone)),
            ValueType::Integer
            | ValueType::Percentage
            | ValueType::RelativeDays
            | ValueType::Relation(_) => ClauseValue::Empty,
        }
    }

    pub(crate) fn invalid_operator(&self, op: &str) -> Error {
        Error::InvalidOperator {
            field: self.key.to_string(),
            op: op.to_string(),
            valid: self.operator_names(),
        }
    }
}

const EQUALITY: &[Operator] = &[Operator::Is, Operator::IsNot];
const NUMERIC: &[Operator] = &[Operator::Is, Operator::IsGreater, Operator::IsLess];
const RELATIVE_DAYS: &[Operator] = &[Operator::IsLess, Operator::IsGreater];
const CALENDAR_DATE: &[Operator] = &[
    Operator::IsLess,
    Operator::IsOrLess,
    Operator::IsGreater,
    Operator::IsOrGreater,
];

const SUBSCRIBED_VALUES: &[(&str, &str)] = &[("true", "Subscribed"), ("false", "Unsubscribed")];

const STATUS_VALUES: &[(&str, &str)] = &[
    ("paid", "Paid"),
    ("free", "Free"),
    ("comped", "Complimentary"),
];

const PLAN_INTERVAL_VALUES: &[(&str, &str)] = &[("month", "Monthly"), ("year", "Yearly")];

const SUBSCRIPTION_STATUS_VALUES: &[(&str, &str)] = &[
    ("active", "Active"),
    ("trialing", "Trialing"),
    ("canceled", "Canceled"),
    ("unpaid", "Unpaid"),
    ("past_due", "Past due"),
    ("incomplete", "Incomplete"),
    ("incomplete_expired", "Incomplete - expired"),
];

static FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        key: "label",
        label: "Label",
        group: FieldGroup::Basic,
        value_type: ValueType::Relation(RelationKind::Labels),
        operators: EQUALITY,
        requires: &[],
        column: true,
    },
    FieldDescriptor {
        key: "product",
        label: "Tier",
        group: FieldGroup::Basic,
        value_type: ValueType::Relation(RelationKind::Tiers),
        operators: EQUALITY,
        requires: &[Capability::MultipleTiers],
        column: true,
    },
    FieldDescriptor {
        key: "subscribed",
        label: "Newsletter subscription",
        group: FieldGroup::Basic,
        value_type: ValueType::Boolean(SUBSCRIBED_VALUES),
        operators: EQUALITY,
        requires: &[],
        column: true,
    },
    FieldDescriptor {
        key: "last_seen_at",
        label: "Last seen",
        group: FieldGroup::Basic,
        value_type: ValueType::RelativeDays,
        operators: RELATIVE_DAYS,
        requires: &[Capability::LastSeenFilter],
        column: true,
    },
    FieldDescriptor {
        key: "created_at",
        label: "Created",
        group: FieldGroup::Basic,
        value_type: ValueType::Date,
        operators: CALENDAR_DATE,
        requires: &[Capability::TimeFilters],
        column: false,
    },
    FieldDescriptor {
        key: "status",
        label: "Member status",
        group: FieldGroup::Subscription,
        value_type: ValueType::Enum(STATUS_VALUES),
        operators: EQUALITY,
        requires: &[Capability::PaidMembers],
        column: true,
    },
    FieldDescriptor {
        key: "subscriptions.plan_interval",
        label: "Billing period",
        group: FieldGroup::Subscription,
        value_type: ValueType::Enum(PLAN_INTERVAL_VALUES),
        operators: EQUALITY,
        requires: &[Capability::PaidMembers],
        column: true,
    },
    FieldDescriptor {
        key: "subscriptions.status",
        label: "Stripe subscription status",
        group: FieldGroup::Subscription,
        value_type: ValueType::Enum(SUBSCRIPTION_STATUS_VALUES),
        operators: EQUALITY,
        requires: &[Capability::PaidMembers],
        column: true,
    },
    FieldDescriptor {
        key: "email_count",
        label: "Emails sent (all time)",
        group: FieldGroup::Email,
        value_type: ValueType::Integer,
        operators: NUMERIC,
        requires: &[Capability::Email],
        column: true,
    },
    FieldDescriptor {
        key: "email_opened_count",
        label: "Emails opened (all time)",
        group: FieldGroup::Email,
        value_type: ValueType::Integer,
        operators: NUMERIC,
        requires: &[Capability::Email],
        column: true,
    },
    FieldDescriptor {
        key: "email_open_rate",
        label: "Open rate (all time)",
        group: FieldGroup::Email,
        value_type: ValueType::Percentage,
        operators: NUMERIC,
        requires: &[Capability::Email],
        column: true,
    },
];

/// Every field, visible or not, in display order.
pub fn all_fields() -> &'static [FieldDescriptor] {
    FIELDS
}

/// Look up a field by key.
pub fn lookup(key: &str) -> Option<&'static FieldDescriptor> {
    FIELDS.iter().find(|field| field.key == key)
}

/// Look up a field by key, failing for unknown keys.
pub fn descriptor(key: &str) -> Result<&'static FieldDescriptor> {
    lookup(key).ok_or_else(|| Error::UnknownField(key.to_string()))
}

/// Allowed operators of a field, default first.
pub fn operators_for(key: &str) -> Result<&'static [Operator]> {
    Ok(descriptor(key)?.operators)
}

/// Whether a field is offered on a site with these settings.
pub fn is_visible(key: &str, settings: &SiteSettings) -> bool {
    lookup(key).is_some_and(|field| field.is_visible(settings))
}

/// Fields offered on a site with these settings, in display order.
pub fn visible_fields(settings: &SiteSettings) -> Vec<&'static FieldDescriptor> {
    let caps = settings.capabilities();
    FIELDS
        .iter()
        .filter(|field| caps.satisfies(field.requires))
        .collect()
}

/// Live entities that relation fields offer as values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueContext<'a> {
    pub labels: &'a [NamedEntity],
    pub tiers: &'a [NamedEntity],
}

/// One selectable value of a discrete field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueOption {
    pub value: String,
    pub label: String,
}

impl ValueOption {
    fn new(value: &str, label: &str) -> Self {
        ValueOption {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Selectable values of a discrete field.
///
/// Fixed enumerations keep their declared order; relation values are the
/// currently existing entities sorted by creation. Free-form fields return
/// an empty list.
pub fn values_for(key: &str, ctx: &ValueContext<'_>) -> Result<Vec<ValueOption>> {
    let field = descriptor(key)?;
    let values = match field.value_type {
        ValueType::Boolean(values) | ValueType::Enum(values) => values
            .iter()
            .map(|(value, label)| ValueOption::new(value, label))
            .collect(),
        ValueType::Relation(kind) => {
            let source = match kind {
                RelationKind::Labels => ctx.labels,
                RelationKind::Tiers => ctx.tiers,
            };
            let mut entities: Vec<&NamedEntity> = source.iter().collect();
            entities.sort_by(|a, b| {
                a.created_at
                    .cmp(&b.created_at)
                    .then_with(|| a.slug.cmp(&b.slug))
            });
            entities
                .into_iter()
                .map(|entity| ValueOption::new(&entity.slug, &entity.name))
                .collect()
        }
        ValueType::Integer | ValueType::Percentage | ValueType::Date | ValueType::RelativeDays => {
            Vec::new()
        }
    };
    Ok(values)
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use yare::parameterized;

fn keys(fields: &[&FieldDescriptor]) -> Vec<&'static str> {
    fields.iter().map(|field| field.key).collect()
}

fn entity(slug: &str, name: &str, day: u32) -> NamedEntity {
    NamedEntity {
        slug: slug.to_string(),
        name: name.to_string(),
        created_at: Utc.with_ymd_and_hms(2022, 1, day, 0, 0, 0).unwrap(),
    }
}

#[test]
fn every_field_has_an_operator() {
    for field in all_fields() {
        assert!(!field.operators.is_empty(), "{} has no operators", field.key);
    }
}

#[parameterized(
    label = { "label", &[Operator::Is, Operator::IsNot] },
    product = { "product", &[Operator::Is, Operator::IsNot] },
    subscribed = { "subscribed", &[Operator::Is, Operator::IsNot] },
    status = { "status", &[Operator::Is, Operator::IsNot] },
    plan_interval = { "subscriptions.plan_interval", &[Operator::Is, Operator::IsNot] },
    subscription_status = { "subscriptions.status", &[Operator::Is, Operator::IsNot] },
    email_count = { "email_count", &[Operator::Is, Operator::IsGreater, Operator::IsLess] },
    email_opened_count = { "email_opened_count", &[Operator::Is, Operator::IsGreater, Operator::IsLess] },
    email_open_rate = { "email_open_rate", &[Operator::Is, Operator::IsGreater, Operator::IsLess] },
    last_seen_at = { "last_seen_at", &[Operator::IsLess, Operator::IsGreater] },
    created_at = { "created_at", &[Operator::IsLess, Operator::IsOrLess, Operator::IsGreater, Operator::IsOrGreater] },
)]
fn operators_in_display_order(key: &str, expected: &[Operator]) {
    assert_eq!(operators_for(key).unwrap(), expected);
}

#[test]
fn created_at_defaults_to_is_less() {
    assert_eq!(descriptor("created_at").unwrap().default_operator(), Operator::IsLess);
}

#[test]
fn unknown_field_is_an_error() {
    let err = descriptor("favourite_colour").unwrap_err();
    assert!(matches!(err, Error::UnknownField(ref key) if key == "favourite_colour"));
    assert!(operators_for("nope").is_err());
}

#[test]
fn boolean_field_has_two_values() {
    let values = values_for("subscribed", &ValueContext::default()).unwrap();
    let values: Vec<_> = values.iter().map(|v| v.value.as_str()).collect();
    assert_eq!(values, ["true", "false"]);
}

#[test]
fn status_values_in_declared_order() {
    let values = values_for("status", &ValueContext::default()).unwrap();
    let values: Vec<_> = values.iter().map(|v| v.value.as_str()).collect();
    assert_eq!(values, ["paid", "free", "comped"]);
}

#[test]
fn subscription_status_values_in_declared_order() {
    let values = values_for("subscriptions.status", &ValueContext::default()).unwrap();
    let values: Vec<_> = values.iter().map(|v| v.value.as_str()).collect();
    assert_eq!(
        values,
        [
            "active",
            "trialing",
            "canceled",
            "unpaid",
            "past_due",
            "incomplete",
            "incomplete_expired"
        ]
    );
}

#[test]
fn relation_values_sorted_by_creation() {
    let labels = vec![
        entity("zeta", "Zeta", 3),
        entity("alpha", "Alpha", 5),
        entity("beta", "Beta", 1),
    ];
    let ctx = ValueContext {
        labels: &labels,
        tiers: &[],
    };
    let values = values_for("label", &ctx).unwrap();
    let slugs: Vec<_> = values.iter().map(|v| v.value.as_str()).collect();
    assert_eq!(slugs, ["beta", "zeta", "alpha"]);
    assert_eq!(values[0].label, "Beta");
}

#[test]
fn relation_values_reflect_live_additions() {
    let mut tiers = vec![entity("gold", "Gold", 1)];
    assert_eq!(
        values_for("product", &ValueContext { labels: &[], tiers: &tiers })
            .unwrap()
            .len(),
        1
    );
    tiers.push(entity("silver", "Silver", 2));
    let values = values_for("product", &ValueContext { labels: &[], tiers: &tiers }).unwrap();
    assert_eq!(values.len(), 2);
    assert_eq!(values[1].value, "silver");
}

#[test]
fn free_form_fields_have_no_values() {
    for key in ["email_count", "email_open_rate", "created_at", "last_seen_at"] {
        assert!(values_for(key, &ValueContext::default()).unwrap().is_empty());
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Visibility
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn everything_visible_when_all_enabled() {
    let settings = SiteSettings::all_enabled(Tz::UTC);
    assert_eq!(visible_fields(&settings).len(), all_fields().len());
}

#[test]
fn subscription_group_hidden_without_payment_provider() {
    let settings = SiteSettings {
        paid_members: false,
        ..SiteSettings::all_enabled(Tz::UTC)
    };
    let visible = visible_fields(&settings);
    assert!(visible.iter().all(|f| f.group != FieldGroup::Subscription));
    let keys = keys(&visible);
    assert!(!keys.contains(&"status"));
    assert!(!keys.contains(&"subscriptions.plan_interval"));
    assert!(!keys.contains(&"subscriptions.status"));
}

#[test]
fn email_group_hidden_when_email_disabled() {
    let settings = SiteSettings {
        email: false,
        ..SiteSettings::all_enabled(Tz::UTC)
    };
    let visible = visible_fields(&settings);
    assert!(visible.iter().all(|f| f.group != FieldGroup::Email));
    assert!(!is_visible("email_count", &settings));
    assert!(!is_visible("email_opened_count", &settings));
    assert!(!is_visible("email_open_rate", &settings));
}

#[test]
fn labs_flags_gate_single_fields() {
    let settings = SiteSettings::default();
    assert!(is_visible("label", &settings));
    assert!(is_visible("subscribed", &settings));
    assert!(!is_visible("last_seen_at", &settings));
    assert!(!is_visible("created_at", &settings));
    assert!(!is_visible("product", &settings));
}

#[test]
fn unknown_field_is_never_visible() {
    assert!(!is_visible("nope", &SiteSettings::all_enabled(Tz::UTC)));
}

#[test]
fn operator_round_trips_through_string() {
    for op in [
        Operator::Is,
        Operator::IsNot,
        Operator::IsGreater,
        Operator::IsLess,
        Operator::IsOrGreater,
        Operator::IsOrLess,
    ] {
        assert_eq!(op.to_string().parse::<Operator>().unwrap(), op);
    }
    assert!(matches!(
        "between".parse::<Operator>(),
        Err(Error::UnknownOperator(_))
    ));
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::clause::{Clause, ClauseValue};
use crate::member::{MemberStatus, PlanInterval, Subscription, SubscriptionStatus};
use crate::registry::Operator;
use chrono::{TimeZone, Utc};
use chrono_tz::Tz;
use yare::parameterized;

fn ctx() -> FilterContext {
    FilterContext::new(Tz::UTC, Utc.with_ymd_and_hms(2022, 2, 10, 11, 50, 0).unwrap())
}

fn members() -> Vec<Member> {
    (0..4)
        .map(|i| {
            let mut m = Member::new(
                format!("m{i}"),
                format!("m{i}@example.com"),
                Utc.with_ymd_and_hms(2022, 2, 1 + i, 12, 0, 0).unwrap(),
            );
            m.email_count = i * 2;
            m.email_open_rate = (i > 0).then(|| f64::from(i) * 25.0);
            m.subscribed = i % 2 == 0;
            m.status = [
                MemberStatus::Free,
                MemberStatus::Paid,
                MemberStatus::Comped,
                MemberStatus::Paid,
            ][i as usize];
            if i % 2 == 1 {
                m.subscriptions = vec![Subscription {
                    status: if i == 1 {
                        SubscriptionStatus::Active
                    } else {
                        SubscriptionStatus::Trialing
                    },
                    plan_interval: if i == 1 {
                        PlanInterval::Month
                    } else {
                        PlanInterval::Year
                    },
                }];
            }
            m
        })
        .collect()
}

#[test]
fn empty_expression_matches_everyone() {
    let members = members();
    assert_eq!(filter(&members, &Expression::new(), &ctx()).len(), 4);
}

#[test]
fn clauses_are_combined_with_and() {
    let members = members();
    let expr = Expression::from_clauses(vec![
        Clause::with("email_count", Operator::IsGreater, ClauseValue::Number(1.0)).unwrap(),
        Clause::with("email_open_rate", Operator::IsLess, ClauseValue::Number(75.0)).unwrap(),
    ]);
    let ids: Vec<_> = filter(&members, &expr, &ctx())
        .iter()
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(ids, ["m1", "m2"]);
}

#[test]
fn clause_without_value_constrains_nothing() {
    let members = members();
    let expr = Expression::from_clauses(vec![Clause::new("email_count", &ctx()).unwrap()]);
    assert!(members.iter().all(|m| matches(m, &expr, &ctx())));
}

#[test]
fn open_rate_compares_exactly() {
    let members = members();
    let expr = Expression::from_clauses(vec![Clause::with(
        "email_open_rate",
        Operator::Is,
        ClauseValue::Number(50.0),
    )
    .unwrap()]);
    let matched = filter(&members, &expr, &ctx());
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, "m2");
}

#[test]
fn null_open_rate_never_matches_relational() {
    let members = members();
    let expr = Expression::from_clauses(vec![Clause::with(
        "email_open_rate",
        Operator::IsLess,
        ClauseValue::Number(100.0),
    )
    .unwrap()]);
    assert!(!matches(&members[0], &expr, &ctx()));
}

fn matching_ids<'a>(members: &'a [Member], clause: Clause) -> Vec<&'a str> {
    let expr = Expression::from_clauses(vec![clause]);
    filter(members, &expr, &ctx())
        .iter()
        .map(|m| m.id.as_str())
        .collect()
}

fn text(value: &str) -> ClauseValue {
    ClauseValue::Text(value.to_string())
}

#[parameterized(
    subscribed = { "subscribed", ClauseValue::Bool(true) },
    unsubscribed = { "subscribed", ClauseValue::Bool(false) },
    free = { "status", text("free") },
    paid = { "status", text("paid") },
    comped = { "status", text("comped") },
    active_subscription = { "subscriptions.status", text("active") },
    canceled_subscription = { "subscriptions.status", text("canceled") },
    yearly = { "subscriptions.plan_interval", text("year") },
)]
fn is_not_is_the_complement_of_is(key: &str, value: ClauseValue) {
    let members = members();
    let is = matching_ids(&members, Clause::with(key, Operator::Is, value.clone()).unwrap());
    let is_not = matching_ids(&members, Clause::with(key, Operator::IsNot, value).unwrap());
    assert!(is.iter().all(|id| !is_not.contains(id)), "{is:?} / {is_not:?}");
    assert_eq!(is.len() + is_not.len(), members.len());
}

#[parameterized(
    count_below_all = { "email_count", 0.0, 4 },
    count_between = { "email_count", 3.0, 4 },
    count_on_value = { "email_count", 4.0, 4 },
    count_above_all = { "email_count", 7.0, 4 },
    rate_below_all = { "email_open_rate", 10.0, 3 },
    rate_on_value = { "email_open_rate", 50.0, 3 },
    rate_between = { "email_open_rate", 60.0, 3 },
    rate_top = { "email_open_rate", 100.0, 3 },
)]
fn threshold_splits_members_without_overlap(key: &str, threshold: f64, with_value: usize) {
    let members = members();
    let by = |op| {
        matching_ids(
            &members,
            Clause::with(key, op, ClauseValue::Number(threshold)).unwrap(),
        )
    };
    let greater = by(Operator::IsGreater);
    let less = by(Operator::IsLess);
    let equal = by(Operator::Is);

    assert!(greater.iter().all(|id| !less.contains(id)));
    assert!(equal.iter().all(|id| !greater.contains(id) && !less.contains(id)));
    assert_eq!(greater.len() + less.len() + equal.len(), with_value);
}

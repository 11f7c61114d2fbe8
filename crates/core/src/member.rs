// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Member records and the related entities they can belong to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::registry::ValueContext;

/// Membership level of a member.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum MemberStatus {
    #[default]
    Free,
    Paid,
    /// Complimentary access granted by staff.
    Comped,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Free => "free",
            MemberStatus::Paid => "paid",
            MemberStatus::Comped => "comped",
        }
    }
}

/// Payment provider state of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Trialing,
    Canceled,
    Unpaid,
    PastDue,
    Incomplete,
    IncompleteExpired,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Trialing => "trialing",
            SubscriptionStatus::Canceled => "canceled",
            SubscriptionStatus::Unpaid => "unpaid",
            SubscriptionStatus::PastDue => "past_due",
            SubscriptionStatus::Incomplete => "incomplete",
            SubscriptionStatus::IncompleteExpired => "incomplete_expired",
        }
    }
}

/// Billing period of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum PlanInterval {
    Month,
    Year,
}

impl PlanInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanInterval::Month => "month",
            PlanInterval::Year => "year",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.as_str())
                }
            }
        )*
    };
}

display_as_str!(MemberStatus, SubscriptionStatus, PlanInterval);

/// A paid subscription held by a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Subscription {
    pub status: SubscriptionStatus,
    pub plan_interval: PlanInterval,
}

/// A named entity members can be related to (a label or a tier).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct NamedEntity {
    /// Stable identifier used in compiled filters.
    pub slug: String,
    /// Display name.
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A subscriber record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Member {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    #[serde(default)]
    pub status: MemberStatus,
    /// Subscribed to the newsletter.
    #[serde(default = "default_subscribed")]
    pub subscribed: bool,
    /// Label slugs.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Tier slugs.
    #[serde(default)]
    pub tiers: Vec<String>,
    #[serde(default)]
    pub subscriptions: Vec<Subscription>,
    #[serde(default)]
    pub email_count: u32,
    #[serde(default)]
    pub email_opened_count: u32,
    /// Percentage of emails opened; absent until enough emails were sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_open_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

fn default_subscribed() -> bool {
    true
}

impl Member {
    /// A free, subscribed member with no activity.
    pub fn new(id: impl Into<String>, email: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Member {
            id: id.into(),
            name: None,
            email: email.into(),
            status: MemberStatus::Free,
            subscribed: true,
            labels: Vec::new(),
            tiers: Vec::new(),
            subscriptions: Vec::new(),
            email_count: 0,
            email_opened_count: 0,
            email_open_rate: None,
            last_seen_at: None,
            created_at,
        }
    }

    /// Case-insensitive substring match on name or email.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.email.to_lowercase().contains(&term)
            || self
                .name
                .as_deref()
                .is_some_and(|name| name.to_lowercase().contains(&term))
    }
}

/// A complete member list with the labels and tiers it refers to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Dataset {
    #[serde(default)]
    pub labels: Vec<NamedEntity>,
    #[serde(default)]
    pub tiers: Vec<NamedEntity>,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl Dataset {
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// The live relation targets offered as filter values.
    pub fn value_context(&self) -> ValueContext<'_> {
        ValueContext {
            labels: &self.labels,
            tiers: &self.tiers,
        }
    }
}

#[cfg(test)]
#[path = "member_tests.rs"]
mod tests;

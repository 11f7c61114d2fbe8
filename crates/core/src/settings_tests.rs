// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn defaults_enable_email_only() {
    let caps = SiteSettings::default().capabilities();
    assert!(caps.contains(Capability::Email));
    assert!(!caps.contains(Capability::PaidMembers));
    assert!(!caps.contains(Capability::LastSeenFilter));
    assert!(!caps.contains(Capability::TimeFilters));
    assert!(!caps.contains(Capability::MultipleTiers));
}

#[test]
fn all_enabled_satisfies_every_requirement() {
    let caps = SiteSettings::all_enabled(Tz::UTC).capabilities();
    assert!(caps.satisfies(&[
        Capability::PaidMembers,
        Capability::Email,
        Capability::LastSeenFilter,
        Capability::TimeFilters,
        Capability::MultipleTiers,
    ]));
}

#[test]
fn empty_requirement_is_always_satisfied() {
    assert!(Capabilities::empty().satisfies(&[]));
}

#[test]
fn missing_capability_fails_requirement() {
    let mut caps = Capabilities::empty();
    caps.insert(Capability::Email);
    assert!(!caps.satisfies(&[Capability::Email, Capability::PaidMembers]));
}

#[test]
fn parse_settings_from_toml_like_json() {
    let json = r#"{
        "timezone": "America/New_York",
        "paid_members": true,
        "labs": { "members_time_filters": true }
    }"#;
    let settings: SiteSettings = serde_json::from_str(json).unwrap();
    assert_eq!(settings.timezone, chrono_tz::America::New_York);
    assert!(settings.paid_members);
    assert!(settings.email, "email defaults to enabled");
    assert!(settings.labs.members_time_filters);
    assert!(!settings.labs.multiple_products);
}

#[test]
fn set_timezone_rejects_unknown_zone() {
    let mut settings = SiteSettings::default();
    let err = settings.set_timezone("Mars/Olympus_Mons").unwrap_err();
    assert!(matches!(err, Error::UnknownTimezone(_)));
    settings.set_timezone("Europe/London").unwrap();
    assert_eq!(settings.timezone, chrono_tz::Europe::London);
}

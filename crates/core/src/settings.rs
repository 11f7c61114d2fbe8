// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Site settings snapshot and the capability set derived from it.
//!
//! Whole groups of filter fields are gated by site configuration: the
//! subscription fields need a connected payment provider, the email fields
//! need outbound email, and a few fields sit behind labs flags. Gating is a
//! pure function of a [`SiteSettings`] value via [`Capabilities`].

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Configuration of the managed site that affects filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Site timezone. All calendar dates in filters are interpreted here.
    #[serde(default = "default_timezone")]
    pub timezone: Tz,
    /// True when a payment provider is connected.
    #[serde(default)]
    pub paid_members: bool,
    /// True when outbound email is enabled.
    #[serde(default = "default_true")]
    pub email: bool,
    /// Labs feature flags.
    #[serde(default)]
    pub labs: Labs,
}

/// Optional filter groups that are switched on individually.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labs {
    #[serde(default)]
    pub members_last_seen_filter: bool,
    #[serde(default)]
    pub members_time_filters: bool,
    #[serde(default)]
    pub multiple_products: bool,
}

fn default_timezone() -> Tz {
    Tz::UTC
}

fn default_true() -> bool {
    true
}

impl Default for SiteSettings {
    fn default() -> Self {
        SiteSettings {
            timezone: default_timezone(),
            paid_members: false,
            email: true,
            labs: Labs::default(),
        }
    }
}

impl SiteSettings {
    /// Settings with every optional filter group enabled.
    pub fn all_enabled(timezone: Tz) -> Self {
        SiteSettings {
            timezone,
            paid_members: true,
            email: true,
            labs: Labs {
                members_last_seen_filter: true,
                members_time_filters: true,
                multiple_products: true,
            },
        }
    }

    /// Replace the timezone from an IANA name.
    pub fn set_timezone(&mut self, name: &str) -> Result<()> {
        self.timezone = parse_timezone(name)?;
        Ok(())
    }

    /// Derive the capability set used for field visibility.
    pub fn capabilities(&self) -> Capabilities {
        let mut caps = Capabilities::empty();
        if self.paid_members {
            caps.insert(Capability::PaidMembers);
        }
        if self.email {
            caps.insert(Capability::Email);
        }
        if self.labs.members_last_seen_filter {
            caps.insert(Capability::LastSeenFilter);
        }
        if self.labs.members_time_filters {
            caps.insert(Capability::TimeFilters);
        }
        if self.labs.multiple_products {
            caps.insert(Capability::MultipleTiers);
        }
        caps
    }
}

/// Parse an IANA timezone name.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| Error::UnknownTimezone(name.to_string()))
}

/// A feature a filter field depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Payment provider connected.
    PaidMembers,
    /// Outbound email enabled.
    Email,
    LastSeenFilter,
    TimeFilters,
    MultipleTiers,
}

impl Capability {
    fn bit(self) -> u8 {
        match self {
            Capability::PaidMembers => 1,
            Capability::Email => 1 << 1,
            Capability::LastSeenFilter => 1 << 2,
            Capability::TimeFilters => 1 << 3,
            Capability::MultipleTiers => 1 << 4,
        }
    }
}

/// Set of [`Capability`] values enabled on a site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities(u8);

impl Capabilities {
    pub fn empty() -> Self {
        Capabilities(0)
    }

    pub fn insert(&mut self, cap: Capability) {
        self.0 |= cap.bit();
    }

    pub fn contains(&self, cap: Capability) -> bool {
        self.0 & cap.bit() != 0
    }

    /// True when every capability in `required` is present.
    pub fn satisfies(&self, required: &[Capability]) -> bool {
        required.iter().all(|cap| self.contains(*cap))
    }
}

/// Timezone and reference time used to resolve dates and relative days.
///
/// Build a fresh context whenever a filter bar is mounted so defaults such
/// as "today" are derived from the current time, never from a stale value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterContext {
    pub timezone: Tz,
    pub now: DateTime<Utc>,
}

impl FilterContext {
    pub fn new(timezone: Tz, now: DateTime<Utc>) -> Self {
        FilterContext { timezone, now }
    }

    pub fn for_site(settings: &SiteSettings, now: DateTime<Utc>) -> Self {
        FilterContext::new(settings.timezone, now)
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;

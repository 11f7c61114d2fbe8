// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Site-timezone date normalization.
//!
//! Calendar dates entered in a filter are days in the *site* timezone, not
//! UTC and not the timezone of the process. Compiled queries only carry UTC
//! instants, so a date becomes the start or end instant of that local day
//! and an instant read back from a query becomes the local day containing it.
//! Nothing here consults the process-local timezone.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{Error, Result};

/// Timestamp format used inside compiled queries (always UTC).
pub const WIRE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Calendar date format used for date filter values.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const SECONDS_PER_DAY: i64 = 86_400;

/// Which boundary of a local day to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayEdge {
    /// First instant of the day.
    Start,
    /// Last whole second of the day (`23:59:59` local).
    End,
}

/// Resolve a site-local calendar date to the UTC instant of one of its edges.
pub fn to_utc_boundary(date: NaiveDate, tz: Tz, edge: DayEdge) -> DateTime<Utc> {
    match edge {
        DayEdge::Start => start_of_day(date, tz),
        DayEdge::End => match date.succ_opt() {
            Some(next) => start_of_day(next, tz) - Duration::seconds(1),
            None => start_of_day(date, tz) + Duration::seconds(SECONDS_PER_DAY - 1),
        },
    }
}

/// First existing local instant of `date`.
///
/// Midnight can be skipped by a DST transition, in which case the day starts
/// at the first representable local time after it.
fn start_of_day(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let mut local = date.and_time(NaiveTime::default());
    for _ in 0..96 {
        if let Some(dt) = tz.from_local_datetime(&local).earliest() {
            return dt.with_timezone(&Utc);
        }
        local += Duration::minutes(15);
    }
    Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))
}

/// The site-local calendar date containing `instant`.
pub fn to_local_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Today's date in the site timezone.
pub fn today(now: DateTime<Utc>, tz: Tz) -> NaiveDate {
    to_local_date(now, tz)
}

/// Format an instant for a compiled query.
pub fn format_timestamp(instant: DateTime<Utc>) -> String {
    instant.format(WIRE_FORMAT).to_string()
}

/// Parse an instant from a compiled query.
///
/// Accepts the wire format (UTC) and RFC 3339.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, WIRE_FORMAT) {
        return Ok(naive.and_utc());
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| Error::InvalidTimestamp(s.to_string()))
}

/// Parse a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// The instant `days` whole days before `now`, truncated to the second.
///
/// Truncation keeps the value identical to what survives a round trip
/// through [`format_timestamp`]. `None` when the instant falls outside the
/// representable date range.
pub fn days_before(now: DateTime<Utc>, days: u32) -> Option<DateTime<Utc>> {
    Duration::try_days(i64::from(days))
        .and_then(|delta| now.checked_sub_signed(delta))
        .map(|instant| instant.trunc_subsecs(0))
}

/// Whole days elapsed from `instant` to `now` (never negative).
pub fn whole_days_between(instant: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let days = now.signed_duration_since(instant).num_days();
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

/// Table display of an instant as a site-local date, e.g. `21 Feb 2022`.
pub fn format_display_date(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format("%-d %b %Y").to_string()
}

/// Relative description of an instant, e.g. `5 days ago`.
pub fn days_ago(instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(instant).num_seconds();
    let days = (seconds + SECONDS_PER_DAY / 2).div_euclid(SECONDS_PER_DAY);
    match days {
        d if d <= 0 => "today".to_string(),
        1 => "1 day ago".to_string(),
        d => format!("{d} days ago"),
    }
}

#[cfg(test)]
#[path = "date_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering of member tables and field listings.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use roster_core::{date, registry, Member};

use crate::colors;

/// Placeholder for a cell without a value.
const NONE: &str = "-";

/// Columns every member table shows, before the filter columns.
const BASE_COLUMNS: [&str; 4] = ["Name", "Email", "Status", "Created"];

/// Display value of a filterable member attribute.
pub fn cell(member: &Member, key: &str, tz: Tz, now: DateTime<Utc>) -> String {
    let joined = |items: Vec<&str>| {
        if items.is_empty() {
            NONE.to_string()
        } else {
            items.join(", ")
        }
    };
    match key {
        "label" => joined(member.labels.iter().map(String::as_str).collect()),
        "product" => joined(member.tiers.iter().map(String::as_str).collect()),
        "subscribed" => String::from(if member.subscribed { "yes" } else { "no" }),
        "status" => member.status.as_str().to_string(),
        "subscriptions.plan_interval" => joined(
            member
                .subscriptions
                .iter()
                .map(|s| s.plan_interval.as_str())
                .collect(),
        ),
        "subscriptions.status" => {
            joined(member.subscriptions.iter().map(|s| s.status.as_str()).collect())
        }
        "email_count" => member.email_count.to_string(),
        "email_opened_count" => member.email_opened_count.to_string(),
        "email_open_rate" => member
            .email_open_rate
            .map_or_else(|| NONE.to_string(), |rate| format!("{}%", rate.round())),
        "last_seen_at" => member
            .last_seen_at
            .map_or_else(|| NONE.to_string(), |seen| date::days_ago(seen, now)),
        "created_at" => date::format_display_date(member.created_at, tz),
        _ => NONE.to_string(),
    }
}

/// Render members as an aligned table with the given extra columns.
pub fn member_table(
    members: &[Member],
    columns: &[&str],
    tz: Tz,
    now: DateTime<Utc>,
) -> Vec<String> {
    let mut headings: Vec<String> = BASE_COLUMNS.iter().map(|h| h.to_string()).collect();
    headings.extend(
        columns
            .iter()
            .map(|key| registry::lookup(key).map_or(*key, |f| f.label).to_string()),
    );

    let rows: Vec<Vec<String>> = members
        .iter()
        .map(|m| {
            let mut row = vec![
                m.name.clone().unwrap_or_else(|| NONE.to_string()),
                m.email.clone(),
                m.status.as_str().to_string(),
                date::format_display_date(m.created_at, tz),
            ];
            row.extend(columns.iter().map(|key| cell(m, key, tz, now)));
            row
        })
        .collect();

    let mut widths: Vec<usize> = headings.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, value) in widths.iter_mut().zip(row) {
            *width = (*width).max(value.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    let heading = pad_row(&headings, &widths);
    lines.push(if colors::should_colorize() {
        colors::header(&heading)
    } else {
        heading
    });
    lines.extend(rows.iter().map(|row| pad_row(row, &widths)));
    lines
}

fn pad_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(value, width)| format!("{value:<width$}"))
        .collect();
    padded.join("  ").trim_end().to_string()
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;

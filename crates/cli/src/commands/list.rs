// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use roster_core::{MemberStore, MembersView, QueryParams, ViewState};

use crate::cli::{OutputFormat, WhereClause};
use crate::display::member_table;
use crate::error::Result;
use crate::schema::list::{ListOutputJson, ListState};
use crate::schema::SkippedJson;

use super::{add_clauses, Context};

pub fn run(
    ctx: &Context,
    filter: Option<String>,
    search: Option<String>,
    clauses: Vec<WhereClause>,
    format: OutputFormat,
) -> Result<()> {
    let store = ctx.store()?;
    let view = run_impl(ctx, &store, filter, search, &clauses)?;

    for skipped in view.bar().skipped() {
        eprintln!("warning: skipped filter \"{}\": {}", skipped.token, skipped.reason);
    }

    match format {
        OutputFormat::Text => {
            for line in render_text(ctx, &store, &view) {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            let output = to_json(&store, &view);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

/// Mount the member view from the URL-style parameters, add any `--where`
/// clauses on top and load the matching members.
pub(crate) fn run_impl(
    ctx: &Context,
    store: &MemberStore,
    filter: Option<String>,
    search: Option<String>,
    clauses: &[WhereClause],
) -> Result<MembersView> {
    let blank_to_none = |s: Option<String>| s.filter(|s| !s.trim().is_empty());
    let params = QueryParams {
        filter: blank_to_none(filter),
        search: blank_to_none(search),
    };
    let mut view = MembersView::mount(ctx.settings.clone(), ctx.now, &params);

    if !clauses.is_empty() {
        view.edit(|bar| {
            add_clauses(bar, clauses)?;
            bar.apply();
            Ok(())
        })?;
    }

    view.refresh(store)?;
    Ok(view)
}

pub(crate) fn render_text(ctx: &Context, store: &MemberStore, view: &MembersView) -> Vec<String> {
    let mut lines = Vec::new();
    if !view.members().is_empty() {
        let columns = view.bar().columns();
        lines.extend(member_table(
            view.members(),
            &columns,
            ctx.settings.timezone,
            ctx.now,
        ));
        lines.push(String::new());
    }

    let total = store.members().len();
    match view.state() {
        ViewState::All(n) => lines.push(format!("{n} {}", plural(n))),
        ViewState::Matching(n) => lines.push(format!("{n} of {total} {} match", plural(total))),
        ViewState::NoMatches => {
            lines.push("No members match the current filter".to_string());
            lines.push("  hint: drop --filter, --where and --search to show all members".to_string());
        }
        ViewState::Pending => {}
    }
    if view.bar().is_applied() {
        lines.push(format!("filter: {}", view.bar().applied()));
    }
    lines
}

pub(crate) fn to_json(store: &MemberStore, view: &MembersView) -> ListOutputJson {
    let params = view.params();
    let (state, count) = ListState::from_view(view.state());
    ListOutputJson {
        state,
        count,
        total: store.members().len(),
        query_string: params.to_query_string(),
        filter: params.filter,
        search: params.search,
        columns: view.bar().columns().iter().map(|c| c.to_string()).collect(),
        bulk_actions: view.bulk_actions().iter().map(|a| (*a).into()).collect(),
        export_enabled: view.export_enabled(),
        skipped: view.bar().skipped().iter().map(SkippedJson::from).collect(),
        members: view.members().to_vec(),
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        "member"
    } else {
        "members"
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;

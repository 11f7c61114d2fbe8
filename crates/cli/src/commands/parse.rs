// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse command: restore clauses from a compiled query.
//!
//! By default this restores the query the way the member list does when it
//! reads the `filter` URL parameter: predicates that cannot be restored are
//! skipped and reported. With `--strict` the first such predicate fails.

use roster_core::{compile, Error as CoreError, FilterBar};

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::schema::parse::ParseOutputJson;
use crate::schema::{ClauseJson, SkippedJson};

use super::Context;

pub fn run(ctx: &Context, query: &str, strict: bool, format: OutputFormat) -> Result<()> {
    let output = run_impl(ctx, query, strict)?;
    match format {
        OutputFormat::Text => {
            for skipped in &output.skipped {
                eprintln!("warning: skipped filter \"{}\": {}", skipped.token, skipped.reason);
            }
            for line in render_text(&output) {
                println!("{line}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
    }
    Ok(())
}

pub(crate) fn run_impl(ctx: &Context, query: &str, strict: bool) -> Result<ParseOutputJson> {
    if strict {
        let filter_ctx = ctx.filter_context();
        let clauses = compile::parse(query, &filter_ctx)?;
        if let Some(hidden) = clauses
            .iter()
            .find(|c| !c.field().is_visible(&ctx.settings))
        {
            return Err(CoreError::UnknownField(hidden.key().to_string()).into());
        }
        return Ok(ParseOutputJson {
            canonical: compile::compile(&clauses, &filter_ctx),
            clauses: clauses.iter().map(ClauseJson::from).collect(),
            skipped: Vec::new(),
        });
    }

    let bar = FilterBar::mount_with_query(ctx.settings.clone(), ctx.now, query);
    Ok(ParseOutputJson {
        canonical: bar.compiled().to_string(),
        clauses: bar.clauses().iter().map(ClauseJson::from).collect(),
        skipped: bar.skipped().iter().map(SkippedJson::from).collect(),
    })
}

pub(crate) fn render_text(output: &ParseOutputJson) -> Vec<String> {
    let mut lines: Vec<String> = output
        .clauses
        .iter()
        .map(|c| {
            if c.value.is_empty() {
                format!("{} {}", c.field, c.operator)
            } else {
                format!("{} {} {}", c.field, c.operator, c.value)
            }
        })
        .collect();
    if !output.canonical.is_empty() {
        lines.push(String::new());
        lines.push(format!("canonical: {}", output.canonical));
    }
    lines
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compile command: `--where` clauses to a compiled query.

use roster_core::QueryParams;

use crate::cli::{OutputFormat, WhereClause};
use crate::error::Result;
use crate::schema::compile::CompileOutputJson;
use crate::schema::ClauseJson;

use super::{add_clauses, Context};

pub fn run(ctx: &Context, clauses: Vec<WhereClause>, format: OutputFormat) -> Result<()> {
    let output = run_impl(ctx, &clauses)?;
    match format {
        OutputFormat::Text => {
            if output.filter.is_empty() {
                eprintln!("warning: no clause constrains the member list");
            } else {
                println!("{}", output.filter);
                println!("?{}", output.query_string);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
    }
    Ok(())
}

pub(crate) fn run_impl(ctx: &Context, clauses: &[WhereClause]) -> Result<CompileOutputJson> {
    let mut bar = ctx.bar();
    add_clauses(&mut bar, clauses)?;
    bar.apply();

    let filter = bar.applied().to_string();
    let params = QueryParams {
        filter: Some(filter.clone()).filter(|f| !f.is_empty()),
        search: None,
    };
    Ok(CompileOutputJson {
        query_string: params.to_query_string(),
        filter,
        clauses: bar.clauses().iter().map(ClauseJson::from).collect(),
        columns: bar.columns().iter().map(|c| c.to_string()).collect(),
    })
}

#[cfg(test)]
#[path = "compile_tests.rs"]
mod tests;

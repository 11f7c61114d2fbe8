// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fields command: the filter fields offered on the configured site.

use roster_core::registry::{self, FieldGroup};
use roster_core::Dataset;

use crate::cli::OutputFormat;
use crate::colors;
use crate::error::Result;
use crate::schema::fields::{FieldJson, FieldsOutputJson};

use super::Context;

pub fn run(ctx: &Context, format: OutputFormat) -> Result<()> {
    let dataset = ctx.dataset_or_empty()?;
    let output = run_impl(ctx, &dataset)?;
    match format {
        OutputFormat::Text => {
            for line in render_text(&output) {
                println!("{line}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
    }
    Ok(())
}

pub(crate) fn run_impl(ctx: &Context, dataset: &Dataset) -> Result<FieldsOutputJson> {
    let values = dataset.value_context();
    let fields = registry::visible_fields(&ctx.settings)
        .into_iter()
        .map(|field| Ok(FieldJson::new(field, registry::values_for(field.key, &values)?)))
        .collect::<Result<Vec<_>>>()?;
    Ok(FieldsOutputJson {
        timezone: ctx.settings.timezone.name().to_string(),
        fields,
    })
}

pub(crate) fn render_text(output: &FieldsOutputJson) -> Vec<String> {
    let key_width = output
        .fields
        .iter()
        .map(|f| f.key.len())
        .max()
        .unwrap_or(0);

    let mut lines = Vec::new();
    for group in [FieldGroup::Basic, FieldGroup::Subscription, FieldGroup::Email] {
        let fields: Vec<&FieldJson> = output
            .fields
            .iter()
            .filter(|f| f.group == group.label())
            .collect();
        if fields.is_empty() {
            continue;
        }
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(heading(&format!("{}:", group.label())));
        for field in fields {
            lines.push(format!(
                "  {:<key_width$}  {} ({})",
                field.key, field.label, field.value_type
            ));
            lines.push(format!(
                "  {:<key_width$}    operators: {}",
                "",
                field.operators.join(", ")
            ));
            if !field.values.is_empty() {
                let values: Vec<&str> = field.values.iter().map(|v| v.value.as_str()).collect();
                lines.push(format!(
                    "  {:<key_width$}    values: {}",
                    "",
                    values.join(", ")
                ));
            }
        }
    }
    lines.push(String::new());
    lines.push(format!("Dates are read in {}.", output.timezone));
    lines
}

fn heading(text: &str) -> String {
    if colors::should_colorize() {
        colors::header(text)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;

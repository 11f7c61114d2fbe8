// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Clap styles matching the color codes in [`colors::codes`].
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);
    let context = fg(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(fg(colors::codes::LITERAL))
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_members}
  {list}        List members, optionally filtered and searched
  {fields}      Show the filter fields this site offers

{header_filters}
  {compile}     Compile filter clauses into a query
  {parse}       Restore filter clauses from a query

{header_setup}
  {schema}      Output JSON Schema for outputs and datasets
  {completion}  Generate shell completions
",
        header_members = colors::header("Members:"),
        header_filters = colors::header("Filters:"),
        header_setup = colors::header("Setup:"),
        list = colors::literal("list"),
        fields = colors::literal("fields"),
        compile = colors::literal("compile"),
        parse = colors::literal("parse"),
        schema = colors::literal("schema"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  roster fields                                List available filter fields
  roster list --data members.json              List all members
  roster list --where \"label is vip\"           Filter members by label
  roster compile --where \"email_count is 5\"    Show the compiled query",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;

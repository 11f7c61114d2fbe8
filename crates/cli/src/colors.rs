// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help output and member tables.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers and table headings.
    pub const HEADER: u8 = 74;
    /// Commands, field keys and other literals.
    pub const LITERAL: u8 = 250;
    /// Placeholders, quoted values and secondary text.
    pub const CONTEXT: u8 = 245;
}

const RESET: &str = "\x1b[0m";

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}{RESET}")
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Colorize an examples help block.
///
/// Lines ending in `:` are headers. Other lines are split at the first run
/// of two or more spaces into a command and a plain description.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    let mut lines = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            lines.push(format!("{indent}{}", header(trimmed)));
        } else if let Some(end) = find_description_start(trimmed) {
            let (cmd, desc) = trimmed.split_at(end);
            lines.push(format!("{indent}{}{desc}", colorize_command(cmd)));
        } else {
            lines.push(line.to_string());
        }
    }
    lines.join("\n")
}

/// Colorize a command line: quoted arguments and `<placeholders>` as
/// context, everything else as literal.
pub fn colorize_command(cmd: &str) -> String {
    let mut result = String::with_capacity(cmd.len() + 64);
    let mut plain = String::new();
    let mut chars = cmd.chars();

    while let Some(c) = chars.next() {
        let close = match c {
            '"' => '"',
            '\'' => '\'',
            '<' => '>',
            _ => {
                plain.push(c);
                continue;
            }
        };
        if !plain.is_empty() {
            result.push_str(&literal(&plain));
            plain.clear();
        }
        let mut quoted = String::from(c);
        for next in chars.by_ref() {
            quoted.push(next);
            if next == close {
                break;
            }
        }
        result.push_str(&context(&quoted));
    }

    if !plain.is_empty() {
        result.push_str(&literal(&plain));
    }
    result
}

/// Byte offset where the description starts: the first run of 2+ spaces.
pub fn find_description_start(line: &str) -> Option<usize> {
    let start = line.find("  ")?;
    let rest = &line[start..];
    if rest.trim().is_empty() {
        None
    } else {
        Some(start)
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;

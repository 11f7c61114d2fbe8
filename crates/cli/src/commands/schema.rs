// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema specifications for the JSON outputs and for member
//! dataset files.

use roster_core::Dataset;
use schemars::schema::RootSchema;
use schemars::schema_for;

use crate::cli::SchemaCommand;
use crate::error::Result;
use crate::schema::{compile, fields, list, parse};

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    let json = serde_json::to_string_pretty(&schema(cmd))?;
    println!("{}", json);
    Ok(())
}

pub(crate) fn schema(cmd: SchemaCommand) -> RootSchema {
    match cmd {
        SchemaCommand::List => schema_for!(list::ListOutputJson),
        SchemaCommand::Fields => schema_for!(fields::FieldsOutputJson),
        SchemaCommand::Compile => schema_for!(compile::CompileOutputJson),
        SchemaCommand::Parse => schema_for!(parse::ParseOutputJson),
        SchemaCommand::Dataset => schema_for!(Dataset),
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;

//! # Departments and Schema Subcommands
//!
//! Read-only listings: the dropdown's department choices and the
//! `Employee` JSON Schema.

use std::io::Write;

use anyhow::Result;

use emform_core::Department;
use emform_schema::EmployeeSchema;

/// Print one department name per line.
pub fn write_departments<W: Write>(out: &mut W) -> Result<u8> {
    for name in Department::names() {
        writeln!(out, "{name}")?;
    }
    Ok(0)
}

/// Print the schema as pretty JSON.
pub fn write_schema<W: Write>(schema: &EmployeeSchema, out: &mut W) -> Result<u8> {
    writeln!(out, "{}", serde_json::to_string_pretty(schema.schema())?)?;
    Ok(0)
}

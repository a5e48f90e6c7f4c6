//! # Validate Subcommand
//!
//! Validates a submission document (JSON or YAML) against the employee
//! schema, exactly as the form's submit hook would.
//!
//! Exit codes: 0 when the document is a valid employee (printed as JSON),
//! 1 when it is not (the `field: message` report is printed). Documents
//! that cannot be read or parsed are operational errors.

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use emform_form::employee_from_submission;
use emform_schema::{
    format_error_report, load_document, parse_document, DocumentFormat, EmployeeSchema,
    SchemaValidationError,
};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Submission document. Reads stdin when omitted or `-`.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Parse stdin as YAML instead of JSON.
    #[arg(long)]
    pub yaml: bool,
}

/// Load the document named by `args` and validate it, writing to stdout.
pub fn run_validate(args: &ValidateArgs, schema: &EmployeeSchema) -> Result<u8> {
    let document = match args.path.as_deref() {
        Some(path) if path.as_os_str() != "-" => load_document(path)?,
        _ => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("failed to read submission from stdin")?;
            let format = if args.yaml {
                DocumentFormat::Yaml
            } else {
                DocumentFormat::Json
            };
            parse_document(&content, format, "<stdin>")?
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report_document(&document, schema, &mut out)
}

/// Validate an already-parsed document and write the outcome to `out`.
///
/// A mapping goes through the same dropdown normalization as a form
/// submission. Anything else is validated as-is, which yields a single
/// location-less violation.
pub fn report_document<W: Write>(
    document: &Value,
    schema: &EmployeeSchema,
    out: &mut W,
) -> Result<u8> {
    let outcome = match document {
        Value::Object(map) => employee_from_submission(schema, map),
        other => schema.validate(other),
    };

    match outcome {
        Ok(employee) => {
            tracing::info!(name = %employee.name, "submission is a valid employee");
            writeln!(out, "{}", serde_json::to_string_pretty(&employee)?)?;
            Ok(0)
        }
        Err(SchemaValidationError::ValidationFailed { violations }) => {
            tracing::info!(violations = violations.len(), "submission rejected");
            writeln!(out, "{}", format_error_report(violations.errors()))?;
            Ok(1)
        }
        Err(other) => Err(other.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(document: Value) -> (u8, String) {
        let schema = EmployeeSchema::new().unwrap();
        let mut out = Vec::new();
        let code = report_document(&document, &schema, &mut out).unwrap();
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_valid_document_prints_employee() {
        let (code, text) = run(json!({
            "name": "Jo",
            "email": "jo@x.com",
            "birth_date": "1990-04-01",
            "salary": 100,
            "department": ["Finance"],
            "elected_benefits": true
        }));
        assert_eq!(code, 0);
        let printed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(printed["department"], "Finance");
        assert_eq!(printed["salary"], 100.0);
    }

    #[test]
    fn test_invalid_document_prints_report() {
        let (code, text) = run(json!({
            "name": "Jo",
            "email": "jo@x.com",
            "birth_date": "1990-04-01",
            "salary": -5,
            "department": ["Engineering"],
            "elected_benefits": false
        }));
        assert_eq!(code, 1);
        assert_eq!(text.trim_end(), "salary: Input should be greater than or equal to 0");
    }

    #[test]
    fn test_non_mapping_document_is_rejected() {
        let (code, text) = run(json!([1, 2, 3]));
        assert_eq!(code, 1);
        assert!(!text.trim().is_empty());
        assert!(!text.contains(": Field required"));
    }
}

//! # Employee Validation
//!
//! Runtime validation of raw field-value mappings against the `Employee`
//! schema, in three passes:
//!
//! 1. **Presence.** Every field of `Employee::FIELD_NAMES` missing from the
//!    mapping yields `Field required` at that field.
//! 2. **Schema.** The compiled JSON Schema checks types, the birth date
//!    (shape and calendar validity through `"format": "date"`), the salary
//!    minimum and the department enumeration.
//! 3. **Email.** A string `email` must convert into an
//!    [`EmailAddress`]; the rejection reason becomes the message.
//!
//! Anything that passes all three converts into an [`Employee`].
//!
//! Violations are collapsed so that a field with a type error reports only
//! that error, then ordered by field declaration order with record-level
//! errors last.
//!
//! ## Messages
//!
//! Library messages are replaced by field-specific wording where one is
//! known (e.g. `Input should be greater than or equal to 0`); anything
//! else keeps the library's message.

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use jsonschema::Validator;
use serde_json::Value;
use thiserror::Error;

use emform_core::{Department, EmailAddress, EmformError, Employee};

use crate::report::{format_error_report, FieldError};
use crate::schema::employee_schema;

const FIELD_REQUIRED: &str = "Field required";
const DATE_MESSAGE: &str = "Input should be a valid date in YYYY-MM-DD format";

/// Error during employee validation.
#[derive(Error, Debug)]
pub enum SchemaValidationError {
    /// The submission did not conform to the schema.
    #[error("employee validation failed:\n{violations}")]
    ValidationFailed {
        /// Every violation, in field declaration order.
        violations: ValidationViolations,
    },

    /// The compiled validator could not be built.
    #[error("schema build error: {reason}")]
    SchemaBuildError {
        /// Reason reported by the schema compiler.
        reason: String,
    },

    /// A submission document could not be read or parsed.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoadError {
        /// Path (or `<stdin>`) of the document.
        path: String,
        /// Reason the document could not be loaded.
        reason: String,
    },
}

/// Collection of field errors from one validation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationViolations {
    errors: Vec<FieldError>,
}

impl ValidationViolations {
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_error_report(&self.errors))
    }
}

/// Format of a submission document on disk or stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// `.yaml`/`.yml` is YAML; everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// The compiled `Employee` schema.
///
/// `EmployeeSchema` is `Send + Sync`; build it once and share it.
pub struct EmployeeSchema {
    schema: Value,
    validator: Validator,
}

impl fmt::Debug for EmployeeSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmployeeSchema")
            .field("schema", &self.schema)
            .finish_non_exhaustive()
    }
}

impl EmployeeSchema {
    /// Compile the `Employee` schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaValidationError::SchemaBuildError` if the schema
    /// does not compile.
    pub fn new() -> Result<Self, SchemaValidationError> {
        let schema = employee_schema();

        let validator = jsonschema::options()
            .with_draft(jsonschema::Draft::Draft202012)
            .should_validate_formats(true)
            .build(&schema)
            .map_err(|e| SchemaValidationError::SchemaBuildError {
                reason: e.to_string(),
            })?;

        Ok(Self { schema, validator })
    }

    /// The schema document this validator was compiled from.
    pub fn schema(&self) -> &Value {
        &self.schema
    }

    /// Every violation in `instance`, in field declaration order. Empty
    /// when `instance` is a valid employee record.
    pub fn field_errors(&self, instance: &Value) -> Vec<FieldError> {
        let mut found = Vec::new();

        if let Value::Object(map) = instance {
            for field in Employee::FIELD_NAMES {
                if !map.contains_key(field) {
                    found.push(Found {
                        keyword: "required".to_string(),
                        error: FieldError::at(field, FIELD_REQUIRED),
                    });
                }
            }
        }

        for e in self.validator.iter_errors(instance) {
            let loc = pointer_segments(&e.instance_path.to_string());
            let schema_path = e.schema_path.to_string();
            let keyword = schema_path.rsplit('/').next().unwrap_or_default().to_string();
            let error = match loc.first() {
                Some(field) => {
                    let message = describe(field, &keyword, e.to_string());
                    FieldError {
                        loc: Some(loc.clone()),
                        message,
                    }
                }
                None => FieldError::root(e.to_string()),
            };
            found.push(Found { keyword, error });
        }

        if let Some(Value::String(raw)) = instance.get("email") {
            if let Err(EmformError::InvalidEmail { reason, .. }) = EmailAddress::parse(raw.as_str()) {
                found.push(Found {
                    keyword: "email".to_string(),
                    error: FieldError::at(
                        "email",
                        format!("value is not a valid email address: {reason}"),
                    ),
                });
            }
        }

        collapse_and_order(found)
    }

    /// Validate `instance` and convert it into an [`Employee`].
    ///
    /// # Errors
    ///
    /// Returns `SchemaValidationError::ValidationFailed` carrying every
    /// violation when the instance is invalid.
    pub fn validate(&self, instance: &Value) -> Result<Employee, SchemaValidationError> {
        let errors = self.field_errors(instance);
        if !errors.is_empty() {
            tracing::debug!(violations = errors.len(), "employee record rejected");
            return Err(SchemaValidationError::ValidationFailed {
                violations: ValidationViolations { errors },
            });
        }

        serde_json::from_value(instance.clone()).map_err(|e| {
            SchemaValidationError::ValidationFailed {
                violations: ValidationViolations {
                    errors: vec![FieldError::root(e.to_string())],
                },
            }
        })
    }
}

/// Read a submission document from a JSON or YAML file.
///
/// # Errors
///
/// Returns `SchemaValidationError::DocumentLoadError` if the file cannot be
/// read or parsed.
pub fn load_document(path: &Path) -> Result<Value, SchemaValidationError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SchemaValidationError::DocumentLoadError {
            path: path.display().to_string(),
            reason: format!("cannot read file: {e}"),
        }
    })?;
    parse_document(&content, DocumentFormat::from_path(path), &path.display().to_string())
}

/// Parse submission document text. `origin` names the source in errors.
///
/// # Errors
///
/// Returns `SchemaValidationError::DocumentLoadError` on malformed input.
pub fn parse_document(
    content: &str,
    format: DocumentFormat,
    origin: &str,
) -> Result<Value, SchemaValidationError> {
    let parsed = match format {
        DocumentFormat::Yaml => {
            serde_yaml::from_str::<Value>(content).map_err(|e| format!("invalid YAML: {e}"))
        }
        DocumentFormat::Json => {
            serde_json::from_str::<Value>(content).map_err(|e| format!("invalid JSON: {e}"))
        }
    };
    parsed.map_err(|reason| SchemaValidationError::DocumentLoadError {
        path: origin.to_string(),
        reason,
    })
}

/// A violation together with the schema keyword that produced it.
struct Found {
    keyword: String,
    error: FieldError,
}

/// Drop secondary errors on fields that failed their type check, order
/// by field declaration, and remove exact duplicates.
fn collapse_and_order(found: Vec<Found>) -> Vec<FieldError> {
    let type_failed: BTreeSet<String> = found
        .iter()
        .filter(|f| f.keyword == "type")
        .filter_map(|f| f.error.field().map(str::to_string))
        .collect();

    let mut kept: Vec<FieldError> = found
        .into_iter()
        .filter(|f| {
            f.keyword == "type"
                || f.error
                    .field()
                    .map_or(true, |field| !type_failed.contains(field))
        })
        .map(|f| f.error)
        .collect();

    kept.sort_by_key(order_key);
    kept.dedup();
    kept
}

fn order_key(error: &FieldError) -> usize {
    let field_count = Employee::FIELD_NAMES.len();
    match error.field() {
        Some(field) => Employee::field_index(field).unwrap_or(field_count),
        None => field_count + 1,
    }
}

/// Split a JSON Pointer into unescaped segments. `""` is the root.
fn pointer_segments(pointer: &str) -> Vec<String> {
    pointer
        .split('/')
        .skip(1)
        .map(|s| s.replace("~1", "/").replace("~0", "~"))
        .collect()
}

fn describe(field: &str, keyword: &str, fallback: String) -> String {
    match (field, keyword) {
        ("birth_date", "type" | "pattern" | "format") => DATE_MESSAGE.to_string(),
        ("department", "type" | "enum") => department_message(),
        ("salary", "minimum") => "Input should be greater than or equal to 0".to_string(),
        ("salary", "type") => "Input should be a valid number".to_string(),
        ("elected_benefits", "type") => "Input should be a valid boolean".to_string(),
        (_, "type") => "Input should be a valid string".to_string(),
        _ => fallback,
    }
}

/// `Input should be 'A', 'B' or 'C'`.
fn department_message() -> String {
    let quoted: Vec<String> = Department::names()
        .iter()
        .map(|name| format!("'{name}'"))
        .collect();
    match quoted.split_last() {
        Some((last, rest)) if !rest.is_empty() => {
            format!("Input should be {} or {last}", rest.join(", "))
        }
        Some((last, _)) => format!("Input should be {last}"),
        None => "Input should be a department".to_string(),
    }
}

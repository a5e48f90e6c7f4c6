//! # emform-schema: Employee Schema & Validation
//!
//! Provides the declarative `Employee` schema and validates raw form
//! submissions against it.
//!
//! ## Schema (`schema`)
//!
//! [`employee_schema`] returns the JSON Schema (Draft 2020-12) describing
//! a valid employee record. The `department` enumeration is generated
//! from [`emform_core::Department::all()`].
//!
//! ## Validation (`validate`)
//!
//! [`EmployeeSchema`] compiles the schema once and checks field-value
//! mappings against it, producing either a typed
//! [`emform_core::Employee`] or a list of [`FieldError`]s in field
//! declaration order.
//!
//! ## Error Reports (`report`)
//!
//! [`FieldError`] is the contract boundary between the validation library
//! and the UI: an optional location path plus a message. [`format_error_report`]
//! flattens a list of them into newline-joined `field: message` lines.
//!
//! ## Crate Policy
//!
//! - Depends only on `emform-core` internally.
//! - Invalid submissions are rejected with every violation reported; none
//!   is silently dropped.

pub mod report;
pub mod schema;
pub mod validate;

pub use report::{format_error_lines, format_error_report, FieldError};
pub use schema::{employee_schema, DATE_PATTERN};
pub use validate::{
    load_document, parse_document, DocumentFormat, EmployeeSchema, SchemaValidationError,
    ValidationViolations,
};

//! # Field Errors and Error Reports
//!
//! A [`FieldError`] is a location path (optional) and a message. Reports
//! are built by explicit iteration: one formatted line per error, joined
//! with `\n`.
//!
//! Errors without a location are labelled with an empty prefix. Several
//! of them in one report can look alike; the label carries no more
//! information than the path does.

use serde::{Deserialize, Serialize};

/// A single field-level (or record-level, when `loc` is absent) failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Path of keys leading to the failing value. `None` or empty for
    /// record-level errors.
    pub loc: Option<Vec<String>>,
    /// Human-readable description of the failure.
    pub message: String,
}

impl FieldError {
    /// An error located at a top-level field.
    pub fn at(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            loc: Some(vec![field.into()]),
            message: message.into(),
        }
    }

    /// A record-level error with no location.
    pub fn root(message: impl Into<String>) -> Self {
        Self {
            loc: None,
            message: message.into(),
        }
    }

    /// First path segment, if any.
    pub fn field(&self) -> Option<&str> {
        self.loc.as_ref()?.first().map(String::as_str)
    }

    /// `"<first segment>: "` when a location is present, otherwise `""`.
    pub fn label(&self) -> String {
        match self.field() {
            Some(field) => format!("{field}: "),
            None => String::new(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.label(), self.message)
    }
}

/// One formatted line per error, in input order.
pub fn format_error_lines(errors: &[FieldError]) -> Vec<String> {
    let mut lines = Vec::with_capacity(errors.len());
    for error in errors {
        lines.push(format!("{}{}", error.label(), error.message));
    }
    lines
}

/// All error lines joined with `\n`.
pub fn format_error_report(errors: &[FieldError]) -> String {
    format_error_lines(errors).join("\n")
}

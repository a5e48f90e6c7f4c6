//! # Employee Record
//!
//! The typed record a valid form submission converts into, and the raw
//! field-value mapping the form produces before validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::department::Department;
use crate::email::EmailAddress;

/// Raw mapping from field name to widget value, as produced by a form on
/// every submit attempt.
pub type FieldValues = serde_json::Map<String, serde_json::Value>;

/// A validated employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub email: EmailAddress,
    pub birth_date: NaiveDate,
    pub salary: f64,
    pub department: Department,
    pub elected_benefits: bool,
}

impl Employee {
    /// Field names in declaration order.
    pub const FIELD_NAMES: [&'static str; 6] = [
        "name",
        "email",
        "birth_date",
        "salary",
        "department",
        "elected_benefits",
    ];

    /// Position of `field` in [`Employee::FIELD_NAMES`], if it is one.
    pub fn field_index(field: &str) -> Option<usize> {
        Self::FIELD_NAMES.iter().position(|f| *f == field)
    }
}

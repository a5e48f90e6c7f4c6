//! # Employee JSON Schema
//!
//! The declarative description of a valid employee record. Field order in
//! `properties` follows `Employee::FIELD_NAMES`. Two checks live outside
//! the schema, in the validator: presence of each field (so a missing
//! field is reported against that field) and the email shape (so the
//! schema and `EmailAddress` cannot disagree about it).

use serde_json::{json, Value};

use emform_core::Department;

/// Shape of an ISO 8601 calendar date with a four-digit year. Calendar
/// validity (e.g. no February 30th) comes from `"format": "date"`.
pub const DATE_PATTERN: &str = r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$";

/// Build the `Employee` schema.
pub fn employee_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "Employee",
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "email": { "type": "string" },
            "birth_date": { "type": "string", "pattern": DATE_PATTERN, "format": "date" },
            "salary": { "type": "number", "minimum": 0 },
            "department": { "type": "string", "enum": Department::names() },
            "elected_benefits": { "type": "boolean" }
        }
    })
}

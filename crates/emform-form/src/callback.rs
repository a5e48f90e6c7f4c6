//! # Employee Validation Callback
//!
//! The hook the employee form runs on every submit attempt. It never
//! fails: schema violations become the returned report.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;

use emform_core::{Employee, FieldValues};
use emform_schema::{format_error_report, EmployeeSchema, SchemaValidationError};

use crate::adapter::{normalize_submission, DROPDOWN_FIELDS};
use crate::form::ValidateHook;

/// Normalize dropdown values and convert the submission into an
/// [`Employee`].
///
/// # Errors
///
/// Returns `SchemaValidationError::ValidationFailed` with every violation
/// when the submission is invalid.
pub fn employee_from_submission(
    schema: &EmployeeSchema,
    data: &FieldValues,
) -> Result<Employee, SchemaValidationError> {
    let normalized = normalize_submission(data, DROPDOWN_FIELDS);
    schema.validate(&Value::Object(normalized))
}

/// `None` when `data` is a valid employee, otherwise the newline-joined
/// `field: message` report.
pub fn validate_employee_detail_form(schema: &EmployeeSchema, data: &FieldValues) -> Option<String> {
    employee_from_submission(schema, data).err().map(violation_report)
}

/// The record the employee hook built on its last accepting call.
///
/// Clones share one slot: the hook stores into it, the host takes from it
/// after an accepted submit.
#[derive(Debug, Clone, Default)]
pub struct AcceptedEmployee(Arc<Mutex<Option<Employee>>>);

impl AcceptedEmployee {
    /// Remove and return the stored record.
    pub fn take(&self) -> Option<Employee> {
        self.0.lock().take()
    }

    fn store(&self, employee: Employee) {
        *self.0.lock() = Some(employee);
    }
}

/// The employee form's hook: runs [`validate_employee_detail_form`]'s check
/// and, on success, stores the converted record in `accepted`.
pub fn employee_validation_hook(schema: Arc<EmployeeSchema>, accepted: AcceptedEmployee) -> ValidateHook {
    Arc::new(move |data: &FieldValues| match employee_from_submission(&schema, data) {
        Ok(employee) => {
            accepted.store(employee);
            None
        }
        Err(e) => Some(violation_report(e)),
    })
}

fn violation_report(error: SchemaValidationError) -> String {
    match error {
        SchemaValidationError::ValidationFailed { violations } => {
            format_error_report(violations.errors())
        }
        other => other.to_string(),
    }
}

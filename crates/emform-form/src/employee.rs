//! # Employee Detail Form
//!
//! Builds the employee form: six widgets batched in `Employee` field
//! order into a two-row layout, with the schema-backed validation hook.

use std::sync::Arc;

use emform_core::Department;
use emform_schema::EmployeeSchema;

use crate::callback::{employee_validation_hook, AcceptedEmployee};
use crate::error::FormError;
use crate::form::{Form, FormOptions};
use crate::template::FormTemplate;
use crate::widget::Widget;

/// Layout of the employee form.
pub const EMPLOYEE_FORM_TEMPLATE: &str = "## Employee Data
{name} {birth_date} {email}

{department} {salary} {elected_benefits}
";

/// The employee widgets, named after and ordered like `Employee`'s fields
/// so the submission needs no key translation.
pub fn employee_elements() -> Vec<(&'static str, Widget)> {
    vec![
        ("name", Widget::text("Name")),
        ("email", Widget::email("Email", "email@example.com")),
        ("birth_date", Widget::date("Birth Date")),
        ("salary", Widget::number("Salary", 0.0)),
        ("department", Widget::dropdown(Department::names(), "Department")),
        ("elected_benefits", Widget::checkbox("Elected Benefits")),
    ]
}

/// Build the employee form. Each accepted submission's `Employee` can be
/// taken from the returned [`AcceptedEmployee`].
///
/// # Errors
///
/// Returns a `FormError` only if the layout and the element list disagree.
pub fn employee_detail_form(
    schema: Arc<EmployeeSchema>,
    options: FormOptions,
) -> Result<(Form, AcceptedEmployee), FormError> {
    let batch = FormTemplate::parse(EMPLOYEE_FORM_TEMPLATE)?.batch(employee_elements())?;
    let accepted = AcceptedEmployee::default();
    let hook = employee_validation_hook(schema, accepted.clone());
    Ok((batch.form(options, Some(hook)), accepted))
}

//! # emform-form: Widgets, Forms, and the Validation Callback
//!
//! The form layer between a host (the CLI session) and the schema.
//!
//! ## Modules
//!
//! - **Widgets** (`widget.rs`): text, email, date, number, dropdown, and
//!   checkbox elements, each owning one editable value.
//!
//! - **Templates** (`template.rs`): markdown with `{placeholder}` slots;
//!   [`FormTemplate::batch`] binds named widgets into a [`Batch`].
//!
//! - **Form** (`form.rs`): the submit/clear lifecycle with an optional
//!   validation hook. States are `Editing`, `SubmittedInvalid`, and
//!   `SubmittedValid`.
//!
//! - **Adapter** (`adapter.rs`): converts the dropdown's sequence-shaped
//!   value into a scalar before validation.
//!
//! - **Callback** (`callback.rs`): the validation hook for the employee
//!   form; normalizes, validates, and flattens errors into a report.
//!
//! - **Employee form** (`employee.rs`): builds the employee-detail form.

pub mod adapter;
pub mod callback;
pub mod employee;
pub mod error;
pub mod form;
pub mod template;
pub mod widget;

pub use adapter::{first_or_default, normalize_submission, DROPDOWN_FIELDS};
pub use callback::{
    employee_from_submission, employee_validation_hook, validate_employee_detail_form,
    AcceptedEmployee,
};
pub use employee::{employee_detail_form, employee_elements, EMPLOYEE_FORM_TEMPLATE};
pub use error::FormError;
pub use form::{Form, FormOptions, FormState, SubmitOutcome, ValidateHook};
pub use template::{Batch, FormTemplate};
pub use widget::{InputRejected, TextKind, Widget, WidgetKind, WidgetValue};

//! Integration test: drive the employee form through its lifecycle the way
//! a host would, one widget edit at a time.

use std::sync::Arc;

use serde_json::json;

use emform_core::Department;
use emform_form::{
    employee_detail_form, employee_from_submission, Form, FormOptions, FormState, SubmitOutcome,
};
use emform_schema::EmployeeSchema;

fn notebook_options() -> FormOptions {
    FormOptions {
        submit_label: "Submit".to_string(),
        show_clear_button: true,
        clear_on_submit: true,
    }
}

fn form() -> (Arc<EmployeeSchema>, Form) {
    let schema = Arc::new(EmployeeSchema::new().expect("schema should compile"));
    let (form, _) = employee_detail_form(Arc::clone(&schema), notebook_options()).unwrap();
    (schema, form)
}

fn fill_valid(form: &mut Form) {
    form.set("name", "Jo").unwrap();
    form.set("email", "jo@x.com").unwrap();
    form.set("birth_date", "1990-04-01").unwrap();
    form.set("salary", "48000").unwrap();
    form.set("department", "Engineering").unwrap();
    form.set("elected_benefits", "yes").unwrap();
}

#[test]
fn test_untouched_form_is_rejected_field_by_field() {
    let (_, mut form) = form();
    let SubmitOutcome::Rejected(report) = form.submit() else {
        panic!("an empty form must not submit");
    };
    let labels: Vec<&str> = report
        .lines()
        .map(|line| line.split(": ").next().unwrap_or(""))
        .collect();
    assert_eq!(labels, vec!["email", "birth_date", "department"]);
}

#[test]
fn test_valid_submission_clears_and_exposes_value() {
    let (schema, mut form) = form();
    fill_valid(&mut form);

    let SubmitOutcome::Accepted(values) = form.submit() else {
        panic!("valid data must submit");
    };
    assert_eq!(values["department"], json!(["Engineering"]));
    assert_eq!(form.state(), &FormState::Editing);
    assert_eq!(form.current_values()["name"], json!(""));
    assert_eq!(form.current_values()["department"], json!([]));

    let employee = employee_from_submission(&schema, form.value().unwrap()).unwrap();
    assert_eq!(employee.department, Department::Engineering);
    assert!(employee.elected_benefits);
}

#[test]
fn test_invalid_then_corrected() {
    let (_, mut form) = form();
    fill_valid(&mut form);
    form.set("salary", "-5").unwrap();

    let SubmitOutcome::Rejected(report) = form.submit() else {
        panic!("negative salary must be rejected");
    };
    assert_eq!(report, "salary: Input should be greater than or equal to 0");
    assert!(matches!(form.state(), FormState::SubmittedInvalid { .. }));
    assert_eq!(form.current_values()["email"], json!("jo@x.com"));
    assert!(form.render().contains("! salary: Input should be greater than or equal to 0"));

    form.set("salary", "5").unwrap();
    assert!(matches!(form.submit(), SubmitOutcome::Accepted(_)));
    assert_eq!(form.state(), &FormState::Editing);
}

#[test]
fn test_multiple_violations_in_declaration_order() {
    let (_, mut form) = form();
    fill_valid(&mut form);
    form.set("email", "not-an-email").unwrap();
    form.set("salary", "-1").unwrap();
    form.set("department", "").unwrap();

    let SubmitOutcome::Rejected(report) = form.submit() else {
        panic!("expected rejection");
    };
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("email: "));
    assert!(lines[1].starts_with("salary: "));
    assert!(lines[2].starts_with("department: "));
}

#[test]
fn test_clear_after_rejection() {
    let (_, mut form) = form();
    form.set("name", "Jo").unwrap();
    form.submit();
    form.clear().unwrap();
    assert_eq!(form.state(), &FormState::Editing);
    assert_eq!(form.current_values()["name"], json!(""));
    assert!(!form.render().contains("! "));
}

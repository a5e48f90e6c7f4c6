//! Property tests for the employee validation callback.

use proptest::prelude::*;
use serde_json::{json, Value};

use emform_core::{Department, FieldValues};
use emform_form::validate_employee_detail_form;
use emform_schema::EmployeeSchema;

fn submission(salary: f64, department: Value, benefits: bool) -> FieldValues {
    json!({
        "name": "Jo",
        "email": "jo@x.com",
        "birth_date": "1990-04-01",
        "salary": salary,
        "department": department,
        "elected_benefits": benefits
    })
    .as_object()
    .cloned()
    .unwrap()
}

fn department() -> impl Strategy<Value = &'static str> {
    prop::sample::select(Department::names())
}

proptest! {
    #[test]
    fn test_valid_submissions_pass(
        salary in 0.0f64..1.0e7,
        dept in department(),
        benefits in any::<bool>(),
    ) {
        let schema = EmployeeSchema::new().unwrap();
        let data = submission(salary, json!([dept]), benefits);
        prop_assert_eq!(validate_employee_detail_form(&schema, &data), None);
    }

    #[test]
    fn test_sequence_and_scalar_department_agree(
        salary in -1.0e6f64..1.0e6,
        dept in "[A-Za-z]{0,12}",
    ) {
        let schema = EmployeeSchema::new().unwrap();
        let as_list = validate_employee_detail_form(&schema, &submission(salary, json!([dept.clone()]), false));
        let as_scalar = validate_employee_detail_form(&schema, &submission(salary, json!(dept), false));
        prop_assert_eq!(as_list, as_scalar);
    }

    #[test]
    fn test_validation_is_idempotent(
        salary in -1.0e6f64..1.0e6,
        dept in "[A-Za-z]{0,12}",
        benefits in any::<bool>(),
    ) {
        let schema = EmployeeSchema::new().unwrap();
        let data = submission(salary, json!([dept]), benefits);
        let first = validate_employee_detail_form(&schema, &data);
        let second = validate_employee_detail_form(&schema, &data);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_negative_salary_reports_only_salary(
        salary in -1.0e6f64..-0.001,
        dept in department(),
    ) {
        let schema = EmployeeSchema::new().unwrap();
        let report = validate_employee_detail_form(&schema, &submission(salary, json!([dept]), false))
            .expect("negative salary must be rejected");
        prop_assert_eq!(report, "salary: Input should be greater than or equal to 0");
    }
}

fn only_label(report: &str, field: &str) -> bool {
    let prefix = format!("{field}: ");
    report.lines().count() == 1 && report.starts_with(&prefix)
}

proptest! {
    #[test]
    fn test_bad_email_reports_only_email(email in "[a-z0-9.]{0,12}") {
        let schema = EmployeeSchema::new().unwrap();
        let mut data = submission(100.0, json!(["Sales"]), true);
        data.insert("email".to_string(), json!(email));
        let report = validate_employee_detail_form(&schema, &data)
            .expect("an address without '@' must be rejected");
        prop_assert!(only_label(&report, "email"), "{}", report);
    }

    #[test]
    fn test_bad_birth_date_reports_only_birth_date(
        birth_date in prop_oneof![
            "[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}",
            "[0-9]{4}-(1[3-9]|[2-9][0-9])-[0-2][0-9]",
            "[0-9]{5,6}-0[1-9]-1[0-9]",
        ],
    ) {
        let schema = EmployeeSchema::new().unwrap();
        let mut data = submission(100.0, json!(["Sales"]), true);
        data.insert("birth_date".to_string(), json!(birth_date));
        let report = validate_employee_detail_form(&schema, &data)
            .expect("a malformed birth date must be rejected");
        prop_assert!(only_label(&report, "birth_date"), "{}", report);
    }

    #[test]
    fn test_unknown_department_reports_only_department(dept in "[a-z]{0,12}") {
        let schema = EmployeeSchema::new().unwrap();
        let report = validate_employee_detail_form(&schema, &submission(100.0, json!([dept]), true))
            .expect("a lowercase department must be rejected");
        prop_assert!(only_label(&report, "department"), "{}", report);
    }

    #[test]
    fn test_non_boolean_benefits_reports_only_benefits(flag in "[a-z]{0,6}") {
        let schema = EmployeeSchema::new().unwrap();
        let mut data = submission(100.0, json!(["Sales"]), true);
        data.insert("elected_benefits".to_string(), json!(flag));
        let report = validate_employee_detail_form(&schema, &data)
            .expect("a string benefits flag must be rejected");
        prop_assert!(only_label(&report, "elected_benefits"), "{}", report);
    }
}

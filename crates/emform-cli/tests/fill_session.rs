//! Scripted fill sessions against the real employee form.

use std::io::Cursor;
use std::sync::Arc;

use serde_json::json;

use emform_cli::config::FormConfig;
use emform_cli::fill::run_session;
use emform_form::employee_detail_form;
use emform_schema::EmployeeSchema;

fn session(script: &str, config: FormConfig, echo_form: bool) -> (usize, String) {
    let schema = Arc::new(EmployeeSchema::new().unwrap());
    let (form, employees) = employee_detail_form(schema, config.form_options()).unwrap();
    let mut out = Vec::new();
    let accepted = run_session(form, &employees, Cursor::new(script), &mut out, echo_form).unwrap();
    (accepted, String::from_utf8(out).unwrap())
}

const VALID_ENTRY: &str = "\
set name Jo Smith
set email jo@x.com
set birth_date 1990-04-01
set salary 52000
set department Finance
set elected_benefits yes
";

#[test]
fn test_accepted_submission_prints_employee_line() {
    let script = format!("{VALID_ENTRY}submit\nquit\n");
    let (accepted, out) = session(&script, FormConfig::default(), false);
    assert_eq!(accepted, 1);

    let line = out.lines().find(|l| l.starts_with('{')).unwrap();
    let employee: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(employee["name"], "Jo Smith");
    assert_eq!(employee["department"], "Finance");
    assert_eq!(employee["elected_benefits"], true);
}

#[test]
fn test_rejection_then_correction() {
    let script = format!("{VALID_ENTRY}set salary -5\nsubmit\nset salary 10\nsubmit\n");
    let (accepted, out) = session(&script, FormConfig::default(), false);
    assert_eq!(accepted, 1);
    assert!(out.contains("! salary: Input should be greater than or equal to 0"));
}

#[test]
fn test_each_accepted_record_printed_once() {
    let config = FormConfig {
        clear_on_submit: false,
        ..FormConfig::default()
    };
    let script = format!("{VALID_ENTRY}submit\nsubmit\nset salary 1\nsubmit\n");
    let (accepted, out) = session(&script, config, false);
    assert_eq!(accepted, 3);
    let salaries: Vec<serde_json::Value> = out
        .lines()
        .filter(|l| l.starts_with('{'))
        .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap()["salary"].clone())
        .collect();
    assert_eq!(salaries, vec![json!(52000.0), json!(52000.0), json!(1.0)]);
    assert!(!out.contains("error: "));
}

#[test]
fn test_empty_form_reports_missing_choices() {
    let (accepted, out) = session("submit\n", FormConfig::default(), false);
    assert_eq!(accepted, 0);
    let report: Vec<&str> = out.lines().filter(|l| l.starts_with("! ")).collect();
    assert!(report[0].starts_with("! email: "));
    assert!(report.iter().any(|l| l.starts_with("! birth_date: ")));
    assert!(report.last().unwrap().starts_with("! department: "));
}

#[test]
fn test_widget_input_errors_do_not_end_session() {
    let script = "set salary lots\nset department Legal\nset nickname Jo\nbogus\nquit\nsubmit\n";
    let (accepted, out) = session(script, FormConfig::default(), false);
    assert_eq!(accepted, 0);
    assert_eq!(out.lines().filter(|l| l.starts_with("error: ")).count(), 4);
}

#[test]
fn test_clear_disabled_by_config() {
    let config = FormConfig {
        show_clear_button: false,
        ..FormConfig::default()
    };
    let (_, out) = session("clear\n", config, false);
    assert!(out.contains("error: this form has no clear button"));
}

#[test]
fn test_echo_renders_form() {
    let (_, out) = session("quit\n", FormConfig::default(), true);
    assert!(out.starts_with("## Employee Data\n"));
    assert!(out.contains("[ Submit ]  [ Clear ]"));
}

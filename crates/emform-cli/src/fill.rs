//! # Fill Subcommand
//!
//! Interactive line-oriented session over the employee form:
//!
//! ```text
//! set <field> <value>   type into a widget (empty value unsets/clears)
//! show                  render the form
//! submit                run the validation hook
//! clear                 reset every widget
//! help                  list commands
//! quit                  end the session
//! ```
//!
//! Every accepted submission is printed as one JSON line holding the
//! validated employee. Rejections are printed as `! `-prefixed report
//! lines and the typed values are kept for correction.

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use clap::Args;

use emform_form::{employee_detail_form, AcceptedEmployee, Form, FormOptions, SubmitOutcome};
use emform_schema::EmployeeSchema;

const HELP: &str = "\
commands:
  set <field> <value>   type into a widget (empty value unsets it)
  show                  render the form
  submit                submit the form
  clear                 reset every widget
  help                  show this help
  quit                  end the session";

/// Arguments for the fill subcommand.
#[derive(Args, Debug)]
pub struct FillArgs {
    /// Only render the form on `show`.
    #[arg(long)]
    pub quiet: bool,
}

/// One parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { field: String, value: String },
    Show,
    Submit,
    Clear,
    Help,
    Quit,
    Blank,
}

impl Command {
    /// Parse one input line. The value of `set` is the rest of the line
    /// after the field name.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (line, ""),
        };

        match word {
            "" => Ok(Self::Blank),
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim_start()),
                    None => (rest, ""),
                };
                if field.is_empty() {
                    return Err("usage: set <field> <value>".to_string());
                }
                Ok(Self::Set {
                    field: field.to_string(),
                    value: value.to_string(),
                })
            }
            "show" => Ok(Self::Show),
            "submit" => Ok(Self::Submit),
            "clear" => Ok(Self::Clear),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command {other:?}; try `help`")),
        }
    }
}

/// Run the session on stdin/stdout.
pub fn run_fill(args: &FillArgs, schema: Arc<EmployeeSchema>, options: FormOptions) -> Result<u8> {
    let (form, employees) = employee_detail_form(schema, options)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let accepted = run_session(form, &employees, stdin.lock(), stdout.lock(), !args.quiet)?;
    tracing::info!(accepted, "fill session finished");
    Ok(0)
}

/// Drive `form` from `input` until `quit` or end of input. Returns the
/// number of accepted submissions. `employees` is the slot the form's hook
/// stores each accepted record in.
///
/// With `echo_form`, the form is rendered at start and after every submit
/// or clear.
pub fn run_session<R: BufRead, W: Write>(
    mut form: Form,
    employees: &AcceptedEmployee,
    input: R,
    mut out: W,
    echo_form: bool,
) -> Result<usize> {
    let mut accepted = 0;
    if echo_form {
        write!(out, "{}", form.render())?;
    }

    for line in input.lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "error: {message}")?;
                continue;
            }
        };

        match command {
            Command::Blank => {}
            Command::Set { field, value } => {
                if let Err(e) = form.set(&field, &value) {
                    writeln!(out, "error: {e}")?;
                }
            }
            Command::Show => write!(out, "{}", form.render())?,
            Command::Submit => {
                match form.submit() {
                    SubmitOutcome::Accepted(_) => match employees.take() {
                        Some(employee) => {
                            accepted += 1;
                            tracing::info!(name = %employee.name, "employee accepted");
                            writeln!(out, "{}", serde_json::to_string(&employee)?)?;
                        }
                        None => writeln!(out, "error: the form accepted a submission without an employee record")?,
                    },
                    SubmitOutcome::Rejected(message) if !echo_form => {
                        for line in message.lines() {
                            writeln!(out, "! {line}")?;
                        }
                    }
                    SubmitOutcome::Rejected(_) => {}
                }
                if echo_form {
                    write!(out, "{}", form.render())?;
                }
            }
            Command::Clear => match form.clear() {
                Ok(()) if echo_form => write!(out, "{}", form.render())?,
                Ok(()) => {}
                Err(e) => writeln!(out, "error: {e}")?,
            },
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
        }
    }

    out.flush()?;
    Ok(accepted)
}

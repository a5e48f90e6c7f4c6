//! # emform-cli: Employee Form Command-Line Interface
//!
//! Hosts the employee form in a terminal.
//!
//! ## Subcommands
//!
//! - `fill`: interactive form session (edit, submit, clear)
//! - `validate`: validate a submission document after the fact
//! - `departments`: list the department choices
//! - `schema`: print the `Employee` JSON Schema
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from behaviour; handlers return exit
//!   codes (0 success, 1 validation failure) and propagate operational
//!   errors with `anyhow`.
//! - Machine-readable output goes to stdout; logs go to stderr.

pub mod catalog;
pub mod config;
pub mod fill;
pub mod validate;

//! # emform-core: Foundational Types for the Employee Form
//!
//! Defines the record and enumeration types shared by the schema, the form
//! widgets, and the CLI host. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Single `Department` enum.** One definition feeds both the dropdown
//!    choices and the schema's enumerated values, so the two can never
//!    drift apart.
//!
//! 2. **Validated newtypes.** `EmailAddress` can only be constructed from
//!    an email-shaped string.
//!
//! 3. **Declaration order is data.** `Employee::FIELD_NAMES` is the order
//!    the form batches its widgets in and the order validation errors are
//!    reported in.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `emform-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod department;
pub mod email;
pub mod employee;
pub mod error;

pub use department::{Department, DEPARTMENT_COUNT};
pub use email::{EmailAddress, EMAIL_PATTERN};
pub use employee::{Employee, FieldValues};
pub use error::EmformError;

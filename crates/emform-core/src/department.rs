//! # Department: Single Source of Truth
//!
//! Defines the closed `Department` enumeration. The dropdown widget takes
//! its choices from [`Department::all()`] and the schema takes its
//! enumerated values from the same list, so a department that can be
//! picked can always be validated.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EmformError;

/// Departments an employee can belong to.
///
/// The serialized form, the dropdown text, and the accepted wire value are
/// all the variant name (e.g. `"HumanResources"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Finance,
    HumanResources,
    Marketing,
    Operations,
    Sales,
}

/// Total number of departments.
pub const DEPARTMENT_COUNT: usize = 6;

impl Department {
    /// Returns all departments in declaration order.
    pub fn all() -> &'static [Department] {
        &[
            Self::Engineering,
            Self::Finance,
            Self::HumanResources,
            Self::Marketing,
            Self::Operations,
            Self::Sales,
        ]
    }

    /// The member name, used as dropdown choice text.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Engineering => "Engineering",
            Self::Finance => "Finance",
            Self::HumanResources => "HumanResources",
            Self::Marketing => "Marketing",
            Self::Operations => "Operations",
            Self::Sales => "Sales",
        }
    }

    /// All member names in declaration order.
    pub fn names() -> Vec<&'static str> {
        Self::all().iter().map(Department::name).collect()
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Department {
    type Err = EmformError;

    /// Parse a department from its exact member name. Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|d| d.name() == s)
            .ok_or_else(|| EmformError::UnknownDepartment(s.to_string()))
    }
}

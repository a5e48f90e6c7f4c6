//! Form configuration.
//!
//! Loaded from an optional YAML file, then overridden from the
//! environment:
//!
//! - `EMFORM_CLEAR_ON_SUBMIT` (`true`/`false`/`1`/`0`)
//! - `EMFORM_SHOW_CLEAR_BUTTON` (`true`/`false`/`1`/`0`)
//!
//! Defaults match the employee form as shipped: both buttons behave like a
//! data-entry form that clears after each accepted record.

use std::path::Path;

use serde::Deserialize;

use emform_form::FormOptions;

const CLEAR_ON_SUBMIT_VAR: &str = "EMFORM_CLEAR_ON_SUBMIT";
const SHOW_CLEAR_BUTTON_VAR: &str = "EMFORM_SHOW_CLEAR_BUTTON";

/// Submit/clear behaviour of the employee form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    /// Text of the submit button.
    pub submit_label: String,
    /// Whether a clear button is offered.
    pub show_clear_button: bool,
    /// Whether widgets are reset after an accepted submission.
    pub clear_on_submit: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_label: "Submit".to_string(),
            show_clear_button: true,
            clear_on_submit: true,
        }
    }
}

impl FormConfig {
    /// Load from `path` (or defaults) and apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_overrides(|var| std::env::var(var).ok())
    }

    /// Read a YAML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_yaml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Parse YAML text. An empty document yields the defaults.
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Apply overrides looked up through `lookup` (normally the process
    /// environment).
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(CLEAR_ON_SUBMIT_VAR) {
            self.clear_on_submit = parse_flag(CLEAR_ON_SUBMIT_VAR, &raw)?;
        }
        if let Some(raw) = lookup(SHOW_CLEAR_BUTTON_VAR) {
            self.show_clear_button = parse_flag(SHOW_CLEAR_BUTTON_VAR, &raw)?;
        }
        Ok(self)
    }

    pub fn form_options(&self) -> FormOptions {
        FormOptions {
            submit_label: self.submit_label.clone(),
            show_clear_button: self.show_clear_button,
            clear_on_submit: self.clear_on_submit,
        }
    }
}

fn parse_flag(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidOverride {
            var: var.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {reason}")]
    Read { path: String, reason: String },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid value {value:?} for {var}; expected true, false, 1, or 0")]
    InvalidOverride { var: String, value: String },
}

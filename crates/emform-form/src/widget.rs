//! # Widgets
//!
//! A widget is a labelled UI element that owns exactly one editable value.
//! Hosts feed it typed text through [`Widget::set_input`]; the form reads
//! it back as a raw JSON value through [`Widget::raw_value`].
//!
//! The dropdown's raw value is a sequence (`[]` or `["Sales"]`), the shape
//! a multi-purpose select element reports. The adapter turns it into a
//! scalar before validation.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

use emform_schema::DATE_PATTERN;

const DATE_FORMAT: &str = "%Y-%m-%d";

static DATE_RE: OnceLock<Regex> = OnceLock::new();

fn date_regex() -> &'static Regex {
    DATE_RE.get_or_init(|| {
        Regex::new(DATE_PATTERN)
            .unwrap_or_else(|error| panic!("date regex failed to compile: {error}"))
    })
}

/// A widget refused a typed input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct InputRejected(pub String);

/// Flavour of a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    Text,
    Email,
}

/// What kind of element a widget is.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetKind {
    Text {
        kind: TextKind,
        placeholder: Option<String>,
    },
    Date,
    Number,
    Dropdown {
        options: Vec<String>,
    },
    Checkbox,
}

/// The current value of a widget.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetValue {
    Text(String),
    Date(Option<NaiveDate>),
    Number(f64),
    Selection(Vec<String>),
    Flag(bool),
}

impl WidgetValue {
    /// The raw JSON value a form reports for this widget value.
    ///
    /// An unset date is `null`; a non-finite number (which `set_input`
    /// never produces) is also `null`.
    pub fn to_raw(&self) -> Value {
        match self {
            Self::Text(s) => Value::String(s.clone()),
            Self::Date(Some(d)) => Value::String(d.format(DATE_FORMAT).to_string()),
            Self::Date(None) => Value::Null,
            Self::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Self::Selection(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            Self::Flag(b) => Value::Bool(*b),
        }
    }
}

/// A labelled UI element bound to a single value.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    label: String,
    kind: WidgetKind,
    initial: WidgetValue,
    value: WidgetValue,
}

impl Widget {
    fn new(label: impl Into<String>, kind: WidgetKind, initial: WidgetValue) -> Self {
        Self {
            label: label.into(),
            kind,
            value: initial.clone(),
            initial,
        }
    }

    /// Free text input, initially empty.
    pub fn text(label: impl Into<String>) -> Self {
        Self::new(
            label,
            WidgetKind::Text {
                kind: TextKind::Text,
                placeholder: None,
            },
            WidgetValue::Text(String::new()),
        )
    }

    /// Email text input with a placeholder hint, initially empty.
    pub fn email(label: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self::new(
            label,
            WidgetKind::Text {
                kind: TextKind::Email,
                placeholder: Some(placeholder.into()),
            },
            WidgetValue::Text(String::new()),
        )
    }

    /// Date picker, initially unset.
    pub fn date(label: impl Into<String>) -> Self {
        Self::new(label, WidgetKind::Date, WidgetValue::Date(None))
    }

    /// Number input starting at `initial`.
    pub fn number(label: impl Into<String>, initial: f64) -> Self {
        Self::new(label, WidgetKind::Number, WidgetValue::Number(initial))
    }

    /// Dropdown over `options`, initially with nothing selected.
    pub fn dropdown<I, S>(options: I, label: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            label,
            WidgetKind::Dropdown {
                options: options.into_iter().map(Into::into).collect(),
            },
            WidgetValue::Selection(Vec::new()),
        )
    }

    /// Checkbox, initially unchecked.
    pub fn checkbox(label: impl Into<String>) -> Self {
        Self::new(label, WidgetKind::Checkbox, WidgetValue::Flag(false))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> &WidgetKind {
        &self.kind
    }

    pub fn value(&self) -> &WidgetValue {
        &self.value
    }

    pub fn raw_value(&self) -> Value {
        self.value.to_raw()
    }

    /// Restore the value the widget was created with.
    pub fn reset(&mut self) {
        self.value = self.initial.clone();
    }

    /// Parse typed text into this widget's value.
    ///
    /// Text widgets take the input verbatim. Dates are `YYYY-MM-DD` (empty
    /// unsets). Numbers must be finite. Dropdowns accept one of their
    /// options (empty clears the selection). Checkboxes accept
    /// `true/false`, `yes/no`, `y/n`, `on/off`, `1/0`, or empty for false.
    ///
    /// # Errors
    ///
    /// Returns [`InputRejected`] and leaves the value unchanged when the
    /// input does not parse.
    pub fn set_input(&mut self, input: &str) -> Result<(), InputRejected> {
        let trimmed = input.trim();
        let value = match &self.kind {
            WidgetKind::Text { .. } => WidgetValue::Text(input.to_string()),
            WidgetKind::Date if trimmed.is_empty() => WidgetValue::Date(None),
            WidgetKind::Date => date_regex()
                .is_match(trimmed)
                .then(|| NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok())
                .flatten()
                .map(|d| WidgetValue::Date(Some(d)))
                .ok_or_else(|| InputRejected(format!("expected a date as YYYY-MM-DD, got {trimmed:?}")))?,
            WidgetKind::Number => match trimmed.parse::<f64>() {
                Ok(n) if n.is_finite() => WidgetValue::Number(n),
                _ => return Err(InputRejected(format!("expected a number, got {trimmed:?}"))),
            },
            WidgetKind::Dropdown { .. } if trimmed.is_empty() => WidgetValue::Selection(Vec::new()),
            WidgetKind::Dropdown { options } => {
                if !options.iter().any(|o| o == trimmed) {
                    return Err(InputRejected(format!(
                        "expected one of {}, got {trimmed:?}",
                        options.join(", ")
                    )));
                }
                WidgetValue::Selection(vec![trimmed.to_string()])
            }
            WidgetKind::Checkbox => match trimmed.to_ascii_lowercase().as_str() {
                "true" | "yes" | "y" | "on" | "1" => WidgetValue::Flag(true),
                "false" | "no" | "n" | "off" | "0" | "" => WidgetValue::Flag(false),
                _ => return Err(InputRejected(format!("expected yes or no, got {trimmed:?}"))),
            },
        };
        self.value = value;
        Ok(())
    }

    /// One-line text rendering, e.g. `Salary: [0]` or `[x] Elected Benefits`.
    pub fn render(&self) -> String {
        match (&self.kind, &self.value) {
            (_, WidgetValue::Flag(checked)) => {
                format!("[{}] {}", if *checked { "x" } else { " " }, self.label)
            }
            (WidgetKind::Text { placeholder: Some(hint), .. }, WidgetValue::Text(s))
                if s.is_empty() =>
            {
                format!("{}: [<{hint}>]", self.label)
            }
            (_, WidgetValue::Text(s)) => format!("{}: [{s}]", self.label),
            (_, WidgetValue::Date(Some(d))) => format!("{}: [{}]", self.label, d.format(DATE_FORMAT)),
            (_, WidgetValue::Date(None)) => format!("{}: [YYYY-MM-DD]", self.label),
            (_, WidgetValue::Number(n)) => format!("{}: [{n}]", self.label),
            (WidgetKind::Dropdown { options }, WidgetValue::Selection(selected)) => {
                let current = selected.first().map(String::as_str).unwrap_or("--");
                format!("{}: [{current}] ({})", self.label, options.join("|"))
            }
            (_, WidgetValue::Selection(selected)) => {
                format!("{}: [{}]", self.label, selected.join(", "))
            }
        }
    }
}

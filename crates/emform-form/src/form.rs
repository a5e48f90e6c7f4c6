//! # Form Lifecycle
//!
//! A form aggregates bound widgets, a submit/clear lifecycle, and an
//! optional validation hook.
//!
//! ## States
//!
//! ```text
//!                submit, hook returns Some(message)
//!   Editing ─────────────────────────────────────────▶ SubmittedInvalid
//!      ▲  │                                               │   │
//!      │  │ submit, hook returns None                     │   │ submit
//!      │  ▼                                               │   ▼ (same two outcomes)
//!      │  clear_on_submit? ──yes──▶ widgets reset ──▶ Editing
//!      │        │no
//!      │        ▼
//!      └─ edit ─ SubmittedValid
//! ```
//!
//! A rejected submission keeps every widget value and shows the message
//! until the next submit or clear. An accepted submission is exposed
//! through [`Form::value`].

use std::sync::Arc;

use emform_core::FieldValues;

use crate::error::FormError;
use crate::template::{Batch, FormTemplate};
use crate::widget::Widget;

/// Validation hook: `None` lets the submission through, `Some(message)`
/// blocks it and is shown to the user.
pub type ValidateHook = Arc<dyn Fn(&FieldValues) -> Option<String> + Send + Sync>;

/// Submit/clear behaviour of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOptions {
    /// Text of the submit button.
    pub submit_label: String,
    /// Whether a clear button is offered.
    pub show_clear_button: bool,
    /// Whether widgets are reset after an accepted submission.
    pub clear_on_submit: bool,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            submit_label: "Submit".to_string(),
            show_clear_button: false,
            clear_on_submit: false,
        }
    }
}

/// Where a form is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    /// Accepting edits; no message shown.
    Editing,
    /// The last submission was rejected with `message`.
    SubmittedInvalid { message: String },
    /// The last submission was accepted and the widgets were kept.
    SubmittedValid,
}

impl std::fmt::Display for FormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Editing => f.write_str("EDITING"),
            Self::SubmittedInvalid { .. } => f.write_str("SUBMITTED_INVALID"),
            Self::SubmittedValid => f.write_str("SUBMITTED_VALID"),
        }
    }
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The hook let the submission through; carries the submitted values.
    Accepted(FieldValues),
    /// The hook blocked the submission with this message.
    Rejected(String),
}

/// A form over bound widgets.
pub struct Form {
    template: FormTemplate,
    elements: Vec<(String, Widget)>,
    options: FormOptions,
    validate: Option<ValidateHook>,
    state: FormState,
    value: Option<FieldValues>,
}

impl std::fmt::Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("elements", &self.elements)
            .field("options", &self.options)
            .field("has_validate_hook", &self.validate.is_some())
            .field("state", &self.state)
            .field("value", &self.value)
            .finish()
    }
}

impl Form {
    pub(crate) fn new(batch: Batch, options: FormOptions, validate: Option<ValidateHook>) -> Self {
        Self {
            template: batch.template,
            elements: batch.elements,
            options,
            validate,
            state: FormState::Editing,
            value: None,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// The last accepted submission, if any.
    pub fn value(&self) -> Option<&FieldValues> {
        self.value.as_ref()
    }

    /// Field names in binding order.
    pub fn field_names(&self) -> Vec<&str> {
        self.elements.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn widget(&self, field: &str) -> Option<&Widget> {
        self.elements
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, widget)| widget)
    }

    /// Raw values of every widget, keyed by field name.
    pub fn current_values(&self) -> FieldValues {
        self.elements
            .iter()
            .map(|(name, widget)| (name.clone(), widget.raw_value()))
            .collect()
    }

    /// Feed typed input to one widget.
    ///
    /// Editing after an accepted, uncleared submission returns the form to
    /// `Editing`. A rejection message stays visible until the next submit.
    ///
    /// # Errors
    ///
    /// - `FormError::UnknownField` if no widget is bound as `field`.
    /// - `FormError::InvalidInput` if the widget rejects `input`.
    pub fn set(&mut self, field: &str, input: &str) -> Result<(), FormError> {
        let widget = self
            .elements
            .iter_mut()
            .find(|(name, _)| name == field)
            .map(|(_, widget)| widget)
            .ok_or_else(|| FormError::UnknownField(field.to_string()))?;

        widget
            .set_input(input)
            .map_err(|e| FormError::InvalidInput {
                field: field.to_string(),
                reason: e.0,
            })?;

        if self.state == FormState::SubmittedValid {
            self.transition(FormState::Editing);
        }
        Ok(())
    }

    /// Attempt to submit the current values.
    pub fn submit(&mut self) -> SubmitOutcome {
        let values = self.current_values();
        let verdict = self.validate.as_ref().and_then(|hook| hook(&values));

        match verdict {
            Some(message) => {
                tracing::debug!(lines = message.lines().count(), "submission rejected");
                self.transition(FormState::SubmittedInvalid {
                    message: message.clone(),
                });
                SubmitOutcome::Rejected(message)
            }
            None => {
                tracing::debug!(fields = values.len(), "submission accepted");
                self.value = Some(values.clone());
                if self.options.clear_on_submit {
                    self.reset_widgets();
                    self.transition(FormState::Editing);
                } else {
                    self.transition(FormState::SubmittedValid);
                }
                SubmitOutcome::Accepted(values)
            }
        }
    }

    /// Reset every widget and return to `Editing`. The last accepted value
    /// is kept.
    ///
    /// # Errors
    ///
    /// Returns `FormError::ClearDisabled` when the form has no clear button.
    pub fn clear(&mut self) -> Result<(), FormError> {
        if !self.options.show_clear_button {
            return Err(FormError::ClearDisabled);
        }
        self.reset_widgets();
        self.transition(FormState::Editing);
        Ok(())
    }

    /// Text rendering: the filled template, the buttons, and the rejection
    /// message (one `! `-prefixed line each) when there is one.
    pub fn render(&self) -> String {
        let mut out = self.template.render_with(|slot| self.widget(slot).map(Widget::render));
        if !out.ends_with('\n') {
            out.push('\n');
        }

        out.push_str(&format!("[ {} ]", self.options.submit_label));
        if self.options.show_clear_button {
            out.push_str("  [ Clear ]");
        }
        out.push('\n');

        if let FormState::SubmittedInvalid { message } = &self.state {
            for line in message.lines() {
                out.push_str("! ");
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }

    fn reset_widgets(&mut self) {
        for (_, widget) in &mut self.elements {
            widget.reset();
        }
    }

    fn transition(&mut self, next: FormState) {
        if self.state != next {
            tracing::debug!(from = %self.state, to = %next, "form state change");
        }
        self.state = next;
    }
}

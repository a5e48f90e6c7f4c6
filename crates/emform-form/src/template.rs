//! # Form Templates
//!
//! A template is markdown text with `{name}` slots. Binding widgets into
//! the slots yields a [`Batch`]; a batch plus options and an optional
//! validation hook yields a [`Form`].
//!
//! `{{` and `}}` render as literal braces. Slot names are ASCII letters,
//! digits, and underscores.

use crate::error::FormError;
use crate::form::{Form, FormOptions, ValidateHook};
use crate::widget::Widget;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(String),
}

/// Parsed markdown template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormTemplate {
    segments: Vec<Segment>,
}

impl FormTemplate {
    /// Parse template text.
    ///
    /// # Errors
    ///
    /// Returns `FormError::MalformedTemplate` for an unclosed `{`, a stray
    /// `}`, or an empty or non-identifier slot name.
    pub fn parse(source: &str) -> Result<Self, FormError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for n in chars.by_ref() {
                        if n == '}' {
                            closed = true;
                            break;
                        }
                        name.push(n);
                    }
                    if !closed {
                        return Err(FormError::MalformedTemplate(format!(
                            "unclosed placeholder {{{name}"
                        )));
                    }
                    if name.is_empty()
                        || !name.chars().all(|n| n.is_ascii_alphanumeric() || n == '_')
                    {
                        return Err(FormError::MalformedTemplate(format!(
                            "invalid placeholder name {name:?}"
                        )));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Slot(name));
                }
                '}' => {
                    return Err(FormError::MalformedTemplate(
                        "unmatched '}' (use '}}' for a literal brace)".to_string(),
                    ));
                }
                other => literal.push(other),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// Slot names in order of appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Slot(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Render with each slot replaced by `fill(name)`. Slots `fill` has no
    /// text for are rendered as `{name}`.
    pub fn render_with<F>(&self, mut fill: F) -> String
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(name) => match fill(name) {
                    Some(text) => out.push_str(&text),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                },
            }
        }
        out
    }

    /// Bind named widgets into the template's slots. Element order is kept
    /// and becomes the order of the form's fields.
    ///
    /// # Errors
    ///
    /// - `FormError::DuplicateElement` if a name is bound twice.
    /// - `FormError::UnplacedElement` if an element has no slot.
    /// - `FormError::UnboundPlaceholder` if a slot has no element.
    pub fn batch<N>(self, elements: Vec<(N, Widget)>) -> Result<Batch, FormError>
    where
        N: Into<String>,
    {
        let elements: Vec<(String, Widget)> = elements
            .into_iter()
            .map(|(name, widget)| (name.into(), widget))
            .collect();

        let placeholders = self.placeholders();
        for (i, (name, _)) in elements.iter().enumerate() {
            if elements[..i].iter().any(|(earlier, _)| earlier == name) {
                return Err(FormError::DuplicateElement(name.clone()));
            }
            if !placeholders.contains(&name.as_str()) {
                return Err(FormError::UnplacedElement(name.clone()));
            }
        }
        for slot in &placeholders {
            if !elements.iter().any(|(name, _)| name == slot) {
                return Err(FormError::UnboundPlaceholder((*slot).to_string()));
            }
        }

        Ok(Batch {
            template: self,
            elements,
        })
    }
}

/// Widgets bound into a template, not yet wrapped in a form.
#[derive(Debug, Clone)]
pub struct Batch {
    pub(crate) template: FormTemplate,
    pub(crate) elements: Vec<(String, Widget)>,
}

impl Batch {
    /// Field names in binding order.
    pub fn field_names(&self) -> Vec<&str> {
        self.elements.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Wrap the batch in a form. `validate = None` builds a form that
    /// accepts every submission.
    pub fn form(self, options: FormOptions, validate: Option<ValidateHook>) -> Form {
        Form::new(self, options, validate)
    }
}

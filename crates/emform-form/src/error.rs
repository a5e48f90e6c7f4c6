use thiserror::Error;

/// Errors raised while assembling or operating a form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// No element is bound under this name.
    #[error("unknown form field: {0:?}")]
    UnknownField(String),

    /// The widget rejected the typed input.
    #[error("invalid input for {field}: {reason}")]
    InvalidInput {
        /// Name the widget is bound under.
        field: String,
        /// Why the widget rejected it.
        reason: String,
    },

    /// The template has a slot nothing was bound to.
    #[error("template placeholder {{{0}}} has no bound element")]
    UnboundPlaceholder(String),

    /// An element was bound that the template never places.
    #[error("element {0:?} has no placeholder in the template")]
    UnplacedElement(String),

    /// Two elements were bound under the same name.
    #[error("element {0:?} is bound more than once")]
    DuplicateElement(String),

    /// The template text could not be parsed.
    #[error("malformed template: {0}")]
    MalformedTemplate(String),

    /// `clear` was requested on a form without a clear button.
    #[error("this form has no clear button")]
    ClearDisabled,
}

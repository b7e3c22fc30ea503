//! Error types for the date picker.
//!
//! Every variant describes a misuse by the embedding application (an
//! unknown configuration string, a clashing view order, a malformed
//! template). Invalid typed input is never an error; it is reported through
//! [`DatePickerInput::is_invalid`](crate::widgets::DatePickerInput::is_invalid).

/// Result type alias for date picker operations.
pub type Result<T> = std::result::Result<T, DatePickerError>;

/// Errors raised while configuring or mounting picker components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatePickerError {
    /// The input format string is not one of the recognized formats.
    #[error("unknown date format '{0}', expected one of \"YYYY-MM-DD\", \"HH:mm\", \"YYYY-MM-DD HH:mm\"")]
    UnknownFormat(String),

    /// The view role string is not one of the recognized roles.
    #[error("unknown view role '{0}', expected one of \"calendar-month\", \"calendar-year\", \"time\"")]
    UnknownViewRole(String),

    /// The navigation direction string is not recognized.
    #[error("unknown navigation direction '{0}', expected \"backward\" or \"forward\"")]
    UnknownDirection(String),

    /// A view with the same order is already mounted.
    #[error("a view with order {0} is already registered")]
    DuplicateViewOrder(i32),

    /// A template render target received the wrong number of children.
    #[error("template render target requires exactly one child, got {0}")]
    TemplateChildCount(usize),

    /// A template render target received a child it cannot merge into.
    #[error("template render target requires an element child")]
    TemplateChildNotElement,
}

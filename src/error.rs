//! Errors produced while turning field text into a color.

use crate::field::FieldId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorParseError {
    /// The text is not a number of the kind the field expects.
    #[error("{field}: '{text}' is not a number")]
    NotANumber { field: FieldId, text: String },

    /// The number parsed but lies outside the field's range.
    #[error("{field}: {value} is outside {min}..={max}")]
    OutOfRange {
        field: FieldId,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("'{0}' is not a hex color")]
    InvalidHex(String),
}

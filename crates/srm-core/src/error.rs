//! Error types for field planning and slot patching

use thiserror::Error;

/// Codec errors raised while touching save bytes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("Save file too short: {len} bytes, need at least {min}")]
    TooShort { len: usize, min: usize },

    #[error("Edit offset {offset:#05x} lies outside the {limit:#05x}-byte slot")]
    EditOutOfBounds { offset: usize, limit: usize },

    /// A slot failed verification after it was patched. Always an internal bug.
    #[error("Slot {slot} at {offset:#05x} failed checksum verification after patching")]
    ChecksumInconsistency { slot: usize, offset: usize },
}

/// Why a single field input was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldErrorKind {
    #[error("cannot parse input: {0}")]
    ParseFailure(String),

    #[error("{value} is outside the allowed range {min}..={max}")]
    OutOfRange { value: i64, min: i64, max: i64 },

    #[error("unable to produce updates: {0}")]
    ProductionFailure(String),

    #[error("{0}")]
    ConflictingState(String),

    #[error("missing input")]
    MissingInput,
}

/// A field input error labeled with the field it came from
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("error with {field}: {kind}")]
pub struct FieldError {
    pub field: String,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn new(field: impl Into<String>, kind: FieldErrorKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }
}

/// Errors from a full "generate edited save" request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Save(#[from] SaveError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_message() {
        let err = FieldError::new(
            "arrows",
            FieldErrorKind::OutOfRange {
                value: 31,
                min: 0,
                max: 30,
            },
        );
        assert_eq!(
            err.to_string(),
            "error with arrows: 31 is outside the allowed range 0..=30"
        );
    }

    #[test]
    fn test_missing_input_message() {
        let err = FieldError::new("bombs", FieldErrorKind::MissingInput);
        assert_eq!(err.to_string(), "error with bombs: missing input");
    }
}

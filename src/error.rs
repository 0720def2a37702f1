//! Error types for option value parsing.

use thiserror::Error;

/// Why an option value was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    /// The text does not have the expected shape (field count, numbers).
    #[error("cannot read '{value}' as {expected}")]
    Syntax {
        /// The rejected text.
        value: String,
        /// What the text should have looked like.
        expected: &'static str,
    },

    /// The text is well formed but the value is not allowed.
    #[error("'{value}' is out of range: {reason}")]
    Range {
        /// The rejected text.
        value: String,
        /// The violated constraint.
        reason: &'static str,
    },

    /// A wipe list is already full.
    #[error("{option}: maximum number of wipes ({capacity}) exceeded, ignoring '{value}'")]
    WipeCapacity {
        option: String,
        capacity: usize,
        value: String,
    },

    /// A wipe option named something that is not a usable rectangle.
    #[error("{option}: invalid wipe definition, ignoring '{value}'")]
    InvalidWipe { option: String, value: String },

    /// More wipe areas than a list can hold, e.g. from a deserialized snapshot.
    #[error("{count} wipe areas exceed the maximum of {capacity}")]
    TooManyWipes { count: usize, capacity: usize },
}

impl OptionError {
    pub(crate) fn syntax(value: &str, expected: &'static str) -> Self {
        OptionError::Syntax {
            value: value.to_owned(),
            expected,
        }
    }

    pub(crate) fn range(value: &str, reason: &'static str) -> Self {
        OptionError::Range {
            value: value.to_owned(),
            reason,
        }
    }
}

/// Result type for option value parsing.
pub type OptionResult<T> = std::result::Result<T, OptionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OptionError::syntax("1,x", "an integer pair");
        assert_eq!(err.to_string(), "cannot read '1,x' as an integer pair");

        let err = OptionError::WipeCapacity {
            option: "--wipe".to_owned(),
            capacity: 100,
            value: "0,0,5,5".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "--wipe: maximum number of wipes (100) exceeded, ignoring '0,0,5,5'"
        );

        let err = OptionError::InvalidWipe {
            option: "--wipe".to_owned(),
            value: "0,0".to_owned(),
        };
        assert!(err.to_string().contains("invalid wipe definition"));
    }
}

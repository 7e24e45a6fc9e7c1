//! Error types for the inflammation model.

use thiserror::Error;

/// Errors raised while building or validating tables and clinical records.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ModelError {
    // === Input Kind Errors ===
    /// The input is not of the expected kind (e.g. text where a number is needed).
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    // === Shape Errors ===
    /// The input does not have the expected number of dimensions.
    #[error("inflammation array should be {expected}D, found {found}D")]
    Dimension { expected: usize, found: usize },

    /// A row has a different number of days than the first row.
    #[error("row {row} has {found} days, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Nested input mixes lists and plain values at the same depth.
    #[error("inconsistent nesting at index {index}")]
    InconsistentNesting { index: usize },

    // === Domain Errors ===
    /// A reading is below zero.
    #[error("inflammation values should not be negative (row {row}, day {day}: {value})")]
    NegativeValue { row: usize, day: usize, value: f64 },

    /// A reading is positive or negative infinity.
    #[error("inflammation values should be finite (row {row}, day {day})")]
    InfiniteValue { row: usize, day: usize },

    // === Collection Errors ===
    /// An aggregate was requested over a table with no patients.
    #[error("table has no patients")]
    EmptyTable,

    /// The patient has no observations yet.
    #[error("patient {patient} has no observations")]
    NoObservations { patient: String },

    /// An explicit observation day does not follow the last recorded day.
    #[error("observation day {day} must be after day {last}")]
    DayOutOfOrder { day: u32, last: u32 },

    /// The last recorded day is the largest representable day.
    #[error("no observation day can follow day {last}")]
    DayOverflow { last: u32 },

    // === Identity Errors ===
    /// A person's name is empty or blank.
    #[error("name must not be empty")]
    InvalidName,
}

/// Coarse classification of [`ModelError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TypeMismatch,
    Shape,
    Domain,
    Empty,
    Sequence,
    InvalidName,
}

impl ModelError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::Dimension { .. } | Self::RaggedRow { .. } | Self::InconsistentNesting { .. } => {
                ErrorKind::Shape
            }
            Self::NegativeValue { .. } | Self::InfiniteValue { .. } => ErrorKind::Domain,
            Self::EmptyTable | Self::NoObservations { .. } => ErrorKind::Empty,
            Self::DayOutOfOrder { .. } | Self::DayOverflow { .. } => ErrorKind::Sequence,
            Self::InvalidName => ErrorKind::InvalidName,
        }
    }
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::NegativeValue {
            row: 1,
            day: 0,
            value: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "inflammation values should not be negative (row 1, day 0: -1)"
        );
        let err = ModelError::Dimension {
            expected: 2,
            found: 1,
        };
        assert_eq!(err.to_string(), "inflammation array should be 2D, found 1D");
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(ModelError::EmptyTable.kind(), ErrorKind::Empty);
        assert_eq!(
            ModelError::RaggedRow {
                row: 2,
                expected: 3,
                found: 2
            }
            .kind(),
            ErrorKind::Shape
        );
        assert_eq!(
            ModelError::TypeMismatch {
                expected: "text",
                found: "number"
            }
            .kind(),
            ErrorKind::TypeMismatch
        );
    }
}

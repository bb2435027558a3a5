//! Error types for leto-core operations.

use thiserror::Error;

/// Errors raised while building calendars or decomposing day offsets.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LetoError {
    /// The installed length table of a structure disagrees with the table
    /// recomputed from its children.
    #[error(
        "Length mismatch in structure '{structure}' for period type '{period_type}': \
         declared {declared}, computed {computed}"
    )]
    LengthMismatch {
        structure: String,
        period_type: String,
        declared: i64,
        computed: i64,
    },

    /// `set_total_length_in_period_types` was called twice on one structure.
    #[error("Length table of structure '{structure}' is already installed")]
    LengthsAlreadyInstalled { structure: String },

    /// A length table was queried before it was installed.
    #[error("Length table of structure '{structure}' is not installed")]
    LengthsNotInstalled { structure: String },

    /// A structure violates its shape invariants (detected at construction).
    #[error("Malformed structure: {0}")]
    MalformedStructure(String),

    /// Any other calendar definition error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The day offset cannot be resolved by this calendar.
    #[error("Day offset {day_offset} is out of range (dates before the calendar epoch are not supported)")]
    OutOfRange { day_offset: i64 },

    /// A calendar date whose components do not exist in the calendar.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A period list that could not have been produced by this calendar.
    #[error("Inconsistent periods: {0}")]
    InconsistentPeriods(String),
}

/// Convenience alias used throughout leto-core.
pub type Result<T> = std::result::Result<T, LetoError>;

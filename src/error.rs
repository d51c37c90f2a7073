// Engine error taxonomy
// Edge cases that are expected user states (zero income, zero target) are NOT
// errors — those operations define their result instead. Errors here mean the
// caller handed us something structurally wrong.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A frequency label that is not one of the known periods.
    /// Indicates a caller/schema bug, so we fail fast instead of
    /// silently treating the amount as monthly.
    InvalidFrequency(String),

    /// An asset category label that is not one of the known categories.
    InvalidAssetCategory(String),

    /// Update/remove referenced an id that is not in the ledger.
    UnknownId { ledger: &'static str, id: String },

    /// A record failed command-side validation (negative amount,
    /// zero-year term, ...). Rejected before it ever reaches the engine.
    InputValidation {
        field: &'static str,
        message: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidFrequency(label) => {
                write!(f, "Unrecognized frequency: '{}'", label)
            }
            EngineError::InvalidAssetCategory(label) => {
                write!(f, "Unrecognized asset category: '{}'", label)
            }
            EngineError::UnknownId { ledger, id } => {
                write!(f, "No record with id '{}' in {} ledger", id, ledger)
            }
            EngineError::InputValidation { field, message } => {
                write!(f, "{}: {}", field, message)
            }
        }
    }
}

impl std::error::Error for EngineError {}

pub type EngineResult<T> = Result<T, EngineError>;

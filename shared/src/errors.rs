//! Error types for the Prakriti assessment engine

use crate::validation::ValidationError;
use thiserror::Error;

/// Errors raised by the scoring engine
///
/// Scoring itself is total; the only failure is input outside its domain,
/// detected before anything is computed.
#[derive(Error, Debug, Clone)]
pub enum AssessmentError {
    #[error("Invalid input: {}", .0.user_message())]
    InvalidInput(ValidationError),
}

impl AssessmentError {
    /// Technical name of the offending field
    pub fn field(&self) -> &str {
        match self {
            AssessmentError::InvalidInput(err) => &err.field,
        }
    }
}

impl From<ValidationError> for AssessmentError {
    fn from(err: ValidationError) -> Self {
        AssessmentError::InvalidInput(err)
    }
}

/// Result alias for engine operations
pub type AssessmentResult<T> = Result<T, AssessmentError>;

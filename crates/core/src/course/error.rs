//! Course catalog errors.

use thiserror::Error;

use crate::depreciation::DepreciationError;
use crate::quiz::QuizError;

/// A catalog exercise failed to build.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseError {
    /// Quiz or journal exercise definition is invalid.
    #[error(transparent)]
    Quiz(#[from] QuizError),

    /// Depreciation scenario is invalid.
    #[error(transparent)]
    Depreciation(#[from] DepreciationError),
}

impl CourseError {
    /// Returns the stable error code of the underlying error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Quiz(err) => err.error_code(),
            Self::Depreciation(err) => err.error_code(),
        }
    }
}

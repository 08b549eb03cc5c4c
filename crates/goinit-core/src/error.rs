//! Top-level error type unifying the domain and application layers.

use thiserror::Error;

pub use crate::application::error::ErrorCategory;
use crate::application::error::ApplicationError;
use crate::domain::error::DomainError;

/// Any error the core crate can produce.
#[derive(Debug, Error)]
pub enum GoInitError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Application(#[from] ApplicationError),
}

pub type GoInitResult<T> = Result<T, GoInitError>;

impl GoInitError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Error category for display styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
        }
    }
}

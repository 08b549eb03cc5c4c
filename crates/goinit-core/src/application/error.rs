//! Application layer errors.
//!
//! Nothing here is fatal: a validation failure blocks one submit attempt,
//! a network or server failure clears the relevant in-flight flag and
//! leaves the previous successful state untouched. Stale responses
//! discarded by the sequence guard are silent and have no error variant.

use thiserror::Error;

use crate::domain::validation::{ValidationReport, summarize};

/// Errors that occur while orchestrating requests against the generator
/// service.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The selection failed field validation; no network call was made.
    #[error("selection is not submittable: {}", summarize(.0))]
    InvalidSelection(ValidationReport),

    /// Transport-level failure (connection refused, timeout, ...).
    #[error("network error: {message}")]
    Network { message: String },

    /// The service answered with a non-2xx status; the body is its
    /// plain-text error message.
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },

    /// The artifact could not be written to its destination.
    #[error("failed to save '{filename}': {reason}")]
    SaveFailed { filename: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidSelection(report) => {
                let mut suggestions: Vec<String> = report
                    .iter()
                    .map(|(field, message)| format!("  \u{2022} {}: {message}", field.label()))
                    .collect();
                suggestions.push("Fill in the missing fields and retry".into());
                suggestions
            }
            Self::Network { .. } => vec![
                "Check that the generator service is running and reachable".into(),
                "Set GOINIT_SERVICE_URL if the service is not on localhost:8181".into(),
            ],
            Self::Server { status, .. } => vec![
                format!("The service rejected the request (HTTP {status})"),
                "Run 'goinit meta' to check what the service supports".into(),
            ],
            Self::SaveFailed { filename, .. } => vec![
                format!("Could not write {filename}"),
                "Check write permissions and free disk space in the output directory".into(),
            ],
        }
    }

    /// Error category for display styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidSelection(_) => ErrorCategory::Validation,
            Self::Network { .. } | Self::Server { .. } => ErrorCategory::Service,
            Self::SaveFailed { .. } => ErrorCategory::Internal,
        }
    }

    /// Every failure leaves the client usable; retrying is always safe.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Server { .. })
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Service,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::selection::Field;

    #[test]
    fn invalid_selection_message_names_fields() {
        let mut report = ValidationReport::new();
        report.insert(Field::ModuleName, "Module Name is required.".into());
        let err = ApplicationError::InvalidSelection(report);
        assert!(err.to_string().contains("Module Name is required."));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn server_errors_are_retryable() {
        let err = ApplicationError::Server {
            status: 500,
            message: "boom".into(),
        };
        assert!(err.is_retryable());
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn save_failures_are_internal() {
        let err = ApplicationError::SaveFailed {
            filename: "project.zip".into(),
            reason: "disk full".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(!err.is_retryable());
    }
}

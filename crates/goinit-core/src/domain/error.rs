//! Domain-layer errors: rejected user-supplied values.
//!
//! Selection mutations never fail — invalid field values are representable
//! and surfaced through validation — so domain errors only arise when a
//! string cannot be interpreted as a known value object, or when a caller
//! asks for a framework outside the project type's compatible sequence.

use thiserror::Error;

use crate::domain::value_objects::{Framework, ProjectType};

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown project type: {0}")]
    UnknownProjectType(String),

    #[error("unknown framework: {0}")]
    UnknownFramework(String),

    #[error("framework '{framework}' is not compatible with project type '{project_type}'")]
    IncompatibleFramework {
        framework: Framework,
        project_type: ProjectType,
        /// The project type's compatible sequence, in presentation order.
        valid: Vec<Framework>,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownProjectType(name) => vec![
                format!("'{name}' is not a supported project type"),
                "Supported types: microservice, cli-app, api-server, simple-project".into(),
            ],
            Self::UnknownFramework(name) => vec![
                format!("'{name}' is not a supported framework"),
                "Run 'goinit meta' to see the frameworks for each project type".into(),
            ],
            Self::IncompatibleFramework {
                framework,
                project_type,
                valid,
            } => vec![
                format!("'{framework}' cannot be used with project type '{project_type}'"),
                format!(
                    "Compatible frameworks: {}",
                    valid
                        .iter()
                        .map(|f| f.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            ],
        }
    }
}

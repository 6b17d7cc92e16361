//! Project error types.

use rostra_shared::types::ProjectId;
use rostra_shared::AppError;
use thiserror::Error;

/// Project-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectError {
    /// Project not found.
    #[error("Project not found: {0}")]
    NotFound(ProjectId),

    /// Project name is empty.
    #[error("Project name cannot be empty")]
    EmptyName,

    /// Client name is empty.
    #[error("Client name cannot be empty")]
    EmptyClientName,
}

impl From<ProjectError> for AppError {
    fn from(err: ProjectError) -> Self {
        match err {
            ProjectError::NotFound(_) => Self::NotFound(err.to_string()),
            ProjectError::EmptyName | ProjectError::EmptyClientName => {
                Self::Validation(err.to_string())
            }
        }
    }
}

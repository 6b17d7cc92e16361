//! Resource error types.

use rostra_shared::types::ResourceId;
use rostra_shared::AppError;
use thiserror::Error;

/// Resource-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    /// Resource not found.
    #[error("Resource not found: {0}")]
    NotFound(ResourceId),

    /// Resource name is empty.
    #[error("Resource name cannot be empty")]
    EmptyName,

    /// Email address is missing or malformed.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Primary skill is empty.
    #[error("Primary skill cannot be empty")]
    EmptyPrimarySkill,
}

impl From<ResourceError> for AppError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound(_) => Self::NotFound(err.to_string()),
            ResourceError::EmptyName
            | ResourceError::InvalidEmail(_)
            | ResourceError::EmptyPrimarySkill => Self::Validation(err.to_string()),
        }
    }
}

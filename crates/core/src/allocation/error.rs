//! Allocation error types.

use rostra_shared::types::{AllocationId, ProjectId, ResourceId};
use rostra_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Allocation-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// Allocation not found.
    #[error("Allocation not found: {0}")]
    NotFound(AllocationId),

    /// The referenced resource does not exist.
    #[error("Allocation references unknown resource: {0}")]
    UnknownResource(ResourceId),

    /// The referenced project does not exist.
    #[error("Allocation references unknown project: {0}")]
    UnknownProject(ProjectId),

    /// Role is empty.
    #[error("Allocation role cannot be empty")]
    EmptyRole,

    /// Percentage commitment is outside 0-100.
    #[error("Percentage must be between 0 and 100, got {0}")]
    PercentageOutOfRange(u8),

    /// Billing rate is negative.
    #[error("Billing rate cannot be negative, got {0}")]
    NegativeBillingRate(Decimal),
}

impl From<AllocationError> for AppError {
    fn from(err: AllocationError) -> Self {
        match err {
            AllocationError::NotFound(_) => Self::NotFound(err.to_string()),
            AllocationError::UnknownResource(_)
            | AllocationError::UnknownProject(_)
            | AllocationError::EmptyRole
            | AllocationError::PercentageOutOfRange(_)
            | AllocationError::NegativeBillingRate(_) => Self::Validation(err.to_string()),
        }
    }
}

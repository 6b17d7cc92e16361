//! Allocation validation and merge logic.

use rust_decimal::Decimal;

use super::error::AllocationError;
use super::types::{Allocation, CreateAllocationInput, UpdateAllocationInput};

/// Highest valid percentage commitment.
const MAX_PERCENTAGE: u8 = 100;

/// Allocation service for business logic.
///
/// Referential checks against live resources and projects happen in the
/// store, which owns the collections; this service validates the fields an
/// allocation carries on its own.
pub struct AllocationService;

impl AllocationService {
    /// Validate input for creating an allocation.
    ///
    /// # Errors
    ///
    /// Returns `AllocationError::EmptyRole` for a blank role,
    /// `AllocationError::PercentageOutOfRange` for a commitment above 100,
    /// and `AllocationError::NegativeBillingRate` for a rate below zero.
    pub fn validate_create(input: &CreateAllocationInput) -> Result<(), AllocationError> {
        Self::validate_role(&input.role)?;
        Self::validate_percentage(input.percentage)?;
        if let Some(rate) = input.billing_rate {
            Self::validate_billing_rate(rate)?;
        }
        Ok(())
    }

    /// Validate a partial update. Only fields present in the patch are checked.
    ///
    /// # Errors
    ///
    /// Returns the same validation errors as [`Self::validate_create`].
    pub fn validate_update(patch: &UpdateAllocationInput) -> Result<(), AllocationError> {
        if let Some(role) = &patch.role {
            Self::validate_role(role)?;
        }
        if let Some(percentage) = patch.percentage {
            Self::validate_percentage(percentage)?;
        }
        if let Some(Some(rate)) = patch.billing_rate {
            Self::validate_billing_rate(rate)?;
        }
        Ok(())
    }

    /// Merge a partial update over an allocation.
    ///
    /// The merge is shallow: fields absent from the patch are retained. The
    /// resource and project endpoints are never touched.
    pub fn apply_update(allocation: &mut Allocation, patch: UpdateAllocationInput) {
        if let Some(role) = patch.role {
            allocation.role = role;
        }
        if let Some(start_date) = patch.start_date {
            allocation.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            allocation.end_date = end_date;
        }
        if let Some(billing_start_date) = patch.billing_start_date {
            allocation.billing_start_date = billing_start_date;
        }
        if let Some(billing_end_date) = patch.billing_end_date {
            allocation.billing_end_date = billing_end_date;
        }
        if let Some(percentage) = patch.percentage {
            allocation.percentage = percentage;
        }
        if let Some(is_billable) = patch.is_billable {
            allocation.is_billable = is_billable;
        }
        if let Some(timesheet_required) = patch.timesheet_required {
            allocation.timesheet_required = timesheet_required;
        }
        if let Some(billing_rate) = patch.billing_rate {
            allocation.billing_rate = billing_rate;
        }
        if let Some(billing_project) = patch.billing_project {
            allocation.billing_project = billing_project;
        }
        if let Some(notes) = patch.notes {
            allocation.notes = notes;
        }
    }

    fn validate_role(role: &str) -> Result<(), AllocationError> {
        if role.trim().is_empty() {
            return Err(AllocationError::EmptyRole);
        }
        Ok(())
    }

    fn validate_percentage(percentage: u8) -> Result<(), AllocationError> {
        if percentage > MAX_PERCENTAGE {
            return Err(AllocationError::PercentageOutOfRange(percentage));
        }
        Ok(())
    }

    fn validate_billing_rate(rate: Decimal) -> Result<(), AllocationError> {
        if rate < Decimal::ZERO {
            return Err(AllocationError::NegativeBillingRate(rate));
        }
        Ok(())
    }
}

//! Allocation data types.

use chrono::NaiveDate;
use rostra_shared::types::{AllocationId, ProjectId, ResourceId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A time-bounded assignment linking one resource to one project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Allocation {
    /// Unique identifier, assigned by the store.
    pub id: AllocationId,
    /// The allocated resource.
    pub resource_id: ResourceId,
    /// The project the resource is allocated to.
    pub project_id: ProjectId,
    /// Role on the project.
    pub role: String,
    /// Date the allocation starts.
    pub start_date: NaiveDate,
    /// Date the allocation ends, if bounded.
    pub end_date: Option<NaiveDate>,
    /// Date billing starts.
    pub billing_start_date: NaiveDate,
    /// Date billing ends, if bounded.
    pub billing_end_date: Option<NaiveDate>,
    /// Percentage commitment, 0-100.
    pub percentage: u8,
    /// Whether the allocation is billable.
    pub is_billable: bool,
    /// Whether timesheets are required.
    pub timesheet_required: bool,
    /// Hourly billing rate, if billable at a fixed rate.
    pub billing_rate: Option<Decimal>,
    /// Whether this counts as a billing project.
    pub billing_project: bool,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Input for creating an allocation.
#[derive(Debug, Clone)]
pub struct CreateAllocationInput {
    /// The allocated resource.
    pub resource_id: ResourceId,
    /// The project the resource is allocated to.
    pub project_id: ProjectId,
    /// Role on the project.
    pub role: String,
    /// Date the allocation starts.
    pub start_date: NaiveDate,
    /// Date the allocation ends, if bounded.
    pub end_date: Option<NaiveDate>,
    /// Date billing starts.
    pub billing_start_date: NaiveDate,
    /// Date billing ends, if bounded.
    pub billing_end_date: Option<NaiveDate>,
    /// Percentage commitment, 0-100.
    pub percentage: u8,
    /// Whether the allocation is billable.
    pub is_billable: bool,
    /// Whether timesheets are required.
    pub timesheet_required: bool,
    /// Hourly billing rate, if billable at a fixed rate.
    pub billing_rate: Option<Decimal>,
    /// Whether this counts as a billing project.
    pub billing_project: bool,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// Input for partially updating an allocation.
///
/// The resource and project endpoints are fixed for the life of an
/// allocation; reassignment is a delete followed by a create. Fields left as
/// `None` are retained on the record.
#[derive(Debug, Clone, Default)]
pub struct UpdateAllocationInput {
    /// New role.
    pub role: Option<String>,
    /// New start date.
    pub start_date: Option<NaiveDate>,
    /// New end date (`Some(None)` clears it).
    pub end_date: Option<Option<NaiveDate>>,
    /// New billing start date.
    pub billing_start_date: Option<NaiveDate>,
    /// New billing end date (`Some(None)` clears it).
    pub billing_end_date: Option<Option<NaiveDate>>,
    /// New percentage commitment, 0-100.
    pub percentage: Option<u8>,
    /// New billable flag.
    pub is_billable: Option<bool>,
    /// New timesheet flag.
    pub timesheet_required: Option<bool>,
    /// New billing rate (`Some(None)` clears it).
    pub billing_rate: Option<Option<Decimal>>,
    /// New billing-project flag.
    pub billing_project: Option<bool>,
    /// New notes (`Some(None)` clears them).
    pub notes: Option<Option<String>>,
}

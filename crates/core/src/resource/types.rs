//! Resource data types.

use chrono::NaiveDate;
use rostra_shared::types::ResourceId;
use serde::{Deserialize, Serialize};

/// Weekly availability of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    /// Fully available for allocation.
    #[serde(rename = "100%")]
    Full,
    /// Half available for allocation.
    #[serde(rename = "50%")]
    Half,
    /// Currently unassigned to any billable work.
    Bench,
}

impl std::fmt::Display for Availability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Full => "100%",
            Self::Half => "50%",
            Self::Bench => "Bench",
        };
        write!(f, "{s}")
    }
}

/// Employment status of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentStatus {
    /// Currently employed and working.
    Active,
    /// Temporarily away.
    #[serde(rename = "On Leave")]
    OnLeave,
    /// No longer with the company.
    Exited,
}

impl std::fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Active => "Active",
            Self::OnLeave => "On Leave",
            Self::Exited => "Exited",
        };
        write!(f, "{s}")
    }
}

/// Engagement type of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceType {
    /// Full-time RBM employee.
    #[serde(rename = "RBM")]
    Rbm,
    /// Contractor engaged through RBM.
    #[serde(rename = "RBM Contractor")]
    RbmContractor,
    /// External staff outside RBM.
    #[serde(rename = "Non-RBM")]
    NonRbm,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Rbm => "RBM",
            Self::RbmContractor => "RBM Contractor",
            Self::NonRbm => "Non-RBM",
        };
        write!(f, "{s}")
    }
}

/// A person (employee or contractor) available for project work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Unique identifier, assigned by the store.
    pub id: ResourceId,
    /// Full name.
    pub name: String,
    /// Work email address.
    pub email: String,
    /// Date the resource joined.
    pub date_of_joining: NaiveDate,
    /// Contact phone number.
    pub contact_number: String,
    /// Street address.
    pub address: String,
    /// City of residence.
    pub city: String,
    /// Country of residence.
    pub country: String,
    /// Primary skill.
    pub primary_skill: String,
    /// Ordered list of secondary skills.
    pub secondary_skills: Vec<String>,
    /// Total experience in years.
    pub total_experience: u32,
    /// Current availability.
    pub availability: Availability,
    /// Employment status.
    pub status: EmploymentStatus,
    /// Engagement type.
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    /// Client-side email address, if one was issued.
    pub client_email: Option<String>,
}

/// Input for creating a resource.
#[derive(Debug, Clone)]
pub struct CreateResourceInput {
    /// Full name.
    pub name: String,
    /// Work email address.
    pub email: String,
    /// Date the resource joined.
    pub date_of_joining: NaiveDate,
    /// Contact phone number.
    pub contact_number: String,
    /// Street address.
    pub address: String,
    /// City of residence.
    pub city: String,
    /// Country of residence.
    pub country: String,
    /// Primary skill.
    pub primary_skill: String,
    /// Ordered list of secondary skills.
    pub secondary_skills: Vec<String>,
    /// Total experience in years.
    pub total_experience: u32,
    /// Current availability.
    pub availability: Availability,
    /// Employment status.
    pub status: EmploymentStatus,
    /// Engagement type.
    pub resource_type: ResourceType,
    /// Client-side email address, if one was issued.
    pub client_email: Option<String>,
}

/// Input for partially updating a resource.
///
/// Fields left as `None` are retained on the record. `secondary_skills` is
/// replaced wholesale when present, not merged element-wise.
#[derive(Debug, Clone, Default)]
pub struct UpdateResourceInput {
    /// New name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New joining date.
    pub date_of_joining: Option<NaiveDate>,
    /// New contact number.
    pub contact_number: Option<String>,
    /// New street address.
    pub address: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New country.
    pub country: Option<String>,
    /// New primary skill.
    pub primary_skill: Option<String>,
    /// Replacement list of secondary skills.
    pub secondary_skills: Option<Vec<String>>,
    /// New total experience in years.
    pub total_experience: Option<u32>,
    /// New availability.
    pub availability: Option<Availability>,
    /// New employment status.
    pub status: Option<EmploymentStatus>,
    /// New engagement type.
    pub resource_type: Option<ResourceType>,
    /// New client email (`Some(None)` clears it).
    pub client_email: Option<Option<String>>,
}

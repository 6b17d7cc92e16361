//! Project data types.

use chrono::NaiveDate;
use rostra_shared::types::ProjectId;
use serde::{Deserialize, Serialize};

/// Delivery status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// Work is ongoing.
    Active,
    /// Work is paused.
    #[serde(rename = "On Hold")]
    OnHold,
    /// Engagement has ended.
    Closed,
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Active => "Active",
            Self::OnHold => "On Hold",
            Self::Closed => "Closed",
        };
        write!(f, "{s}")
    }
}

/// A client engagement that resources can be allocated to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier, assigned by the store.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
    /// Client the project is delivered for.
    pub client_name: String,
    /// Delivery status.
    pub status: ProjectStatus,
    /// Date work started.
    pub start_date: NaiveDate,
    /// Project manager on the client side.
    pub client_project_manager: Option<String>,
    /// Project manager on the RBM side.
    pub rbm_project_manager: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
}

/// Input for creating a project.
#[derive(Debug, Clone)]
pub struct CreateProjectInput {
    /// Project name.
    pub name: String,
    /// Client the project is delivered for.
    pub client_name: String,
    /// Delivery status.
    pub status: ProjectStatus,
    /// Date work started.
    pub start_date: NaiveDate,
    /// Project manager on the client side.
    pub client_project_manager: Option<String>,
    /// Project manager on the RBM side.
    pub rbm_project_manager: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
}

/// Input for partially updating a project.
///
/// Fields left as `None` are retained on the record.
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectInput {
    /// New project name.
    pub name: Option<String>,
    /// New client name.
    pub client_name: Option<String>,
    /// New delivery status.
    pub status: Option<ProjectStatus>,
    /// New start date.
    pub start_date: Option<NaiveDate>,
    /// New client-side project manager (`Some(None)` clears it).
    pub client_project_manager: Option<Option<String>>,
    /// New RBM-side project manager (`Some(None)` clears it).
    pub rbm_project_manager: Option<Option<String>>,
    /// New description (`Some(None)` clears it).
    pub description: Option<Option<String>>,
}

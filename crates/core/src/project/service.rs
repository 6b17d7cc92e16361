//! Project validation, merge, and query logic.

use super::error::ProjectError;
use super::types::{CreateProjectInput, Project, UpdateProjectInput};

/// Project service for business logic.
pub struct ProjectService;

impl ProjectService {
    /// Validate input for creating a project.
    ///
    /// # Errors
    ///
    /// Returns `ProjectError::EmptyName` or `ProjectError::EmptyClientName`
    /// when the corresponding field is blank.
    pub fn validate_create(input: &CreateProjectInput) -> Result<(), ProjectError> {
        Self::validate_name(&input.name)?;
        Self::validate_client_name(&input.client_name)
    }

    /// Validate a partial update. Only fields present in the patch are checked.
    ///
    /// # Errors
    ///
    /// Returns the same validation errors as [`Self::validate_create`].
    pub fn validate_update(patch: &UpdateProjectInput) -> Result<(), ProjectError> {
        if let Some(name) = &patch.name {
            Self::validate_name(name)?;
        }
        if let Some(client_name) = &patch.client_name {
            Self::validate_client_name(client_name)?;
        }
        Ok(())
    }

    /// Merge a partial update over a project.
    ///
    /// The merge is shallow: fields absent from the patch are retained.
    pub fn apply_update(project: &mut Project, patch: UpdateProjectInput) {
        if let Some(name) = patch.name {
            project.name = name;
        }
        if let Some(client_name) = patch.client_name {
            project.client_name = client_name;
        }
        if let Some(status) = patch.status {
            project.status = status;
        }
        if let Some(start_date) = patch.start_date {
            project.start_date = start_date;
        }
        if let Some(client_project_manager) = patch.client_project_manager {
            project.client_project_manager = client_project_manager;
        }
        if let Some(rbm_project_manager) = patch.rbm_project_manager {
            project.rbm_project_manager = rbm_project_manager;
        }
        if let Some(description) = patch.description {
            project.description = description;
        }
    }

    /// Case-insensitive substring search over name and client name.
    #[must_use]
    pub fn search<'a>(projects: &'a [Project], query: &str) -> Vec<&'a Project> {
        let needle = query.to_lowercase();
        projects
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.client_name.to_lowercase().contains(&needle)
            })
            .collect()
    }

    fn validate_name(name: &str) -> Result<(), ProjectError> {
        if name.trim().is_empty() {
            return Err(ProjectError::EmptyName);
        }
        Ok(())
    }

    fn validate_client_name(client_name: &str) -> Result<(), ProjectError> {
        if client_name.trim().is_empty() {
            return Err(ProjectError::EmptyClientName);
        }
        Ok(())
    }
}

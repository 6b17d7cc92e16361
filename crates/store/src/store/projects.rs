//! Project operations on the record store.

use rostra_core::allocation::Allocation;
use rostra_core::project::{
    CreateProjectInput, Project, ProjectError, ProjectService, UpdateProjectInput,
};
use rostra_shared::types::ProjectId;
use rostra_shared::AppResult;
use tracing::debug;

use super::RecordStore;

/// Outcome of deleting a project.
///
/// Carries the removed record and the allocations removed by the cascade.
#[derive(Debug, Clone)]
pub struct ProjectRemoval {
    /// The removed project.
    pub project: Project,
    /// Allocations removed because they referenced the project.
    pub removed_allocations: Vec<Allocation>,
}

impl RecordStore {
    /// Full ordered project collection, most recently created first.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Looks up a project by ID.
    #[must_use]
    pub fn find_project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Case-insensitive substring search over name and client name.
    #[must_use]
    pub fn search_projects(&self, query: &str) -> Vec<&Project> {
        ProjectService::search(&self.projects, query)
    }

    /// Creates a project, prepending it to the collection.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the input fails presence checks.
    pub fn add_project(&mut self, input: CreateProjectInput) -> AppResult<Project> {
        ProjectService::validate_create(&input)?;

        let id = ProjectId::from_seq(self.project_seq.mint());
        let project = Project {
            id,
            name: input.name,
            client_name: input.client_name,
            status: input.status,
            start_date: input.start_date,
            client_project_manager: input.client_project_manager,
            rbm_project_manager: input.rbm_project_manager,
            description: input.description,
        };
        self.projects.insert(0, project.clone());
        debug!(%id, "project created");
        Ok(project)
    }

    /// Merges a partial update over the project with the given ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no project has the ID, or a validation error
    /// for invalid patch fields. The collection is untouched either way.
    pub fn update_project(
        &mut self,
        id: ProjectId,
        patch: UpdateProjectInput,
    ) -> AppResult<Project> {
        ProjectService::validate_update(&patch)?;

        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ProjectError::NotFound(id))?;
        ProjectService::apply_update(project, patch);
        debug!(%id, "project updated");
        Ok(project.clone())
    }

    /// Removes a project, then removes every allocation referencing it.
    ///
    /// Both effects are visible once the call returns; no partial state is
    /// observable in between.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no project has the ID; nothing is changed.
    pub fn delete_project(&mut self, id: ProjectId) -> AppResult<ProjectRemoval> {
        let index = self
            .projects
            .iter()
            .position(|p| p.id == id)
            .ok_or(ProjectError::NotFound(id))?;

        let project = self.projects.remove(index);
        let removed_allocations = self.remove_allocations_where(|a| a.project_id == id);
        debug!(%id, cascade = removed_allocations.len(), "project deleted");
        Ok(ProjectRemoval {
            project,
            removed_allocations,
        })
    }
}

//! Resource operations on the record store.

use rostra_core::allocation::Allocation;
use rostra_core::resource::{
    CreateResourceInput, Resource, ResourceError, ResourceService, UpdateResourceInput,
};
use rostra_shared::types::ResourceId;
use rostra_shared::AppResult;
use tracing::debug;

use super::RecordStore;

/// Outcome of deleting a resource.
///
/// Carries the removed record and the allocations removed by the cascade, so
/// the invariant that no allocation outlives its resource is independently
/// checkable.
#[derive(Debug, Clone)]
pub struct ResourceRemoval {
    /// The removed resource.
    pub resource: Resource,
    /// Allocations removed because they referenced the resource.
    pub removed_allocations: Vec<Allocation>,
}

impl RecordStore {
    /// Full ordered resource collection, most recently created first.
    #[must_use]
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Looks up a resource by ID.
    #[must_use]
    pub fn find_resource(&self, id: ResourceId) -> Option<&Resource> {
        self.resources.iter().find(|r| r.id == id)
    }

    /// Case-insensitive substring search over name and primary skill.
    #[must_use]
    pub fn search_resources(&self, query: &str) -> Vec<&Resource> {
        ResourceService::search(&self.resources, query)
    }

    /// Creates a resource, prepending it to the collection.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the input fails presence checks.
    pub fn add_resource(&mut self, input: CreateResourceInput) -> AppResult<Resource> {
        ResourceService::validate_create(&input)?;

        let id = ResourceId::from_seq(self.resource_seq.mint());
        let resource = Resource {
            id,
            name: input.name,
            email: input.email,
            date_of_joining: input.date_of_joining,
            contact_number: input.contact_number,
            address: input.address,
            city: input.city,
            country: input.country,
            primary_skill: input.primary_skill,
            secondary_skills: input.secondary_skills,
            total_experience: input.total_experience,
            availability: input.availability,
            status: input.status,
            resource_type: input.resource_type,
            client_email: input.client_email,
        };
        self.resources.insert(0, resource.clone());
        debug!(%id, "resource created");
        Ok(resource)
    }

    /// Merges a partial update over the resource with the given ID.
    ///
    /// The merge is shallow; `secondary_skills` is replaced wholesale when
    /// present in the patch.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no resource has the ID, or a validation error
    /// for invalid patch fields. The collection is untouched either way.
    pub fn update_resource(
        &mut self,
        id: ResourceId,
        patch: UpdateResourceInput,
    ) -> AppResult<Resource> {
        ResourceService::validate_update(&patch)?;

        let resource = self
            .resources
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(ResourceError::NotFound(id))?;
        ResourceService::apply_update(resource, patch);
        debug!(%id, "resource updated");
        Ok(resource.clone())
    }

    /// Removes a resource, then removes every allocation referencing it.
    ///
    /// Both effects are visible once the call returns; no partial state is
    /// observable in between.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no resource has the ID; nothing is changed.
    pub fn delete_resource(&mut self, id: ResourceId) -> AppResult<ResourceRemoval> {
        let index = self
            .resources
            .iter()
            .position(|r| r.id == id)
            .ok_or(ResourceError::NotFound(id))?;

        let resource = self.resources.remove(index);
        let removed_allocations = self.remove_allocations_where(|a| a.resource_id == id);
        debug!(%id, cascade = removed_allocations.len(), "resource deleted");
        Ok(ResourceRemoval {
            resource,
            removed_allocations,
        })
    }
}

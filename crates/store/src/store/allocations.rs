//! Allocation operations on the record store.

use rostra_core::allocation::{
    Allocation, AllocationError, AllocationService, CreateAllocationInput, UpdateAllocationInput,
};
use rostra_shared::types::AllocationId;
use rostra_shared::AppResult;
use tracing::debug;

use super::RecordStore;

impl RecordStore {
    /// Full ordered allocation collection, most recently created first.
    #[must_use]
    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    /// Looks up an allocation by ID.
    #[must_use]
    pub fn find_allocation(&self, id: AllocationId) -> Option<&Allocation> {
        self.allocations.iter().find(|a| a.id == id)
    }

    /// Creates an allocation, prepending it to the collection.
    ///
    /// Both endpoints must exist: an allocation never starts out dangling.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the input fails range or presence
    /// checks, or references a resource or project that does not exist.
    pub fn add_allocation(&mut self, input: CreateAllocationInput) -> AppResult<Allocation> {
        AllocationService::validate_create(&input)?;
        if self.find_resource(input.resource_id).is_none() {
            return Err(AllocationError::UnknownResource(input.resource_id).into());
        }
        if self.find_project(input.project_id).is_none() {
            return Err(AllocationError::UnknownProject(input.project_id).into());
        }

        let id = AllocationId::from_seq(self.allocation_seq.mint());
        let allocation = Allocation {
            id,
            resource_id: input.resource_id,
            project_id: input.project_id,
            role: input.role,
            start_date: input.start_date,
            end_date: input.end_date,
            billing_start_date: input.billing_start_date,
            billing_end_date: input.billing_end_date,
            percentage: input.percentage,
            is_billable: input.is_billable,
            timesheet_required: input.timesheet_required,
            billing_rate: input.billing_rate,
            billing_project: input.billing_project,
            notes: input.notes,
        };
        self.allocations.insert(0, allocation.clone());
        debug!(%id, "allocation created");
        Ok(allocation)
    }

    /// Merges a partial update over the allocation with the given ID.
    ///
    /// The resource and project endpoints are fixed for the life of an
    /// allocation; reassignment is a delete followed by a create.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no allocation has the ID, or a validation error
    /// for invalid patch fields. The collection is untouched either way.
    pub fn update_allocation(
        &mut self,
        id: AllocationId,
        patch: UpdateAllocationInput,
    ) -> AppResult<Allocation> {
        AllocationService::validate_update(&patch)?;

        let allocation = self
            .allocations
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AllocationError::NotFound(id))?;
        AllocationService::apply_update(allocation, patch);
        debug!(%id, "allocation updated");
        Ok(allocation.clone())
    }

    /// Removes an allocation directly. No cascade is involved.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no allocation has the ID; nothing is changed.
    pub fn delete_allocation(&mut self, id: AllocationId) -> AppResult<Allocation> {
        let index = self
            .allocations
            .iter()
            .position(|a| a.id == id)
            .ok_or(AllocationError::NotFound(id))?;

        let allocation = self.allocations.remove(index);
        debug!(%id, "allocation deleted");
        Ok(allocation)
    }

    /// Removes every allocation matching the predicate, returning them in
    /// collection order. Shared by the cascade paths.
    pub(crate) fn remove_allocations_where<F>(&mut self, predicate: F) -> Vec<Allocation>
    where
        F: Fn(&Allocation) -> bool,
    {
        let mut removed = Vec::new();
        self.allocations.retain(|a| {
            if predicate(a) {
                removed.push(a.clone());
                false
            } else {
                true
            }
        });
        removed
    }
}

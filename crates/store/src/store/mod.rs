//! The record store and its per-collection operations.

use rostra_core::allocation::Allocation;
use rostra_core::project::Project;
use rostra_core::resource::Resource;
use rostra_shared::types::IdSequence;

mod allocations;
mod projects;
mod resources;
mod stats;

#[cfg(test)]
mod props;

pub use projects::ProjectRemoval;
pub use resources::ResourceRemoval;

/// Single source of truth for resources, projects, and allocations.
///
/// Collections are kept in display order: seed records in declared order,
/// created records prepended so the most recent comes first. Every ID is
/// minted from a per-collection monotonic sequence, so IDs never repeat even
/// across delete-then-add interleavings.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    pub(crate) resources: Vec<Resource>,
    pub(crate) projects: Vec<Project>,
    pub(crate) allocations: Vec<Allocation>,
    pub(crate) resource_seq: IdSequence,
    pub(crate) project_seq: IdSequence,
    pub(crate) allocation_seq: IdSequence,
}

impl RecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store preloaded with the built-in mock records.
    #[must_use]
    pub fn with_seed_data() -> Self {
        crate::seed::seeded_store()
    }
}

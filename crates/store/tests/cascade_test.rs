//! Integration tests for cascade deletes and ID reuse regressions.

use chrono::NaiveDate;
use rostra_core::allocation::CreateAllocationInput;
use rostra_shared::types::{AllocationId, ProjectId, ResourceId};
use rostra_store::RecordStore;

fn allocation_input(resource_id: ResourceId, project_id: ProjectId) -> CreateAllocationInput {
    CreateAllocationInput {
        resource_id,
        project_id,
        role: "Backend Dev".to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        end_date: None,
        billing_start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        billing_end_date: None,
        percentage: 100,
        is_billable: false,
        timesheet_required: false,
        billing_rate: None,
        billing_project: false,
        notes: None,
    }
}

#[test]
fn delete_resource_cascades_to_its_allocations() {
    let mut store = RecordStore::with_seed_data();

    let removal = store.delete_resource(ResourceId::from_seq(1)).unwrap();

    assert_eq!(removal.resource.name, "Alex Chen");
    assert_eq!(removal.removed_allocations.len(), 1);
    assert_eq!(
        removal.removed_allocations[0].id,
        AllocationId::from_seq(1)
    );

    assert_eq!(store.resources().len(), 2);
    assert!(store.find_resource(ResourceId::from_seq(1)).is_none());
    assert_eq!(store.allocations().len(), 0);
}

#[test]
fn delete_project_cascades_to_its_allocations() {
    let mut store = RecordStore::with_seed_data();

    let removal = store.delete_project(ProjectId::from_seq(1)).unwrap();

    assert_eq!(removal.project.name, "Alpha Banking App");
    assert_eq!(removal.removed_allocations.len(), 1);

    assert_eq!(store.projects().len(), 1);
    assert!(store.find_project(ProjectId::from_seq(1)).is_none());
    assert_eq!(store.allocations().len(), 0);
}

#[test]
fn cascade_leaves_unrelated_allocations_untouched() {
    let mut store = RecordStore::with_seed_data();
    let unrelated = store
        .add_allocation(allocation_input(
            ResourceId::from_seq(2),
            ProjectId::from_seq(2),
        ))
        .unwrap();

    store.delete_resource(ResourceId::from_seq(1)).unwrap();

    assert_eq!(store.allocations().len(), 1);
    assert_eq!(store.allocations()[0].id, unrelated.id);
}

#[test]
fn cascade_removes_every_allocation_of_the_parent() {
    let mut store = RecordStore::with_seed_data();
    // Second allocation for the same resource, on the other project.
    store
        .add_allocation(allocation_input(
            ResourceId::from_seq(1),
            ProjectId::from_seq(2),
        ))
        .unwrap();

    let removal = store.delete_resource(ResourceId::from_seq(1)).unwrap();

    assert_eq!(removal.removed_allocations.len(), 2);
    assert_eq!(store.allocations().len(), 0);
}

#[test]
fn delete_then_add_never_reuses_an_id() {
    let mut store = RecordStore::with_seed_data();

    store.delete_resource(ResourceId::from_seq(3)).unwrap();
    let created = store
        .add_resource(rostra_core::resource::CreateResourceInput {
            name: "Priya Nair".to_string(),
            email: "priya.n@rbm.com".to_string(),
            date_of_joining: NaiveDate::from_ymd_opt(2025, 5, 12).unwrap(),
            contact_number: "+44 20 7946 0000".to_string(),
            address: "2 Cannon St".to_string(),
            city: "London".to_string(),
            country: "UK".to_string(),
            primary_skill: "Java".to_string(),
            secondary_skills: vec!["Spring".to_string()],
            total_experience: 7,
            availability: rostra_core::resource::Availability::Full,
            status: rostra_core::resource::EmploymentStatus::Active,
            resource_type: rostra_core::resource::ResourceType::Rbm,
            client_email: None,
        })
        .unwrap();

    // The length-based scheme would have re-minted RES-003 here.
    assert_eq!(created.id.to_string(), "RES-004");
    assert!(store.find_resource(ResourceId::from_seq(3)).is_none());
}

#[test]
fn cascade_is_all_or_nothing_for_unknown_ids() {
    let mut store = RecordStore::with_seed_data();

    assert!(store.delete_resource(ResourceId::from_seq(42)).is_err());

    assert_eq!(store.resources().len(), 3);
    assert_eq!(store.allocations().len(), 1);
}

//! Property-based tests for store invariants.

use std::collections::HashSet;

use chrono::NaiveDate;
use proptest::prelude::*;
use rostra_core::allocation::CreateAllocationInput;
use rostra_core::resource::{
    Availability, CreateResourceInput, EmploymentStatus, ResourceType,
};
use rostra_shared::types::{ProjectId, ResourceId};

use super::RecordStore;

fn resource_input(name: &str) -> CreateResourceInput {
    CreateResourceInput {
        name: name.to_string(),
        email: "someone@rbm.com".to_string(),
        date_of_joining: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
        contact_number: "+1 (555) 0100".to_string(),
        address: "1 Main St".to_string(),
        city: "Boston".to_string(),
        country: "USA".to_string(),
        primary_skill: "Rust".to_string(),
        secondary_skills: vec![],
        total_experience: 3,
        availability: Availability::Full,
        status: EmploymentStatus::Active,
        resource_type: ResourceType::Rbm,
        client_email: None,
    }
}

fn allocation_input(resource_id: ResourceId, project_id: ProjectId) -> CreateAllocationInput {
    CreateAllocationInput {
        resource_id,
        project_id,
        role: "Engineer".to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: None,
        billing_start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        billing_end_date: None,
        percentage: 50,
        is_billable: true,
        timesheet_required: false,
        billing_rate: None,
        billing_project: false,
        notes: None,
    }
}

fn project_input(name: &str) -> rostra_core::project::CreateProjectInput {
    rostra_core::project::CreateProjectInput {
        name: name.to_string(),
        client_name: "Client".to_string(),
        status: rostra_core::project::ProjectStatus::Active,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        client_project_manager: None,
        rbm_project_manager: None,
        description: None,
    }
}

/// One step in a randomized add/delete interleaving. The delete slot is an
/// index into whatever the collection holds at that point.
#[derive(Debug, Clone)]
enum Op {
    Add,
    Delete(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Add), (0usize..8).prop_map(Op::Delete)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Without deletes, minted IDs are strictly increasing.
    #[test]
    fn prop_add_only_ids_strictly_increase(count in 1usize..30) {
        let mut store = RecordStore::new();
        let mut last_seq = 0;

        for i in 0..count {
            let resource = store.add_resource(resource_input(&format!("R{i}"))).unwrap();
            prop_assert!(resource.id.seq() > last_seq);
            last_seq = resource.id.seq();
        }
    }

    /// Across any add/delete interleaving, a minted ID never repeats.
    #[test]
    fn prop_ids_never_repeat(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let mut store = RecordStore::new();
        let mut minted = HashSet::new();

        for op in ops {
            match op {
                Op::Add => {
                    let resource = store.add_resource(resource_input("R")).unwrap();
                    prop_assert!(minted.insert(resource.id), "duplicate ID {}", resource.id);
                }
                Op::Delete(slot) => {
                    if let Some(id) = store.resources().get(slot).map(|r| r.id) {
                        store.delete_resource(id).unwrap();
                    }
                }
            }
        }
    }

    /// Cascade delete removes exactly the allocations referencing the
    /// deleted resource; every other allocation survives.
    #[test]
    fn prop_cascade_targets_only_referencing_allocations(
        resource_count in 2usize..6,
        victim in 0usize..6,
    ) {
        let mut store = RecordStore::new();
        let project = store.add_project(project_input("P")).unwrap();

        let mut ids = Vec::new();
        for i in 0..resource_count {
            let resource = store.add_resource(resource_input(&format!("R{i}"))).unwrap();
            store
                .add_allocation(allocation_input(resource.id, project.id))
                .unwrap();
            ids.push(resource.id);
        }

        let victim_id = ids[victim % resource_count];
        let removal = store.delete_resource(victim_id).unwrap();

        prop_assert_eq!(removal.removed_allocations.len(), 1);
        prop_assert_eq!(store.allocations().len(), resource_count - 1);
        prop_assert!(store
            .allocations()
            .iter()
            .all(|a| a.resource_id != victim_id));
    }
}

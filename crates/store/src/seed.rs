//! Built-in mock records for development and demos.
//!
//! The seed mirrors the fixture data the dashboard ships with: three
//! resources, two projects, and one allocation linking `RES-001` to
//! `PROJ-001`. Seeded records keep their declared order; the ID sequences
//! resume after the highest seeded ID.

use chrono::NaiveDate;
use rostra_core::allocation::Allocation;
use rostra_core::project::{Project, ProjectStatus};
use rostra_core::resource::{Availability, EmploymentStatus, Resource, ResourceType};
use rostra_shared::types::{AllocationId, IdSequence, ProjectId, ResourceId};
use rust_decimal::Decimal;
use tracing::debug;

use crate::store::RecordStore;

/// Builds a store preloaded with the fixed mock records.
#[must_use]
pub fn seeded_store() -> RecordStore {
    let resources = seed_resources();
    let projects = seed_projects();
    let allocations = seed_allocations();

    let store = RecordStore {
        resource_seq: IdSequence::starting_at(next_seq(resources.len())),
        project_seq: IdSequence::starting_at(next_seq(projects.len())),
        allocation_seq: IdSequence::starting_at(next_seq(allocations.len())),
        resources,
        projects,
        allocations,
    };
    debug!(
        resources = store.resources.len(),
        projects = store.projects.len(),
        allocations = store.allocations.len(),
        "seeded record store"
    );
    store
}

fn seed_resources() -> Vec<Resource> {
    vec![
        Resource {
            id: ResourceId::from_seq(1),
            name: "Alex Chen".to_string(),
            email: "alex.chen@rbm.com".to_string(),
            date_of_joining: date(2023, 1, 15),
            contact_number: "+1 (555) 0123".to_string(),
            address: "123 Tech Blvd".to_string(),
            city: "San Francisco".to_string(),
            country: "USA".to_string(),
            primary_skill: "React".to_string(),
            secondary_skills: vec!["Node.js".to_string(), "TypeScript".to_string()],
            total_experience: 5,
            availability: Availability::Half,
            status: EmploymentStatus::Active,
            resource_type: ResourceType::Rbm,
            client_email: None,
        },
        Resource {
            id: ResourceId::from_seq(2),
            name: "Sarah Jones".to_string(),
            email: "sarah.j@rbm.com".to_string(),
            date_of_joining: date(2022, 6, 10),
            contact_number: "+1 (555) 0124".to_string(),
            address: "456 Innovation Dr".to_string(),
            city: "New York".to_string(),
            country: "USA".to_string(),
            primary_skill: "Python".to_string(),
            secondary_skills: vec!["Django".to_string(), "AWS".to_string()],
            total_experience: 8,
            availability: Availability::Bench,
            status: EmploymentStatus::Active,
            resource_type: ResourceType::RbmContractor,
            client_email: None,
        },
        Resource {
            id: ResourceId::from_seq(3),
            name: "Michael Ross".to_string(),
            email: "m.ross@rbm.com".to_string(),
            date_of_joining: date(2021, 11, 1),
            contact_number: "+1 (555) 0125".to_string(),
            address: "789 Data Way".to_string(),
            city: "London".to_string(),
            country: "UK".to_string(),
            primary_skill: "Project Management".to_string(),
            secondary_skills: vec!["Agile".to_string(), "Scrum".to_string()],
            total_experience: 12,
            availability: Availability::Full,
            status: EmploymentStatus::Active,
            resource_type: ResourceType::Rbm,
            client_email: None,
        },
    ]
}

fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: ProjectId::from_seq(1),
            name: "Alpha Banking App".to_string(),
            client_name: "Alpha Bank".to_string(),
            status: ProjectStatus::Active,
            start_date: date(2024, 1, 1),
            client_project_manager: Some("David Smith".to_string()),
            rbm_project_manager: Some("Michael Ross".to_string()),
            description: Some("Modernization of legacy banking application.".to_string()),
        },
        Project {
            id: ProjectId::from_seq(2),
            name: "Omega E-commerce".to_string(),
            client_name: "Omega Retail".to_string(),
            status: ProjectStatus::OnHold,
            start_date: date(2023, 9, 1),
            client_project_manager: Some("Lisa Wong".to_string()),
            rbm_project_manager: Some("Michael Ross".to_string()),
            description: Some("Global e-commerce platform rollout.".to_string()),
        },
    ]
}

fn seed_allocations() -> Vec<Allocation> {
    vec![Allocation {
        id: AllocationId::from_seq(1),
        resource_id: ResourceId::from_seq(1),
        project_id: ProjectId::from_seq(1),
        role: "Senior Frontend Dev".to_string(),
        start_date: date(2024, 1, 1),
        end_date: None,
        billing_start_date: date(2024, 1, 1),
        billing_end_date: None,
        percentage: 50,
        is_billable: true,
        timesheet_required: true,
        billing_rate: Some(Decimal::from(85)),
        billing_project: true,
        notes: None,
    }]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

// Seed collections are a handful of records; the cast cannot truncate.
#[allow(clippy::cast_possible_truncation)]
fn next_seq(len: usize) -> u32 {
    len as u32 + 1
}

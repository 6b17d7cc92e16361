//! Rostra demo walkthrough.
//!
//! Builds a record store, seeds it per configuration, and exercises the
//! operations the dashboard consumes: stats, search, create, allocate, and
//! cascade delete.
//!
//! Usage: cargo run --bin demo

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rostra_core::allocation::CreateAllocationInput;
use rostra_core::resource::{
    Availability, CreateResourceInput, EmploymentStatus, ResourceType,
};
use rostra_shared::AppConfig;
use rostra_store::RecordStore;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rostra=debug,demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load()?;

    let mut store = if config.store.seed_mock_data {
        RecordStore::with_seed_data()
    } else {
        RecordStore::new()
    };
    info!(
        resources = store.resources().len(),
        projects = store.projects().len(),
        allocations = store.allocations().len(),
        "record store ready"
    );

    log_stats(&store);

    for resource in store.benched() {
        info!(id = %resource.id, name = %resource.name, "on the bench");
    }

    let hire = store.add_resource(CreateResourceInput {
        name: "Dana Cole".to_string(),
        email: "dana.cole@rbm.com".to_string(),
        date_of_joining: date(2025, 3, 1)?,
        contact_number: "+1 (555) 0188".to_string(),
        address: "17 Elm St".to_string(),
        city: "Austin".to_string(),
        country: "USA".to_string(),
        primary_skill: "Go".to_string(),
        secondary_skills: vec!["Kubernetes".to_string(), "Terraform".to_string()],
        total_experience: 6,
        availability: Availability::Full,
        status: EmploymentStatus::Active,
        resource_type: ResourceType::Rbm,
        client_email: None,
    })?;
    info!(id = %hire.id, name = %hire.name, "hired");

    if let Some(project) = store.projects().first().map(|p| p.id) {
        let allocation = store.add_allocation(CreateAllocationInput {
            resource_id: hire.id,
            project_id: project,
            role: "Platform Engineer".to_string(),
            start_date: date(2025, 4, 1)?,
            end_date: None,
            billing_start_date: date(2025, 4, 1)?,
            billing_end_date: None,
            percentage: 100,
            is_billable: true,
            timesheet_required: true,
            billing_rate: Some(Decimal::from(95)),
            billing_project: true,
            notes: None,
        })?;
        info!(
            id = %allocation.id,
            resource = %allocation.resource_id,
            project = %allocation.project_id,
            percentage = allocation.percentage,
            "allocated"
        );

        let removal = store.delete_resource(hire.id)?;
        info!(
            id = %removal.resource.id,
            cascade = removal.removed_allocations.len(),
            "resource deleted with cascade"
        );
    }

    log_stats(&store);

    Ok(())
}

fn log_stats(store: &RecordStore) {
    for stat in store.stats() {
        info!(
            label = %stat.label,
            value = %stat.value,
            change = %stat.change,
            "stat"
        );
    }
}

fn date(year: i32, month: u32, day: u32) -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow::anyhow!("invalid calendar date: {year}-{month:02}-{day:02}"))
}

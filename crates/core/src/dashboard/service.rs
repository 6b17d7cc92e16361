//! Dashboard statistics computed from collection snapshots.

use crate::project::{Project, ProjectStatus};
use crate::resource::{Availability, Resource};

use super::types::{StatCard, StatValue, Trend};

/// Fixed utilization figure. There is no timesheet data to derive a real
/// utilization percentage from.
const UTILIZATION: &str = "85%";

/// Dashboard service for derived statistics.
pub struct DashboardService;

impl DashboardService {
    /// Build the four summary cards shown on the dashboard.
    ///
    /// The shape and labels are fixed: total resources, active projects,
    /// benched resources, and utilization. Change and trend annotations are
    /// fixed placeholders until period history is tracked.
    #[must_use]
    pub fn stats(resources: &[Resource], projects: &[Project]) -> Vec<StatCard> {
        let active_projects = projects
            .iter()
            .filter(|p| p.status == ProjectStatus::Active)
            .count();
        let benched_resources = resources
            .iter()
            .filter(|r| r.availability == Availability::Bench)
            .count();

        vec![
            StatCard {
                label: "Total Resources".to_string(),
                value: StatValue::Count(resources.len()),
                change: "+2".to_string(),
                trend: Trend::Up,
            },
            StatCard {
                label: "Active Projects".to_string(),
                value: StatValue::Count(active_projects),
                change: "0".to_string(),
                trend: Trend::Neutral,
            },
            StatCard {
                label: "Benched Resources".to_string(),
                value: StatValue::Count(benched_resources),
                change: "-1".to_string(),
                trend: Trend::Down,
            },
            StatCard {
                label: "Utilization".to_string(),
                value: StatValue::Text(UTILIZATION.to_string()),
                change: "+5%".to_string(),
                trend: Trend::Up,
            },
        ]
    }

    /// Resources currently on the bench, in collection order.
    #[must_use]
    pub fn benched(resources: &[Resource]) -> Vec<&Resource> {
        resources
            .iter()
            .filter(|r| r.availability == Availability::Bench)
            .collect()
    }
}

//! Dashboard queries on the record store.

use rostra_core::dashboard::{DashboardService, StatCard};
use rostra_core::resource::Resource;

use super::RecordStore;

impl RecordStore {
    /// The four dashboard summary cards for the current collections.
    #[must_use]
    pub fn stats(&self) -> Vec<StatCard> {
        DashboardService::stats(&self.resources, &self.projects)
    }

    /// Resources currently on the bench, in collection order.
    #[must_use]
    pub fn benched(&self) -> Vec<&Resource> {
        DashboardService::benched(&self.resources)
    }
}

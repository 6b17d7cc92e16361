//! Derived summary statistics for the dashboard.
//!
//! This module provides the fixed four-card stats view and the bench
//! listing, both computed from collection snapshots.

pub mod service;
pub mod types;


pub use service::DashboardService;
pub use types::{StatCard, StatValue, Trend};

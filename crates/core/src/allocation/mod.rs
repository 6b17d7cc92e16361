//! Assignments of resources to projects with billing terms.
//!
//! An allocation is a time-bounded link between one resource and one
//! project, carrying a percentage commitment and billing flags. Allocations
//! are removed automatically when either endpoint record is deleted.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::AllocationError;
pub use service::AllocationService;
pub use types::{Allocation, CreateAllocationInput, UpdateAllocationInput};

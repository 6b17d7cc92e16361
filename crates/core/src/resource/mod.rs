//! People available for project work.
//!
//! This module implements the resource side of the record model:
//! - Domain types for resources and their lifecycle enums
//! - Input types for create and partial-update operations
//! - Validation rules and merge semantics
//! - Error types for resource operations

pub mod error;
pub mod service;
pub mod types;


pub use error::ResourceError;
pub use service::ResourceService;
pub use types::{
    Availability, CreateResourceInput, EmploymentStatus, Resource, ResourceType,
    UpdateResourceInput,
};

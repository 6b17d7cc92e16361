//! In-memory record store for Rostra.
//!
//! This crate owns the three collections (resources, projects, allocations)
//! and is their single source of truth: all reads and writes pass through
//! [`RecordStore`]. State is process-local and non-persistent; it lives
//! exactly as long as the store value, and construction is explicit and
//! caller-controlled - there is no global instance.
//!
//! Operations are synchronous and single-threaded. Mutations take
//! `&mut self`, so exclusive access is enforced by the borrow checker; an
//! embedding with concurrent callers wraps the whole store in one mutex.

pub mod seed;
pub mod store;

pub use store::{ProjectRemoval, RecordStore, ResourceRemoval};

//! Port contracts for shift task storage.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod repository;

pub use repository::{TaskStore, TaskStoreError, TaskStoreResult};

#[cfg(test)]
pub use repository::MockTaskStore;

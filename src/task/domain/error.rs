//! Error types for task domain operations.

use super::TaskNumber;
use thiserror::Error;

/// Errors returned by shift ledger operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task number does not refer to an open task.
    #[error("task {0} is not open")]
    TaskNotOpen(TaskNumber),
}

//! Store port for operator-scoped shift tasks.

use crate::task::domain::{
    ClosedTask, OpenTask, OperatorId, ShiftReport, TaskClosure, TaskNumber, TaskStatus,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Shift task storage contract.
///
/// Every operation is scoped to one operator; operators never observe each
/// other's tasks or numbering.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Opens a task for the operator and returns the stored record.
    async fn add(
        &self,
        operator: &OperatorId,
        description: String,
        opened_at: DateTime<Utc>,
    ) -> TaskStoreResult<OpenTask>;

    /// Returns the operator's open tasks in ascending number order.
    async fn list_open(&self, operator: &OperatorId) -> TaskStoreResult<Vec<OpenTask>>;

    /// Returns the status of a task in the operator's current shift.
    ///
    /// Returns `None` when the number was never handed out in this shift.
    async fn status(
        &self,
        operator: &OperatorId,
        number: TaskNumber,
    ) -> TaskStoreResult<Option<TaskStatus>>;

    /// Closes an open task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::TaskNotOpen`] when the number does not refer
    /// to an open task.
    async fn close(
        &self,
        operator: &OperatorId,
        number: TaskNumber,
        closure: TaskClosure,
        closed_at: DateTime<Utc>,
    ) -> TaskStoreResult<ClosedTask>;

    /// Drains the operator's shift into a report and resets numbering.
    async fn drain(
        &self,
        operator: &OperatorId,
        drained_at: DateTime<Utc>,
    ) -> TaskStoreResult<ShiftReport>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// The task is not open for the operator.
    #[error("task {number} is not open for operator {operator}")]
    TaskNotOpen {
        /// Operator whose shift was searched.
        operator: OperatorId,
        /// Number that was requested.
        number: TaskNumber,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

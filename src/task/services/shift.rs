//! Service layer for opening, closing and reporting shift tasks.

use crate::task::{
    domain::{ClosedTask, OpenTask, OperatorId, ShiftReport, TaskClosure, TaskNumber, TaskStatus},
    ports::{TaskStore, TaskStoreError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

use super::render::{ReportRenderError, ReportRenderer};

/// Service-level errors for shift task operations.
#[derive(Debug, Error)]
pub enum ShiftServiceError {
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
    /// Report rendering failed.
    #[error(transparent)]
    Render(#[from] ReportRenderError),
}

/// Result type for shift service operations.
pub type ShiftServiceResult<T> = Result<T, ShiftServiceError>;

/// Shift task orchestration service.
pub struct ShiftService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    renderer: Arc<ReportRenderer>,
}

impl<S, C> Clone for ShiftService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
            renderer: Arc::clone(&self.renderer),
        }
    }
}

impl<S, C> ShiftService<S, C>
where
    S: TaskStore,
    C: Clock + Send + Sync,
{
    /// Creates a new shift service.
    #[must_use]
    pub fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store,
            clock,
            renderer: Arc::new(ReportRenderer::new()),
        }
    }

    /// Opens a single task.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftServiceError::Store`] when the store rejects the write.
    pub async fn open_task(
        &self,
        operator: &OperatorId,
        description: impl Into<String> + Send,
    ) -> ShiftServiceResult<OpenTask> {
        let task = self
            .store
            .add(operator, description.into(), self.clock.utc())
            .await?;
        tracing::info!(%operator, task = %task.number(), "task opened");
        Ok(task)
    }

    /// Opens several tasks in order, numbering them consecutively.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftServiceError::Store`] when the store rejects a write;
    /// tasks opened before the failure stay open.
    pub async fn open_tasks(
        &self,
        operator: &OperatorId,
        descriptions: Vec<String>,
    ) -> ShiftServiceResult<Vec<OpenTask>> {
        let mut opened = Vec::with_capacity(descriptions.len());
        for description in descriptions {
            opened.push(self.open_task(operator, description).await?);
        }
        Ok(opened)
    }

    /// Returns the operator's open tasks in ascending number order.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftServiceError::Store`] when the lookup fails.
    pub async fn list_open(&self, operator: &OperatorId) -> ShiftServiceResult<Vec<OpenTask>> {
        Ok(self.store.list_open(operator).await?)
    }

    /// Returns the status of a task in the current shift.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftServiceError::Store`] when the lookup fails.
    pub async fn task_status(
        &self,
        operator: &OperatorId,
        number: TaskNumber,
    ) -> ShiftServiceResult<Option<TaskStatus>> {
        Ok(self.store.status(operator, number).await?)
    }

    /// Closes an open task with the given outcome and comment.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftServiceError::Store`] wrapping
    /// [`TaskStoreError::TaskNotOpen`] when the task is not open.
    pub async fn close_task(
        &self,
        operator: &OperatorId,
        number: TaskNumber,
        closure: TaskClosure,
    ) -> ShiftServiceResult<ClosedTask> {
        let closed = self
            .store
            .close(operator, number, closure, self.clock.utc())
            .await?;
        tracing::info!(
            %operator,
            task = %closed.number(),
            outcome = closed.closure().outcome().as_str(),
            commented = closed.closure().comment().is_some(),
            open_secs = (closed.closed_at() - closed.opened_at()).num_seconds(),
            "task closed"
        );
        Ok(closed)
    }

    /// Ends the operator's shift, force-closing open tasks as pending.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftServiceError::Store`] when draining fails.
    pub async fn finish_shift(&self, operator: &OperatorId) -> ShiftServiceResult<ShiftReport> {
        let report = self.store.drain(operator, self.clock.utc()).await?;
        tracing::info!(
            %operator,
            reported = report.tasks().len(),
            pending = report.pending_count(),
            "shift drained"
        );
        Ok(report)
    }

    /// Renders a report into operator-facing text.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftServiceError::Render`] when template evaluation fails.
    pub fn render_report(&self, report: &ShiftReport) -> ShiftServiceResult<String> {
        Ok(self.renderer.render(report)?)
    }

    /// Ends the operator's shift and renders the report text.
    ///
    /// # Errors
    ///
    /// Returns [`ShiftServiceError`] when draining or rendering fails.
    pub async fn report(&self, operator: &OperatorId) -> ShiftServiceResult<String> {
        let report = self.finish_shift(operator).await?;
        self.render_report(&report)
    }
}

//! In-memory task store holding one ledger per operator.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{
        ClosedTask, OpenTask, OperatorId, ShiftLedger, ShiftReport, TaskClosure, TaskDomainError,
        TaskNumber, TaskStatus,
    },
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe, process-lifetime task store.
///
/// State is lost when the process exits.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    ledgers: Arc<RwLock<HashMap<OperatorId, ShiftLedger>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> TaskStoreResult<RwLockReadGuard<'_, HashMap<OperatorId, ShiftLedger>>> {
        self.ledgers
            .read()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> TaskStoreResult<RwLockWriteGuard<'_, HashMap<OperatorId, ShiftLedger>>> {
        self.ledgers
            .write()
            .map_err(|err| TaskStoreError::persistence(std::io::Error::other(err.to_string())))
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn add(
        &self,
        operator: &OperatorId,
        description: String,
        opened_at: DateTime<Utc>,
    ) -> TaskStoreResult<OpenTask> {
        let mut ledgers = self.write()?;
        let ledger = ledgers.entry(operator.clone()).or_default();
        let number = ledger.add_task(description, opened_at);
        ledger
            .open_task(number)
            .cloned()
            .ok_or_else(|| TaskStoreError::TaskNotOpen {
                operator: operator.clone(),
                number,
            })
    }

    async fn list_open(&self, operator: &OperatorId) -> TaskStoreResult<Vec<OpenTask>> {
        let ledgers = self.read()?;
        Ok(ledgers
            .get(operator)
            .map(|ledger| ledger.list_open().cloned().collect())
            .unwrap_or_default())
    }

    async fn status(
        &self,
        operator: &OperatorId,
        number: TaskNumber,
    ) -> TaskStoreResult<Option<TaskStatus>> {
        let ledgers = self.read()?;
        Ok(ledgers.get(operator).and_then(|ledger| ledger.status(number)))
    }

    async fn close(
        &self,
        operator: &OperatorId,
        number: TaskNumber,
        closure: TaskClosure,
        closed_at: DateTime<Utc>,
    ) -> TaskStoreResult<ClosedTask> {
        let mut ledgers = self.write()?;
        let ledger = ledgers
            .get_mut(operator)
            .ok_or_else(|| TaskStoreError::TaskNotOpen {
                operator: operator.clone(),
                number,
            })?;
        ledger
            .close_task(number, closure, closed_at)
            .map_err(|err| match err {
                TaskDomainError::TaskNotOpen(missing) => TaskStoreError::TaskNotOpen {
                    operator: operator.clone(),
                    number: missing,
                },
            })
    }

    async fn drain(
        &self,
        operator: &OperatorId,
        drained_at: DateTime<Utc>,
    ) -> TaskStoreResult<ShiftReport> {
        let mut ledgers = self.write()?;
        Ok(ledgers
            .get_mut(operator)
            .map_or(ShiftReport::Empty, |ledger| {
                ledger.drain_as_report(drained_at)
            }))
    }
}

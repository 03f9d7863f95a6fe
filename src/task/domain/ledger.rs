//! Per-operator shift ledger holding open and closed tasks.

use super::{
    ClosedTask, OpenTask, ShiftReport, TaskClosure, TaskDomainError, TaskNumber, TaskStatus,
};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Task store for a single operator's shift.
///
/// Every number handed out is held in exactly one of the open or closed
/// collections until the shift is drained, which empties both and restarts
/// numbering at [`TaskNumber::FIRST`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftLedger {
    open: BTreeMap<TaskNumber, OpenTask>,
    closed: BTreeMap<TaskNumber, ClosedTask>,
    next_number: TaskNumber,
}

impl ShiftLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number the next opened task will receive.
    #[must_use]
    pub const fn next_number(&self) -> TaskNumber {
        self.next_number
    }

    /// Opens a task and returns its number.
    ///
    /// The description is stored as given.
    pub fn add_task(
        &mut self,
        description: impl Into<String>,
        opened_at: DateTime<Utc>,
    ) -> TaskNumber {
        let number = self.next_number;
        self.open
            .insert(number, OpenTask::new(number, description, opened_at));
        self.next_number = number.next();
        number
    }

    /// Returns open tasks in ascending number order.
    pub fn list_open(&self) -> impl Iterator<Item = &OpenTask> {
        self.open.values()
    }

    /// Returns the open task with the given number, if any.
    #[must_use]
    pub fn open_task(&self, number: TaskNumber) -> Option<&OpenTask> {
        self.open.get(&number)
    }

    /// Returns the lifecycle status of a task in the current shift.
    #[must_use]
    pub fn status(&self, number: TaskNumber) -> Option<TaskStatus> {
        if self.open.contains_key(&number) {
            return Some(TaskStatus::Open);
        }
        self.closed.get(&number).map(|task| TaskStatus::Closed {
            outcome: task.closure().outcome(),
        })
    }

    /// Closes an open task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TaskNotOpen`] when no open task carries the
    /// number.
    pub fn close_task(
        &mut self,
        number: TaskNumber,
        closure: TaskClosure,
        closed_at: DateTime<Utc>,
    ) -> Result<ClosedTask, TaskDomainError> {
        let open_task = self
            .open
            .remove(&number)
            .ok_or(TaskDomainError::TaskNotOpen(number))?;
        let closed_task = open_task.close(closure, closed_at);
        self.closed.insert(number, closed_task.clone());
        Ok(closed_task)
    }

    /// Ends the shift.
    ///
    /// Remaining open tasks are closed as pending, everything is returned as
    /// a report, both collections are emptied and numbering restarts. The
    /// reset happens whether or not anything was recorded.
    pub fn drain_as_report(&mut self, drained_at: DateTime<Utc>) -> ShiftReport {
        let mut closed = std::mem::take(&mut self.closed);
        for (number, open_task) in std::mem::take(&mut self.open) {
            closed.insert(number, open_task.close(TaskClosure::pending(), drained_at));
        }
        self.next_number = TaskNumber::FIRST;
        ShiftReport::from_closed(closed.into_values().collect())
    }
}

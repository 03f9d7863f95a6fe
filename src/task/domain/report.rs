//! End-of-shift report produced when the ledger is drained.

use super::{ClosedTask, Outcome};
use serde::{Deserialize, Serialize};

/// Summary of every task handled during a shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShiftReport {
    /// Nothing was recorded during the shift.
    Empty,
    /// Closed tasks in ascending number order.
    Summary {
        /// Tasks closed during the shift, including those force-closed as
        /// pending.
        tasks: Vec<ClosedTask>,
    },
}

impl ShiftReport {
    /// Builds a report from tasks already sorted by number.
    #[must_use]
    pub fn from_closed(tasks: Vec<ClosedTask>) -> Self {
        if tasks.is_empty() {
            Self::Empty
        } else {
            Self::Summary { tasks }
        }
    }

    /// Returns `true` when nothing was recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the reported tasks.
    #[must_use]
    pub fn tasks(&self) -> &[ClosedTask] {
        match self {
            Self::Empty => &[],
            Self::Summary { tasks } => tasks,
        }
    }

    /// Counts tasks that were force-closed as pending.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.tasks()
            .iter()
            .filter(|task| task.closure().is_pending())
            .count()
    }

    /// Counts tasks closed with the given outcome.
    #[must_use]
    pub fn count_with_outcome(&self, outcome: Outcome) -> usize {
        self.tasks()
            .iter()
            .filter(|task| task.closure().outcome() == outcome)
            .count()
    }
}

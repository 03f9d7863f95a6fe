//! Flow states and the read-only context transitions are evaluated against.

use serde::{Deserialize, Serialize};

use super::InputKind;
use crate::task::domain::{OpenTask, Outcome, TaskNumber};

/// The independent conversational flows.
///
/// The declaration order is the routing priority when several flows of one
/// operator are waiting for the same kind of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
    /// Pasted activity list import.
    BulkAdd,
    /// Single task entry.
    ManualAdd,
    /// Task closing dialog.
    Close,
}

impl FlowKind {
    /// Returns the canonical log representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BulkAdd => "bulk_add",
            Self::ManualAdd => "manual_add",
            Self::Close => "close",
        }
    }
}

/// Steps of the close flow after the open tasks were listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum CloseStep {
    /// Waiting for the number of the task to close. Invalid input keeps the
    /// flow here.
    Selecting,
    /// Waiting for the success answer.
    AskSuccess {
        /// Selected task.
        task: TaskNumber,
    },
    /// Waiting for the add-comment answer.
    AskComment {
        /// Selected task.
        task: TaskNumber,
        /// Outcome derived from the success answer.
        outcome: Outcome,
    },
    /// Waiting for the comment text.
    AwaitingComment {
        /// Selected task.
        task: TaskNumber,
        /// Outcome derived from the success answer.
        outcome: Outcome,
    },
}

/// State of an active flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FlowState {
    /// Bulk-add waiting for the pasted activity list.
    AwaitingBulkText,
    /// Manual-add waiting for the task description.
    AwaitingTaskText,
    /// Close flow at the given step.
    Close(CloseStep),
}

impl FlowState {
    /// Returns the flow this state belongs to.
    #[must_use]
    pub const fn kind(self) -> FlowKind {
        match self {
            Self::AwaitingBulkText => FlowKind::BulkAdd,
            Self::AwaitingTaskText => FlowKind::ManualAdd,
            Self::Close(_) => FlowKind::Close,
        }
    }

    /// Returns the kind of input this state waits for.
    #[must_use]
    pub const fn expects(self) -> InputKind {
        match self {
            Self::AwaitingBulkText
            | Self::AwaitingTaskText
            | Self::Close(CloseStep::Selecting | CloseStep::AwaitingComment { .. }) => {
                InputKind::Text
            }
            Self::Close(CloseStep::AskSuccess { .. } | CloseStep::AskComment { .. }) => {
                InputKind::Choice
            }
        }
    }

    /// Returns the canonical log representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AwaitingBulkText => "awaiting_bulk_text",
            Self::AwaitingTaskText => "awaiting_task_text",
            Self::Close(CloseStep::Selecting) => "selecting",
            Self::Close(CloseStep::AskSuccess { .. }) => "ask_success",
            Self::Close(CloseStep::AskComment { .. }) => "ask_comment_choice",
            Self::Close(CloseStep::AwaitingComment { .. }) => "awaiting_comment_text",
        }
    }
}

/// Snapshot of the operator's shift used while evaluating a transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogContext {
    open_tasks: Vec<OpenTask>,
}

impl DialogContext {
    /// Creates a context from the operator's open tasks.
    #[must_use]
    pub const fn new(open_tasks: Vec<OpenTask>) -> Self {
        Self { open_tasks }
    }

    /// Returns the open tasks in ascending number order.
    #[must_use]
    pub fn open_tasks(&self) -> &[OpenTask] {
        &self.open_tasks
    }

    /// Returns `true` when the number refers to an open task.
    #[must_use]
    pub fn is_open(&self, number: TaskNumber) -> bool {
        self.open_tasks.iter().any(|task| task.number() == number)
    }
}

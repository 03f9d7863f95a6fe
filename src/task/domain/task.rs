//! Open and closed task records and their closure outcome.

use super::TaskNumber;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comment attached to tasks that were still open when the shift ended.
pub const PENDING_COMMENT: &str = "Queda pendiente";

/// Final outcome of a closed task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The work was carried out.
    Succeeded,
    /// The work was not carried out.
    Failed,
}

impl Outcome {
    /// Maps a success flag onto an outcome.
    #[must_use]
    pub const fn from_success(success: bool) -> Self {
        if success { Self::Succeeded } else { Self::Failed }
    }

    /// Returns the status glyph rendered in front of a closed task.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Succeeded => "✅",
            Self::Failed => "❌",
        }
    }

    /// Returns the canonical log representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
        }
    }
}

/// Outcome and optional comment supplied when a task is closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskClosure {
    outcome: Outcome,
    comment: Option<String>,
    #[serde(default)]
    pending: bool,
}

impl TaskClosure {
    /// Creates a closure without a comment.
    #[must_use]
    pub const fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            comment: None,
            pending: false,
        }
    }

    /// Attaches a free-text comment, kept verbatim.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Closure applied to tasks force-closed by the shift report.
    #[must_use]
    pub fn pending() -> Self {
        Self {
            pending: true,
            ..Self::new(Outcome::Failed).with_comment(PENDING_COMMENT)
        }
    }

    /// Returns `true` when the report force-closed the task.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }

    /// Returns the closure outcome.
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the closure comment, if any.
    #[must_use]
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

/// Task recorded during the shift and not yet closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenTask {
    number: TaskNumber,
    description: String,
    opened_at: DateTime<Utc>,
}

impl OpenTask {
    /// Creates an open task record.
    #[must_use]
    pub fn new(
        number: TaskNumber,
        description: impl Into<String>,
        opened_at: DateTime<Utc>,
    ) -> Self {
        Self {
            number,
            description: description.into(),
            opened_at,
        }
    }

    /// Returns the task number.
    #[must_use]
    pub const fn number(&self) -> TaskNumber {
        self.number
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns when the task was opened.
    #[must_use]
    pub const fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Consumes the open task and produces its closed counterpart.
    #[must_use]
    pub fn close(self, closure: TaskClosure, closed_at: DateTime<Utc>) -> ClosedTask {
        ClosedTask {
            number: self.number,
            description: self.description,
            closure,
            opened_at: self.opened_at,
            closed_at,
        }
    }
}

/// Task with a final outcome.
///
/// Its [`Display`](fmt::Display) form is the text shown in confirmations and
/// reports: `<glyph> <description>` followed by ` (<comment>)` when a comment
/// was given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosedTask {
    number: TaskNumber,
    description: String,
    closure: TaskClosure,
    opened_at: DateTime<Utc>,
    closed_at: DateTime<Utc>,
}

impl ClosedTask {
    /// Returns the task number.
    #[must_use]
    pub const fn number(&self) -> TaskNumber {
        self.number
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the closure outcome and comment.
    #[must_use]
    pub const fn closure(&self) -> &TaskClosure {
        &self.closure
    }

    /// Returns when the task was opened.
    #[must_use]
    pub const fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Returns when the task was closed.
    #[must_use]
    pub const fn closed_at(&self) -> DateTime<Utc> {
        self.closed_at
    }

    /// Returns the rendered closure text.
    #[must_use]
    pub fn rendered(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ClosedTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.closure.outcome().glyph(), self.description)?;
        if let Some(comment) = self.closure.comment() {
            write!(f, " ({comment})")?;
        }
        Ok(())
    }
}

/// Lifecycle status of a task within the current shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TaskStatus {
    /// The task is waiting to be closed.
    Open,
    /// The task has been closed with the given outcome.
    Closed {
        /// Final outcome of the task.
        outcome: Outcome,
    },
}

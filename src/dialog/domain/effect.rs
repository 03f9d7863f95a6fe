//! Effects produced by flow transitions and the replies they carry.

use serde::{Deserialize, Serialize};

use super::{Choice, DialogRejection};
use crate::task::domain::{TaskClosure, TaskNumber};

/// Two-button prompt attached to a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoicePrompt {
    /// Caption of the affirmative button.
    pub yes_caption: String,
    /// Caption of the negative button.
    pub no_caption: String,
}

impl ChoicePrompt {
    /// The `Sí` / `No` prompt used by the close flow.
    #[must_use]
    pub fn yes_no() -> Self {
        Self {
            yes_caption: "Sí".to_owned(),
            no_caption: "No".to_owned(),
        }
    }

    /// Returns the buttons as `(caption, callback data)` pairs in display
    /// order.
    #[must_use]
    pub fn buttons(&self) -> [(&str, &'static str); 2] {
        [
            (self.yes_caption.as_str(), Choice::Yes.callback_data()),
            (self.no_caption.as_str(), Choice::No.callback_data()),
        ]
    }
}

/// Outbound message for the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// Message text.
    pub text: String,
    /// Buttons shown under the text, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choice: Option<ChoicePrompt>,
}

impl Reply {
    /// Creates a plain text reply.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            choice: None,
        }
    }

    /// Creates a reply carrying the `Sí` / `No` buttons.
    #[must_use]
    pub fn yes_no(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            choice: Some(ChoicePrompt::yes_no()),
        }
    }

    /// Returns `true` when the reply waits for a button tap.
    #[must_use]
    pub const fn expects_choice(&self) -> bool {
        self.choice.is_some()
    }
}

/// How newly opened tasks are acknowledged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Acknowledgement {
    /// One message with the number of tasks added.
    Count,
    /// One message per task with its assigned number.
    EachTask,
}

/// Work requested by a transition, executed by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send a reply.
    Reply(Reply),
    /// Tell the operator their input was rejected.
    Reject(DialogRejection),
    /// Open tasks in order and acknowledge them.
    OpenTasks {
        /// Descriptions of the tasks to open.
        descriptions: Vec<String>,
        /// Acknowledgement style.
        acknowledgement: Acknowledgement,
    },
    /// Close a task and confirm the rendered closure.
    CloseTask {
        /// Task to close.
        task: TaskNumber,
        /// Outcome and optional comment.
        closure: TaskClosure,
    },
}

impl Effect {
    /// Shorthand for a plain text reply.
    #[must_use]
    pub fn reply(text: impl Into<String>) -> Self {
        Self::Reply(Reply::text(text))
    }

    /// Shorthand for a reply carrying the `Sí` / `No` buttons.
    #[must_use]
    pub fn ask(text: impl Into<String>) -> Self {
        Self::Reply(Reply::yes_no(text))
    }
}

//! Operator input rejected by a flow.

use thiserror::Error;

use super::texts;
use crate::task::domain::TaskNumber;

/// Reason an operator's input was turned down.
///
/// Rejections are answered with a message and never abort the controller.
/// Only the selection step stays in place after a rejection; every other
/// rejection ends its flow.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DialogRejection {
    /// The pasted activity list contained no recognizable task line.
    #[error("no tasks recognized in pasted text")]
    NoTasksRecognized,

    /// The selection was not an integer.
    #[error("'{input}' is not a task number")]
    InvalidTaskNumber {
        /// Input as received.
        input: String,
    },

    /// The selection was an integer but not an open task.
    #[error("'{input}' does not refer to an open task")]
    UnknownTaskId {
        /// Input as received, trimmed.
        input: String,
    },

    /// The close flow was started with nothing open.
    #[error("no open tasks to close")]
    NoOpenTasks,

    /// The selected task was closed elsewhere before the flow finished.
    #[error("task {task} is no longer open")]
    TaskNoLongerOpen {
        /// Selected task.
        task: TaskNumber,
    },
}

impl DialogRejection {
    /// Returns the message shown to the operator.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::NoTasksRecognized => {
                "❌ No se detectaron tareas en el formato esperado (ej: '1- Descripción')."
                    .to_owned()
            }
            Self::InvalidTaskNumber { .. } => {
                "❌ Por favor, ingresa solo el número de la tarea.".to_owned()
            }
            Self::UnknownTaskId { .. } => {
                "❌ Número de tarea inválido. Intenta de nuevo.".to_owned()
            }
            Self::NoOpenTasks => "⚠️ No hay tareas abiertas para cerrar.".to_owned(),
            Self::TaskNoLongerOpen { task } => texts::task_no_longer_open(*task),
        }
    }

    /// Returns the canonical log representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoTasksRecognized => "no_tasks_recognized",
            Self::InvalidTaskNumber { .. } => "invalid_task_number",
            Self::UnknownTaskId { .. } => "unknown_task_id",
            Self::NoOpenTasks => "no_open_tasks",
            Self::TaskNoLongerOpen { .. } => "task_no_longer_open",
        }
    }
}

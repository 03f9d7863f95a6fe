//! Operator-facing texts sent by the dialog flows.

use crate::task::domain::{ClosedTask, OpenTask, TaskNumber};

/// Greeting sent for `/start` and as help for unknown commands.
pub const WELCOME: &str = "¡Bienvenido al Control de Actividades Nocturnas!\n\
Usa /auto, /task, /cerrar o /reporte para gestionar tareas.\n\
Usa /cancelar para abandonar un diálogo en curso.";

/// Prompt opening the bulk-add flow.
pub const BULK_PROMPT: &str = "Pega aquí el mensaje de actividades:";

/// Prompt opening the manual-add flow.
pub const MANUAL_PROMPT: &str = "Ingresa una tarea manualmente:";

/// Question asked once a task has been selected for closing.
pub const SUCCESS_QUESTION: &str = "¿Esta tarea fue realizada con éxito?";

/// Question asked after the success flag was given.
pub const COMMENT_QUESTION: &str = "¿Quieres agregar un comentario?";

/// Prompt for the closing comment.
pub const COMMENT_PROMPT: &str = "Escribe aquí tu comentario:";

/// Sent when `/cancelar` discarded at least one flow.
pub const DIALOG_CANCELLED: &str = "Diálogo cancelado.";

/// Sent when `/cancelar` found nothing to discard.
pub const NOTHING_TO_CANCEL: &str = "No hay ningún diálogo en curso.";

/// Sent when idle flows were discarded before handling a new event.
pub const DIALOG_EXPIRED: &str = "⌛ El diálogo anterior expiró por inactividad.";

/// Sent after a report discarded the operator's close flow.
pub const CLOSE_DISCARDED_BY_REPORT: &str =
    "El diálogo de cierre se descartó porque el turno fue reportado.";

/// Confirms a bulk import.
#[must_use]
pub fn tasks_imported(count: usize) -> String {
    format!("✅ Se agregaron {count} tareas automáticamente.")
}

/// Confirms a manually added task.
#[must_use]
pub fn task_added(task: &OpenTask) -> String {
    format!("✅ Tarea {} agregada: {}", task.number(), task.description())
}

/// Lists open tasks and asks which one to close.
#[must_use]
pub fn close_selection(open_tasks: &[OpenTask]) -> String {
    let listing: Vec<String> = open_tasks
        .iter()
        .map(|task| format!("{}. {}", task.number(), task.description()))
        .collect();
    format!(
        "Tareas abiertas:\n{}\n\n¿Cuál tarea debes cerrar? (Responde con el número):",
        listing.join("\n")
    )
}

/// Confirms a closed task.
#[must_use]
pub fn task_closed(task: &ClosedTask) -> String {
    format!("Tarea {} cerrada: {task}", task.number())
}

/// Reports that the selected task was closed elsewhere in the meantime.
#[must_use]
pub fn task_no_longer_open(number: TaskNumber) -> String {
    format!("⚠️ La tarea {number} ya no está abierta.")
}

//! Full conversations over the console transport.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::rstest;
use shift_tracker::{
    console::{ConsoleOutbox, ConsoleSession},
    dialog::services::DialogController,
    task::{adapters::memory::InMemoryTaskStore, domain::OperatorId},
};
use tokio::io::AsyncReadExt;

async fn converse(lines: &[&str]) -> String {
    let (writer, mut reader) = tokio::io::duplex(64 * 1024);
    let outbox = Arc::new(ConsoleOutbox::new(writer));
    let interpreter = outbox.interpreter();
    let controller = DialogController::new(
        Arc::new(InMemoryTaskStore::new()),
        outbox,
        Arc::new(DefaultClock),
    );
    {
        let mut session =
            ConsoleSession::new(&controller, interpreter, OperatorId::new("console"));
        for line in lines {
            session.feed(line).await.expect("line should be handled");
        }
        session.finish().await.expect("input end should be handled");
    }
    drop(controller);

    let mut transcript = String::new();
    reader
        .read_to_string(&mut transcript)
        .await
        .expect("transcript should be readable");
    transcript
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn typed_answers_drive_close_flow() {
    let transcript = converse(&[
        "/task",
        "wipe tables",
        "/cerrar",
        "1",
        "sí",
        "no",
        "/reporte",
    ])
    .await;

    assert_eq!(
        transcript,
        "Ingresa una tarea manualmente:\n\
         ✅ Tarea 1 agregada: wipe tables\n\
         Tareas abiertas:\n\
         1. wipe tables\n\
         \n\
         ¿Cuál tarea debes cerrar? (Responde con el número):\n\
         ¿Esta tarea fue realizada con éxito?\n\
         [sí] Sí  [no] No\n\
         ¿Quieres agregar un comentario?\n\
         [sí] Sí  [no] No\n\
         Tarea 1 cerrada: ✅ wipe tables\n\
         Buen día. Terminando el turno, este es el reporte de actividades planeadas:\n\
         1. ✅ wipe tables\n\
         ¡Gracias y buen turno!\n"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn comment_text_is_not_read_as_answer() {
    let transcript = converse(&["/task", "a", "/cerrar", "1", "n", "s", "no"]).await;
    assert!(transcript.ends_with("Escribe aquí tu comentario:\nTarea 1 cerrada: ❌ a (no)\n"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn pasted_activity_list_is_imported_as_one_message() {
    let transcript = converse(&[
        "/auto",
        "Actividades:",
        "1- wash",
        "2- dry",
        "",
        "/reporte",
    ])
    .await;

    assert_eq!(
        transcript,
        "Pega aquí el mensaje de actividades:\n\
         ✅ Se agregaron 2 tareas automáticamente.\n\
         Buen día. Terminando el turno, este es el reporte de actividades planeadas:\n\
         1. ❌ wash (Queda pendiente)\n\
         2. ❌ dry (Queda pendiente)\n\
         ¡Gracias y buen turno!\n"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn paste_cut_short_by_end_of_input_is_delivered() {
    let transcript = converse(&["/auto", "1- wash", "2- dry"]).await;
    assert!(transcript.ends_with("✅ Se agregaron 2 tareas automáticamente.\n"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn command_before_paste_is_handled() {
    let transcript = converse(&["/auto", "", "/cancelar", "1- wash", ""]).await;
    assert_eq!(
        transcript,
        "Pega aquí el mensaje de actividades:\nDiálogo cancelado.\n"
    );
}

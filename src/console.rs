//! Line-oriented console transport.
//!
//! Replies are written as plain text; button prompts are shown as a hint
//! line listing the accepted answers. While a prompt is showing, typed
//! `sí`/`no` answers are read back as button taps. While the bulk-add flow
//! waits for its activity list, pasted lines are collected until a blank
//! line and delivered as one message.

use async_trait::async_trait;
use mockable::Clock;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tokio::{
    io::{AsyncWrite, AsyncWriteExt},
    sync::Mutex,
};

use crate::dialog::{
    domain::{Choice, Event, FlowKind, Inbound, Reply},
    ports::{Outbox, OutboxError, OutboxResult},
    services::{DialogController, DialogResult},
};
use crate::task::{domain::OperatorId, ports::TaskStore};

/// Outbox writing replies to an async writer.
pub struct ConsoleOutbox<W> {
    writer: Mutex<W>,
    choice_pending: Arc<AtomicBool>,
}

impl<W> ConsoleOutbox<W>
where
    W: AsyncWrite + Unpin + Send,
{
    /// Creates an outbox writing to `writer`.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            choice_pending: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns an interpreter sharing this outbox's prompt state.
    #[must_use]
    pub fn interpreter(&self) -> ConsoleInterpreter {
        ConsoleInterpreter {
            choice_pending: Arc::clone(&self.choice_pending),
        }
    }

    /// Consumes the outbox, returning the writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

/// Formats a reply for the console.
#[must_use]
pub fn render_reply(reply: &Reply) -> String {
    let Some(prompt) = &reply.choice else {
        return format!("{}\n", reply.text);
    };
    let hint: Vec<String> = prompt
        .buttons()
        .iter()
        .map(|(caption, _)| format!("[{}] {caption}", caption.to_lowercase()))
        .collect();
    format!("{}\n{}\n", reply.text, hint.join("  "))
}

#[async_trait]
impl<W> Outbox for ConsoleOutbox<W>
where
    W: AsyncWrite + Unpin + Send,
{
    async fn send(&self, operator: &OperatorId, reply: Reply) -> OutboxResult<()> {
        tracing::trace!(%operator, buttons = reply.expects_choice(), "writing reply");
        let mut writer = self.writer.lock().await;
        writer
            .write_all(render_reply(&reply).as_bytes())
            .await
            .map_err(OutboxError::delivery)?;
        writer.flush().await.map_err(OutboxError::delivery)?;
        self.choice_pending
            .store(reply.expects_choice(), Ordering::Release);
        Ok(())
    }
}

/// Turns console lines into inbound events.
#[derive(Debug, Clone, Default)]
pub struct ConsoleInterpreter {
    choice_pending: Arc<AtomicBool>,
}

impl ConsoleInterpreter {
    /// Classifies one input line.
    ///
    /// Lines starting with `/` are commands. While a button prompt is
    /// showing, `sí`, `si`, `s`, `yes` and `y` answer yes and `no` or `n`
    /// answer no. Everything else is free text.
    #[must_use]
    pub fn interpret(&self, line: &str) -> Event {
        if line.starts_with('/') || !self.choice_pending.load(Ordering::Acquire) {
            return Event::from_message(line);
        }
        match line.trim().to_lowercase().as_str() {
            "sí" | "si" | "s" | "yes" | "y" => Event::Choice(Choice::Yes),
            "no" | "n" => Event::Choice(Choice::No),
            _ => Event::from_message(line),
        }
    }
}

/// Feeds console lines from one operator to a dialog controller.
pub struct ConsoleSession<'a, S, O, C>
where
    S: TaskStore,
    O: Outbox,
    C: Clock + Send + Sync,
{
    controller: &'a DialogController<S, O, C>,
    interpreter: ConsoleInterpreter,
    operator: OperatorId,
    pasted: Vec<String>,
}

impl<'a, S, O, C> ConsoleSession<'a, S, O, C>
where
    S: TaskStore,
    O: Outbox,
    C: Clock + Send + Sync,
{
    /// Creates a session for `operator`.
    #[must_use]
    pub const fn new(
        controller: &'a DialogController<S, O, C>,
        interpreter: ConsoleInterpreter,
        operator: OperatorId,
    ) -> Self {
        Self {
            controller,
            interpreter,
            operator,
            pasted: Vec::new(),
        }
    }

    /// Handles one input line.
    ///
    /// While the bulk-add flow is waiting, lines are buffered and a blank
    /// line delivers them as a single message. A command typed before any
    /// pasted line is handled as usual. Outside a paste, blank lines are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns the controller's error when handling fails.
    pub async fn feed(&mut self, line: &str) -> DialogResult<()> {
        let blank = line.trim().is_empty();
        if self.pasted.is_empty() && (blank || line.starts_with('/')) {
            if blank {
                return Ok(());
            }
            return self.dispatch(self.interpreter.interpret(line)).await;
        }
        if !self.awaiting_paste().await {
            return self.dispatch(self.interpreter.interpret(line)).await;
        }
        if blank {
            return self.finish().await;
        }
        self.pasted.push(line.to_owned());
        Ok(())
    }

    /// Delivers any buffered paste, e.g. when input ends mid-paste.
    ///
    /// # Errors
    ///
    /// Returns the controller's error when handling fails.
    pub async fn finish(&mut self) -> DialogResult<()> {
        if self.pasted.is_empty() {
            return Ok(());
        }
        let text = std::mem::take(&mut self.pasted).join("\n");
        tracing::debug!(operator = %self.operator, bytes = text.len(), "paste delivered");
        self.dispatch(Event::Text(text)).await
    }

    async fn awaiting_paste(&self) -> bool {
        self.controller
            .active_flows(&self.operator)
            .await
            .contains(&FlowKind::BulkAdd)
    }

    async fn dispatch(&self, event: Event) -> DialogResult<()> {
        self.controller
            .handle(Inbound::new(self.operator.clone(), event))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::domain::Command;
    use rstest::rstest;

    fn operator() -> OperatorId {
        OperatorId::new("console")
    }

    #[rstest]
    fn plain_reply_is_one_line() {
        assert_eq!(render_reply(&Reply::text("hola")), "hola\n");
    }

    #[rstest]
    fn choice_reply_lists_answers() {
        let rendered = render_reply(&Reply::yes_no("¿Listo?"));
        assert_eq!(rendered, "¿Listo?\n[sí] Sí  [no] No\n");
    }

    #[rstest]
    #[tokio::test]
    async fn send_writes_and_tracks_prompt_state() {
        let outbox = ConsoleOutbox::new(Vec::new());
        let interpreter = outbox.interpreter();

        outbox
            .send(&operator(), Reply::yes_no("¿Éxito?"))
            .await
            .expect("write should succeed");
        assert_eq!(interpreter.interpret("sí"), Event::Choice(Choice::Yes));

        outbox
            .send(&operator(), Reply::text("Escribe aquí tu comentario:"))
            .await
            .expect("write should succeed");
        assert_eq!(interpreter.interpret("no"), Event::Text("no".to_owned()));

        let written = String::from_utf8(outbox.into_inner()).expect("output should be UTF-8");
        assert_eq!(
            written,
            "¿Éxito?\n[sí] Sí  [no] No\nEscribe aquí tu comentario:\n"
        );
    }

    #[rstest]
    #[case("SI", Event::Choice(Choice::Yes))]
    #[case(" y ", Event::Choice(Choice::Yes))]
    #[case("N", Event::Choice(Choice::No))]
    #[case("tal vez", Event::Text("tal vez".to_owned()))]
    #[case("/reporte", Event::Command(Command::Report))]
    fn answers_are_read_while_prompt_shows(#[case] line: &str, #[case] expected: Event) {
        let interpreter = ConsoleInterpreter {
            choice_pending: Arc::new(AtomicBool::new(true)),
        };
        assert_eq!(interpreter.interpret(line), expected);
    }

    #[rstest]
    fn answers_are_text_without_prompt() {
        let interpreter = ConsoleInterpreter::default();
        assert_eq!(interpreter.interpret("sí"), Event::Text("sí".to_owned()));
    }
}

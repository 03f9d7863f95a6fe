//! Dialog controller routing operator events through the flows.

use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::dialog::{
    domain::{
        Acknowledgement, Command, DialogContext, DialogRejection, Effect, Event, FlowInput,
        FlowKind, FlowState, Inbound, Reply, SessionTable, TransitionError, begin, texts,
        transition,
    },
    ports::{Outbox, OutboxError},
};
use crate::task::{
    domain::{OperatorId, TaskClosure, TaskNumber},
    ports::{TaskStore, TaskStoreError},
    services::{ShiftService, ShiftServiceError},
};

/// Errors raised while handling an operator event.
///
/// Invalid operator input never produces an error; it is answered with a
/// rejection message instead.
#[derive(Debug, Error)]
pub enum DialogError {
    /// A shift operation failed.
    #[error(transparent)]
    Shift(#[from] ShiftServiceError),
    /// A reply could not be delivered.
    #[error(transparent)]
    Outbox(#[from] OutboxError),
    /// A routed input did not fit the flow state.
    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Result type for dialog controller operations.
pub type DialogResult<T> = Result<T, DialogError>;

/// Routes inbound events to the flows and executes their effects.
///
/// Events are handled one at a time: the session table stays locked for the
/// whole handling of an event, so flow steps and shift reports never
/// interleave.
pub struct DialogController<S, O, C>
where
    S: TaskStore,
    O: Outbox,
    C: Clock + Send + Sync,
{
    shift: ShiftService<S, C>,
    outbox: Arc<O>,
    clock: Arc<C>,
    sessions: Mutex<SessionTable>,
    session_timeout: Option<TimeDelta>,
}

impl<S, O, C> DialogController<S, O, C>
where
    S: TaskStore,
    O: Outbox,
    C: Clock + Send + Sync,
{
    /// Creates a controller without session expiry.
    #[must_use]
    pub fn new(store: Arc<S>, outbox: Arc<O>, clock: Arc<C>) -> Self {
        Self {
            shift: ShiftService::new(store, Arc::clone(&clock)),
            outbox,
            clock,
            sessions: Mutex::new(SessionTable::new()),
            session_timeout: None,
        }
    }

    /// Discards flows left idle for longer than `timeout`.
    #[must_use]
    pub const fn with_session_timeout(mut self, timeout: TimeDelta) -> Self {
        self.session_timeout = Some(timeout);
        self
    }

    /// Returns the operator's active flows in routing order.
    pub async fn active_flows(&self, operator: &OperatorId) -> Vec<FlowKind> {
        self.sessions.lock().await.active_kinds(operator)
    }

    /// Handles one inbound event.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError`] when the task store or the outbox fails.
    pub async fn handle(&self, inbound: Inbound) -> DialogResult<()> {
        let Inbound { operator, event } = inbound;
        let mut sessions = self.sessions.lock().await;
        let now = self.clock.utc();
        self.expire_idle(&mut sessions, &operator, now).await?;

        match event {
            Event::Command(command) => {
                self.run_command(&mut sessions, &operator, command, now)
                    .await
            }
            Event::InvalidCommand(error) => {
                tracing::debug!(%operator, %error, "unrecognized command");
                self.send(&operator, Reply::text(texts::WELCOME)).await
            }
            Event::Text(text) => {
                self.route(&mut sessions, &operator, FlowInput::Text(text), now)
                    .await
            }
            Event::Choice(choice) => {
                self.route(&mut sessions, &operator, FlowInput::Choice(choice), now)
                    .await
            }
        }
    }

    async fn expire_idle(
        &self,
        sessions: &mut SessionTable,
        operator: &OperatorId,
        now: DateTime<Utc>,
    ) -> DialogResult<()> {
        let Some(timeout) = self.session_timeout else {
            return Ok(());
        };
        let expired = sessions.expire_idle(operator, now, timeout);
        if expired.is_empty() {
            return Ok(());
        }
        for kind in &expired {
            tracing::info!(%operator, flow = kind.as_str(), "flow expired");
        }
        self.send(operator, Reply::text(texts::DIALOG_EXPIRED)).await
    }

    async fn run_command(
        &self,
        sessions: &mut SessionTable,
        operator: &OperatorId,
        command: Command,
        now: DateTime<Utc>,
    ) -> DialogResult<()> {
        tracing::debug!(%operator, command = command.name(), "command received");
        match command {
            Command::Start => self.send(operator, Reply::text(texts::WELCOME)).await,
            Command::Report => {
                let report = self.shift.report(operator).await?;
                self.send(operator, Reply::text(report)).await?;
                let Some(state) = sessions.finish(operator, FlowKind::Close) else {
                    return Ok(());
                };
                tracing::info!(
                    %operator,
                    state = state.as_str(),
                    "close flow discarded by report"
                );
                self.send(operator, Reply::text(texts::CLOSE_DISCARDED_BY_REPORT))
                    .await
            }
            Command::Cancel => {
                let cancelled = sessions.cancel_all(operator);
                for kind in &cancelled {
                    tracing::info!(%operator, flow = kind.as_str(), "flow cancelled");
                }
                let text = if cancelled.is_empty() {
                    texts::NOTHING_TO_CANCEL
                } else {
                    texts::DIALOG_CANCELLED
                };
                self.send(operator, Reply::text(text)).await
            }
            Command::BulkAdd | Command::ManualAdd | Command::Close => {
                let Some(kind) = command.flow() else {
                    return Ok(());
                };
                if sessions.state(operator, kind).is_some() {
                    tracing::info!(%operator, flow = kind.as_str(), "flow restarted");
                }
                let context = self.context(operator).await?;
                let result = begin(kind, &context);
                sessions.apply(operator, kind, result.next, now);
                self.execute(operator, result.effects).await
            }
        }
    }

    async fn route(
        &self,
        sessions: &mut SessionTable,
        operator: &OperatorId,
        input: FlowInput,
        now: DateTime<Utc>,
    ) -> DialogResult<()> {
        let Some(kind) = sessions.route(operator, input.kind()) else {
            tracing::debug!(
                %operator,
                input = input.kind().as_str(),
                "input ignored, no flow waiting"
            );
            return Ok(());
        };
        let Some(state) = sessions.state(operator, kind) else {
            return Ok(());
        };
        let context = self.context(operator).await?;
        let result = transition(state, &context, input)?;
        tracing::debug!(
            %operator,
            flow = kind.as_str(),
            from = state.as_str(),
            to = result.next.map_or("done", FlowState::as_str),
            "flow advanced"
        );
        sessions.apply(operator, kind, result.next, now);
        self.execute(operator, result.effects).await
    }

    async fn context(&self, operator: &OperatorId) -> DialogResult<DialogContext> {
        Ok(DialogContext::new(self.shift.list_open(operator).await?))
    }

    async fn execute(&self, operator: &OperatorId, effects: Vec<Effect>) -> DialogResult<()> {
        for effect in effects {
            match effect {
                Effect::Reply(reply) => self.send(operator, reply).await?,
                Effect::Reject(rejection) => self.reject(operator, &rejection).await?,
                Effect::OpenTasks {
                    descriptions,
                    acknowledgement,
                } => {
                    self.open_tasks(operator, descriptions, acknowledgement)
                        .await?;
                }
                Effect::CloseTask { task, closure } => {
                    self.close_task(operator, task, closure).await?;
                }
            }
        }
        Ok(())
    }

    async fn open_tasks(
        &self,
        operator: &OperatorId,
        descriptions: Vec<String>,
        acknowledgement: Acknowledgement,
    ) -> DialogResult<()> {
        let opened = self.shift.open_tasks(operator, descriptions).await?;
        match acknowledgement {
            Acknowledgement::Count => {
                self.send(operator, Reply::text(texts::tasks_imported(opened.len())))
                    .await
            }
            Acknowledgement::EachTask => {
                for task in &opened {
                    self.send(operator, Reply::text(texts::task_added(task)))
                        .await?;
                }
                Ok(())
            }
        }
    }

    async fn close_task(
        &self,
        operator: &OperatorId,
        task: TaskNumber,
        closure: TaskClosure,
    ) -> DialogResult<()> {
        match self.shift.close_task(operator, task, closure).await {
            Ok(closed) => {
                self.send(operator, Reply::text(texts::task_closed(&closed)))
                    .await
            }
            Err(ShiftServiceError::Store(TaskStoreError::TaskNotOpen { .. })) => {
                self.reject(operator, &DialogRejection::TaskNoLongerOpen { task })
                    .await
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn reject(&self, operator: &OperatorId, rejection: &DialogRejection) -> DialogResult<()> {
        tracing::info!(
            %operator,
            rejection = rejection.as_str(),
            detail = %rejection,
            "input rejected"
        );
        self.send(operator, Reply::text(rejection.user_message()))
            .await
    }

    async fn send(&self, operator: &OperatorId, reply: Reply) -> DialogResult<()> {
        Ok(self.outbox.send(operator, reply).await?)
    }
}

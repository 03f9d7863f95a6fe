//! Pure flow transitions.
//!
//! [`begin`] and [`transition`] never touch the task store or the transport.
//! Given the same state, context and input they always produce the same next
//! state and effects; the controller applies the effects afterwards.

use std::num::IntErrorKind;

use thiserror::Error;

use super::{
    Acknowledgement, CloseStep, DialogContext, DialogRejection, Effect, FlowInput, FlowKind,
    FlowState, InputKind, texts,
};
use crate::task::domain::{Outcome, TaskClosure, TaskNumber, parse_bulk};

/// Result of a flow transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// State to keep for the flow, or `None` when the flow has ended.
    pub next: Option<FlowState>,
    /// Effects to execute, in order.
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    /// The flow continues in `state`.
    #[must_use]
    pub const fn advance(state: FlowState) -> Self {
        Self {
            next: Some(state),
            effects: Vec::new(),
        }
    }

    /// The flow has ended.
    #[must_use]
    pub const fn finished() -> Self {
        Self {
            next: None,
            effects: Vec::new(),
        }
    }

    /// Appends an effect.
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Returns `true` when the flow has ended.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.next.is_none()
    }
}

/// Errors that can occur during a transition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionError {
    /// The state does not accept this kind of input.
    #[error("state '{state}' does not accept {} input", .input.as_str())]
    UnexpectedInput {
        /// State the flow was in.
        state: &'static str,
        /// Kind of input received.
        input: InputKind,
    },
}

/// Starts a flow from its entry command.
///
/// The close flow ends immediately when nothing is open.
#[must_use]
pub fn begin(kind: FlowKind, context: &DialogContext) -> TransitionResult {
    match kind {
        FlowKind::BulkAdd => TransitionResult::advance(FlowState::AwaitingBulkText)
            .with_effect(Effect::reply(texts::BULK_PROMPT)),
        FlowKind::ManualAdd => TransitionResult::advance(FlowState::AwaitingTaskText)
            .with_effect(Effect::reply(texts::MANUAL_PROMPT)),
        FlowKind::Close if context.open_tasks().is_empty() => {
            TransitionResult::finished().with_effect(Effect::Reject(DialogRejection::NoOpenTasks))
        }
        FlowKind::Close => TransitionResult::advance(FlowState::Close(CloseStep::Selecting))
            .with_effect(Effect::reply(texts::close_selection(context.open_tasks()))),
    }
}

/// Advances an active flow with operator input.
///
/// # Errors
///
/// Returns [`TransitionError::UnexpectedInput`] when the state waits for a
/// different kind of input.
pub fn transition(
    state: FlowState,
    context: &DialogContext,
    input: FlowInput,
) -> Result<TransitionResult, TransitionError> {
    match (state, input) {
        (FlowState::AwaitingBulkText, FlowInput::Text(text)) => Ok(import_bulk(&text)),

        (FlowState::AwaitingTaskText, FlowInput::Text(text)) => {
            Ok(TransitionResult::finished().with_effect(Effect::OpenTasks {
                descriptions: vec![text],
                acknowledgement: Acknowledgement::EachTask,
            }))
        }

        (FlowState::Close(CloseStep::Selecting), FlowInput::Text(text)) => {
            Ok(select_task(context, &text))
        }

        (FlowState::Close(CloseStep::AskSuccess { task }), FlowInput::Choice(choice)) => {
            let outcome = Outcome::from_success(choice.is_yes());
            Ok(
                TransitionResult::advance(FlowState::Close(CloseStep::AskComment {
                    task,
                    outcome,
                }))
                .with_effect(Effect::ask(texts::COMMENT_QUESTION)),
            )
        }

        (FlowState::Close(CloseStep::AskComment { task, outcome }), FlowInput::Choice(choice)) => {
            if choice.is_yes() {
                Ok(
                    TransitionResult::advance(FlowState::Close(CloseStep::AwaitingComment {
                        task,
                        outcome,
                    }))
                    .with_effect(Effect::reply(texts::COMMENT_PROMPT)),
                )
            } else {
                Ok(TransitionResult::finished().with_effect(Effect::CloseTask {
                    task,
                    closure: TaskClosure::new(outcome),
                }))
            }
        }

        (
            FlowState::Close(CloseStep::AwaitingComment { task, outcome }),
            FlowInput::Text(comment),
        ) => Ok(TransitionResult::finished().with_effect(Effect::CloseTask {
            task,
            closure: TaskClosure::new(outcome).with_comment(comment),
        })),

        (unexpected_state, unexpected_input) => Err(TransitionError::UnexpectedInput {
            state: unexpected_state.as_str(),
            input: unexpected_input.kind(),
        }),
    }
}

fn import_bulk(text: &str) -> TransitionResult {
    let descriptions = parse_bulk(text);
    if descriptions.is_empty() {
        return TransitionResult::finished()
            .with_effect(Effect::Reject(DialogRejection::NoTasksRecognized));
    }
    TransitionResult::finished().with_effect(Effect::OpenTasks {
        descriptions,
        acknowledgement: Acknowledgement::Count,
    })
}

fn select_task(context: &DialogContext, text: &str) -> TransitionResult {
    let selecting = FlowState::Close(CloseStep::Selecting);
    let input = text.trim();
    let parsed = match input.parse::<i64>() {
        Ok(value) => u64::try_from(value).ok().map(TaskNumber::new),
        Err(error) => match error.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => None,
            _ => {
                return TransitionResult::advance(selecting).with_effect(Effect::Reject(
                    DialogRejection::InvalidTaskNumber {
                        input: text.to_owned(),
                    },
                ));
            }
        },
    };

    match parsed.filter(|number| context.is_open(*number)) {
        Some(task) => TransitionResult::advance(FlowState::Close(CloseStep::AskSuccess { task }))
            .with_effect(Effect::ask(texts::SUCCESS_QUESTION)),
        None => TransitionResult::advance(selecting).with_effect(Effect::Reject(
            DialogRejection::UnknownTaskId {
                input: input.to_owned(),
            },
        )),
    }
}

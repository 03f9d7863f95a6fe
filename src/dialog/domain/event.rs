//! Inbound events delivered by the chat transport.

use serde::{Deserialize, Serialize};

use super::{Command, CommandError};
use crate::task::domain::OperatorId;

/// Answer carried by a binary button tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    /// Affirmative answer.
    Yes,
    /// Negative answer.
    No,
}

impl Choice {
    /// Callback payload attached to the affirmative button.
    pub const YES_DATA: &'static str = "yes";
    /// Callback payload attached to the negative button.
    pub const NO_DATA: &'static str = "no";

    /// Reads a button callback payload.
    ///
    /// Anything other than [`Choice::YES_DATA`] counts as a negative answer.
    #[must_use]
    pub fn from_callback_data(data: &str) -> Self {
        if data == Self::YES_DATA { Self::Yes } else { Self::No }
    }

    /// Returns the callback payload for this answer.
    #[must_use]
    pub const fn callback_data(self) -> &'static str {
        match self {
            Self::Yes => Self::YES_DATA,
            Self::No => Self::NO_DATA,
        }
    }

    /// Returns `true` for the affirmative answer.
    #[must_use]
    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }
}

/// Event received from the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A recognized command.
    Command(Command),
    /// A message that looked like a command but could not be parsed.
    InvalidCommand(CommandError),
    /// A free-text message.
    Text(String),
    /// A button tap.
    Choice(Choice),
}

impl Event {
    /// Classifies a chat message as a command or free text.
    ///
    /// Messages starting with `/` are commands; everything else is kept
    /// verbatim as text.
    #[must_use]
    pub fn from_message(text: impl Into<String>) -> Self {
        let message = text.into();
        if !message.starts_with('/') {
            return Self::Text(message);
        }
        match Command::parse(&message) {
            Ok(command) => Self::Command(command),
            Err(error) => Self::InvalidCommand(error),
        }
    }

    /// Converts the event into input for an active flow, if it is one.
    #[must_use]
    pub fn into_flow_input(self) -> Option<FlowInput> {
        match self {
            Self::Text(text) => Some(FlowInput::Text(text)),
            Self::Choice(choice) => Some(FlowInput::Choice(choice)),
            Self::Command(_) | Self::InvalidCommand(_) => None,
        }
    }
}

/// Event addressed to a specific operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbound {
    /// Operator (chat) that produced the event.
    pub operator: OperatorId,
    /// The event itself.
    pub event: Event,
}

impl Inbound {
    /// Creates an inbound event.
    #[must_use]
    pub const fn new(operator: OperatorId, event: Event) -> Self {
        Self { operator, event }
    }

    /// Creates an inbound chat message.
    #[must_use]
    pub fn message(operator: OperatorId, text: impl Into<String>) -> Self {
        Self::new(operator, Event::from_message(text))
    }

    /// Creates an inbound button tap.
    #[must_use]
    pub const fn choice(operator: OperatorId, choice: Choice) -> Self {
        Self::new(operator, Event::Choice(choice))
    }
}

/// Input consumed by an active flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowInput {
    /// Free text.
    Text(String),
    /// Button tap.
    Choice(Choice),
}

impl FlowInput {
    /// Returns the kind of input.
    #[must_use]
    pub const fn kind(&self) -> InputKind {
        match self {
            Self::Text(_) => InputKind::Text,
            Self::Choice(_) => InputKind::Choice,
        }
    }
}

/// Kind of input a flow step waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Free text.
    Text,
    /// Button tap.
    Choice,
}

impl InputKind {
    /// Returns the canonical log representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Choice => "choice",
        }
    }
}

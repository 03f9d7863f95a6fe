//! Chat command parsing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::FlowKind;

/// Errors for command parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Input was empty.
    #[error("command input cannot be empty")]
    EmptyInput,

    /// Input does not start with `/`.
    #[error("commands must start with '/'")]
    MissingLeadingSlash,

    /// Command name is malformed.
    #[error("invalid command name '{0}'")]
    InvalidCommandName(String),

    /// Command name is well formed but not supported.
    #[error("command '/{0}' was not found")]
    UnknownCommand(String),
}

/// Commands understood by the dialog controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// Sends the welcome text.
    Start,
    /// Starts the bulk-add flow.
    BulkAdd,
    /// Starts the manual-add flow.
    ManualAdd,
    /// Starts the close flow.
    Close,
    /// Ends the shift and sends the report.
    Report,
    /// Discards every active flow of the operator.
    Cancel,
}

impl Command {
    /// Every supported command.
    pub const ALL: [Self; 6] = [
        Self::Start,
        Self::BulkAdd,
        Self::ManualAdd,
        Self::Close,
        Self::Report,
        Self::Cancel,
    ];

    /// Returns the command name as typed by the operator, without the slash.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::BulkAdd => "auto",
            Self::ManualAdd => "task",
            Self::Close => "cerrar",
            Self::Report => "reporte",
            Self::Cancel => "cancelar",
        }
    }

    /// Returns the flow this command starts, if any.
    #[must_use]
    pub const fn flow(self) -> Option<FlowKind> {
        match self {
            Self::BulkAdd => Some(FlowKind::BulkAdd),
            Self::ManualAdd => Some(FlowKind::ManualAdd),
            Self::Close => Some(FlowKind::Close),
            Self::Start | Self::Report | Self::Cancel => None,
        }
    }

    /// Parses `/<command>[@bot] [ignored arguments]` input.
    ///
    /// Names are matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError`] when the input is empty, lacks the leading
    /// slash, carries a malformed name, or names an unsupported command.
    pub fn parse(raw_input: &str) -> Result<Self, CommandError> {
        let command_token = raw_input
            .split_whitespace()
            .next()
            .ok_or(CommandError::EmptyInput)?;
        let name = parse_command_token(command_token)?;
        Self::ALL
            .into_iter()
            .find(|command| command.name() == name)
            .ok_or(CommandError::UnknownCommand(name))
    }
}

fn parse_command_token(token: &str) -> Result<String, CommandError> {
    let command = token
        .strip_prefix('/')
        .ok_or(CommandError::MissingLeadingSlash)?;
    let name = command
        .split_once('@')
        .map_or(command, |(name, _bot)| name);
    if name.is_empty() || !is_valid_identifier(name) {
        return Err(CommandError::InvalidCommandName(command.to_owned()));
    }
    Ok(name.to_ascii_lowercase())
}

fn is_valid_identifier(value: &str) -> bool {
    value
        .chars()
        .all(|character| character.is_ascii_alphanumeric() || matches!(character, '-' | '_'))
}

//! Domain model for the conversational flows.
//!
//! Three independent flows (bulk-add, manual-add, close) are modelled as
//! explicit states advanced by a pure transition function. Commands, inbound
//! events, effects and the per-operator session table live here; nothing in
//! this module performs I/O.

mod command;
mod effect;
mod event;
mod rejection;
mod session;
mod state;
pub mod texts;
mod transition;

pub use command::{Command, CommandError};
pub use effect::{Acknowledgement, ChoicePrompt, Effect, Reply};
pub use event::{Choice, Event, FlowInput, Inbound, InputKind};
pub use rejection::DialogRejection;
pub use session::{ActiveFlow, SessionTable};
pub use state::{CloseStep, DialogContext, FlowKind, FlowState};
pub use transition::{TransitionError, TransitionResult, begin, transition};

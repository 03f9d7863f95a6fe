//! Shift tracker: chat-driven task tracking for operators on shift.
//!
//! Operators open tasks one at a time or by pasting a numbered activity
//! list, close them with a success flag and an optional comment, and end the
//! shift with a report that force-closes anything still open as pending.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage and delivery
//! - **Adapters**: Concrete implementations of ports (in-memory, console)
//!
//! # Modules
//!
//! - [`task`]: Shift ledger, task closure and report rendering
//! - [`dialog`]: Commands, conversational flows and their controller
//! - [`console`]: Line-oriented transport over standard input and output
//! - [`config`]: Runtime configuration

pub mod config;
pub mod console;
pub mod dialog;
pub mod task;

//! Conversational flows for operating a shift over chat.
//!
//! An operator talks to the tracker through commands, free-text messages and
//! binary button taps. Three independent flows turn that input into task
//! operations:
//!
//! - bulk-add imports a pasted activity list
//! - manual-add opens one task from a free-text description
//! - close walks through selection, success flag and optional comment
//!
//! Flow states advance through a pure transition function in [`domain`];
//! [`services::DialogController`] executes the resulting effects against the
//! task store and the [`ports::Outbox`].

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

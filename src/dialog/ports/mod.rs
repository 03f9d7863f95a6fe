//! Port contracts for the conversational transport.

pub mod outbox;

pub use outbox::{Outbox, OutboxError, OutboxResult};

#[cfg(test)]
pub use outbox::MockOutbox;

//! In-memory adapters for the dialog ports.

mod outbox;

pub use outbox::RecordingOutbox;

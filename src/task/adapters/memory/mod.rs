//! In-memory adapters for shift task storage.

mod task;

pub use task::InMemoryTaskStore;

//! Shift task tracking.
//!
//! Tasks are opened one by one or in bulk from a pasted activity list,
//! closed with a success flag and optional comment, and drained into an
//! end-of-shift report that force-closes anything still open as pending.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

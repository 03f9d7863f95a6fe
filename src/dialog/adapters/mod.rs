//! Adapter implementations of the dialog ports.

pub mod memory;

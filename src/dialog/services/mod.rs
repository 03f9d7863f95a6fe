//! Application services driving the conversational flows.

mod controller;

pub use controller::{DialogController, DialogError, DialogResult};

//! Step definitions for shift dialog BDD scenarios.

mod given;
mod then;
mod when;
pub mod world;

//! Unit tests for the task module.

mod render_tests;

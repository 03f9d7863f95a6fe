//! In-memory adapter integration tests.
//!
//! Tests are organized into modules by functionality:
//! - `store_tests`: Task numbering, isolation and concurrent access
//! - `console_tests`: Full conversations over the console transport

mod in_memory {
    pub mod helpers;

    mod console_tests;
    mod store_tests;
}

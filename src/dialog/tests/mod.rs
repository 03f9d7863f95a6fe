//! Unit tests for the dialog module.

//! Workspace-level integration tests for the compound interest calculator.
//!
//! See `tests/golden.rs`.

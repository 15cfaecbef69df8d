//! Test support: fixtures and mock collaborators
//!
//! Compiled into the library so integration tests and downstream consumers
//! can exercise the engine without a live portal backend.

pub mod fixtures;
pub mod mocks;

pub use mocks::MockCaseBackend;

//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The Mojang client is mocked by hand rather than with mockall so tests can
//! read call counts straight off the mock after a request completes.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;

//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod mojang;

pub use mojang::MojangClientImpl;

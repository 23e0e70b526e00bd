//! Mojang adapter
//!
//! `reqwest` implementation of the Mojang client port.

pub mod client;

pub use client::MojangClientImpl;

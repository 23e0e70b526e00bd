//! Domain layer
//!
//! Contains pure data types with no external dependencies.
//! - `entities`: Upstream payloads and normalized patch notes
//! - `ports`: Trait definitions for the upstream APIs

pub mod entities;
pub mod ports;
pub mod url;

pub use url::join_url;

//! Application layer
//!
//! Contains the feed pipeline.
//! Services coordinate between domain entities, ports, and the feed renderers.

pub mod feed_service;
pub mod manifest_fetcher;
pub mod patch_note_resolver;

pub use feed_service::FeedService;

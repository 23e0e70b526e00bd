//! Feed module
//!
//! Feed document model and its RSS / JSON Feed renderers.

pub mod document;
pub mod renderer;

pub use document::{ChannelMetadata, FeedDocument, FeedItem};
pub use renderer::{render_json, render_rss};

//! Feed document
//!
//! Format-independent feed model shared by the RSS and JSON Feed renderers.

use chrono::{DateTime, Datelike, Utc};

pub const FEED_TITLE: &str = "Minecraft Patch Notes";
pub const FEED_DESCRIPTION: &str = "Patch notes for Minecraft: Java Edition";
pub const FEED_LINK: &str = "https://www.minecraft.net/en-us/articles";
pub const FEED_LANGUAGE: &str = "en";
pub const FEED_FAVICON: &str =
    "https://www.minecraft.net/etc.clientlibs/minecraft/clientlibs/main/resources/favicon.ico";

/// Static channel metadata
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelMetadata {
    pub title: String,
    pub description: String,
    /// Feed identity, derived from the host serving the request
    pub id: String,
    pub link: String,
    pub language: String,
    pub favicon: String,
    pub copyright: String,
    pub updated: DateTime<Utc>,
}

impl ChannelMetadata {
    /// Channel metadata for the patch notes feed served under `id`
    pub fn patch_notes(id: String, now: DateTime<Utc>) -> Self {
        Self {
            title: FEED_TITLE.to_string(),
            description: FEED_DESCRIPTION.to_string(),
            id,
            link: FEED_LINK.to_string(),
            language: FEED_LANGUAGE.to_string(),
            favicon: FEED_FAVICON.to_string(),
            copyright: format!("All rights reserved 2009-{}, Mojang", now.year()),
            updated: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub title: String,
    pub id: String,
    pub link: String,
    /// HTML content
    pub content: String,
    /// `None` when the upstream timestamp could not be parsed
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedDocument {
    pub channel: ChannelMetadata,
    pub items: Vec<FeedItem>,
}

impl FeedDocument {
    pub fn new(channel: ChannelMetadata) -> Self {
        Self {
            channel,
            items: Vec::new(),
        }
    }

    pub fn add_item(&mut self, item: FeedItem) {
        self.items.push(item);
    }
}

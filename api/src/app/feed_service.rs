//! Feed service
//!
//! Builds the patch notes feed: fetch the index, resolve the newest entries
//! one after another, and collect them into a feed document.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::entities::NormalizedEntry;
use crate::domain::ports::MojangClient;
use crate::error::UpstreamError;
use crate::feed::{ChannelMetadata, FeedDocument, FeedItem};

use super::patch_note_resolver::PatchNoteResolver;

/// Number of index entries included in the feed
pub const MAX_ENTRIES: usize = 5;

const ITEM_LINK_BASE: &str = "https://quiltmc.org/en/mc-patchnotes/";

/// Service for building patch notes feeds
pub struct FeedService<C>
where
    C: MojangClient,
{
    client: Arc<C>,
}

impl<C> FeedService<C>
where
    C: MojangClient,
{
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Build the feed served under `feed_id`
    pub async fn build_feed(&self, feed_id: &str) -> Result<FeedDocument, UpstreamError> {
        self.build_feed_at(feed_id, Utc::now()).await
    }

    pub async fn build_feed_at(
        &self,
        feed_id: &str,
        now: DateTime<Utc>,
    ) -> Result<FeedDocument, UpstreamError> {
        let mut feed = FeedDocument::new(ChannelMetadata::patch_notes(feed_id.to_string(), now));

        let index = self.client.fetch_patch_note_index().await?;
        tracing::info!(
            "Building feed from {} of {} patch notes",
            index.entries.len().min(MAX_ENTRIES),
            index.entries.len()
        );

        // One resolver per feed so the manifest is fetched once.
        let resolver = PatchNoteResolver::new(self.client.clone());
        for raw in index.entries.iter().take(MAX_ENTRIES) {
            let entry = resolver.resolve(raw).await?;
            feed.add_item(self.entry_to_feed_item(&entry));
        }

        Ok(feed)
    }

    fn entry_to_feed_item(&self, entry: &NormalizedEntry) -> FeedItem {
        let image = format!(
            "<img src=\"{}\" alt=\"{}\">",
            html_escape::encode_double_quoted_attribute(&entry.image.url),
            html_escape::encode_double_quoted_attribute(&entry.title)
        );

        FeedItem {
            title: entry.title.clone(),
            id: entry.id.clone(),
            link: format!("{}#{}", ITEM_LINK_BASE, entry.version),
            content: image + &entry.body,
            date: parse_time(entry),
        }
    }
}

fn parse_time(entry: &NormalizedEntry) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(&entry.time) {
        Ok(time) => Some(time.with_timezone(&Utc)),
        Err(e) => {
            tracing::warn!(
                "Patch note {} has no usable time {:?}: {}",
                entry.id,
                entry.time,
                e
            );
            None
        }
    }
}

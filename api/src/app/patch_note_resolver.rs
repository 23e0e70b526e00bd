//! Patch note resolver
//!
//! Joins a raw index entry against the version manifest and its article body.

use std::sync::Arc;

use crate::domain::entities::{
    ArticleContent, NormalizedEntry, PatchNoteImage, RawPatchNote, VersionRecord,
};
use crate::domain::join_url;
use crate::domain::ports::MojangClient;
use crate::error::UpstreamError;

use super::manifest_fetcher::ManifestFetcher;

/// Request-scoped resolver; owns the manifest memo for that request
pub struct PatchNoteResolver<C>
where
    C: MojangClient,
{
    client: Arc<C>,
    manifest: ManifestFetcher<C>,
}

impl<C> PatchNoteResolver<C>
where
    C: MojangClient,
{
    pub fn new(client: Arc<C>) -> Self {
        Self {
            manifest: ManifestFetcher::new(client.clone()),
            client,
        }
    }

    #[cfg(test)]
    pub fn manifest(&self) -> &ManifestFetcher<C> {
        &self.manifest
    }

    /// Resolve a raw entry into a feed-ready entry.
    ///
    /// Unknown versions degrade to the sentinel record; a failed article fetch
    /// is an error.
    pub async fn resolve(&self, raw: &RawPatchNote) -> Result<NormalizedEntry, UpstreamError> {
        let manifest = self.manifest.ensure_manifest().await?;
        let record = manifest.find_or_sentinel(&raw.version);
        if record.is_sentinel() {
            tracing::warn!(
                "Version {} of patch note {} not in manifest",
                raw.version,
                raw.id
            );
        }

        let article = self.client.fetch_article(&raw.content_path).await?;

        Ok(normalize(
            raw,
            &record,
            article,
            self.client.launcher_base_url(),
        ))
    }
}

/// Merge the three upstream sources into one entry
pub fn normalize(
    raw: &RawPatchNote,
    record: &VersionRecord,
    article: ArticleContent,
    launcher_base_url: &str,
) -> NormalizedEntry {
    NormalizedEntry {
        title: article.title,
        time: record.time.clone(),
        version: record.id.clone(),
        version_type: raw.version_type,
        image: PatchNoteImage {
            title: article.image.title,
            url: join_url(launcher_base_url, &article.image.url),
        },
        body: article.body,
        id: raw.id.clone(),
    }
}

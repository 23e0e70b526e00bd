//! Mojang client port trait
//!
//! Defines the interface for the two upstream hosts: piston-meta for the
//! version manifest and launcher content for patch notes.

use async_trait::async_trait;

use crate::domain::entities::{ArticleContent, PatchNoteIndex, VersionManifest};
use crate::error::UpstreamError;

/// Mojang API client trait
#[async_trait]
pub trait MojangClient: Send + Sync {
    /// Fetch `mc/game/version_manifest_v2.json`
    async fn fetch_version_manifest(&self) -> Result<VersionManifest, UpstreamError>;

    /// Fetch `v2/javaPatchNotes.json`
    async fn fetch_patch_note_index(&self) -> Result<PatchNoteIndex, UpstreamError>;

    /// Fetch the article stored at `v2/{content_path}`
    async fn fetch_article(&self, content_path: &str) -> Result<ArticleContent, UpstreamError>;

    /// Base URL that relative image paths are resolved against
    fn launcher_base_url(&self) -> &str;
}

//! Patch note domain entities
//!
//! Raw launcher-content references, the article bodies they point at, and the
//! merged entry that ends up in the feed.

use serde::{Deserialize, Serialize};

/// Version channel a patch note belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionType {
    Release,
    Snapshot,
    #[serde(other)]
    Other,
}

impl std::fmt::Display for VersionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionType::Release => write!(f, "release"),
            VersionType::Snapshot => write!(f, "snapshot"),
            VersionType::Other => write!(f, "other"),
        }
    }
}

/// Image reference attached to a patch note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchNoteImage {
    pub title: String,
    /// Relative path on the launcher content host, or an absolute URL once
    /// normalized
    pub url: String,
}

/// The `javaPatchNotes.json` index document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchNoteIndex {
    pub version: i64,
    pub entries: Vec<RawPatchNote>,
}

/// Index entry pointing at an article by content path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPatchNote {
    pub title: String,
    pub version: String,
    #[serde(rename = "type")]
    pub version_type: VersionType,
    pub image: PatchNoteImage,
    pub content_path: String,
    pub id: String,
}

/// Full article fetched from the content path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleContent {
    pub title: String,
    pub image: PatchNoteImage,
    /// HTML body
    pub body: String,
    pub id: String,
}

/// Feed-ready patch note combining index, manifest and article data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedEntry {
    pub title: String,
    /// Manifest timestamp, empty when the version is unknown
    pub time: String,
    /// Resolved manifest id, empty when the version is unknown
    pub version: String,
    pub version_type: VersionType,
    pub image: PatchNoteImage,
    pub body: String,
    pub id: String,
}

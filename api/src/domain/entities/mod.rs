//! Domain entities
//!
//! Upstream payloads and the normalized patch note shape.

pub mod patch_note;
pub mod version_manifest;

#[allow(unused_imports)]
pub use patch_note::{
    ArticleContent, NormalizedEntry, PatchNoteImage, PatchNoteIndex, RawPatchNote, VersionType,
};
#[allow(unused_imports)]
pub use version_manifest::{LatestVersions, VersionManifest, VersionRecord};

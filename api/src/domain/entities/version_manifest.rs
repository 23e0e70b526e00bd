//! Version manifest domain entity
//!
//! The piston-meta catalog of every published game version.

use serde::{Deserialize, Serialize};

/// Snapshot of all known game versions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionManifest {
    pub latest: LatestVersions,
    pub versions: Vec<VersionRecord>,
}

/// Pointers to the newest release and snapshot ids
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestVersions {
    pub release: String,
    pub snapshot: String,
}

/// A single manifest entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub version_type: String,
    pub url: String,
    pub time: String,
    pub release_time: String,
    pub sha1: String,
    pub compliance_level: i32,
}

impl VersionRecord {
    /// Placeholder used when a patch note references a version the manifest
    /// does not know about.
    pub fn sentinel() -> Self {
        Self {
            id: String::new(),
            version_type: String::new(),
            url: String::new(),
            time: String::new(),
            release_time: String::new(),
            sha1: String::new(),
            compliance_level: -1,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.id.is_empty() && self.compliance_level == -1
    }
}

impl VersionManifest {
    /// First record whose id equals `id` exactly, in manifest order
    pub fn find(&self, id: &str) -> Option<&VersionRecord> {
        self.versions.iter().find(|v| v.id == id)
    }

    /// Like [`find`](Self::find) but falls back to [`VersionRecord::sentinel`]
    pub fn find_or_sentinel(&self, id: &str) -> VersionRecord {
        self.find(id).cloned().unwrap_or_else(VersionRecord::sentinel)
    }
}

//! Test fixtures
//!
//! Factory functions for creating upstream payloads with sensible defaults.

use crate::domain::entities::{
    ArticleContent, LatestVersions, PatchNoteImage, PatchNoteIndex, RawPatchNote, VersionManifest,
    VersionRecord, VersionType,
};

use super::mocks::MockMojangClient;

/// Create a manifest record for a version id
pub fn test_record(id: &str, time: &str) -> VersionRecord {
    VersionRecord {
        id: id.to_string(),
        version_type: "release".to_string(),
        url: format!("https://piston-meta.mojang.com/v1/packages/{}.json", id),
        time: time.to_string(),
        release_time: time.to_string(),
        sha1: format!("sha-{}", id),
        compliance_level: 1,
    }
}

pub fn test_manifest(versions: Vec<VersionRecord>) -> VersionManifest {
    let release = versions
        .first()
        .map(|v| v.id.clone())
        .unwrap_or_default();
    VersionManifest {
        latest: LatestVersions {
            release: release.clone(),
            snapshot: release,
        },
        versions,
    }
}

/// Create a raw index entry
pub fn test_raw_note(id: &str, version: &str, content_path: &str) -> RawPatchNote {
    RawPatchNote {
        title: format!("Index title {}", id),
        version: version.to_string(),
        version_type: VersionType::Release,
        image: PatchNoteImage {
            title: "Index image".to_string(),
            url: format!("/img/{}.png", id),
        },
        content_path: content_path.to_string(),
        id: id.to_string(),
    }
}

pub fn test_index(entries: Vec<RawPatchNote>) -> PatchNoteIndex {
    PatchNoteIndex {
        version: 1,
        entries,
    }
}

/// Create an article body
pub fn test_article(id: &str, title: &str, image_url: &str, body: &str) -> ArticleContent {
    ArticleContent {
        title: title.to_string(),
        image: PatchNoteImage {
            title: format!("Image for {}", title),
            url: image_url.to_string(),
        },
        body: body.to_string(),
        id: id.to_string(),
    }
}

/// Mock client serving `count` patch notes `n0..n{count}`, each with a
/// matching manifest version `1.{i}` dated `2023-01-{i+1}`
pub fn mock_with_notes(count: usize) -> MockMojangClient {
    let mut records = Vec::new();
    let mut entries = Vec::new();
    let mut client = MockMojangClient::new();

    for i in 0..count {
        let id = format!("n{}", i);
        let version = format!("1.{}", i);
        let path = format!("{}.json", id);
        records.push(test_record(
            &version,
            &format!("2023-01-{:02}T00:00:00Z", (i % 28) + 1),
        ));
        entries.push(test_raw_note(&id, &version, &path));
        client = client.with_article(
            &path,
            test_article(
                &id,
                &format!("Title {}", i),
                &format!("/img/{}.png", id),
                &format!("<p>body {}</p>", i),
            ),
        );
    }

    client
        .with_manifest(test_manifest(records))
        .with_index(test_index(entries))
}

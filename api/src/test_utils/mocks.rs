//! Mock implementations of port traits
//!
//! In-memory Mojang client that serves canned payloads and records how often
//! each endpoint was hit.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{ArticleContent, PatchNoteIndex, VersionManifest};
use crate::domain::ports::MojangClient;
use crate::error::UpstreamError;

use super::fixtures::{test_index, test_manifest};

pub const MOCK_LAUNCHER_BASE_URL: &str = "https://launchercontent.mojang.com";

#[derive(Default)]
pub struct CallCounts {
    pub manifest: usize,
    pub index: usize,
    pub articles: Vec<String>,
}

pub struct MockMojangClient {
    manifest: Arc<RwLock<VersionManifest>>,
    index: Arc<RwLock<PatchNoteIndex>>,
    articles: Arc<RwLock<HashMap<String, ArticleContent>>>,
    /// Content paths that answer with an upstream error
    failing_articles: Arc<RwLock<HashSet<String>>>,
    fail_manifest: Arc<RwLock<bool>>,
    fail_index: Arc<RwLock<bool>>,
    pub calls: Arc<RwLock<CallCounts>>,
}

impl Default for MockMojangClient {
    fn default() -> Self {
        Self {
            manifest: Arc::new(RwLock::new(test_manifest(vec![]))),
            index: Arc::new(RwLock::new(test_index(vec![]))),
            articles: Arc::new(RwLock::new(HashMap::new())),
            failing_articles: Arc::new(RwLock::new(HashSet::new())),
            fail_manifest: Arc::new(RwLock::new(false)),
            fail_index: Arc::new(RwLock::new(false)),
            calls: Arc::new(RwLock::new(CallCounts::default())),
        }
    }
}

impl MockMojangClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(self, manifest: VersionManifest) -> Self {
        *self.manifest.write().unwrap() = manifest;
        self
    }

    pub fn with_index(self, index: PatchNoteIndex) -> Self {
        *self.index.write().unwrap() = index;
        self
    }

    /// Serve `article` at `content_path`
    pub fn with_article(self, content_path: &str, article: ArticleContent) -> Self {
        self.articles
            .write()
            .unwrap()
            .insert(content_path.to_string(), article);
        self
    }

    pub fn with_failing_article(self, content_path: &str) -> Self {
        self.failing_articles
            .write()
            .unwrap()
            .insert(content_path.to_string());
        self
    }

    pub fn failing_manifest(self) -> Self {
        *self.fail_manifest.write().unwrap() = true;
        self
    }

    pub fn failing_index(self) -> Self {
        *self.fail_index.write().unwrap() = true;
        self
    }

    pub fn manifest_calls(&self) -> usize {
        self.calls.read().unwrap().manifest
    }

    pub fn index_calls(&self) -> usize {
        self.calls.read().unwrap().index
    }

    pub fn article_calls(&self) -> Vec<String> {
        self.calls.read().unwrap().articles.clone()
    }
}

fn mock_failure() -> UpstreamError {
    UpstreamError::Api {
        status: 500,
        message: "Mock failure".to_string(),
    }
}

#[async_trait]
impl MojangClient for MockMojangClient {
    async fn fetch_version_manifest(&self) -> Result<VersionManifest, UpstreamError> {
        self.calls.write().unwrap().manifest += 1;
        if *self.fail_manifest.read().unwrap() {
            return Err(mock_failure());
        }
        Ok(self.manifest.read().unwrap().clone())
    }

    async fn fetch_patch_note_index(&self) -> Result<PatchNoteIndex, UpstreamError> {
        self.calls.write().unwrap().index += 1;
        if *self.fail_index.read().unwrap() {
            return Err(mock_failure());
        }
        Ok(self.index.read().unwrap().clone())
    }

    async fn fetch_article(&self, content_path: &str) -> Result<ArticleContent, UpstreamError> {
        self.calls
            .write()
            .unwrap()
            .articles
            .push(content_path.to_string());

        if self.failing_articles.read().unwrap().contains(content_path) {
            return Err(mock_failure());
        }

        self.articles
            .read()
            .unwrap()
            .get(content_path)
            .cloned()
            .ok_or_else(|| UpstreamError::Api {
                status: 404,
                message: format!("No article at {}", content_path),
            })
    }

    fn launcher_base_url(&self) -> &str {
        MOCK_LAUNCHER_BASE_URL
    }
}

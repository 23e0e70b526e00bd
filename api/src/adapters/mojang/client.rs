//! Mojang API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::entities::{ArticleContent, PatchNoteIndex, VersionManifest};
use crate::domain::join_url;
use crate::domain::ports::MojangClient;
use crate::error::UpstreamError;

const VERSION_MANIFEST_PATH: &str = "/mc/game/version_manifest_v2.json";
const PATCH_NOTE_INDEX_PATH: &str = "/v2/javaPatchNotes.json";
const CONTENT_PREFIX: &str = "/v2";

/// Implementation of the Mojang API client
pub struct MojangClientImpl {
    http: Client,
    meta_base_url: String,
    launcher_base_url: String,
}

impl MojangClientImpl {
    pub fn new(
        meta_base_url: String,
        launcher_base_url: String,
        timeout: Option<Duration>,
    ) -> Result<Self, UpstreamError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            meta_base_url: meta_base_url.trim_end_matches('/').to_string(),
            launcher_base_url: launcher_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn meta_url(&self, path: &str) -> String {
        join_url(&self.meta_base_url, path)
    }

    fn content_url(&self, path: &str) -> String {
        join_url(&join_url(&self.launcher_base_url, CONTENT_PREFIX), path)
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, UpstreamError> {
        tracing::debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, UpstreamError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| UpstreamError::Deserialization(e.to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(UpstreamError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl MojangClient for MojangClientImpl {
    async fn fetch_version_manifest(&self) -> Result<VersionManifest, UpstreamError> {
        self.get_json(&self.meta_url(VERSION_MANIFEST_PATH)).await
    }

    async fn fetch_patch_note_index(&self) -> Result<PatchNoteIndex, UpstreamError> {
        self.get_json(&join_url(&self.launcher_base_url, PATCH_NOTE_INDEX_PATH))
            .await
    }

    async fn fetch_article(&self, content_path: &str) -> Result<ArticleContent, UpstreamError> {
        self.get_json(&self.content_url(content_path)).await
    }

    fn launcher_base_url(&self) -> &str {
        &self.launcher_base_url
    }
}

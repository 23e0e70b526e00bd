//! Version manifest fetcher
//!
//! Lazily fetches the version manifest at most once per request. A fetcher is
//! created for every incoming request, so nothing is cached across requests.

use std::sync::Arc;

use tokio::sync::OnceCell;

use crate::domain::entities::VersionManifest;
use crate::domain::ports::MojangClient;
use crate::error::UpstreamError;

pub struct ManifestFetcher<C>
where
    C: MojangClient,
{
    client: Arc<C>,
    manifest: OnceCell<VersionManifest>,
}

impl<C> ManifestFetcher<C>
where
    C: MojangClient,
{
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            manifest: OnceCell::new(),
        }
    }

    /// Return the manifest, fetching it on first use.
    ///
    /// A failed fetch leaves the cell empty and the error is returned to the
    /// caller.
    pub async fn ensure_manifest(&self) -> Result<&VersionManifest, UpstreamError> {
        self.manifest
            .get_or_try_init(|| async {
                let manifest = self.client.fetch_version_manifest().await?;
                tracing::debug!(
                    "Fetched version manifest: {} versions, latest release {}",
                    manifest.versions.len(),
                    manifest.latest.release
                );
                Ok::<_, UpstreamError>(manifest)
            })
            .await
    }

    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        self.manifest.initialized()
    }
}

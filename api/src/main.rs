//! Minecraft Patch Notes feed API
//!
//! Aggregates Java Edition patch notes from Mojang's launcher content and
//! version manifest APIs and republishes them as RSS 2.0 or JSON Feed.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::MojangClientImpl;
use app::FeedService;
use config::Config;
use domain::ports::MojangClient;

/// Application state shared across all handlers
pub struct AppState<C>
where
    C: MojangClient,
{
    pub feed_service: Arc<FeedService<C>>,
}

impl<C> Clone for AppState<C>
where
    C: MojangClient,
{
    fn clone(&self) -> Self {
        Self {
            feed_service: self.feed_service.clone(),
        }
    }
}

/// Every path is served by the feed handler.
pub fn build_router<C>(state: AppState<C>) -> Router
where
    C: MojangClient + 'static,
{
    Router::new()
        .fallback(handlers::get_feed::<C>)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,patchnotes_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting patch notes API...");

    // Load configuration
    let config = Config::from_env();
    tracing::info!(
        "Upstreams: meta {}, launcher content {}",
        config.meta_base_url,
        config.launcher_base_url
    );

    let client = Arc::new(
        MojangClientImpl::new(
            config.meta_base_url.clone(),
            config.launcher_base_url.clone(),
            config.http_timeout,
        )
        .context("Failed to create HTTP client")?,
    );

    let state = AppState {
        feed_service: Arc::new(FeedService::new(client)),
    };
    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

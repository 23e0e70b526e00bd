//! Feed handler
//!
//! Serves the patch notes feed on every path: `/json` gets JSON Feed, anything
//! else gets RSS 2.0.

use axum::{
    extract::State,
    http::{header, HeaderMap, Uri},
    response::{IntoResponse, Response},
};

use crate::domain::ports::MojangClient;
use crate::error::AppError;
use crate::feed::{render_json, render_rss};
use crate::AppState;

pub const JSON_FEED_PATH: &str = "/json";
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const RSS_CONTENT_TYPE: &str = "application/rss+xml";

/// Feed id for the host serving this request, e.g. `https://example.com/`
fn feed_id(uri: &Uri, headers: &HeaderMap) -> String {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .or_else(|| uri.authority().map(|a| a.to_string()))
        .unwrap_or_else(|| "localhost".to_string());

    format!("https://{}/", host)
}

/// ANY /*
///
/// - `/json` → JSON Feed (application/json)
/// - Otherwise → RSS 2.0 (application/rss+xml)
pub async fn get_feed<C>(
    State(state): State<AppState<C>>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Response, AppError>
where
    C: MojangClient + 'static,
{
    let feed = state.feed_service.build_feed(&feed_id(&uri, &headers)).await?;

    if uri.path() == JSON_FEED_PATH {
        let body = render_json(&feed).map_err(|e| AppError::Render(e.to_string()))?;
        Ok(([(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], body).into_response())
    } else {
        let body = render_rss(&feed).map_err(|e| AppError::Render(e.to_string()))?;
        Ok(([(header::CONTENT_TYPE, RSS_CONTENT_TYPE)], body).into_response())
    }
}

use std::env;
use std::time::Duration;

pub const DEFAULT_META_BASE_URL: &str = "https://piston-meta.mojang.com";
pub const DEFAULT_LAUNCHER_BASE_URL: &str = "https://launchercontent.mojang.com";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the version manifest host (piston-meta)
    pub meta_base_url: String,
    /// Base URL of the launcher content host (patch notes and images)
    pub launcher_base_url: String,
    pub port: u16,
    /// Optional timeout applied to every upstream request
    pub http_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            meta_base_url: DEFAULT_META_BASE_URL.to_string(),
            launcher_base_url: DEFAULT_LAUNCHER_BASE_URL.to_string(),
            port: 8080,
            http_timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            meta_base_url: base_url(env::var("META_BASE_URL").ok(), DEFAULT_META_BASE_URL),
            launcher_base_url: base_url(
                env::var("LAUNCHER_BASE_URL").ok(),
                DEFAULT_LAUNCHER_BASE_URL,
            ),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            http_timeout: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs),
        }
    }
}

fn base_url(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
        .trim()
        .trim_end_matches('/')
        .to_string()
}

//! Configuration types for feed-resolver

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Podcast directory API configuration (auth secrets and endpoints)
///
/// Groups settings for the primary directory search API and the secondary
/// (iTunes-style) fallback. Used as a nested sub-config within
/// [`ResolverConfig`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// API key for the primary directory (required for any search)
    #[serde(default)]
    pub api_key: Option<String>,

    /// API secret for the primary directory (required for any search)
    #[serde(default)]
    pub api_secret: Option<String>,

    /// Base URL of the primary directory API
    /// (default: "https://api.podcastindex.org/api/1.0")
    #[serde(default = "default_primary_base_url")]
    pub primary_base_url: String,

    /// Base URL of the secondary (fallback) directory
    /// (default: "https://itunes.apple.com")
    #[serde(default = "default_fallback_base_url")]
    pub fallback_base_url: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_secret: None,
            primary_base_url: default_primary_base_url(),
            fallback_base_url: default_fallback_base_url(),
        }
    }
}

/// Episode verification probe configuration
///
/// Used as a nested sub-config within [`ResolverConfig`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Time-to-live for cached probe results (default: 10 minutes)
    ///
    /// A probe result for a given (show, feed) pair is remembered for this
    /// long; within the TTL, repeated verifications make no network calls.
    #[serde(default = "default_probe_cache_ttl")]
    pub cache_ttl: Duration,

    /// Base URL of the Spotify Web API (default: "https://api.spotify.com")
    #[serde(default = "default_spotify_base_url")]
    pub spotify_base_url: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            cache_ttl: default_probe_cache_ttl(),
            spotify_base_url: default_spotify_base_url(),
        }
    }
}

/// HTTP client behavior shared by all components
///
/// Used as a nested sub-config within [`ResolverConfig`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent on every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Main configuration for [`FeedResolver`](crate::FeedResolver)
///
/// Fields are organized into logical sub-configs:
/// - [`directory`](DirectoryConfig) — directory API secrets and endpoints
/// - [`probe`](ProbeConfig) — verification cache TTL and Spotify endpoint
/// - [`http`](HttpConfig) — timeout and user agent
///
/// All sub-config fields are flattened for serialization, so the JSON/TOML
/// format stays un-nested.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Directory API settings
    #[serde(flatten)]
    pub directory: DirectoryConfig,

    /// Episode probe settings
    #[serde(flatten)]
    pub probe: ProbeConfig,

    /// HTTP client settings
    #[serde(flatten)]
    pub http: HttpConfig,
}

fn default_primary_base_url() -> String {
    "https://api.podcastindex.org/api/1.0".to_string()
}

fn default_fallback_base_url() -> String {
    "https://itunes.apple.com".to_string()
}

fn default_spotify_base_url() -> String {
    "https://api.spotify.com".to_string()
}

fn default_probe_cache_ttl() -> Duration {
    Duration::from_secs(10 * 60)
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("feed-resolver/{}", env!("CARGO_PKG_VERSION"))
}

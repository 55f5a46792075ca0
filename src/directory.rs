//! Directory search client — multi-source candidate feed discovery
//!
//! Queries the primary podcast directory (exact-title search, then fuzzy term
//! search) and falls back to a secondary public directory (iTunes-style
//! lookup) when the primary yields nothing usable. "No match found" is a
//! normal outcome and returns an empty list; a status-level failure on the
//! primary index is fatal to the whole resolution and propagates.

use crate::auth::DirectoryAuthSigner;
use crate::config::{DirectoryConfig, HttpConfig};
use crate::error::{Error, Result};
use crate::types::{CandidateFeed, ShowMetadata};
use serde::Deserialize;
use tracing::{debug, warn};

/// Response shape of the primary directory search endpoints
#[derive(Debug, Default, Deserialize)]
struct DirectorySearchResponse {
    #[serde(default)]
    feeds: Vec<DirectoryFeed>,
}

/// One feed entry in a primary directory response
#[derive(Debug, Default, Deserialize)]
struct DirectoryFeed {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    author: Option<String>,
}

/// Response shape of the secondary (iTunes-style) directory
#[derive(Debug, Default, Deserialize)]
struct ItunesSearchResponse {
    #[serde(default, rename = "resultCount")]
    result_count: u64,
    #[serde(default)]
    results: Vec<ItunesResult>,
}

/// One result entry in a secondary directory response
#[derive(Debug, Default, Deserialize)]
struct ItunesResult {
    #[serde(default, rename = "feedUrl")]
    feed_url: Option<String>,
    #[serde(default, rename = "trackName")]
    track_name: Option<String>,
    #[serde(default, rename = "artistName")]
    artist_name: Option<String>,
}

/// Searches podcast directories for candidate feeds matching a show
///
/// The client is responsible for:
/// - Signing primary directory requests with fresh time-based auth headers
/// - Cascading exact-title → fuzzy-term → secondary fallback searches
/// - Dropping candidates whose feed URL is empty or not HTTP(S)
#[derive(Debug)]
pub struct DirectorySearchClient {
    /// HTTP client for directory requests
    http_client: reqwest::Client,

    /// Signer for primary directory auth headers
    signer: DirectoryAuthSigner,

    /// Directory endpoints
    config: DirectoryConfig,
}

impl DirectorySearchClient {
    /// Create a new directory search client
    ///
    /// # Errors
    /// Returns a configuration error if the directory API key or secret is
    /// absent, or if the HTTP client cannot be created.
    pub fn new(config: &DirectoryConfig, http: &HttpConfig) -> Result<Self> {
        let signer = DirectoryAuthSigner::new(config)?;

        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(http.timeout_secs))
            .user_agent(&http.user_agent)
            .build()
            .map_err(|e| Error::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            signer,
            config: config.clone(),
        })
    }

    /// Search for candidate feeds matching a show's metadata
    ///
    /// Delegates to [`search_by_title`](Self::search_by_title) with the show
    /// name; the richer metadata fields are consumed later by the scorer.
    pub async fn search(&self, metadata: &ShowMetadata) -> Result<Vec<CandidateFeed>> {
        self.search_by_title(&metadata.name).await
    }

    /// Search for candidate feeds matching a title query
    ///
    /// Cascade:
    /// 1. Exact-title search against the primary directory
    /// 2. Fuzzy term search against the primary directory
    /// 3. Secondary directory lookup, limited to one result
    ///
    /// Returns an empty list when nothing matches anywhere — that is a normal
    /// outcome, distinct from "search API unavailable".
    ///
    /// # Errors
    /// Returns [`Error::DirectorySearch`] when a primary directory request
    /// comes back with a non-success HTTP status; a broken primary index
    /// invalidates the whole resolution strategy.
    pub async fn search_by_title(&self, query: &str) -> Result<Vec<CandidateFeed>> {
        let candidates = self.primary_search("search/bytitle", query).await?;
        if !candidates.is_empty() {
            return Ok(candidates);
        }

        debug!("Exact-title search found nothing for '{}', trying term search", query);
        let candidates = self.primary_search("search/byterm", query).await?;
        if !candidates.is_empty() {
            return Ok(candidates);
        }

        debug!("Primary directory found nothing for '{}', trying fallback", query);
        Ok(self.fallback_search(query).await)
    }

    /// Issue one signed request against a primary directory endpoint
    async fn primary_search(&self, endpoint: &str, query: &str) -> Result<Vec<CandidateFeed>> {
        let url = format!("{}/{}", self.config.primary_base_url, endpoint);
        let headers = self.signer.build_auth_headers();

        let request = self.http_client.get(&url).query(&[("q", query)]);
        let response = headers.apply(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                "Primary directory search {} returned HTTP {}",
                endpoint,
                status.as_u16()
            );
            return Err(Error::DirectorySearch {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;

        // A malformed body (or one missing the feeds array) counts as zero
        // usable feeds, not as an error
        let parsed: DirectorySearchResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Malformed primary directory response from {}: {}", endpoint, e);
                DirectorySearchResponse::default()
            }
        };

        let candidates: Vec<CandidateFeed> = parsed
            .feeds
            .into_iter()
            .filter_map(|feed| {
                if !is_usable_feed_url(&feed.url) {
                    debug!("Dropping candidate '{}' with unusable URL '{}'", feed.title, feed.url);
                    return None;
                }
                Some(CandidateFeed {
                    title: feed.title,
                    url: feed.url,
                    description: feed.description,
                    author: feed.author,
                })
            })
            .collect();

        debug!(
            "Primary directory {} returned {} usable candidates for '{}'",
            endpoint,
            candidates.len(),
            query
        );
        Ok(candidates)
    }

    /// Query the secondary directory, degrading any failure to an empty list
    async fn fallback_search(&self, query: &str) -> Vec<CandidateFeed> {
        let url = format!("{}/search", self.config.fallback_base_url);

        let response = match self
            .http_client
            .get(&url)
            .query(&[("term", query), ("media", "podcast"), ("limit", "1")])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Fallback directory request failed: {}", e);
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            warn!(
                "Fallback directory returned HTTP {}",
                response.status().as_u16()
            );
            return Vec::new();
        }

        let parsed: ItunesSearchResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Malformed fallback directory response: {}", e);
                return Vec::new();
            }
        };

        debug!(
            "Fallback directory returned {} results for '{}'",
            parsed.result_count, query
        );

        parsed
            .results
            .into_iter()
            .filter_map(|result| {
                let feed_url = result.feed_url.filter(|u| is_usable_feed_url(u))?;
                Some(CandidateFeed {
                    title: result.track_name.unwrap_or_default(),
                    url: feed_url,
                    description: None,
                    author: result.artist_name,
                })
            })
            .collect()
    }
}

/// A candidate URL is usable when it parses and uses an HTTP(S) scheme
fn is_usable_feed_url(raw: &str) -> bool {
    match url::Url::parse(raw) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

//! Episode verification probe
//!
//! Independently verifies a show+feed pairing by comparing the latest episode
//! as reported by Spotify against the first `<item>` of the candidate RSS
//! feed. A probe returns a score in `[0, 1]`, where [`NEUTRAL_SCORE`] (0.5)
//! means "insufficient information": any fetch or parse failure along the way
//! degrades to neutral rather than erroring, since missing feeds and unlisted
//! episodes are expected-frequency conditions.
//!
//! Results are memoized in a TTL-bounded cache keyed by `(show, feed)` so a
//! batch resolving many shows does not re-fetch the same pairings. Only
//! computed scores are cached — transient failures are retried on the next
//! call, not remembered.

use crate::config::{HttpConfig, ProbeConfig};
use crate::error::{Error, Result};
use crate::similarity::token_set_similarity;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Probe score meaning "insufficient information to compare"
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Weight of episode title similarity in the combined probe score
const EPISODE_TITLE_WEIGHT: f64 = 0.8;

/// Weight of release-date closeness in the combined probe score
const EPISODE_DATE_WEIGHT: f64 = 0.2;

/// Release dates within this many days count as fully matching
///
/// The feed's human-readable timestamp and Spotify's release timestamp are not
/// guaranteed to agree to the minute, so a same-day skew is not penalized.
const DATE_GRACE_DAYS: f64 = 1.0;

/// Days over which the date term decays linearly to zero past the grace window
const DATE_DECAY_DAYS: f64 = 7.0;

/// A cached probe result
#[derive(Clone, Debug)]
struct ProbeCacheEntry {
    score: f64,
    expires_at: Instant,
}

/// Observability snapshot of the probe cache
#[derive(Clone, Debug)]
pub struct ProbeCacheStats {
    /// Number of live (unexpired) entries
    pub size: usize,

    /// Configured time-to-live for entries
    pub ttl: Duration,
}

/// Latest episode of a show, as reported by Spotify
#[derive(Debug, Default, Deserialize)]
struct SpotifyEpisode {
    #[serde(default)]
    name: String,
    #[serde(default)]
    release_date: Option<String>,
}

/// Response shape of the Spotify episode listing endpoint
#[derive(Debug, Default, Deserialize)]
struct SpotifyEpisodesResponse {
    #[serde(default)]
    items: Vec<SpotifyEpisode>,
}

/// First item of a fetched feed, reduced to the fields the probe compares
#[derive(Clone, Debug)]
struct FeedItem {
    title: String,
    pub_date: Option<DateTime<Utc>>,
}

/// Verifies candidate feeds against Spotify's latest-episode data
///
/// The probe owns the only state in the crate with a lifetime longer than one
/// resolution call: a TTL-bounded result cache. The cache is reached only
/// through this type's public functions and is guarded by a mutex, so probes
/// of independent candidates may run concurrently.
#[derive(Debug)]
pub struct EpisodeProbe {
    /// HTTP client for Spotify and feed requests
    http_client: reqwest::Client,

    /// Spotify Web API base URL
    spotify_base_url: String,

    /// Time-to-live for cached results
    cache_ttl: Duration,

    /// Probe result cache, keyed by `"{show_id}|{feed_url}"`
    cache: Mutex<HashMap<String, ProbeCacheEntry>>,
}

impl EpisodeProbe {
    /// Create a new episode probe
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &ProbeConfig, http: &HttpConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(http.timeout_secs))
            .user_agent(&http.user_agent)
            .build()
            .map_err(|e| Error::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            spotify_base_url: config.spotify_base_url.clone(),
            cache_ttl: config.cache_ttl,
            cache: Mutex::new(HashMap::new()),
        })
    }

    /// Verify that a feed's latest item matches the show's latest Spotify episode
    ///
    /// Returns a score in `[0, 1]`; [`NEUTRAL_SCORE`] when there is not enough
    /// information to compare (no access token, upstream failure, or a feed
    /// that cannot be parsed). Computed scores are cached for the configured
    /// TTL; neutral outcomes are never cached.
    pub async fn verify_latest_episode_match(
        &self,
        show_id: &str,
        feed_url: &str,
        access_token: Option<&str>,
    ) -> f64 {
        let Some(token) = access_token else {
            // No Spotify side to compare against; the feed fetch still acts as
            // a cheap liveness signal worth logging
            let reachable = self.fetch_first_feed_item(feed_url).await.is_some();
            debug!(
                "No access token for show {}; feed {} reachable={}",
                show_id, feed_url, reachable
            );
            return NEUTRAL_SCORE;
        };

        let key = format!("{}|{}", show_id, feed_url);
        if let Some(score) = self.cache_get(&key) {
            debug!("Probe cache hit for {}", key);
            return score;
        }

        let Some(episode) = self.fetch_latest_spotify_episode(show_id, token).await else {
            return NEUTRAL_SCORE;
        };

        let Some(item) = self.fetch_first_feed_item(feed_url).await else {
            return NEUTRAL_SCORE;
        };

        let score = episode_match_score(&episode, &item);
        debug!(
            "Probe for {} scored {:.3} ('{}' vs '{}')",
            key, score, episode.name, item.title
        );

        self.cache_put(key, score);
        score
    }

    /// Remove only entries past their TTL
    pub fn clear_expired(&self) {
        let now = Instant::now();
        let mut cache = lock_or_recover(&self.cache);
        cache.retain(|_, entry| entry.expires_at > now);
    }

    /// Unconditionally empty the cache (test isolation)
    pub fn clear_all(&self) {
        lock_or_recover(&self.cache).clear();
    }

    /// Snapshot of cache size (live entries only) and configured TTL
    pub fn cache_stats(&self) -> ProbeCacheStats {
        let now = Instant::now();
        let cache = lock_or_recover(&self.cache);
        ProbeCacheStats {
            size: cache.values().filter(|e| e.expires_at > now).count(),
            ttl: self.cache_ttl,
        }
    }

    /// Look up a live cache entry, evicting it lazily when expired
    fn cache_get(&self, key: &str) -> Option<f64> {
        let mut cache = lock_or_recover(&self.cache);
        match cache.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Some(entry.score),
            Some(_) => {
                cache.remove(key);
                None
            }
            None => None,
        }
    }

    fn cache_put(&self, key: String, score: f64) {
        let entry = ProbeCacheEntry {
            score,
            expires_at: Instant::now() + self.cache_ttl,
        };
        lock_or_recover(&self.cache).insert(key, entry);
    }

    /// Fetch the show's most recent episode from Spotify (limit 1)
    ///
    /// Any failure — network, non-success status, malformed body, empty
    /// listing — returns `None` so the caller degrades to neutral.
    async fn fetch_latest_spotify_episode(
        &self,
        show_id: &str,
        access_token: &str,
    ) -> Option<SpotifyEpisode> {
        let url = format!("{}/v1/shows/{}/episodes", self.spotify_base_url, show_id);

        let response = match self
            .http_client
            .get(&url)
            .query(&[("limit", "1")])
            .bearer_auth(access_token)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Spotify episode lookup failed for show {}: {}", show_id, e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(
                "Spotify episode lookup for show {} returned HTTP {}",
                show_id,
                response.status().as_u16()
            );
            return None;
        }

        let parsed: SpotifyEpisodesResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("Malformed Spotify episode response for show {}: {}", show_id, e);
                return None;
            }
        };

        parsed.items.into_iter().next()
    }

    /// Fetch a feed and extract its first item
    ///
    /// 2xx statuses are usable, which covers servers answering 206 Partial
    /// Content to plain GETs. Parse failures and item-less feeds return `None`.
    async fn fetch_first_feed_item(&self, feed_url: &str) -> Option<FeedItem> {
        let response = match self.http_client.get(feed_url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Feed fetch failed for {}: {}", feed_url, e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(
                "Feed fetch for {} returned HTTP {}",
                feed_url,
                response.status().as_u16()
            );
            return None;
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read feed body from {}: {}", feed_url, e);
                return None;
            }
        };

        // Try RSS first, fall back to Atom
        match first_item_from_rss(&body) {
            Some(item) => Some(item),
            None => first_item_from_atom(&body),
        }
    }
}

/// Lock a mutex, recovering the inner data if a previous holder panicked
fn lock_or_recover<'a, T>(mutex: &'a Mutex<T>) -> std::sync::MutexGuard<'a, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Extract the first `<item>` of an RSS channel, tolerating missing fields
fn first_item_from_rss(body: &str) -> Option<FeedItem> {
    let channel = body.parse::<rss::Channel>().ok()?;
    let item = channel.items().first()?;

    let pub_date = item.pub_date().and_then(|date_str| {
        chrono::DateTime::parse_from_rfc2822(date_str)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    });

    Some(FeedItem {
        title: item.title().unwrap_or("").to_string(),
        pub_date,
    })
}

/// Extract the first entry of an Atom feed
fn first_item_from_atom(body: &str) -> Option<FeedItem> {
    let feed = atom_syndication::Feed::read_from(body.as_bytes()).ok()?;
    let entry = feed.entries().first()?;

    let pub_date = entry
        .published()
        .or_else(|| Some(entry.updated()))
        .map(|dt| dt.with_timezone(&Utc));

    Some(FeedItem {
        title: entry.title().as_str().to_string(),
        pub_date,
    })
}

/// Combine title similarity and date closeness into the probe score
fn episode_match_score(episode: &SpotifyEpisode, item: &FeedItem) -> f64 {
    let title_score = token_set_similarity(&episode.name, &item.title);

    let episode_date = episode.release_date.as_deref().and_then(parse_release_date);
    let date_score = match (episode_date, item.pub_date) {
        (Some(a), Some(b)) => date_closeness(a, b),
        // An unparseable or absent date on either side contributes nothing
        _ => 0.0,
    };

    EPISODE_TITLE_WEIGHT * title_score + EPISODE_DATE_WEIGHT * date_score
}

/// Full score within the grace window, linear decay to zero beyond it
fn date_closeness(a: DateTime<Utc>, b: DateTime<Utc>) -> f64 {
    let gap_days = (a - b).num_seconds().abs() as f64 / 86_400.0;
    if gap_days <= DATE_GRACE_DAYS {
        1.0
    } else {
        (1.0 - (gap_days - DATE_GRACE_DAYS) / DATE_DECAY_DAYS).max(0.0)
    }
}

/// Parse Spotify's release date: RFC 3339, or the bare `YYYY-MM-DD` form used
/// with day precision (interpreted as midnight UTC)
fn parse_release_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SHOW_ID: &str = "4rOoJ6Egrf8K2IrywzwOMk";
    const TOKEN: &str = "token123";

    fn test_probe(spotify_base: &str, ttl: Duration) -> EpisodeProbe {
        let config = ProbeConfig {
            cache_ttl: ttl,
            spotify_base_url: spotify_base.to_string(),
        };
        EpisodeProbe::new(&config, &HttpConfig::default()).unwrap()
    }

    fn spotify_episode_json(name: &str, release_date: &str) -> serde_json::Value {
        serde_json::json!({
            "items": [{
                "name": name,
                "release_date": release_date,
                "release_date_precision": "day"
            }]
        })
    }

    fn rss_feed_body(item_title: &str, pub_date: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
    <channel>
        <title>Some Podcast</title>
        <link>https://example.com</link>
        <description>A podcast</description>
        <item>
            <title>{}</title>
            <pubDate>{}</pubDate>
            <enclosure url="https://example.com/ep.mp3" length="1234" type="audio/mpeg"/>
        </item>
    </channel>
</rss>"#,
            item_title, pub_date
        )
    }

    async fn mount_spotify(server: &MockServer, body: serde_json::Value, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path(format!("/v1/shows/{}/episodes", SHOW_ID)))
            .and(query_param("limit", "1"))
            .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    async fn mount_feed(server: &MockServer, body: String, expected_calls: u64) {
        Mock::given(method("GET"))
            .and(path("/feed.xml"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Content-Type", "application/rss+xml")
                    .set_body_string(body),
            )
            .expect(expected_calls)
            .mount(server)
            .await;
    }

    // -----------------------------------------------------------------------
    // Neutral outcomes
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn returns_neutral_without_access_token() {
        let server = MockServer::start().await;
        mount_feed(&server, rss_feed_body("Episode 1", "Mon, 15 Jan 2024 09:30:00 +0000"), 1).await;

        let probe = test_probe(&server.uri(), Duration::from_secs(600));
        let feed_url = format!("{}/feed.xml", server.uri());

        let score = probe.verify_latest_episode_match(SHOW_ID, &feed_url, None).await;

        assert_eq!(score, NEUTRAL_SCORE);
        assert_eq!(probe.cache_stats().size, 0, "tokenless probes are not cached");
    }

    #[tokio::test]
    async fn returns_neutral_when_spotify_lookup_fails() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/v1/shows/{}/episodes", SHOW_ID)))
            .respond_with(ResponseTemplate::new(404))
            // Transient failures are retried, not remembered
            .expect(2)
            .mount(&server)
            .await;

        let probe = test_probe(&server.uri(), Duration::from_secs(600));
        let feed_url = format!("{}/feed.xml", server.uri());

        let first = probe
            .verify_latest_episode_match(SHOW_ID, &feed_url, Some(TOKEN))
            .await;
        let second = probe
            .verify_latest_episode_match(SHOW_ID, &feed_url, Some(TOKEN))
            .await;

        assert_eq!(first, NEUTRAL_SCORE);
        assert_eq!(second, NEUTRAL_SCORE);
        assert_eq!(probe.cache_stats().size, 0, "failures are not cached");
    }

    #[tokio::test]
    async fn returns_neutral_when_feed_fetch_fails() {
        let server = MockServer::start().await;
        mount_spotify(&server, spotify_episode_json("Episode 1", "2024-01-15"), 1).await;

        Mock::given(method("GET"))
            .and(path("/feed.xml"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let probe = test_probe(&server.uri(), Duration::from_secs(600));
        let feed_url = format!("{}/feed.xml", server.uri());

        let score = probe
            .verify_latest_episode_match(SHOW_ID, &feed_url, Some(TOKEN))
            .await;

        assert_eq!(score, NEUTRAL_SCORE);
        assert_eq!(probe.cache_stats().size, 0);
    }

    #[tokio::test]
    async fn returns_neutral_on_malformed_feed_xml() {
        let server = MockServer::start().await;
        mount_spotify(&server, spotify_episode_json("Episode 1", "2024-01-15"), 1).await;
        mount_feed(&server, "this is not XML at all".to_string(), 1).await;

        let probe = test_probe(&server.uri(), Duration::from_secs(600));
        let feed_url = format!("{}/feed.xml", server.uri());

        let score = probe
            .verify_latest_episode_match(SHOW_ID, &feed_url, Some(TOKEN))
            .await;

        assert_eq!(score, NEUTRAL_SCORE);
        assert_eq!(probe.cache_stats().size, 0);
    }

    // -----------------------------------------------------------------------
    // Matching
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn exact_title_and_same_day_dates_score_high() {
        let server = MockServer::start().await;
        mount_spotify(
            &server,
            spotify_episode_json("The Economy Explained", "2024-01-15"),
            1,
        )
        .await;
        // Nine and a half hours of skew from Spotify's midnight release date
        mount_feed(
            &server,
            rss_feed_body("The Economy Explained", "Mon, 15 Jan 2024 09:30:00 +0000"),
            1,
        )
        .await;

        let probe = test_probe(&server.uri(), Duration::from_secs(600));
        let feed_url = format!("{}/feed.xml", server.uri());

        let score = probe
            .verify_latest_episode_match(SHOW_ID, &feed_url, Some(TOKEN))
            .await;

        assert!(score > 0.9, "expected > 0.9, got {}", score);
    }

    #[tokio::test]
    async fn mismatched_titles_score_low() {
        let server = MockServer::start().await;
        mount_spotify(&server, spotify_episode_json("Alpha Beta", "2024-01-15"), 1).await;
        mount_feed(
            &server,
            rss_feed_body("Gamma Delta", "Mon, 15 Jan 2024 00:00:00 +0000"),
            1,
        )
        .await;

        let probe = test_probe(&server.uri(), Duration::from_secs(600));
        let feed_url = format!("{}/feed.xml", server.uri());

        let score = probe
            .verify_latest_episode_match(SHOW_ID, &feed_url, Some(TOKEN))
            .await;

        // No title overlap: only the date term contributes
        assert!((score - EPISODE_DATE_WEIGHT).abs() < 1e-9, "got {}", score);
    }

    // -----------------------------------------------------------------------
    // Cache behavior
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn second_call_is_a_cache_hit_with_no_network() {
        let server = MockServer::start().await;
        mount_spotify(&server, spotify_episode_json("Ep", "2024-01-15"), 1).await;
        mount_feed(&server, rss_feed_body("Ep", "Mon, 15 Jan 2024 00:00:00 +0000"), 1).await;

        let probe = test_probe(&server.uri(), Duration::from_secs(600));
        let feed_url = format!("{}/feed.xml", server.uri());

        let first = probe
            .verify_latest_episode_match(SHOW_ID, &feed_url, Some(TOKEN))
            .await;
        let second = probe
            .verify_latest_episode_match(SHOW_ID, &feed_url, Some(TOKEN))
            .await;

        assert_eq!(first, second);
        assert_eq!(probe.cache_stats().size, 1);
        // .expect(1) on both mocks verifies exactly one Spotify fetch and one
        // RSS fetch happened in total, checked when the server drops
    }

    #[tokio::test]
    async fn clear_all_forces_fresh_fetches() {
        let server = MockServer::start().await;
        mount_spotify(&server, spotify_episode_json("Ep", "2024-01-15"), 2).await;
        mount_feed(&server, rss_feed_body("Ep", "Mon, 15 Jan 2024 00:00:00 +0000"), 2).await;

        let probe = test_probe(&server.uri(), Duration::from_secs(600));
        let feed_url = format!("{}/feed.xml", server.uri());

        probe
            .verify_latest_episode_match(SHOW_ID, &feed_url, Some(TOKEN))
            .await;
        probe.clear_all();
        assert_eq!(probe.cache_stats().size, 0);

        probe
            .verify_latest_episode_match(SHOW_ID, &feed_url, Some(TOKEN))
            .await;
        assert_eq!(probe.cache_stats().size, 1);
    }

    #[tokio::test]
    async fn expired_entries_are_invisible_to_stats_and_swept() {
        let server = MockServer::start().await;
        mount_spotify(&server, spotify_episode_json("Ep", "2024-01-15"), 1).await;
        mount_feed(&server, rss_feed_body("Ep", "Mon, 15 Jan 2024 00:00:00 +0000"), 1).await;

        // Zero TTL: the entry expires the moment it is written
        let probe = test_probe(&server.uri(), Duration::ZERO);
        let feed_url = format!("{}/feed.xml", server.uri());

        probe
            .verify_latest_episode_match(SHOW_ID, &feed_url, Some(TOKEN))
            .await;

        assert_eq!(probe.cache_stats().size, 0, "expired entry must not count");

        probe.clear_expired();
        let cache_len = lock_or_recover(&probe.cache).len();
        assert_eq!(cache_len, 0, "sweep must remove the expired entry");
    }

    #[tokio::test]
    async fn cache_stats_reports_configured_ttl() {
        let server = MockServer::start().await;
        let probe = test_probe(&server.uri(), Duration::from_secs(42));
        assert_eq!(probe.cache_stats().ttl, Duration::from_secs(42));
    }

    // -----------------------------------------------------------------------
    // Scoring internals
    // -----------------------------------------------------------------------

    #[test]
    fn date_closeness_is_full_within_one_day() {
        let a = "2024-01-15T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let b = "2024-01-15T21:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(date_closeness(a, b), 1.0);
    }

    #[test]
    fn date_closeness_decays_with_larger_gaps() {
        let a = "2024-01-15T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let close = "2024-01-17T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let far = "2024-01-22T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let very_far = "2024-03-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();

        let close_score = date_closeness(a, close);
        let far_score = date_closeness(a, far);

        assert!(close_score < 1.0);
        assert!(far_score < close_score);
        assert_eq!(date_closeness(a, very_far), 0.0, "decay floors at zero");
    }

    #[test]
    fn date_closeness_is_symmetric() {
        let a = "2024-01-15T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let b = "2024-01-20T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(date_closeness(a, b), date_closeness(b, a));
    }

    #[test]
    fn parse_release_date_accepts_day_precision_and_rfc3339() {
        let day = parse_release_date("2024-01-15").unwrap();
        assert_eq!(day.to_rfc3339(), "2024-01-15T00:00:00+00:00");

        let full = parse_release_date("2024-01-15T08:30:00Z").unwrap();
        assert_eq!(full.to_rfc3339(), "2024-01-15T08:30:00+00:00");

        assert!(parse_release_date("January 15, 2024").is_none());
    }

    #[test]
    fn missing_dates_zero_only_the_date_term() {
        let episode = SpotifyEpisode {
            name: "Same Title".to_string(),
            release_date: None,
        };
        let item = FeedItem {
            title: "Same Title".to_string(),
            pub_date: None,
        };

        let score = episode_match_score(&episode, &item);
        assert!((score - EPISODE_TITLE_WEIGHT).abs() < 1e-9);
    }

    #[test]
    fn first_item_from_rss_tolerates_missing_fields() {
        let minimal = r#"<?xml version="1.0"?>
<rss version="2.0"><channel><title>T</title><item><title>Only Title</title></item></channel></rss>"#;

        let item = first_item_from_rss(minimal).unwrap();
        assert_eq!(item.title, "Only Title");
        assert!(item.pub_date.is_none());
    }

    #[test]
    fn itemless_channel_yields_no_item() {
        let empty = r#"<?xml version="1.0"?>
<rss version="2.0"><channel><title>T</title></channel></rss>"#;
        assert!(first_item_from_rss(empty).is_none());
    }

    #[test]
    fn first_item_from_atom_reads_entry_title_and_date() {
        let atom = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
    <title>Feed</title>
    <id>feed-1</id>
    <updated>2024-01-15T00:00:00Z</updated>
    <entry>
        <title>Atom Episode</title>
        <id>entry-1</id>
        <updated>2024-01-15T00:00:00Z</updated>
        <published>2024-01-14T08:00:00Z</published>
    </entry>
</feed>"#;

        let item = first_item_from_atom(atom).unwrap();
        assert_eq!(item.title, "Atom Episode");
        let pub_date = item.pub_date.unwrap();
        assert_eq!(pub_date.to_rfc3339(), "2024-01-14T08:00:00+00:00");
    }
}

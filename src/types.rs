//! Core value objects passed between resolution components
//!
//! Everything here is a request-scoped, immutable data carrier: created by the
//! caller or the directory client at the start of a resolution, read by the
//! scorer and probe, and discarded once a winner is chosen.

use serde::{Deserialize, Serialize};

/// Identification metadata for a show, as known from Spotify
///
/// `name` is the only required field. `spotify_show_id` and `access_token`
/// must both be present for the episode verification probe to run; otherwise
/// resolution relies on directory metadata alone.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ShowMetadata {
    /// Show name (required)
    pub name: String,

    /// Show description
    #[serde(default)]
    pub description: String,

    /// Publisher name, used for an exact-match scoring bonus
    #[serde(default)]
    pub publisher: Option<String>,

    /// Spotify show ID, used to look up the latest episode during probing
    #[serde(default)]
    pub spotify_show_id: Option<String>,

    /// OAuth bearer token for the Spotify Web API, consumed as-is
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub access_token: Option<String>,
}

impl ShowMetadata {
    /// Create metadata with just a show name
    pub fn from_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// One directory search result being evaluated as the possible canonical feed
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CandidateFeed {
    /// Feed title as reported by the directory
    pub title: String,

    /// RSS feed URL
    pub url: String,

    /// Feed description, when the directory provides one
    #[serde(default)]
    pub description: Option<String>,

    /// Feed author/publisher, when the directory provides one
    #[serde(default)]
    pub author: Option<String>,
}

/// A scored candidate, ephemeral within one resolution call
#[derive(Clone, Debug)]
pub struct MatchScore {
    /// The candidate that was scored
    pub candidate: CandidateFeed,

    /// Weighted match score (0..~1.3 after probe boost)
    pub score: f64,
}

/// The outcome of a successful resolution
///
/// The score is surfaced alongside the URL so callers can decide whether to
/// accept the match automatically or flag it for review.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResolvedFeed {
    /// The winning feed URL
    pub url: String,

    /// Confidence score of the winning candidate (0..~1.3)
    pub score: f64,
}

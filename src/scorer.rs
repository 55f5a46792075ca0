//! Candidate scoring and selection
//!
//! Ranks the candidate feeds returned by directory search against a show's
//! metadata. Two calling modes share this scorer: a simple title-only mode for
//! string queries, and an enhanced mode that weighs title, description, and
//! publisher — optionally boosted by the episode verification probe when
//! Spotify credentials are available.
//!
//! Selection is deliberately best-effort: when no candidate reaches the
//! high-confidence threshold the top-ranked candidate is still returned,
//! because directory result order already encodes relevance. `None` means
//! only one thing — there were no candidates at all.

use crate::probe::EpisodeProbe;
use crate::similarity::token_set_similarity;
use crate::types::{CandidateFeed, MatchScore, ShowMetadata};
use std::sync::Arc;
use tracing::{debug, info};

/// Title similarity at or above this value counts as a high-confidence match
pub const SIMILARITY_THRESHOLD: f64 = 0.8;

/// Weight of title similarity in the metadata score (the dominant term)
const TITLE_WEIGHT: f64 = 0.6;

/// Weight of description similarity in the metadata score
const DESCRIPTION_WEIGHT: f64 = 0.25;

/// Fixed bonus for an exact case-insensitive publisher/author match
///
/// Sized to break a near-tie between similar titles without outweighing them.
const PUBLISHER_BONUS: f64 = 0.15;

/// Scale applied to the probe score before it is added to a candidate's score
///
/// Base scores top out at 1.0, so boosted scores range up to ~1.3.
const PROBE_BOOST_WEIGHT: f64 = 0.3;

/// How many top-scoring candidates are verified against Spotify per resolution
const MAX_PROBED_CANDIDATES: usize = 3;

/// Scores candidate feeds and selects a winner
#[derive(Debug)]
pub struct CandidateScorer {
    /// Episode verification probe, shared with the resolver
    probe: Arc<EpisodeProbe>,
}

impl CandidateScorer {
    /// Create a scorer backed by the given probe
    pub fn new(probe: Arc<EpisodeProbe>) -> Self {
        Self { probe }
    }

    /// Simple calling mode: pick a feed for a bare title query
    ///
    /// Returns the first candidate whose title similarity to the query is at
    /// least [`SIMILARITY_THRESHOLD`]; when none qualifies, falls back to the
    /// first candidate in result order. Returns `None` only for empty input.
    pub fn select_best_feed_by_title(
        &self,
        candidates: &[CandidateFeed],
        query: &str,
    ) -> Option<String> {
        if candidates.is_empty() {
            return None;
        }

        for candidate in candidates {
            let similarity = token_set_similarity(&candidate.title, query);
            if similarity >= SIMILARITY_THRESHOLD {
                debug!(
                    "Candidate '{}' qualifies for '{}' with similarity {:.3}",
                    candidate.title, query, similarity
                );
                return Some(candidate.url.clone());
            }
        }

        debug!(
            "No candidate met the similarity threshold for '{}', using first result",
            query
        );
        Some(candidates[0].url.clone())
    }

    /// Enhanced calling mode: weighted scoring against full show metadata
    ///
    /// Each candidate gets a weighted score from title similarity, description
    /// similarity (zeroed when either description is empty), and an exact
    /// publisher-match bonus. When the metadata carries both a Spotify show ID
    /// and an access token, the top [`MAX_PROBED_CANDIDATES`] candidates are
    /// verified against Spotify's latest episode and boosted accordingly;
    /// probe failures degrade to a neutral boost and never abort scoring.
    ///
    /// Ties break stably: the first candidate in original order wins.
    pub async fn select_best_feed(
        &self,
        candidates: &[CandidateFeed],
        metadata: &ShowMetadata,
    ) -> Option<MatchScore> {
        if candidates.is_empty() {
            return None;
        }

        let mut scores: Vec<f64> = candidates
            .iter()
            .map(|candidate| base_score(candidate, metadata))
            .collect();

        if let (Some(show_id), Some(token)) =
            (metadata.spotify_show_id.as_deref(), metadata.access_token.as_deref())
        {
            // Rank by base score (stable, so directory order breaks ties) and
            // probe only the leaders; probing every candidate would hammer the
            // feed hosts for no ranking benefit
            let mut ranked: Vec<usize> = (0..candidates.len()).collect();
            ranked.sort_by(|&a, &b| {
                scores[b].partial_cmp(&scores[a]).unwrap_or(std::cmp::Ordering::Equal)
            });

            for &idx in ranked.iter().take(MAX_PROBED_CANDIDATES) {
                let probe_score = self
                    .probe
                    .verify_latest_episode_match(show_id, &candidates[idx].url, Some(token))
                    .await;
                debug!(
                    "Probe boost for '{}': {:.3} x {:.2}",
                    candidates[idx].title, probe_score, PROBE_BOOST_WEIGHT
                );
                scores[idx] += probe_score * PROBE_BOOST_WEIGHT;
            }
        }

        // First candidate in original order wins ties
        let mut best_idx = 0;
        for (idx, &score) in scores.iter().enumerate() {
            if score > scores[best_idx] {
                best_idx = idx;
            }
        }

        let winner = MatchScore {
            candidate: candidates[best_idx].clone(),
            score: scores[best_idx],
        };

        if winner.score < SIMILARITY_THRESHOLD {
            info!(
                "Best candidate '{}' for '{}' scored {:.3}, below the confidence threshold; \
                 returning it as a best-effort match",
                winner.candidate.title, metadata.name, winner.score
            );
        } else {
            info!(
                "Selected '{}' for '{}' with score {:.3}",
                winner.candidate.title, metadata.name, winner.score
            );
        }

        Some(winner)
    }
}

/// Weighted score from directory metadata alone (no probing)
fn base_score(candidate: &CandidateFeed, metadata: &ShowMetadata) -> f64 {
    let title_score = token_set_similarity(&candidate.title, &metadata.name);

    let candidate_description = candidate.description.as_deref().unwrap_or("");
    let description_score = if candidate_description.is_empty() || metadata.description.is_empty() {
        0.0
    } else {
        token_set_similarity(candidate_description, &metadata.description)
    };

    let publisher_bonus = match (candidate.author.as_deref(), metadata.publisher.as_deref()) {
        (Some(author), Some(publisher)) if author.eq_ignore_ascii_case(publisher) => {
            PUBLISHER_BONUS
        }
        _ => 0.0,
    };

    TITLE_WEIGHT * title_score + DESCRIPTION_WEIGHT * description_score + publisher_bonus
}

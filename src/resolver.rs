//! Feed resolution orchestrator
//!
//! Composes directory search → candidate scoring (→ episode probing) into the
//! single operation callers use: given show metadata, return the canonical
//! feed URL with a confidence score, or nothing.

use crate::config::ResolverConfig;
use crate::directory::DirectorySearchClient;
use crate::error::Result;
use crate::probe::EpisodeProbe;
use crate::scorer::CandidateScorer;
use crate::types::{ResolvedFeed, ShowMetadata};
use std::sync::Arc;
use tracing::{debug, info};

/// Resolves a show's canonical RSS feed URL from its Spotify metadata
///
/// The resolver owns all three collaborators; the probe is shared with the
/// scorer so its result cache spans resolutions for the resolver's lifetime.
#[derive(Debug)]
pub struct FeedResolver {
    directory: DirectorySearchClient,
    scorer: CandidateScorer,
    probe: Arc<EpisodeProbe>,
}

impl FeedResolver {
    /// Create a resolver from configuration
    ///
    /// # Errors
    /// Returns a configuration error if the directory API key or secret is
    /// absent, or if an HTTP client cannot be created.
    pub fn new(config: ResolverConfig) -> Result<Self> {
        let directory = DirectorySearchClient::new(&config.directory, &config.http)?;
        let probe = Arc::new(EpisodeProbe::new(&config.probe, &config.http)?);
        let scorer = CandidateScorer::new(Arc::clone(&probe));

        Ok(Self {
            directory,
            scorer,
            probe,
        })
    }

    /// Resolve the feed URL for a show described by full metadata
    ///
    /// When the metadata carries a Spotify show ID and access token, top
    /// candidates are additionally verified against the show's latest episode.
    /// Returns `None` when no directory knows the show; the score on a
    /// successful resolution lets callers threshold confidence themselves.
    ///
    /// # Errors
    /// Propagates primary directory search failures; all other upstream
    /// problems degrade inside the components.
    pub async fn resolve(&self, metadata: &ShowMetadata) -> Result<Option<ResolvedFeed>> {
        let candidates = self.directory.search(metadata).await?;
        debug!(
            "Found {} candidate feeds for '{}'",
            candidates.len(),
            metadata.name
        );

        let Some(winner) = self.scorer.select_best_feed(&candidates, metadata).await else {
            info!("No feed found for '{}'", metadata.name);
            return Ok(None);
        };

        Ok(Some(ResolvedFeed {
            url: winner.candidate.url,
            score: winner.score,
        }))
    }

    /// Resolve a feed URL for a bare title query (simple calling mode)
    ///
    /// # Errors
    /// Propagates primary directory search failures.
    pub async fn resolve_by_title(&self, query: &str) -> Result<Option<String>> {
        let candidates = self.directory.search_by_title(query).await?;
        Ok(self.scorer.select_best_feed_by_title(&candidates, query))
    }

    /// Access the episode probe for cache maintenance and stats
    pub fn probe(&self) -> &EpisodeProbe {
        &self.probe
    }
}

//! # feed-resolver
//!
//! Resolves the canonical RSS feed URL for a podcast known only by its
//! Spotify metadata, and verifies the resolution by cross-checking the feed's
//! latest episode against the show's latest episode on Spotify.
//!
//! ## Design Philosophy
//!
//! feed-resolver is designed to be:
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Best-effort** - "No match found" is a normal outcome, not an error;
//!   only a broken primary search index or missing configuration fails loudly
//! - **Stateless between calls** - The only state outliving a resolution is a
//!   TTL-bounded probe result cache owned by [`EpisodeProbe`]
//!
//! ## Quick Start
//!
//! ```no_run
//! use feed_resolver::{FeedResolver, ResolverConfig, ShowMetadata};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = ResolverConfig::default();
//!     config.directory.api_key = Some("my-key".to_string());
//!     config.directory.api_secret = Some("my-secret".to_string());
//!
//!     let resolver = FeedResolver::new(config)?;
//!
//!     let metadata = ShowMetadata {
//!         name: "Planet Money".to_string(),
//!         publisher: Some("NPR".to_string()),
//!         ..Default::default()
//!     };
//!
//!     match resolver.resolve(&metadata).await? {
//!         Some(feed) => println!("Resolved {} (score {:.2})", feed.url, feed.score),
//!         None => println!("No feed found"),
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Directory API request signing
pub mod auth;
/// Configuration types
pub mod config;
/// Directory search client
pub mod directory;
/// Error types
pub mod error;
/// Episode verification probe and its result cache
pub mod probe;
/// Feed resolution orchestrator
pub mod resolver;
/// Candidate scoring and selection
pub mod scorer;
/// Token-set text similarity
pub mod similarity;
/// Core value objects
pub mod types;

// Re-export commonly used types
pub use auth::{AuthHeaders, DirectoryAuthSigner};
pub use config::{DirectoryConfig, HttpConfig, ProbeConfig, ResolverConfig};
pub use directory::DirectorySearchClient;
pub use error::{Error, Result};
pub use probe::{EpisodeProbe, NEUTRAL_SCORE, ProbeCacheStats};
pub use resolver::FeedResolver;
pub use scorer::{CandidateScorer, SIMILARITY_THRESHOLD};
pub use similarity::token_set_similarity;
pub use types::{CandidateFeed, MatchScore, ResolvedFeed, ShowMetadata};

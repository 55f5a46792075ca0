//! Request signing for the primary podcast directory API
//!
//! The primary directory authenticates every request with three headers: the
//! API key, a unix-seconds timestamp, and a SHA-1 digest of
//! `key + secret + timestamp`. The timestamp must be fresh, so headers are
//! recomputed per request and never cached.

use crate::config::DirectoryConfig;
use crate::error::{Error, Result};
use sha1::{Digest, Sha1};
use std::time::{SystemTime, UNIX_EPOCH};

/// Header name carrying the API key
pub const AUTH_KEY_HEADER: &str = "X-Auth-Key";
/// Header name carrying the unix-seconds timestamp
pub const AUTH_DATE_HEADER: &str = "X-Auth-Date";
/// Header name carrying the hex SHA-1 signature
pub const AUTH_SIGNATURE_HEADER: &str = "Authorization";

/// The three auth headers required by the primary directory API
///
/// Recomputed per request; holding on to a set of headers across requests
/// would eventually fail server-side timestamp validation.
#[derive(Clone, Debug)]
pub struct AuthHeaders {
    /// API key, sent verbatim
    pub key: String,

    /// Unix timestamp in seconds, as a decimal string
    pub date: String,

    /// Lowercase hex SHA-1 of `key + secret + date`
    pub signature: String,
}

impl AuthHeaders {
    /// Attach the three headers to a request builder
    pub fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header(AUTH_KEY_HEADER, &self.key)
            .header(AUTH_DATE_HEADER, &self.date)
            .header(AUTH_SIGNATURE_HEADER, &self.signature)
    }
}

/// Builds time-based auth headers from the configured directory secrets
#[derive(Clone, Debug)]
pub struct DirectoryAuthSigner {
    key: String,
    secret: String,
}

impl DirectoryAuthSigner {
    /// Create a signer from the directory configuration
    ///
    /// # Errors
    /// Returns a configuration error if either secret is absent. This is a
    /// fatal misconfiguration, not a retryable condition.
    pub fn new(config: &DirectoryConfig) -> Result<Self> {
        let key = config
            .api_key
            .clone()
            .ok_or_else(|| Error::missing_config("directory.api_key"))?;
        let secret = config
            .api_secret
            .clone()
            .ok_or_else(|| Error::missing_config("directory.api_secret"))?;

        Ok(Self { key, secret })
    }

    /// Build a fresh set of auth headers for the current time
    pub fn build_auth_headers(&self) -> AuthHeaders {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        self.headers_for_timestamp(now)
    }

    /// Build headers for an explicit timestamp (the testable core)
    fn headers_for_timestamp(&self, unix_seconds: u64) -> AuthHeaders {
        AuthHeaders {
            key: self.key.clone(),
            date: unix_seconds.to_string(),
            signature: sign(&self.key, &self.secret, unix_seconds),
        }
    }
}

/// Compute the lowercase hex SHA-1 of `key + secret + unix_seconds`
fn sign(key: &str, secret: &str, unix_seconds: u64) -> String {
    let mut hasher = Sha1::new();
    hasher.update(key.as_bytes());
    hasher.update(secret.as_bytes());
    hasher.update(unix_seconds.to_string().as_bytes());
    format!("{:x}", hasher.finalize())
}

//! Breach-corpus range lookups (k-anonymity protocol).
//!
//! Only the first 5 hex characters of a password's SHA-1 digest ever leave
//! the process; the corpus returns every known suffix under that prefix and
//! matching happens locally.

use async_trait::async_trait;
use thiserror::Error;

#[cfg(feature = "client")]
use std::time::Duration;

/// Errors from one breach-corpus range query.
#[derive(Debug, Error)]
pub enum LookupError {
    #[cfg(feature = "client")]
    #[error("breach corpus request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("breach corpus responded with status {0}")]
    Status(u16),
}

/// Capability for fetching all breached hash suffixes under a 5-hex-char
/// prefix. Implement this over a fixture to test without a network.
#[async_trait]
pub trait RangeLookup: Send + Sync {
    async fn lookup(&self, prefix: &str) -> Result<Vec<String>, LookupError>;
}

#[cfg(feature = "client")]
const BREACH_API_BASE_URL: &str = "https://api.pwnedpasswords.com";

#[cfg(feature = "client")]
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(3);

/// Client for the public pwnedpasswords range API.
#[cfg(feature = "client")]
#[derive(Debug, Clone)]
pub struct BreachApiClient {
    http: reqwest::Client,
    base_url: String,
}

#[cfg(feature = "client")]
impl BreachApiClient {
    /// Builds a client against the public corpus host.
    pub fn new() -> Result<Self, LookupError> {
        Self::with_base_url(BREACH_API_BASE_URL)
    }

    /// Builds a client against an alternate host, for integration harnesses.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("pwd-analyser/", env!("CARGO_PKG_VERSION")))
            .timeout(LOOKUP_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }
}

#[cfg(feature = "client")]
#[async_trait]
impl RangeLookup for BreachApiClient {
    async fn lookup(&self, prefix: &str) -> Result<Vec<String>, LookupError> {
        let url = format!("{}/range/{}", self.base_url, prefix);
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }
        Ok(parse_range_body(&response.text().await?))
    }
}

/// Parses a `SUFFIX:COUNT` response body into lowercased suffixes. The
/// occurrence count is irrelevant to membership; lines without a separator
/// are skipped rather than failing the round.
#[cfg(any(feature = "client", test))]
fn parse_range_body(body: &str) -> Vec<String> {
    body.lines()
        .filter_map(|line| line.split_once(':'))
        .map(|(suffix, _count)| suffix.trim().to_ascii_lowercase())
        .collect()
}

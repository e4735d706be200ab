//! Remote word API client
//!
//! Two GET requests against the same endpoint:
//! - `?length=N` → `{ "word": "..." }` (empty or missing word means none found)
//! - `?word=w` → `{ "exists": true }`

use super::WordSource;
use crate::core::Word;
use crate::error::SourceError;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Public word API used when no endpoint is configured
pub const DEFAULT_API_URL: &str = "https://api-letritas.vercel.app/api/random-word";

/// Per-request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Deserialize)]
struct RandomWordResponse {
    #[serde(default)]
    word: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExistsResponse {
    exists: bool,
}

/// Blocking HTTP client for the word API
pub struct HttpWordSource {
    agent: ureq::Agent,
    endpoint: Url,
}

impl HttpWordSource {
    /// Create a client for `endpoint`
    ///
    /// # Errors
    /// Returns `SourceError::InvalidEndpoint` if `endpoint` is not an absolute URL.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, SourceError> {
        let endpoint = Url::parse(endpoint)?;
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Ok(Self { agent, endpoint })
    }

    /// The configured endpoint
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn random_word_url(&self, length: usize) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("length", &length.to_string());
        url
    }

    fn exists_url(&self, word: &Word) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("word", &word.to_query());
        url
    }

    fn get(&self, url: &Url) -> Result<String, SourceError> {
        log::debug!("GET {url}");
        let body = self.agent.request_url("GET", url).call()?.into_string()?;
        Ok(body)
    }
}

fn parse_random_word(body: &str) -> Result<Option<String>, SourceError> {
    let response: RandomWordResponse = serde_json::from_str(body)?;
    Ok(response.word.filter(|w| !w.trim().is_empty()))
}

fn parse_exists(body: &str) -> Result<bool, SourceError> {
    let response: ExistsResponse = serde_json::from_str(body)?;
    Ok(response.exists)
}

impl WordSource for HttpWordSource {
    fn random_word(&self, length: usize) -> Result<Option<String>, SourceError> {
        let body = self.get(&self.random_word_url(length))?;
        parse_random_word(&body)
    }

    fn word_exists(&self, word: &Word) -> Result<bool, SourceError> {
        let body = self.get(&self.exists_url(word))?;
        parse_exists(&body)
    }
}

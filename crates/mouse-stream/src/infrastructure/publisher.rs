//! HTTP publisher: one POST per sample, response dropped unread.
//!
//! The publisher owns a single [`reqwest::Client`] for the lifetime of the
//! stream, so every POST reuses the client's connection pool instead of
//! re-handshaking the endpoint on each 400 ms tick.
//!
//! # Fire-and-forget
//!
//! The response, including its status code, is intentionally discarded.
//! A non-2xx answer is therefore indistinguishable from success; only a
//! transport-level failure (DNS, refused connection, reset) surfaces as an
//! error.  The endpoint is a sink, not a collaborator.

use async_trait::async_trait;
use reqwest::{Client, Url};
use thiserror::Error;

use crate::application::stream_samples::SamplePublisher;
use crate::domain::Sample;

/// Error type for publisher construction.
#[derive(Debug, Error)]
pub enum PublisherError {
    /// The configured endpoint is not a parseable URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(String),
}

/// [`SamplePublisher`] implementation backed by reqwest.
pub struct HttpSamplePublisher {
    client: Client,
    endpoint: Url,
}

impl HttpSamplePublisher {
    /// Creates a publisher for the given endpoint.
    ///
    /// The URL is parsed here so a malformed value fails at startup rather
    /// than on the first poll.
    ///
    /// # Errors
    ///
    /// Returns [`PublisherError::InvalidUrl`] if `endpoint_url` does not
    /// parse as an absolute URL.
    pub fn new(endpoint_url: &str) -> Result<Self, PublisherError> {
        let endpoint = Url::parse(endpoint_url)
            .map_err(|e| PublisherError::InvalidUrl(format!("'{endpoint_url}': {e}")))?;
        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }
}

#[async_trait]
impl SamplePublisher for HttpSamplePublisher {
    /// POSTs the sample as a JSON body and drops the response unread.
    async fn publish(&self, sample: &Sample) -> Result<(), String> {
        self.client
            .post(self.endpoint.clone())
            .json(sample)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

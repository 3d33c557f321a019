//! StreamSamplesUseCase: the polling loop at the heart of the program.
//!
//! Each iteration reads the current pointer position from a
//! [`PointerSource`], stamps it into a [`Sample`], hands the sample to a
//! [`SamplePublisher`], and then waits out the configured interval.  There
//! is exactly one sample in flight at any time (no overlap, no queue), and
//! the loop has no exit condition other than an error or process death.
//!
//! # Architecture
//!
//! This use case depends only on traits and domain types.  The
//! infrastructure implementations (OS pointer query, reqwest publisher) are
//! injected at construction time, making the loop body fully unit-testable.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::domain::Sample;

/// Error type for the sample-stream use case.
///
/// Both variants are fatal: the loop does not retry, back off, or log-and-
/// continue.  Whichever step fails aborts the iteration and propagates.
#[derive(Debug, Error)]
pub enum StreamError {
    /// The host pointer query failed (no display, no session, hook error).
    #[error("pointer query error: {0}")]
    Pointer(String),
    /// The sample POST failed at the transport level.
    #[error("publish error: {0}")]
    Publish(String),
}

/// Trait for reading the current pointer position from the host.
///
/// Infrastructure implementations query the OS; test implementations return
/// scripted coordinates.
#[async_trait]
pub trait PointerSource: Send + Sync {
    /// Returns the current pointer position as (x, y) in screen coordinates.
    async fn position(&self) -> Result<(f64, f64), String>;
}

/// Trait for transmitting one sample to the remote endpoint.
///
/// Infrastructure implementations POST over HTTP; test implementations
/// record calls.
#[async_trait]
pub trait SamplePublisher: Send + Sync {
    /// Sends the sample and discards whatever the endpoint answers.
    async fn publish(&self, sample: &Sample) -> Result<(), String>;
}

/// Drives the sample → encode → publish loop.
pub struct StreamSamplesUseCase {
    source: Arc<dyn PointerSource>,
    publisher: Arc<dyn SamplePublisher>,
    poll_interval: Duration,
}

impl StreamSamplesUseCase {
    /// Creates the use case with injected source and publisher.
    pub fn new(
        source: Arc<dyn PointerSource>,
        publisher: Arc<dyn SamplePublisher>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            source,
            publisher,
            poll_interval,
        }
    }

    /// Runs one loop body iteration: sample, encode, publish.
    ///
    /// Returns the published sample so callers (and tests) can observe what
    /// went over the wire.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::Pointer`] if the host query fails and
    /// [`StreamError::Publish`] if the POST fails.
    pub async fn sample_once(&self) -> Result<Sample, StreamError> {
        let (x, y) = self.source.position().await.map_err(StreamError::Pointer)?;
        let sample = Sample::capture(x, y);
        self.publisher
            .publish(&sample)
            .await
            .map_err(StreamError::Publish)?;
        debug!(x = sample.x, y = sample.y, "sample published");
        Ok(sample)
    }

    /// Streams samples forever.
    ///
    /// The wait runs *after* each publish, so consecutive samples are spaced
    /// by at least `poll_interval` plus however long the iteration itself
    /// took.  Only an error returns from this function; there is no
    /// cancellation hook.
    pub async fn run(&self) -> Result<(), StreamError> {
        loop {
            self.sample_once().await?;
            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

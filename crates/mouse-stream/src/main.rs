//! mouse-stream — entry point.
//!
//! This binary samples the host cursor position every 400 ms and forwards
//! each sample as a timestamped JSON record to a configured HTTP endpoint,
//! forever:
//!
//! ```text
//! OS pointer query ──► Sample {time, x, y} ──► HTTP POST ──► sleep 400 ms ──┐
//!        ▲                                                                  │
//!        └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```text
//! mouse-stream [--url <URL>]
//! ```
//!
//! There is nothing else to configure: running the program starts the
//! stream immediately, and it runs until the process is killed.
//!
//! # Environment variables
//!
//! A local `.env` file, if present, is loaded into the environment first.
//!
//! | Variable   | Description                                              |
//! |------------|----------------------------------------------------------|
//! | `URL`      | Destination endpoint; required unless `--url` is passed  |
//! | `RUST_LOG` | Log filter for `tracing` (defaults to `info`)            |
//!
//! A missing URL is a fatal startup condition: the process exits with a
//! usage error before any device or network call is attempted.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mouse_stream::application::StreamSamplesUseCase;
use mouse_stream::domain::StreamConfig;
use mouse_stream::infrastructure::pointer::NativePointerQuery;
use mouse_stream::infrastructure::{BlockingPointerSource, HttpSamplePublisher};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Streams the host cursor position to an HTTP telemetry endpoint.
#[derive(Debug, Parser)]
#[command(
    name = "mouse-stream",
    about = "Streams the host cursor position to an HTTP telemetry endpoint",
    version
)]
struct Cli {
    /// Destination URL for every sample POST.
    ///
    /// Falls back to the `URL` environment variable when the flag is
    /// absent; the flag wins when both are present.
    #[arg(long, env = "URL")]
    url: String,
}

impl Cli {
    /// Converts the parsed CLI arguments into a [`StreamConfig`].
    ///
    /// The poll cadence is fixed; only the endpoint comes from the outside.
    fn into_stream_config(self) -> StreamConfig {
        StreamConfig::new(self.url)
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load a local .env file (if any) before clap reads the environment.
    dotenv().ok();

    // Initialise structured logging.  The log level is controlled by the
    // RUST_LOG environment variable, falling back to `info`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // `Cli::parse()` exits with a usage message if the URL is missing, so
    // nothing below runs without configuration.
    let cli = Cli::parse();
    let config = cli.into_stream_config();

    info!(
        "mouse-stream starting — endpoint={}, interval={:?}",
        config.endpoint_url, config.poll_interval
    );

    // ── Wiring ────────────────────────────────────────────────────────────────
    // Native OS query, offloaded to the blocking pool per call.
    let source = BlockingPointerSource::new(NativePointerQuery::new());
    // One HTTP client for the lifetime of the stream.
    let publisher = HttpSamplePublisher::new(&config.endpoint_url)
        .context("configured endpoint URL is invalid")?;

    let use_case = StreamSamplesUseCase::new(
        Arc::new(source),
        Arc::new(publisher),
        config.poll_interval,
    );

    // Streams forever.  There is no shutdown hook: the loop only returns on
    // a sampling or publish error, which terminates the process.
    use_case.run().await?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

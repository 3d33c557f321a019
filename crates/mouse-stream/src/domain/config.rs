//! Stream configuration types.
//!
//! [`StreamConfig`] is the single source of truth for all runtime settings.
//! It is a plain struct with no global state and no environment variable
//! reads inside the domain; the entry point is responsible for populating it
//! from the CLI arguments and the process environment.

use std::time::Duration;

/// Pause between consecutive samples.
///
/// The cadence is fixed: it is not exposed on the CLI, and there is no
/// backoff on publish failure.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(400);

/// All runtime configuration for the sample stream.
///
/// Built once at startup and handed to the use case.  There is no `Default`
/// impl: the destination URL has no sensible fallback, and its absence is a
/// startup error raised by the CLI layer before this struct exists.
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// Destination of every sample POST.
    pub endpoint_url: String,

    /// Pause between consecutive samples; [`DEFAULT_POLL_INTERVAL`] in
    /// production, shortened by tests.
    pub poll_interval: Duration,
}

impl StreamConfig {
    /// Creates a config for the given endpoint with the fixed production
    /// cadence.
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_the_fixed_400ms_cadence() {
        let cfg = StreamConfig::new("http://127.0.0.1:9000/samples");
        assert_eq!(cfg.poll_interval, Duration::from_millis(400));
    }

    #[test]
    fn test_new_stores_the_endpoint_verbatim() {
        let cfg = StreamConfig::new("http://push.example.com/rows");
        assert_eq!(cfg.endpoint_url, "http://push.example.com/rows");
    }

    #[test]
    fn test_config_can_be_cloned() {
        let cfg = StreamConfig::new("http://127.0.0.1:9000/samples");
        let cloned = cfg.clone();
        assert_eq!(cfg.endpoint_url, cloned.endpoint_url);
        assert_eq!(cfg.poll_interval, cloned.poll_interval);
    }
}

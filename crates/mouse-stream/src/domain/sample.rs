//! The [`Sample`] value record and its JSON wire encoding.
//!
//! One sample is one observation of the pointer position.  On the wire it is
//! a flat JSON object with exactly three keys:
//!
//! ```json
//! {"time":"2024-01-01T00:00:00.000000Z","x":100.0,"y":250.0}
//! ```
//!
//! # Timestamp format
//!
//! The `time` field is an ISO-8601-like UTC string with microsecond
//! precision and a literal `Z` suffix (`YYYY-MM-DDTHH:MM:SS.ffffffZ`).  The
//! receiving endpoint treats the field as an opaque sortable string, so the
//! width is fixed: the fractional part is always six digits, zero-padded.
//! Serialization and deserialization of the field go through the
//! [`utc_micros`] serde module.
//!
//! # Value semantics
//!
//! A sample is created fresh on each poll, never mutated, and discarded
//! right after transmission.  It is `Copy`, so it is duplicated rather than
//! shared; there is no ownership to coordinate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One observation of the pointer position at a specific time.
///
/// Invariants (by construction, not enforced): `x` and `y` are finite
/// screen coordinates, and `time` is capture-order monotonic in practice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Capture instant in UTC, rendered with microsecond precision.
    #[serde(with = "utc_micros")]
    pub time: DateTime<Utc>,

    /// Horizontal pointer position in screen coordinates.
    pub x: f64,

    /// Vertical pointer position in screen coordinates.
    pub y: f64,
}

impl Sample {
    /// Creates a sample with an explicit capture instant.
    ///
    /// Used by tests that need a frozen clock; production code goes through
    /// [`Sample::capture`].
    pub fn new(x: f64, y: f64, time: DateTime<Utc>) -> Self {
        Self { time, x, y }
    }

    /// Creates a sample stamped with the current UTC time.
    pub fn capture(x: f64, y: f64) -> Self {
        Self::new(x, y, Utc::now())
    }
}

/// Serde `with`-module for the fixed microsecond-precision UTC format.
pub mod utc_micros {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// `2024-01-01T00:00:00.000000Z`, always 27 characters.
    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";

    /// Renders the timestamp in the fixed wire format.
    pub fn serialize<S>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    /// Parses the fixed wire format back into a UTC timestamp.
    ///
    /// The fractional part must be exactly six digits and the `Z` literal;
    /// anything else is a deserialization error.  chrono's `%.6f` is
    /// lenient when parsing (it accepts any one-to-nine digit fraction, or
    /// none), so the fixed 27-character shape is checked before the parse.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        let shape_is_exact = text.len() == 27
            && text.as_bytes()[19] == b'.'
            && text.as_bytes()[26] == b'Z'
            && text.as_bytes()[20..26].iter().all(u8::is_ascii_digit);
        if !shape_is_exact {
            return Err(serde::de::Error::custom(format!(
                "timestamp must match YYYY-MM-DDTHH:MM:SS.ffffffZ, got {text:?}"
            )));
        }
        NaiveDateTime::parse_from_str(&text, FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

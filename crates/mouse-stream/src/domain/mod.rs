//! Domain layer for mouse-stream.
//!
//! The domain layer contains pure business-logic types that have no
//! dependencies on I/O, networking, or external frameworks.  This makes them
//! easy to test in isolation and portable to any runtime or platform.
//!
//! # What belongs in the domain layer?
//!
//! - The [`Sample`] value record and its wire encoding
//! - Configuration structures
//!
//! # What does NOT belong here?
//!
//! - Any `tokio`, `reqwest`, or OS pointer-query types
//! - File I/O or environment variable reading
//! - Anything that could block or fail due to external state

// Declare the sub-modules that make up the domain layer.
pub mod config;
pub mod sample;

// Re-export the most commonly needed types at the domain module boundary
// so callers can write `domain::Sample` instead of the longer path.
pub use config::{StreamConfig, DEFAULT_POLL_INTERVAL};
pub use sample::Sample;

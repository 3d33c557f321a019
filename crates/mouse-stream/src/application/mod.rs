//! Application layer for mouse-stream.
//!
//! The application layer orchestrates the business logic: it knows *what* to
//! do (sample, encode, publish, wait), but delegates *how* to do it to the
//! infrastructure layer behind the [`stream_samples::PointerSource`] and
//! [`stream_samples::SamplePublisher`] traits.
//!
//! # What does NOT belong here?
//!
//! - OS pointer queries (that is infrastructure)
//! - HTTP requests (that is infrastructure)
//! - Configuration parsing (that is done in `main.rs`)

pub mod stream_samples;

// Re-export the primary entry points so `main.rs` can name them concisely.
pub use stream_samples::{PointerSource, SamplePublisher, StreamError, StreamSamplesUseCase};

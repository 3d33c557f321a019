//! mouse-stream library crate.
//!
//! This crate samples the host cursor position on a fixed cadence and
//! forwards each sample as a timestamped JSON record to an HTTP endpoint.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! OS pointer query                      HTTP endpoint
//!         ↓                                   ↑
//! [mouse-stream]
//!   ├── domain/           Pure types: Sample, StreamConfig
//!   ├── application/      The polling loop: sample → encode → publish
//!   └── infrastructure/
//!         ├── pointer/    Per-platform cursor queries + mock
//!         └── publisher/  reqwest-backed HTTP POST
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no external dependencies beyond serde/chrono (no I/O, no
//!   async, no frameworks).
//! - `application` depends on `domain` only and sees the outside world
//!   through the [`application::stream_samples::PointerSource`] and
//!   [`application::stream_samples::SamplePublisher`] traits.
//! - `infrastructure` depends on all other layers plus the OS APIs and
//!   `reqwest`.

/// Domain layer: pure business-logic types (no I/O).
pub mod domain;

/// Application layer: the sampling loop use case.
pub mod application;

/// Infrastructure layer: platform pointer queries and the HTTP publisher.
pub mod infrastructure;

//! Infrastructure layer for mouse-stream.
//!
//! The infrastructure layer handles all I/O: querying the operating system
//! for the pointer position and POSTing encoded samples over HTTP.
//!
//! # What does NOT belong here?
//!
//! - The loop orchestration (that is the application layer)
//! - The Sample wire format (that is the domain layer)
//! - Configuration parsing (that is done in `main.rs`)

pub mod pointer;
pub mod publisher;

// Re-export the primary entry points so `main.rs` can name them concisely.
pub use pointer::BlockingPointerSource;
pub use publisher::HttpSamplePublisher;

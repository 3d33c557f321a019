//! Platform-specific pointer position queries.
//!
//! Reads the current cursor location in screen coordinates so the loop can
//! stamp it into a [`Sample`](crate::domain::Sample).
//!
//! # Platform implementations
//!
//! Each platform implements [`PlatformPointerQuery`]; the correct one is
//! selected at compile time via `#[cfg(target_os = ...)]` and re-exported as
//! `NativePointerQuery`:
//!
//! | Module    | OS      | API used                                   |
//! |-----------|---------|--------------------------------------------|
//! | `windows` | Windows | `GetCursorPos`                             |
//! | `linux`   | Linux   | `XQueryPointer` (Xlib)                     |
//! | `macos`   | macOS   | `CGEvent` location (Core Graphics)         |
//!
//! A [`MockPointerQuery`] is always compiled (not guarded by `#[cfg]`) so
//! tests on any platform can run without a physical display.
//!
//! # Blocking adapter
//!
//! The OS queries are synchronous.  [`BlockingPointerSource`] adapts any
//! [`PlatformPointerQuery`] into the application layer's async
//! [`PointerSource`] by offloading each call with
//! `tokio::task::spawn_blocking`, so a slow display-server round trip never
//! stalls the async executor.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;

use crate::application::stream_samples::PointerSource;

/// Error type for pointer query operations.
#[derive(Debug, Error)]
pub enum PointerQueryError {
    /// The platform API call failed.
    ///
    /// The inner string contains a human-readable description of the OS
    /// error, e.g., "XOpenDisplay failed; DISPLAY=<unset>".
    #[error("platform API error while querying the pointer: {0}")]
    PlatformError(String),
}

/// Trait for reading the pointer position on the current platform.
///
/// Implementations query the OS once per call and return the cursor
/// location as (x, y) in screen coordinates, origin at the top-left of the
/// primary display.
pub trait PlatformPointerQuery: Send + Sync {
    /// Returns the current cursor position.
    ///
    /// # Errors
    ///
    /// Returns [`PointerQueryError::PlatformError`] if the OS API call fails.
    fn cursor_position(&self) -> Result<(f64, f64), PointerQueryError>;
}

// ── Windows implementation ────────────────────────────────────────────────────

#[cfg(target_os = "windows")]
pub mod windows;

/// Re-export the Windows query as `NativePointerQuery` on Windows.
///
/// This alias lets the rest of the codebase reference `NativePointerQuery`
/// without knowing the OS at compile time — only this module contains the
/// platform-conditional logic.
#[cfg(target_os = "windows")]
pub use windows::WindowsPointerQuery as NativePointerQuery;

// ── Linux implementation ──────────────────────────────────────────────────────

#[cfg(target_os = "linux")]
pub mod linux;

/// Re-export the Linux query as `NativePointerQuery` on Linux.
#[cfg(target_os = "linux")]
pub use linux::LinuxPointerQuery as NativePointerQuery;

// ── macOS implementation ──────────────────────────────────────────────────────

#[cfg(target_os = "macos")]
pub mod macos;

/// Re-export the macOS query as `NativePointerQuery` on macOS.
#[cfg(target_os = "macos")]
pub use macos::MacosPointerQuery as NativePointerQuery;

// ── Blocking adapter ──────────────────────────────────────────────────────────

/// Adapts a synchronous [`PlatformPointerQuery`] into the async
/// [`PointerSource`] seam.
///
/// Each `position` call runs the OS query on the blocking thread pool, so
/// only the current iteration suspends while the host is consulted.
pub struct BlockingPointerSource<Q: PlatformPointerQuery + 'static> {
    query: Arc<Q>,
}

impl<Q: PlatformPointerQuery + 'static> BlockingPointerSource<Q> {
    /// Wraps the given platform query.
    pub fn new(query: Q) -> Self {
        Self {
            query: Arc::new(query),
        }
    }
}

#[async_trait]
impl<Q: PlatformPointerQuery + 'static> PointerSource for BlockingPointerSource<Q> {
    async fn position(&self) -> Result<(f64, f64), String> {
        let query = Arc::clone(&self.query);
        tokio::task::spawn_blocking(move || query.cursor_position())
            .await
            .map_err(|e| format!("pointer query task failed: {e}"))?
            .map_err(|e| e.to_string())
    }
}

// ── Mock implementation (always compiled for tests) ───────────────────────────

/// A mock pointer query that replays a scripted list of positions.
///
/// Used in unit tests and on machines without a display.  Does not make any
/// OS calls — positions are provided at construction time and replayed in
/// order; once only one remains it is returned forever, which mirrors a
/// cursor that stopped moving.
pub struct MockPointerQuery {
    positions: Mutex<VecDeque<(f64, f64)>>,
    /// When `true`, every call returns a `PlatformError`.  Use this to test
    /// error-handling paths in callers.
    pub should_fail: bool,
}

impl MockPointerQuery {
    /// Creates a query that always reports the cursor at (x, y).
    pub fn fixed(x: f64, y: f64) -> Self {
        Self::sequence(&[(x, y)])
    }

    /// Creates a query that replays `positions` in order, repeating the
    /// last one once the script is exhausted.
    pub fn sequence(positions: &[(f64, f64)]) -> Self {
        Self {
            positions: Mutex::new(positions.iter().copied().collect()),
            should_fail: false,
        }
    }

    /// Creates a query whose every call fails.
    pub fn failing() -> Self {
        Self {
            positions: Mutex::new(VecDeque::new()),
            should_fail: true,
        }
    }
}

impl PlatformPointerQuery for MockPointerQuery {
    fn cursor_position(&self) -> Result<(f64, f64), PointerQueryError> {
        if self.should_fail {
            return Err(PointerQueryError::PlatformError("mock failure".into()));
        }
        let mut positions = self.positions.lock().unwrap();
        let position = if positions.len() > 1 {
            positions.pop_front().unwrap()
        } else {
            *positions
                .front()
                .ok_or_else(|| PointerQueryError::PlatformError("no scripted positions".into()))?
        };
        Ok(position)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

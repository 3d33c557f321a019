//! macOS pointer query via Core Graphics.
//!
//! A `CGEvent` created without a type carries the current cursor location,
//! which avoids the accessibility-permission prompt that event taps would
//! trigger.  Core Graphics reports the location with a top-left origin on
//! the primary display, matching the Windows and Linux conventions used on
//! the wire.

use super::{PlatformPointerQuery, PointerQueryError};

/// macOS implementation of [`PlatformPointerQuery`] via Core Graphics.
pub struct MacosPointerQuery;

impl MacosPointerQuery {
    /// Creates a new `MacosPointerQuery`.
    pub fn new() -> Self {
        Self
    }
}

impl Default for MacosPointerQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformPointerQuery for MacosPointerQuery {
    fn cursor_position(&self) -> Result<(f64, f64), PointerQueryError> {
        query_via_core_graphics()
    }
}

/// Reads the cursor position from a fresh `CGEvent`.
///
/// # Errors
///
/// Returns [`PointerQueryError::PlatformError`] if the event source or the
/// event cannot be created, e.g. when no window server session exists.
#[cfg(target_os = "macos")]
fn query_via_core_graphics() -> Result<(f64, f64), PointerQueryError> {
    use core_graphics::event::CGEvent;
    use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};

    let source = CGEventSource::new(CGEventSourceStateID::CombinedSessionState).map_err(|()| {
        PointerQueryError::PlatformError("CGEventSource creation failed".to_string())
    })?;

    let event = CGEvent::new(source)
        .map_err(|()| PointerQueryError::PlatformError("CGEvent creation failed".to_string()))?;

    let location = event.location();
    Ok((location.x, location.y))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

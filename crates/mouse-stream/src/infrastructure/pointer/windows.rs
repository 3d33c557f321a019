//! Windows pointer query via `GetCursorPos`.
//!
//! `GetCursorPos` reports the cursor in virtual-screen coordinates, which
//! are multi-monitor aware: the origin is the top-left of the primary
//! display and secondary displays may produce negative values.

use super::{PlatformPointerQuery, PointerQueryError};

/// Windows implementation of [`PlatformPointerQuery`].
pub struct WindowsPointerQuery;

impl WindowsPointerQuery {
    /// Creates a new `WindowsPointerQuery`.
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsPointerQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformPointerQuery for WindowsPointerQuery {
    fn cursor_position(&self) -> Result<(f64, f64), PointerQueryError> {
        query_via_win32()
    }
}

/// Reads the cursor position using the Win32 `GetCursorPos` API.
///
/// # Errors
///
/// Returns [`PointerQueryError::PlatformError`] if the call fails, e.g.
/// when no interactive desktop is attached to the process session.
#[cfg(target_os = "windows")]
fn query_via_win32() -> Result<(f64, f64), PointerQueryError> {
    use windows::Win32::Foundation::POINT;
    use windows::Win32::UI::WindowsAndMessaging::GetCursorPos;

    let mut point = POINT::default();

    // SAFETY: `point` is a valid out-pointer for the duration of the call.
    unsafe { GetCursorPos(&mut point) }
        .map_err(|e| PointerQueryError::PlatformError(format!("GetCursorPos failed: {e}")))?;

    Ok((f64::from(point.x), f64::from(point.y)))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Smoke-test: on an interactive Windows session the query must succeed
    /// and report finite coordinates.
    #[test]
    fn test_windows_pointer_query_returns_finite_coordinates() {
        let query = WindowsPointerQuery::new();
        let (x, y) = query
            .cursor_position()
            .expect("cursor query must succeed on an interactive desktop");
        assert!(x.is_finite());
        assert!(y.is_finite());
    }
}

//! Scrollbar visibility resolution.
//!
//! Showing the horizontal scrollbar consumes a strip of height from the
//! vertical budget and vice versa, so the two visibility flags cannot be
//! computed independently in one pass. The resolver iterates to the fixed
//! point; a flag can only flip from hidden to shown within one
//! resolution, which bounds the loop at two extra passes.

use desplazar_core::Size;
use serde::{Deserialize, Serialize};

/// Default scrollbar strip thickness in pixels.
pub const DEFAULT_SCROLLBAR_THICKNESS: i32 = 16;

/// Pixel thickness of the strips reserved by visible scrollbars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollbarMetrics {
    /// Height of the horizontal scrollbar strip
    pub horizontal_thickness: i32,
    /// Width of the vertical scrollbar strip
    pub vertical_thickness: i32,
}

impl Default for ScrollbarMetrics {
    fn default() -> Self {
        Self {
            horizontal_thickness: DEFAULT_SCROLLBAR_THICKNESS,
            vertical_thickness: DEFAULT_SCROLLBAR_THICKNESS,
        }
    }
}

/// Outcome of a visibility resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Show the horizontal scrollbar
    pub show_horizontal: bool,
    /// Show the vertical scrollbar
    pub show_vertical: bool,
    /// Client size minus the reserved scrollbar strips, clamped to >= 0
    pub effective: Size,
}

/// Reconcile scrollbar visibility for both axes.
///
/// `force_horizontal`/`force_vertical` show a bar unconditionally. With
/// `auto_scroll` enabled, a bar is also shown when the canvas overflows
/// the effective client size on that axis; a zero client size never
/// produces a bar from the auto logic.
///
/// # Panics
///
/// Panics if the iteration fails to converge within two extra passes.
/// That is structurally impossible while reservation stays monotonic and
/// indicates a broken [`ScrollbarMetrics`] override.
#[must_use]
pub fn resolve(
    canvas: Size,
    client: Size,
    force_horizontal: bool,
    force_vertical: bool,
    auto_scroll: bool,
    metrics: ScrollbarMetrics,
) -> Resolution {
    let mut show_h = force_horizontal;
    let mut show_v = force_vertical;
    let mut effective = client;
    let mut extra_passes = 0;

    loop {
        let before = (show_h, show_v);

        // flags only ever flip false -> true here; reserving a strip never
        // grows the other axis's budget
        if auto_scroll && canvas.width > effective.width && client.width > 0 {
            show_h = true;
        }
        effective.height = client.height
            - if show_h {
                metrics.horizontal_thickness
            } else {
                0
            };

        if auto_scroll && canvas.height > effective.height && client.height > 0 {
            show_v = true;
        }
        effective.width = client.width
            - if show_v {
                metrics.vertical_thickness
            } else {
                0
            };

        if (show_h, show_v) == before {
            break;
        }
        extra_passes += 1;
        assert!(
            extra_passes <= 2,
            "scrollbar visibility resolution did not converge"
        );
    }

    Resolution {
        show_horizontal: show_h,
        show_vertical: show_v,
        effective: effective.clamp_non_negative(),
    }
}

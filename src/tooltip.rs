//! Tooltip placement. The tooltip is offset from a segment's on-screen
//! anchor toward the viewport center, which keeps it off the wheel's edge
//! and away from the segment's own label wherever rotation/zoom has carried
//! the segment.

use crate::geom::{polar_to_cart, CENTER, VIEW_SIZE};

/// Distance in page pixels between the segment anchor and the tooltip.
pub const TOOLTIP_OFFSET_PX: f64 = 100.0;

/// Project a segment's anchor (mid-angle, mid-radius in logical units)
/// through the current rotation/zoom and the SVG's on-screen rect into page
/// coordinates. Zoom scales radially around the wheel center.
#[allow(clippy::too_many_arguments)]
pub fn segment_screen_point(
    mid_deg: f64,
    mid_radius: f64,
    rotation: f64,
    zoom: f64,
    rect_left: f64,
    rect_top: f64,
    rect_width: f64,
    rect_height: f64,
) -> (f64, f64) {
    let (lx, ly) = polar_to_cart(CENTER, CENTER, mid_radius * zoom, mid_deg + rotation);
    (
        rect_left + lx / VIEW_SIZE * rect_width,
        rect_top + ly / VIEW_SIZE * rect_height,
    )
}

/// Tooltip position [`TOOLTIP_OFFSET_PX`] away from `(px, py)` in the
/// direction of the viewport's geometric center. A zero-length direction
/// vector is treated as length 1 so the anchor itself comes back instead of
/// NaN.
pub fn place_tooltip(px: f64, py: f64, viewport_w: f64, viewport_h: f64) -> (f64, f64) {
    let dx = viewport_w / 2.0 - px;
    let dy = viewport_h / 2.0 - py;
    let mut len = (dx * dx + dy * dy).sqrt();
    if len <= 0.0 {
        len = 1.0;
    }
    (
        px + dx / len * TOOLTIP_OFFSET_PX,
        py + dy / len * TOOLTIP_OFFSET_PX,
    )
}

//! Angle, arc, and label math for the wheel.
//!
//! All angles use the wheel convention: 0° points at 12 o'clock and angles
//! increase clockwise. Every polar↔Cartesian conversion goes through
//! [`deg_to_rad`] so the convention holds everywhere.

/// Side length of the fixed logical viewport the wheel is drawn in. The SVG
/// scales responsively but all coordinates are computed in this space.
pub const VIEW_SIZE: f64 = 800.0;

/// Wheel center in logical units.
pub const CENTER: f64 = VIEW_SIZE / 2.0;

/// Ring-1 labels longer than this are rotated tangentially like the outer
/// rings instead of staying upright.
pub const RING1_UPRIGHT_MAX_LEN: usize = 8;

/// Ring-3 labels longer than this wrap onto two lines (when multi-word).
pub const LABEL_WRAP_MIN_LEN: usize = 10;

/// Convert a wheel-convention angle to radians (math angle = deg − 90).
pub fn deg_to_rad(deg: f64) -> f64 {
    (deg - 90.0).to_radians()
}

/// Point at radius `r` and wheel angle `deg` around `(cx, cy)`. Periodic in
/// `deg`; any real value is accepted.
pub fn polar_to_cart(cx: f64, cy: f64, r: f64, deg: f64) -> (f64, f64) {
    let rad = deg_to_rad(deg);
    (cx + r * rad.cos(), cy + r * rad.sin())
}

/// Normalize an angle into [0, 360).
pub fn normalize_deg(deg: f64) -> f64 {
    let d = deg % 360.0;
    if d < 0.0 { d + 360.0 } else { d }
}

/// Arithmetic mean of two angles; label anchors sit at the mid-angle.
pub fn mid_angle(start_deg: f64, end_deg: f64) -> f64 {
    (start_deg + end_deg) / 2.0
}

/// Closed SVG path for an annular sector: outer arc clockwise from start to
/// end, radial line inward, inner arc counter-clockwise back, close.
///
/// Caller guarantees `start_deg <= end_deg` and `0 <= r_inner <= r_outer`.
/// A full-circle span is pulled in by a hair's width: coincident arc
/// endpoints would make SVG drop the arc entirely, so a sole sibling still
/// renders as a (visually closed) ring.
pub fn describe_arc(
    cx: f64,
    cy: f64,
    r_inner: f64,
    r_outer: f64,
    start_deg: f64,
    end_deg: f64,
) -> String {
    let end_deg = if end_deg - start_deg >= 360.0 {
        start_deg + 359.99
    } else {
        end_deg
    };
    let large_arc = if end_deg - start_deg > 180.0 { 1 } else { 0 };
    let (ox0, oy0) = polar_to_cart(cx, cy, r_outer, start_deg);
    let (ox1, oy1) = polar_to_cart(cx, cy, r_outer, end_deg);
    let (ix1, iy1) = polar_to_cart(cx, cy, r_inner, end_deg);
    let (ix0, iy0) = polar_to_cart(cx, cy, r_inner, start_deg);
    format!(
        "M {ox0:.3} {oy0:.3} \
         A {r_outer:.3} {r_outer:.3} 0 {large_arc} 1 {ox1:.3} {oy1:.3} \
         L {ix1:.3} {iy1:.3} \
         A {r_inner:.3} {r_inner:.3} 0 {large_arc} 0 {ix0:.3} {iy0:.3} \
         Z"
    )
}

/// Rotation for a label whose baseline runs along the arc tangent at
/// `mid_deg`. When the screen-space angle (tangent plus the current wheel
/// rotation) lands on the left half of the circle the text would render
/// upside down, so the tangent is flipped by 180°. Must be re-evaluated on
/// every rotation change.
pub fn tangential_label_rotation(mid_deg: f64, wheel_rotation: f64) -> f64 {
    let tangent = mid_deg + 90.0;
    let screen = normalize_deg(tangent + wheel_rotation);
    if screen > 90.0 && screen < 270.0 {
        tangent + 180.0
    } else {
        tangent
    }
}

/// Whether a label follows the arc tangent (rings 2–3 always do; ring-1
/// labels only when too long to sit upright comfortably). Thresholds count
/// characters, not bytes, so accented names measure the same as plain ones.
pub fn label_is_tangential(ring: u8, name: &str) -> bool {
    ring >= 2 || name.chars().count() > RING1_UPRIGHT_MAX_LEN
}

/// Split a long multi-word ring-3 label into two stacked lines at the first
/// word boundary. Everything else renders on a single line.
pub fn split_label(name: &str, ring: u8) -> (String, Option<String>) {
    if ring >= 3 && name.chars().count() > LABEL_WRAP_MIN_LEN {
        if let Some(idx) = name.find(' ') {
            return (name[..idx].to_string(), Some(name[idx + 1..].to_string()));
        }
    }
    (name.to_string(), None)
}

//! Pure gesture math shared by the wheel's pointer, wheel, and touch
//! handlers. Everything here is stateless; the live gesture state lives in
//! [`crate::state::WheelState`].

use crate::geom::{CENTER, VIEW_SIZE};

pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 3.0;

/// Zoom change per unit of wheel `deltaY`.
pub const WHEEL_ZOOM_SENSITIVITY: f64 = 0.0015;

/// Polar angle (wheel convention degrees) of a client-space point relative to
/// the wheel center. Client coordinates are normalized through the element's
/// on-screen rect into the fixed logical viewport first, so the result is
/// unaffected by responsive scaling or page offset.
pub fn pointer_angle(
    client_x: f64,
    client_y: f64,
    rect_left: f64,
    rect_top: f64,
    rect_width: f64,
    rect_height: f64,
) -> f64 {
    let w = if rect_width > 0.0 { rect_width } else { 1.0 };
    let h = if rect_height > 0.0 { rect_height } else { 1.0 };
    let dx = (client_x - rect_left) / w * VIEW_SIZE - CENTER;
    let dy = (client_y - rect_top) / h * VIEW_SIZE - CENTER;
    // Screen y points down, so atan2(dy, dx) already increases clockwise;
    // +90 moves the zero from 3 o'clock to 12 o'clock.
    dy.atan2(dx).to_degrees() + 90.0
}

/// Normalize a raw angular difference into (−180, 180] with a single ±360
/// correction, so a drag crossing the 0°/360° seam stays continuous.
pub fn wrap_delta(delta: f64) -> f64 {
    if delta > 180.0 {
        delta - 360.0
    } else if delta <= -180.0 {
        delta + 360.0
    } else {
        delta
    }
}

/// Rotation produced by a drag from `anchor_angle` (captured at pointer-down
/// together with `anchor_rotation`) to `current_angle`.
pub fn drag_rotation(anchor_angle: f64, anchor_rotation: f64, current_angle: f64) -> f64 {
    anchor_rotation + wrap_delta(current_angle - anchor_angle)
}

pub fn clamp_zoom(zoom: f64) -> f64 {
    zoom.clamp(ZOOM_MIN, ZOOM_MAX)
}

/// Wheel-event zoom: scrolling up (negative delta) zooms in.
pub fn wheel_zoom(zoom: f64, delta_y: f64) -> f64 {
    clamp_zoom(zoom - delta_y * WHEEL_ZOOM_SENSITIVITY)
}

/// Pinch zoom from the baseline captured at two-finger touch-start. A
/// degenerate baseline distance falls back to scale 1 rather than dividing
/// by zero.
pub fn pinch_zoom(initial_zoom: f64, initial_dist: f64, current_dist: f64) -> f64 {
    let scale = if initial_dist > 0.0 {
        current_dist / initial_dist
    } else {
        1.0
    };
    clamp_zoom(initial_zoom * scale)
}

/// Euclidean distance between the two contact points of a two-finger touch.
pub fn two_finger_distance(touches: &web_sys::TouchList) -> Option<f64> {
    if touches.length() != 2 {
        return None;
    }
    let t0 = touches.get(0)?;
    let t1 = touches.get(1)?;
    let dx = t1.client_x() as f64 - t0.client_x() as f64;
    let dy = t1.client_y() as f64 - t0.client_y() as f64;
    Some((dx * dx + dy * dy).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_pointer_angle_cardinal_directions() {
        // Unscaled 800×800 rect at the page origin
        assert!((pointer_angle(400.0, 0.0, 0.0, 0.0, 800.0, 800.0) - 0.0).abs() < EPS);
        assert!((pointer_angle(800.0, 400.0, 0.0, 0.0, 800.0, 800.0) - 90.0).abs() < EPS);
        assert!((pointer_angle(400.0, 800.0, 0.0, 0.0, 800.0, 800.0) - 180.0).abs() < EPS);
    }

    #[test]
    fn test_pointer_angle_corrects_for_element_scale_and_offset() {
        // The same logical point through a half-size rect offset on the page
        let full = pointer_angle(600.0, 200.0, 0.0, 0.0, 800.0, 800.0);
        let scaled = pointer_angle(100.0 + 300.0, 50.0 + 100.0, 100.0, 50.0, 400.0, 400.0);
        assert!((full - scaled).abs() < EPS);
    }

    #[test]
    fn test_wrap_delta() {
        assert_eq!(wrap_delta(20.0), 20.0);
        assert_eq!(wrap_delta(-20.0), -20.0);
        assert_eq!(wrap_delta(180.0), 180.0);
        assert_eq!(wrap_delta(-340.0), 20.0);
        assert_eq!(wrap_delta(340.0), -20.0);
    }

    #[test]
    fn test_drag_rotation_small_move() {
        // R0 + (A1 − A0) exactly when |A1 − A0| < 180
        assert!((drag_rotation(30.0, 45.0, 75.0) - 90.0).abs() < EPS);
        assert!((drag_rotation(75.0, 90.0, 30.0) - 45.0).abs() < EPS);
    }

    #[test]
    fn test_drag_rotation_across_the_seam() {
        // 350° → 10° is a +20° move, not −340°
        assert!((drag_rotation(350.0, 0.0, 10.0) - 20.0).abs() < EPS);
        // and the reverse crossing is −20°
        assert!((drag_rotation(10.0, 0.0, 350.0) + 20.0).abs() < EPS);
    }

    #[test]
    fn test_wheel_zoom_stays_clamped() {
        let mut zoom = 1.0;
        for _ in 0..100 {
            zoom = wheel_zoom(zoom, -10_000.0);
        }
        assert_eq!(zoom, ZOOM_MAX);
        for _ in 0..100 {
            zoom = wheel_zoom(zoom, 10_000.0);
        }
        assert_eq!(zoom, ZOOM_MIN);
    }

    #[test]
    fn test_pinch_zoom_scales_with_distance_ratio() {
        assert!((pinch_zoom(1.0, 100.0, 200.0) - 2.0).abs() < EPS);
        assert!((pinch_zoom(2.0, 100.0, 50.0) - 1.0).abs() < EPS);
        // Clamped at both ends
        assert_eq!(pinch_zoom(1.0, 10.0, 10_000.0), ZOOM_MAX);
        assert_eq!(pinch_zoom(1.0, 10_000.0, 10.0), ZOOM_MIN);
    }

    #[test]
    fn test_pinch_zoom_zero_baseline_is_identity() {
        assert_eq!(pinch_zoom(1.5, 0.0, 300.0), 1.5);
    }
}

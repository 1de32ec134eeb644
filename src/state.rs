//! Shared view state. Created once at mount, provided through Leptos context,
//! mutated only by the gesture handlers in the wheel component.

use leptos::prelude::*;

/// The active gesture, as a tagged state so a drag anchor and a pinch
/// baseline can never coexist. Wheel-zoom is stateless and works in any
/// state; the tooltip is an independent track in [`WheelState`].
#[derive(Clone, Debug, PartialEq)]
pub enum Gesture {
    Idle,
    Dragging {
        /// Pointer polar angle at pointer-down, wheel convention degrees.
        anchor_angle: f64,
        /// Wheel rotation at pointer-down.
        anchor_rotation: f64,
    },
    Pinching {
        /// Finger distance at two-finger touch-start, client pixels.
        initial_dist: f64,
        /// Zoom at two-finger touch-start.
        initial_zoom: f64,
    },
}

/// Tooltip currently on screen, with its page-pixel position.
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveTooltip {
    pub segment_id: String,
    pub name: String,
    pub description: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy)]
pub struct WheelState {
    /// Cumulative rotation in degrees; unbounded, never wrapped.
    pub rotation: RwSignal<f64>,
    /// Display zoom, kept within the gesture module's clamp range.
    pub zoom: RwSignal<f64>,
    pub gesture: RwSignal<Gesture>,
    pub tooltip: RwSignal<Option<ActiveTooltip>>,
}

impl WheelState {
    pub fn new() -> Self {
        Self {
            rotation: RwSignal::new(0.0),
            zoom: RwSignal::new(1.0),
            gesture: RwSignal::new(Gesture::Idle),
            tooltip: RwSignal::new(None),
        }
    }

    /// Restore the mounted defaults, abandoning any in-progress gesture. The
    /// next gesture event re-anchors from the reset values.
    pub fn reset(&self) {
        self.rotation.set(0.0);
        self.zoom.set(1.0);
        self.gesture.set(Gesture::Idle);
        self.tooltip.set(None);
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture.get_untracked(), Gesture::Dragging { .. })
    }
}

impl Default for WheelState {
    fn default() -> Self {
        Self::new()
    }
}

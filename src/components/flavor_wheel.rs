use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::geom::{self, CENTER, VIEW_SIZE};
use crate::gesture;
use crate::palette;
use crate::state::{ActiveTooltip, Gesture, WheelState};
use crate::taxonomy::{self, Segment};
use crate::tooltip;

/// Inner/outer radius for each ring, logical units. Data deeper than three
/// levels is tolerated by the flattener and drawn in the outermost band.
fn ring_radii(ring: u8) -> (f64, f64) {
    match ring {
        1 => (92.0, 180.0),
        2 => (180.0, 272.0),
        _ => (272.0, 386.0),
    }
}

const HUB_RADIUS: f64 = 84.0;

fn viewport_size() -> (f64, f64) {
    match web_sys::window() {
        Some(win) => (
            win.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(VIEW_SIZE),
            win.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(VIEW_SIZE),
        ),
        None => (VIEW_SIZE, VIEW_SIZE),
    }
}

/// Short arc with an arrowhead just inside the hub rim, hinting that the
/// wheel can be spun.
fn rotation_hint_views() -> impl IntoView {
    let r = HUB_RADIUS - 12.0;
    let (x0, y0) = geom::polar_to_cart(CENTER, CENTER, r, 230.0);
    let (x1, y1) = geom::polar_to_cart(CENTER, CENTER, r, 310.0);
    let arc = format!("M {x0:.1} {y0:.1} A {r:.1} {r:.1} 0 0 1 {x1:.1} {y1:.1}");

    // Arrowhead at the arc's end, pointing along the tangent
    let (tip_x, tip_y) = geom::polar_to_cart(CENTER, CENTER, r, 318.0);
    let (back_out_x, back_out_y) = geom::polar_to_cart(CENTER, CENTER, r + 5.0, 308.0);
    let (back_in_x, back_in_y) = geom::polar_to_cart(CENTER, CENTER, r - 5.0, 308.0);
    let head = format!(
        "{tip_x:.1},{tip_y:.1} {back_out_x:.1},{back_out_y:.1} {back_in_x:.1},{back_in_y:.1}"
    );

    view! {
        <path d=arc class="hub-hint-arc" fill="none" />
        <polygon points=head class="hub-hint-arrow" />
    }
}

#[component]
pub fn FlavorWheel(#[prop(optional)] interactive: bool) -> impl IntoView {
    let state = expect_context::<WheelState>();
    let svg_ref = NodeRef::<leptos::svg::Svg>::new();

    let mut segments: Vec<Segment> = match taxonomy::load_taxonomy() {
        Ok(tax) => taxonomy::flatten(&tax, 0.0, true),
        Err(err) => {
            log::error!("bundled taxonomy failed to parse: {err}");
            Vec::new()
        }
    };
    // Inner rings first so ring order matches draw order
    segments.sort_by_key(|s| s.ring);
    log::info!("flattened {} taxonomy segments", segments.len());

    // Pointer polar angle in the wheel's logical space, corrected for the
    // element's on-screen scale and offset.
    let event_angle = move |client_x: f64, client_y: f64| -> Option<f64> {
        let svg = svg_ref.get_untracked()?;
        let rect = svg.get_bounding_client_rect();
        Some(gesture::pointer_angle(
            client_x,
            client_y,
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height(),
        ))
    };

    // ── Rotate-drag (unified pointer events; fires for mouse and touch) ─────

    let on_pointerdown = move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        let Some(angle) = event_angle(ev.client_x() as f64, ev.client_y() as f64) else {
            return;
        };
        // Keep receiving move/up even when the pointer leaves the element
        if let Some(target) = ev.target() {
            if let Ok(el) = target.dyn_into::<web_sys::Element>() {
                let _ = el.set_pointer_capture(ev.pointer_id());
            }
        }
        state.gesture.set(Gesture::Dragging {
            anchor_angle: angle,
            anchor_rotation: state.rotation.get_untracked(),
        });
    };

    let on_pointermove = move |ev: web_sys::PointerEvent| {
        let Gesture::Dragging { anchor_angle, anchor_rotation } = state.gesture.get_untracked()
        else {
            return;
        };
        let Some(angle) = event_angle(ev.client_x() as f64, ev.client_y() as f64) else {
            return;
        };
        state
            .rotation
            .set(gesture::drag_rotation(anchor_angle, anchor_rotation, angle));
    };

    let end_drag = move |_ev: web_sys::PointerEvent| {
        if state.is_dragging() {
            state.gesture.set(Gesture::Idle);
        }
    };

    // ── Wheel-zoom (always active, independent of drag state) ───────────────

    let on_wheel = move |ev: web_sys::WheelEvent| {
        ev.prevent_default();
        state.zoom.update(|z| *z = gesture::wheel_zoom(*z, ev.delta_y()));
    };

    // ── Pinch-zoom (raw touch events; needs both contact points) ────────────

    let on_touchstart = move |ev: web_sys::TouchEvent| {
        let touches = ev.touches();
        if touches.length() != 2 {
            return;
        }
        ev.prevent_default();
        if let Some(dist) = gesture::two_finger_distance(&touches) {
            // A second finger replaces any single-finger drag anchor, so
            // rotation and zoom never fight over the same touch sequence.
            state.gesture.set(Gesture::Pinching {
                initial_dist: dist,
                initial_zoom: state.zoom.get_untracked(),
            });
        }
    };

    let on_touchmove = move |ev: web_sys::TouchEvent| {
        let Gesture::Pinching { initial_dist, initial_zoom } = state.gesture.get_untracked()
        else {
            return;
        };
        let touches = ev.touches();
        if touches.length() != 2 {
            return;
        }
        ev.prevent_default();
        if let Some(dist) = gesture::two_finger_distance(&touches) {
            state.zoom.set(gesture::pinch_zoom(initial_zoom, initial_dist, dist));
        }
    };

    let on_touchend = move |ev: web_sys::TouchEvent| {
        if ev.touches().length() < 2
            && matches!(state.gesture.get_untracked(), Gesture::Pinching { .. })
        {
            state.gesture.set(Gesture::Idle);
        }
    };

    // ── Transforms ───────────────────────────────────────────────────────────

    let zoom_transform = move || {
        let z = state.zoom.get();
        format!(
            "translate({CENTER} {CENTER}) scale({z}) translate({nc} {nc})",
            nc = -CENTER
        )
    };
    let rotate_transform = move || format!("rotate({} {CENTER} {CENTER})", state.rotation.get());
    // The hub sits inside the rotating group but counter-rotates so its
    // title and controls stay upright.
    let hub_transform = move || format!("rotate({} {CENTER} {CENTER})", -state.rotation.get());

    let on_reset_click = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        state.reset();
    };
    let swallow_pointerdown = move |ev: web_sys::PointerEvent| {
        ev.stop_propagation();
    };

    // ── Segments ─────────────────────────────────────────────────────────────

    let rendered_segments = segments
        .into_iter()
        .map(|seg| {
            let (r_inner, r_outer) = ring_radii(seg.ring);
            let path = geom::describe_arc(
                CENTER,
                CENTER,
                r_inner,
                r_outer,
                seg.start_angle.min(seg.end_angle),
                seg.start_angle.max(seg.end_angle),
            );
            let fill = palette::resolve_fill(&seg.category_id, seg.ring);
            let mid = geom::mid_angle(seg.start_angle, seg.end_angle);
            let mid_radius = (r_inner + r_outer) / 2.0;
            let (lx, ly) = geom::polar_to_cart(CENTER, CENTER, mid_radius, mid);

            // Re-evaluated on every rotation change so labels never render
            // upside down, and short category labels stay screen-upright.
            let tangential = geom::label_is_tangential(seg.ring, &seg.name);
            let label_transform = move || {
                let rot = state.rotation.get();
                let angle = if tangential {
                    geom::tangential_label_rotation(mid, rot)
                } else {
                    -rot
                };
                format!("rotate({angle:.3} {lx:.3} {ly:.3})")
            };

            let (line1, line2) = geom::split_label(&seg.name, seg.ring);
            let label_class = format!("label ring{}", seg.ring);

            let show_tooltip = {
                let id = seg.id.clone();
                let name = seg.name.clone();
                let description = seg.description.clone();
                move || {
                    let Some(svg) = svg_ref.get_untracked() else { return };
                    let rect = svg.get_bounding_client_rect();
                    let (vw, vh) = viewport_size();
                    let (px, py) = tooltip::segment_screen_point(
                        mid,
                        mid_radius,
                        state.rotation.get_untracked(),
                        state.zoom.get_untracked(),
                        rect.left(),
                        rect.top(),
                        rect.width(),
                        rect.height(),
                    );
                    let (x, y) = tooltip::place_tooltip(px, py, vw, vh);
                    state.tooltip.set(Some(ActiveTooltip {
                        segment_id: id.clone(),
                        name: name.clone(),
                        description: description.clone(),
                        x,
                        y,
                    }));
                }
            };

            let on_enter = {
                let show = show_tooltip.clone();
                move |_ev: web_sys::PointerEvent| {
                    if !interactive || state.is_dragging() {
                        return;
                    }
                    show();
                }
            };
            let on_move = {
                let id = seg.id.clone();
                let show = show_tooltip.clone();
                move |_ev: web_sys::PointerEvent| {
                    if !interactive {
                        return;
                    }
                    // Only refresh a tooltip this segment still owns; stale
                    // updates for a dismissed segment are dropped.
                    let owns = state
                        .tooltip
                        .with_untracked(|t| t.as_ref().is_some_and(|t| t.segment_id == id));
                    if owns && !state.is_dragging() {
                        show();
                    }
                }
            };
            let on_leave = {
                let id = seg.id.clone();
                move |_ev: web_sys::PointerEvent| {
                    state.tooltip.update(|t| {
                        if t.as_ref().is_some_and(|t| t.segment_id == id) {
                            *t = None;
                        }
                    });
                }
            };
            let on_click = {
                let id = seg.id.clone();
                let show = show_tooltip.clone();
                move |ev: web_sys::MouseEvent| {
                    if !interactive {
                        return;
                    }
                    // Keep the tap from doubling as a drag start on the wheel
                    ev.stop_propagation();
                    let showing = state
                        .tooltip
                        .with_untracked(|t| t.as_ref().is_some_and(|t| t.segment_id == id));
                    if showing {
                        state.tooltip.set(None);
                    } else {
                        show();
                    }
                }
            };

            view! {
                <g class="segment">
                    <path
                        d=path
                        fill=fill
                        stroke="#1d130a"
                        stroke-width="1.5"
                        on:pointerenter=on_enter
                        on:pointermove=on_move
                        on:pointerleave=on_leave
                        on:click=on_click
                    />
                    <text
                        x=lx
                        y=ly
                        transform=label_transform
                        class=label_class
                        text-anchor="middle"
                        dominant-baseline="middle"
                        pointer-events="none"
                    >
                        {match line2 {
                            Some(second) => view! {
                                <tspan x=lx dy="-0.45em">{line1}</tspan>
                                <tspan x=lx dy="1.1em">{second}</tspan>
                            }
                            .into_any(),
                            None => view! { <tspan x=lx>{line1}</tspan> }.into_any(),
                        }}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <div class="wheel-container">
            <svg
                node_ref=svg_ref
                class="wheel"
                viewBox=format!("0 0 {VIEW_SIZE} {VIEW_SIZE}")
                on:pointerdown=on_pointerdown
                on:pointermove=on_pointermove
                on:pointerup=end_drag
                on:pointerleave=end_drag
                on:wheel=on_wheel
                on:touchstart=on_touchstart
                on:touchmove=on_touchmove
                on:touchend=on_touchend
                on:touchcancel=on_touchend
            >
                <g transform=zoom_transform>
                    <g transform=rotate_transform>
                        {rendered_segments}
                        <g transform=hub_transform>
                            <circle
                                cx=CENTER
                                cy=CENTER
                                r=HUB_RADIUS
                                class="hub"
                            />
                            <text
                                x=CENTER
                                y={CENTER - 16.0}
                                class="hub-title"
                                text-anchor="middle"
                            >"Honey"</text>
                            <text
                                x=CENTER
                                y={CENTER + 8.0}
                                class="hub-subtitle"
                                text-anchor="middle"
                            >"Flavor Wheel"</text>
                            {interactive.then(|| view! {
                                {rotation_hint_views()}
                                <g
                                    class="hub-reset"
                                    on:pointerdown=swallow_pointerdown
                                    on:click=on_reset_click
                                >
                                    <text
                                        x=CENTER
                                        y={CENTER + 34.0}
                                        text-anchor="middle"
                                    >"reset"</text>
                                </g>
                            })}
                        </g>
                    </g>
                </g>
            </svg>
        </div>
    }
}

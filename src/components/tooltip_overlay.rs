use leptos::prelude::*;
use crate::state::WheelState;

/// Fixed-position overlay showing the active segment's name and description.
/// Position is computed by the tooltip module when a segment is hovered or
/// tapped.
#[component]
pub fn TooltipOverlay() -> impl IntoView {
    let state = expect_context::<WheelState>();

    view! {
        {move || state.tooltip.get().map(|tip| view! {
            <div
                class="tooltip"
                style:left=format!("{:.0}px", tip.x)
                style:top=format!("{:.0}px", tip.y)
            >
                <div class="tooltip-name">{tip.name}</div>
                <div class="tooltip-desc">{tip.description}</div>
            </div>
        })}
    }
}

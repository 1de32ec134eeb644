use leptos::prelude::*;
use crate::components::flavor_wheel::FlavorWheel;
use crate::components::tooltip_overlay::TooltipOverlay;
use crate::state::WheelState;

#[component]
pub fn App() -> impl IntoView {
    let state = WheelState::new();
    provide_context(state);

    view! {
        <div class="app">
            <FlavorWheel interactive=true />
            <TooltipOverlay />
        </div>
    }
}

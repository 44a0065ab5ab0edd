//! Toggle control for the wake lock.

use leptos::prelude::*;
use wakelock::presenter::{WakeState, render};

/// Button labelled "ON" / "OFF" / "N/A"; disabled in the error state.
#[component]
pub fn ToggleButton(state: RwSignal<WakeState>, on_toggle: Callback<()>) -> impl IntoView {
    let presentation = move || render(state.get());

    view! {
        <button
            id="toggleWakeLockButton"
            class="toggle"
            class:off=move || presentation().toggle_off
            disabled=move || !presentation().toggle_enabled
            on:click=move |_| on_toggle.run(())
        >
            {move || presentation().toggle_text}
        </button>
    }
}

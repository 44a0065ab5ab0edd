//! Status region.

use leptos::prelude::*;
use wakelock::presenter::{WakeState, render};

#[component]
pub fn StatusMessage(state: RwSignal<WakeState>) -> impl IntoView {
    let presentation = move || render(state.get());

    view! {
        <p id="statusMessage" class=move || format!("status {}", presentation().status_class)>
            {move || presentation().status_text}
        </p>
    }
}

//! Clock region. Text holds two lines; the stylesheet keeps the line break.

use leptos::prelude::*;

#[component]
pub fn CurrentTime(text: RwSignal<String>) -> impl IntoView {
    view! {
        <p id="currentTime" class="current-time">
            {move || text.get()}
        </p>
    }
}

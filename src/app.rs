//! Root application component.
//!
//! Wires the wakelock controller and clock ticker to the three page
//! elements. The browser side (wake-lock API, visibility events, alerts,
//! interval timer) only exists under the `csr` feature.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use wakelock::presenter::WakeState;

use crate::components::{current_time::CurrentTime, status_message::StatusMessage, toggle_button::ToggleButton};
use crate::config::AppConfig;

/// Root application component.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    let wake = RwSignal::new(WakeState::default());
    let clock = RwSignal::new(String::new());

    // The controller is `Rc`-based; keep it in local storage so the
    // callback stays `Send`.
    let toggle = StoredValue::new_local(start(&config, wake, clock));
    let on_toggle = Callback::new(move |()| toggle.with_value(|run| run()));

    view! {
        <Title text="Screen Keep-Alive"/>
        <main class="keep-awake">
            <h1>"Screen Keep-Alive"</h1>
            <ToggleButton state=wake on_toggle=on_toggle/>
            <StatusMessage state=wake/>
            <CurrentTime text=clock/>
        </main>
    }
}

/// Build the controller, start the clock, and return the toggle action.
#[cfg(feature = "csr")]
fn start(config: &AppConfig, wake: RwSignal<WakeState>, clock: RwSignal<String>) -> Box<dyn Fn()> {
    use std::rc::Rc;

    use wakelock::clock::ClockTicker;
    use wakelock::controller::WakeLockController;
    use wasm_bindgen_futures::spawn_local;

    use crate::browser::clock::{IntlFormat, JsClock};
    use crate::browser::notify::AlertNotifier;
    use crate::browser::visibility;
    use crate::browser::wake_lock::BrowserWakeLock;

    let controller = WakeLockController::new(BrowserWakeLock, move |state: WakeState| wake.set(state), AlertNotifier);

    let on_visibility = Rc::clone(&controller);
    visibility::listen(move |visibility| {
        let controller = Rc::clone(&on_visibility);
        spawn_local(async move { controller.on_visibility_change(visibility).await });
    });

    crate::browser::clock::start(ClockTicker::new(
        JsClock,
        IntlFormat::new(config.locale.as_deref()),
        move |text: &str| clock.set(text.to_owned()),
    ));

    Box::new(move || {
        let controller = Rc::clone(&controller);
        spawn_local(async move { controller.toggle().await });
    })
}

#[cfg(not(feature = "csr"))]
fn start(_config: &AppConfig, _wake: RwSignal<WakeState>, _clock: RwSignal<String>) -> Box<dyn Fn()> {
    Box::new(|| {})
}

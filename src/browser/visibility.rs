//! `document.visibilitychange` wiring.

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::VisibilityState;

use wakelock::platform::Visibility;

/// Current page visibility. Treats anything other than `visible` as hidden.
pub fn current() -> Visibility {
    let state = web_sys::window().and_then(|w| w.document()).map(|d| d.visibility_state());
    match state {
        Some(VisibilityState::Visible) => Visibility::Visible,
        _ => Visibility::Hidden,
    }
}

/// Call `handler` with the new visibility on every change, for the page's lifetime.
pub fn listen(handler: impl Fn(Visibility) + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        warn!("no document; visibility changes will not be tracked");
        return;
    };
    let cb = Closure::<dyn Fn()>::new(move || handler(current()));
    if let Err(err) = document.add_event_listener_with_callback("visibilitychange", cb.as_ref().unchecked_ref()) {
        warn!("visibilitychange listener failed: {err:?}");
        return;
    }
    cb.forget();
}

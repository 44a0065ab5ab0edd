//! Screen Wake Lock API over web-sys.

use js_sys::{Function, Reflect};
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{WakeLockSentinel, WakeLockType};

use wakelock::error::AcquireError;
use wakelock::platform::{WakeLockHandle, WakeLockPlatform};

/// `navigator.wakeLock` of the current window.
pub struct BrowserWakeLock;

impl WakeLockPlatform for BrowserWakeLock {
    type Handle = BrowserSentinel;

    /// `'wakeLock' in navigator`.
    fn is_supported(&self) -> bool {
        web_sys::window().is_some_and(|w| Reflect::has(&w.navigator(), &JsValue::from_str("wakeLock")).unwrap_or(false))
    }

    async fn request(&self) -> Result<BrowserSentinel, AcquireError> {
        if !self.is_supported() {
            return Err(AcquireError::Unsupported);
        }
        let window = web_sys::window().ok_or(AcquireError::Unsupported)?;
        let promise = window.navigator().wake_lock().request(WakeLockType::Screen);
        let sentinel = JsFuture::from(promise).await.map_err(|err| rejection(&err))?;
        Ok(BrowserSentinel { sentinel: sentinel.unchecked_into() })
    }
}

/// A granted `WakeLockSentinel`.
pub struct BrowserSentinel {
    sentinel: WakeLockSentinel,
}

impl WakeLockHandle for BrowserSentinel {
    fn on_release(&self, callback: Box<dyn FnOnce()>) {
        // The JS side frees a once-closure after its single call.
        let listener = Closure::once_into_js(callback);
        self.sentinel.set_onrelease(Some(listener.unchecked_ref::<Function>()));
    }

    fn release(&self) {
        let promise = self.sentinel.release();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                warn!("wake lock release failed: {err:?}");
            }
        });
    }
}

/// Map a rejected `request()` promise (a `DOMException`) to an error.
fn rejection(err: &JsValue) -> AcquireError {
    let field = |key: &str| Reflect::get(err, &JsValue::from_str(key)).ok().and_then(|v| v.as_string());
    AcquireError::Rejected {
        name: field("name").unwrap_or_else(|| "Error".to_owned()),
        message: field("message").unwrap_or_else(|| format!("{err:?}")),
    }
}

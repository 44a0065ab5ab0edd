//! Capability traits for everything the controller needs from the browser.
//!
//! The host crate implements these over web-sys; tests implement them with
//! in-memory fakes.

use std::future::Future;

use crate::error::AcquireError;

/// Page visibility as reported by `document.visibilityState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// A live wake-lock grant.
pub trait WakeLockHandle {
    /// Register a callback fired when the platform releases this lock.
    ///
    /// Fires at most once. It may also fire after a manual [`release`].
    ///
    /// [`release`]: WakeLockHandle::release
    fn on_release(&self, callback: Box<dyn FnOnce()>);

    /// Ask the platform to release the lock. Fire-and-forget.
    fn release(&self);
}

/// The screen wake-lock capability.
pub trait WakeLockPlatform {
    type Handle: WakeLockHandle;

    /// Whether the wake-lock API exists at all.
    fn is_supported(&self) -> bool;

    /// Request a `"screen"` wake lock. Resolves when the platform answers.
    fn request(&self) -> impl Future<Output = Result<Self::Handle, AcquireError>>;
}

/// Blocking, user-visible notification (an alert in the browser).
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl<F: Fn(&str)> Notifier for F {
    fn notify(&self, message: &str) {
        self(message);
    }
}

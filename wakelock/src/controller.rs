//! Wake-lock state machine.
//!
//! DESIGN
//! ======
//! One `WakeLockController` owns the only wake-lock handle for the page. It
//! is driven by three inputs: the toggle control, page visibility changes,
//! and release notifications from the platform. Every transition is pushed
//! to the [`StatusView`].
//!
//! The controller is single-threaded and lives in an `Rc`. The handle sits
//! in a `RefCell` that is never borrowed across an `.await` or across a call
//! into a collaborator, so a platform callback that re-enters the controller
//! cannot hit a borrow conflict.
//!
//! Two guards keep at most one handle alive:
//! - `acquiring` rejects a second request while one is in flight;
//! - every held handle carries a generation number, so a late release
//!   notification from an older handle cannot clear a newer one.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, error, info, warn};

use crate::platform::{Notifier, Visibility, WakeLockHandle, WakeLockPlatform};
use crate::presenter::{StatusView, WakeState};

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

struct Held<H> {
    handle: H,
    generation: u64,
}

struct Inner<H> {
    held: Option<Held<H>>,
    acquiring: bool,
    state: WakeState,
    next_generation: u64,
}

/// Coordinates wake-lock acquisition and release with the UI.
pub struct WakeLockController<P: WakeLockPlatform, V, N> {
    platform: P,
    view: V,
    notifier: N,
    supported: bool,
    inner: RefCell<Inner<P::Handle>>,
    this: Weak<Self>,
}

impl<P, V, N> WakeLockController<P, V, N>
where
    P: WakeLockPlatform + 'static,
    V: StatusView + 'static,
    N: Notifier + 'static,
{
    /// Probe platform support and render the initial state.
    ///
    /// Starts `Inactive` when the API exists, `Error` otherwise. An
    /// unsupported controller never attempts an acquisition.
    pub fn new(platform: P, view: V, notifier: N) -> Rc<Self> {
        let supported = platform.is_supported();
        let state = if supported {
            info!("Wake Lock API is supported");
            WakeState::Inactive
        } else {
            warn!("Wake Lock API is NOT supported in this browser");
            WakeState::Error
        };

        let controller = Rc::new_cyclic(|this| Self {
            platform,
            view,
            notifier,
            supported,
            inner: RefCell::new(Inner { held: None, acquiring: false, state, next_generation: 0 }),
            this: this.clone(),
        });
        controller.view.show(state);
        controller
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> WakeState {
        self.inner.borrow().state
    }

    #[must_use]
    pub fn is_supported(&self) -> bool {
        self.supported
    }

    /// Whether a wake-lock handle is currently held.
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.inner.borrow().held.is_some()
    }

    /// Whether a request is waiting on the platform.
    #[must_use]
    pub fn is_acquiring(&self) -> bool {
        self.inner.borrow().acquiring
    }

    // --- Operations ---

    /// Request a screen wake lock and wait for the platform's answer.
    ///
    /// Does nothing if the API is unsupported, a handle is already held, or
    /// a request is pending.
    /// Failure is reported to the user and moves the state to `Error`.
    pub async fn acquire(&self) {
        if !self.supported {
            debug!("acquire ignored: Wake Lock API unsupported");
            return;
        }
        {
            let mut inner = self.inner.borrow_mut();
            if inner.acquiring {
                debug!("wake lock request already pending");
                return;
            }
            if inner.held.is_some() {
                debug!("wake lock already held");
                return;
            }
            inner.acquiring = true;
        }

        let result = self.platform.request().await;

        let generation = {
            let mut inner = self.inner.borrow_mut();
            inner.acquiring = false;
            let generation = inner.next_generation;
            inner.next_generation += 1;
            generation
        };

        match result {
            Ok(handle) => {
                let this = self.this.clone();
                handle.on_release(Box::new(move || {
                    if let Some(controller) = this.upgrade() {
                        controller.handle_platform_release(generation);
                    }
                }));
                self.inner.borrow_mut().held = Some(Held { handle, generation });
                info!("Wake Lock is active");
                self.transition(WakeState::Active);
            }
            Err(err) => {
                error!("{err}");
                self.notifier.notify(&err.alert_text());
                self.transition(WakeState::Error);
            }
        }
    }

    /// Release the held wake lock, if any.
    pub fn release(&self) {
        let held = self.inner.borrow_mut().held.take();
        let Some(held) = held else {
            return;
        };
        held.handle.release();
        info!("Wake Lock released manually");
        self.transition(WakeState::Inactive);
    }

    /// Toggle control activation.
    ///
    /// Ignored when the API is unsupported or a request is still pending.
    pub async fn toggle(&self) {
        if !self.supported {
            debug!("toggle ignored: Wake Lock API unsupported");
            return;
        }
        let (held, acquiring) = {
            let inner = self.inner.borrow();
            (inner.held.is_some(), inner.acquiring)
        };
        if acquiring {
            debug!("toggle ignored: wake lock request pending");
        } else if held {
            self.release();
        } else {
            self.acquire().await;
        }
    }

    /// Page visibility changed.
    ///
    /// Becoming visible without a handle re-acquires, since browsers drop
    /// wake locks for hidden pages. Becoming hidden while holding a handle
    /// shows `Inactive` straight away; the handle itself is left for the
    /// platform to release.
    pub async fn on_visibility_change(&self, visibility: Visibility) {
        let held = self.is_held();
        match visibility {
            Visibility::Visible if self.supported => {
                if held {
                    debug!("page visible and wake lock still held");
                    self.transition(WakeState::Active);
                } else {
                    self.acquire().await;
                }
            }
            Visibility::Visible => {}
            Visibility::Hidden => {
                if held {
                    debug!("page hidden; expecting the platform to release the wake lock");
                    self.transition(WakeState::Inactive);
                }
            }
        }
    }

    // --- Internals ---

    fn handle_platform_release(&self, generation: u64) {
        let released = {
            let mut inner = self.inner.borrow_mut();
            let current = inner.held.as_ref().map(|held| held.generation);
            if current == Some(generation) { inner.held.take() } else { None }
        };
        if released.is_some() {
            info!("Wake Lock was released by the system");
            self.transition(WakeState::Inactive);
        } else {
            debug!("release notification for stale wake lock {generation}");
        }
    }

    fn transition(&self, state: WakeState) {
        self.inner.borrow_mut().state = state;
        self.view.show(state);
    }
}

//! Maps the wake-lock state onto the status region and the toggle control.
//!
//! [`render`] is the whole presenter: a lookup table with no state of its
//! own. [`StatusView`] is where the controller hands a state to whatever
//! draws it.

#[cfg(test)]
#[path = "presenter_test.rs"]
mod presenter_test;

/// Visible state of the wake lock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WakeState {
    Active,
    #[default]
    Inactive,
    Error,
}

impl WakeState {
    /// CSS class applied to the status region.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Error => "error",
        }
    }
}

/// Everything the UI shows for one [`WakeState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Presentation {
    pub status_text: &'static str,
    pub toggle_text: &'static str,
    pub toggle_enabled: bool,
    pub status_class: &'static str,
    /// Whether the toggle carries the `off` class (lock not held).
    pub toggle_off: bool,
}

/// Presentation row for `state`.
#[must_use]
pub fn render(state: WakeState) -> Presentation {
    match state {
        WakeState::Active => Presentation {
            status_text: "Status: Active (Screen will not sleep)",
            toggle_text: "OFF",
            toggle_enabled: true,
            status_class: state.class(),
            toggle_off: false,
        },
        WakeState::Inactive => Presentation {
            status_text: "Status: Inactive (Screen can sleep)",
            toggle_text: "ON",
            toggle_enabled: true,
            status_class: state.class(),
            toggle_off: true,
        },
        WakeState::Error => Presentation {
            status_text: "Status: Error (API not supported or permission denied)",
            toggle_text: "N/A",
            toggle_enabled: false,
            status_class: state.class(),
            toggle_off: false,
        },
    }
}

/// Receives every state transition made by the controller.
pub trait StatusView {
    fn show(&self, state: WakeState);
}

impl<F: Fn(WakeState)> StatusView for F {
    fn show(&self, state: WakeState) {
        self(state);
    }
}

//! Screen wake-lock controller and clock ticker for the keep-awake page.
//!
//! This crate holds everything that does not need a browser: the wake-lock
//! state machine, the table that maps its states to UI text, and the clock
//! ticker. The platform (wake-lock API, alerts, locale formatting, the DOM)
//! is reached only through the traits in [`platform`], [`presenter`] and
//! [`clock`], so the host `keepawake` crate plugs in web-sys implementations
//! and the tests plug in fakes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Wake-lock state machine driven by toggle and visibility events |
//! | [`presenter`] | `WakeState` → status/toggle presentation table |
//! | [`clock`] | Once-per-second local time/date ticker |
//! | [`platform`] | Capability traits for the wake-lock API and user notification |
//! | [`error`] | Acquisition failure type |
//! | [`consts`] | Shared constants (tick interval, alert text) |

pub mod clock;
pub mod consts;
pub mod controller;
pub mod error;
pub mod platform;
pub mod presenter;

//! web-sys implementations of the wakelock capability traits.
//!
//! Everything here needs a browser and is compiled only with the `csr`
//! feature.

pub mod clock;
pub mod notify;
pub mod visibility;
pub mod wake_lock;

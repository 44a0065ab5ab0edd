//! # keepawake
//!
//! Leptos + WASM page that keeps the screen awake through the Screen Wake
//! Lock API and shows a live local clock.
//!
//! The state machine, presenter table and clock ticker live in the
//! browser-free `wakelock` crate. This crate supplies the page elements,
//! the web-sys implementations of the `wakelock` traits, and the runtime
//! configuration read from the URL.

pub mod app;
#[cfg(feature = "csr")]
pub mod browser;
pub mod components;
pub mod config;

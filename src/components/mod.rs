//! The three page elements the wake-lock controller and clock write to.

pub mod current_time;
pub mod status_message;
pub mod toggle_button;

//! Shared constants for the wakelock crate.

// ── Clock ───────────────────────────────────────────────────────

/// Interval between clock ticks, in milliseconds.
pub const TICK_INTERVAL_MS: u32 = 1000;

// ── Notification ────────────────────────────────────────────────

/// Prefix of the alert shown when a wake lock cannot be acquired.
pub const ALERT_PREFIX: &str = "Failed to activate screen keep-alive";

/// Suffix of the alert shown when a wake lock cannot be acquired.
pub const ALERT_HINT: &str = "Please ensure your browser supports Wake Lock API and you grant permission.";

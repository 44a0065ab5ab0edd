//! Wake-lock acquisition failures.

use crate::consts::{ALERT_HINT, ALERT_PREFIX};

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// The platform refused or could not grant a screen wake lock.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AcquireError {
    /// The Wake Lock API is absent from this browser.
    #[error("NotSupportedError, Wake Lock API is not supported")]
    Unsupported,
    /// The request promise rejected (permission denied, hidden document, ...).
    #[error("{name}, {message}")]
    Rejected { name: String, message: String },
}

impl AcquireError {
    /// Human-readable reason, without the error name.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Unsupported => "Wake Lock API is not supported",
            Self::Rejected { message, .. } => message,
        }
    }

    /// Text for the blocking alert shown to the user.
    #[must_use]
    pub fn alert_text(&self) -> String {
        format!("{ALERT_PREFIX}: {}. {ALERT_HINT}", self.message())
    }
}

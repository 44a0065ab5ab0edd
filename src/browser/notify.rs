//! Blocking `window.alert` notifier.

use log::warn;
use wakelock::platform::Notifier;

pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            warn!("no window for alert: {message}");
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            warn!("alert failed: {err:?}");
        }
    }
}

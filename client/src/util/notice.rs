//! Blocking user notices for failed actions.
//!
//! Logs the underlying error to the browser console and shows a modal alert
//! with a generic message. SSR paths no-op.

use std::fmt::Display;

/// Log `err` and block on an alert reading `notice`.
pub fn report(notice: &str, err: &impl Display) {
    #[cfg(feature = "hydrate")]
    {
        log::error!("{notice}: {err}");
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(notice);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (notice, err);
    }
}

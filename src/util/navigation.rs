//! Browser navigation primitives that bypass the client-side router.
//!
//! Requires a browser environment; native builds no-op so the session store
//! and pages stay testable.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Full page load of `path`, discarding all in-memory state.
pub fn hard_redirect(path: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(path).is_err() {
                log::error!("failed to navigate to {path}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
    }
}

/// Blocking browser confirmation dialog. Declines outside the browser.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}

/// Current calendar year from the browser clock.
pub fn current_year() -> Option<i32> {
    #[cfg(feature = "csr")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

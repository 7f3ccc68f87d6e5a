//! Browser plumbing shared by the pages: reading the current path and
//! navigating away.

/// Path of the current page, `/` when it cannot be read.
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Full navigation to `path`; the backend serves the app shell for every route.
pub fn navigate(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(path) {
            gloo_console::error!("navigation failed", err);
        }
    }
}

//! Page navigation. Requires a browser environment.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Send the browser to `route` with a full page load.
///
/// Returns `false` when there is no window to navigate (native builds) or the
/// browser refused the location change.
pub fn navigate_to(route: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Err(e) = window.location().set_href(route) {
            log::warn!("navigation to {route} failed: {e:?}");
            return false;
        }
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = route;
        false
    }
}

//! Full-page navigation through `window.location`. Host builds (tests, SSR
//! rendering) have no window, so these become no-ops there.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

#[cfg(target_arch = "wasm32")]
pub fn redirect(path: &str) {
    if let Some(window) = web_sys::window() {
        if window.location().set_href(path).is_err() {
            log::warn!("failed to navigate to {}", path);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect(path: &str) {
    log::debug!("redirect to {} skipped outside the browser", path);
}

#[cfg(target_arch = "wasm32")]
pub fn current_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_path() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
pub fn origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn origin() -> Option<String> {
    None
}

/// Everything but RFC 3986 unreserved characters.
pub const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub fn login_path_with_redirect(target: Option<&str>) -> String {
    match target.filter(|path| path.starts_with('/') && *path != "/login") {
        Some(path) => format!("/login?redirect={}", utf8_percent_encode(path, PATH_SEGMENT)),
        None => "/login".to_string(),
    }
}

/// Only same-site absolute paths are honoured as post-login targets.
/// Browsers read `/\host` as `//host`, so backslashes are refused too.
pub fn safe_redirect_target(raw: Option<&str>) -> String {
    raw.map(|value| percent_decode_str(value).decode_utf8_lossy().into_owned())
        .filter(|path| is_same_site_path(path))
        .unwrap_or_else(|| "/".to_string())
}

fn is_same_site_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !path.contains('\\')
        && !path.chars().any(char::is_control)
}

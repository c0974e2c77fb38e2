//! Read-only access to the page query string.
//!
//! Lookups behave like `URLSearchParams.get`: pairs are split on `&` and the
//! first `=`, `+` means space, and the first occurrence of a name wins. Other
//! parameters never affect the lookup, whatever their shape.

use web_sys::window;

/// Raw `location.search` of the current page, `""` outside a browser
pub fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

fn decode(component: &str) -> String {
    let component = component.replace('+', " ");
    match urlencoding::decode(&component) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => component,
    }
}

/// First value of query parameter `name`
pub fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| decode(key) == name)
        .map(|(_, value)| decode(value))
}

/// `true` when the page was opened with `sidebar=true`
pub fn sidebar_requested(search: &str) -> bool {
    query_param(search, "sidebar").as_deref() == Some("true")
}

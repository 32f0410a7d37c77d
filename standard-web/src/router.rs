//! Fragment-based routing.
//!
//! Navigation is plain anchors pointing at `#/<key>` fragments. The browser
//! never reloads on a fragment change, so the whole router is: parse the
//! fragment into a [`Route`], re-parse on `hashchange`, and let the view
//! react through a signal. No history stack of our own, no link component,
//! no route macros.

use dioxus::prelude::*;
use standard_ui::wasm_utils::WindowEventListener;
use wasm_bindgen::JsValue;

/// A parsed `#/<key>[/<param>]` fragment.
///
/// `key` picks the page; `param` is a detail segment pages may use (for
/// example a preselected episode on Watch). Both are always present, with
/// empty-string defaults applied during parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub key: String,
    pub param: String,
}

/// Parses a location fragment into a [`Route`].
///
/// Accepts the raw `location.hash` value, leading `#` included. A missing
/// or empty fragment and the bare `#/` both resolve to the home route.
/// Segments past the param are ignored.
pub fn parse_fragment(hash: &str) -> Route {
    let raw = if hash.is_empty() { "#/home" } else { hash };
    let raw = raw.replacen('#', "", 1);

    let mut parts = raw.split('/');
    // Everything before the first `/` is discarded; a fragment without a
    // slash ("#watch") has no key segment at all and lands on home.
    let _ = parts.next();
    let key = match parts.next() {
        Some(key) if !key.is_empty() => key,
        _ => "home",
    };
    let param = parts.next().unwrap_or("");

    Route {
        key: key.to_string(),
        param: param.to_string(),
    }
}

/// Reads the current route from the browser location.
///
/// Outside a browser there is no location, so this resolves to home.
pub fn current_route() -> Route {
    #[cfg(target_arch = "wasm32")]
    {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        parse_fragment(&hash)
    }
    #[cfg(not(target_arch = "wasm32"))]
    parse_fragment("")
}

/// Route signal that tracks the location fragment.
///
/// Attaches a `hashchange` listener on mount; the listener handle lives in
/// a signal so it detaches when the owning component unmounts.
pub fn use_hash_route() -> Signal<Route> {
    let mut route = use_signal(current_route);
    let mut hash_listener: Signal<Option<WindowEventListener>> = use_signal(|| None);

    use_effect(move || {
        if hash_listener.peek().is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let listener = WindowEventListener::new(window, "hashchange", move |_: JsValue| {
            route.set(current_route());
        });
        hash_listener.set(Some(listener));
    });

    route
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(key: &str, param: &str) -> Route {
        Route {
            key: key.to_string(),
            param: param.to_string(),
        }
    }

    #[test]
    fn empty_fragment_is_home() {
        assert_eq!(parse_fragment(""), route("home", ""));
    }

    #[test]
    fn bare_slash_fragment_is_home() {
        assert_eq!(parse_fragment("#/"), route("home", ""));
    }

    #[test]
    fn fragment_without_slash_is_home() {
        // "#watch" has no key segment under the `#/key` scheme.
        assert_eq!(parse_fragment("#watch"), route("home", ""));
    }

    #[test]
    fn key_only_fragment() {
        assert_eq!(parse_fragment("#/watch"), route("watch", ""));
    }

    #[test]
    fn key_and_param_fragment() {
        assert_eq!(parse_fragment("#/watch/abc123"), route("watch", "abc123"));
    }

    #[test]
    fn extra_segments_are_ignored() {
        assert_eq!(parse_fragment("#/watch/abc123/extra"), route("watch", "abc123"));
    }

    #[test]
    fn unknown_keys_pass_through() {
        // Resolution to a page (including not-found) is the page table's
        // job, not the parser's.
        assert_eq!(parse_fragment("#/nonsense"), route("nonsense", ""));
    }
}

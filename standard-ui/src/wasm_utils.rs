//! Browser interop helpers
//!
//! # Event listener cleanup
//!
//! Attaching a JavaScript event listener from Rust/WASM requires keeping
//! the backing `Closure` alive for as long as the listener is attached.
//! `closure.forget()` does that by leaking, which also leaves the listener
//! attached forever. Instead, the closure lives in a struct whose `Drop`
//! removes the listener, tying listener lifetime to ownership:
//!
//! ```ignore
//! // Attached on creation
//! let listener = WindowEventListener::new(window, "hashchange", callback);
//!
//! // Removed automatically when dropped
//! drop(listener);
//! ```
//!
//! Stored in a Dioxus `Signal<Option<WindowEventListener>>`, the listener
//! is detached when the owning component unmounts and its signals drop.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};

/// A window event listener that removes itself when dropped.
pub struct WindowEventListener {
    window: web_sys::Window,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl WindowEventListener {
    /// Attaches an event listener to the window.
    ///
    /// The listener stays attached until this struct is dropped.
    pub fn new(
        window: web_sys::Window,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        window
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            window,
            event_name,
            callback,
        }
    }
}

impl Drop for WindowEventListener {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

//! Application shell: chrome around the active page plus the route-driven
//! page swap.

use dioxus::core::Task;
use dioxus::prelude::*;
use standard_ui::wasm_utils::WindowEventListener;
use standard_ui::{BackgroundGlow, SiteFooterView, SiteHeaderView, COMPACT_MENU_BREAKPOINT};
use wasm_bindgen::JsValue;

use crate::config;
use crate::pages::Page;
use crate::router::use_hash_route;

/// Exit-phase length of the page swap. The enter phase runs the same
/// duration from CSS, keyed to the page wrapper remounting.
pub const PAGE_TRANSITION_MS: u64 = 200;

/// True when a viewport resize should force the compact menu shut: the
/// inline nav takes over at the breakpoint, and a menu left open would
/// otherwise pop back when the viewport shrinks again.
fn should_auto_close(width: f64, menu_open: bool) -> bool {
    menu_open && width >= COMPACT_MENU_BREAKPOINT
}

/// State of the exit-then-enter page swap.
///
/// The shell maps transitions onto a cancellable timer task: a `true`
/// return from [`SwapState::on_route`] means a fresh exit timer must be
/// spawned, and the timer calls [`SwapState::on_timer`] when the exit
/// phase ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SwapState {
    /// Page currently mounted in the wrapper.
    shown: Page,
    /// True while the shown page plays its exit animation.
    exiting: bool,
    /// Destination of an in-flight swap, if one is pending.
    pending: Option<Page>,
}

impl SwapState {
    fn new(shown: Page) -> Self {
        Self {
            shown,
            exiting: false,
            pending: None,
        }
    }

    /// Route changed. Returns true when an exit timer must be spawned.
    ///
    /// Navigating back to the shown page while its exit is still playing
    /// drops the pending swap instead of letting it land on the page the
    /// user just left.
    fn on_route(&mut self, next: Page) -> bool {
        if next == self.shown {
            self.pending = None;
            self.exiting = false;
            false
        } else {
            self.pending = Some(next);
            self.exiting = true;
            true
        }
    }

    /// Exit timer fired: mount the pending page and start its enter phase.
    fn on_timer(&mut self) {
        if let Some(next) = self.pending.take() {
            self.shown = next;
        }
        self.exiting = false;
    }
}

/// Shell around the active page: background, header, footer, and the
/// exit-then-enter page swap driven by the route signal.
#[component]
pub fn PageShell() -> Element {
    let route = use_hash_route();
    let mut menu_open = use_signal(|| false);

    // Compact menu auto-close on resize past the breakpoint.
    let mut resize_listener: Signal<Option<WindowEventListener>> = use_signal(|| None);
    use_effect(move || {
        if resize_listener.peek().is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let width_source = window.clone();
        let listener = WindowEventListener::new(window, "resize", move |_: JsValue| {
            let width = width_source.inner_width().ok().and_then(|w| w.as_f64());
            if let Some(width) = width {
                if should_auto_close(width, *menu_open.peek()) {
                    menu_open.set(false);
                }
            }
        });
        resize_listener.set(Some(listener));
    });

    // Page swap: exit animation on the outgoing page, then mount the
    // incoming one. Every route change cancels the pending timer;
    // on_route decides whether a fresh one starts or the shell settles
    // on the page already shown.
    let mut swap = use_signal(|| SwapState::new(Page::from_key(&route.peek().key)));
    let mut swap_task = use_signal(|| None::<Task>);

    use_effect(move || {
        let next = Page::from_key(&route.read().key);
        if let Some(task) = swap_task.take() {
            task.cancel();
        }
        if swap.write().on_route(next) {
            let task = spawn(async move {
                sleep_ms(PAGE_TRANSITION_MS).await;
                swap.write().on_timer();
            });
            swap_task.set(Some(task));
        }
    });

    let SwapState {
        shown: page,
        exiting,
        ..
    } = swap();
    let wrapper_class = if exiting { "page-exit" } else { "page-enter" };

    rsx! {
        div { class: "min-h-screen bg-neutral-950 text-neutral-100",
            BackgroundGlow {}
            SiteHeaderView {
                brand: config::BRAND,
                nav: config::NAV,
                active_key: route.read().key.clone(),
                menu_open: menu_open(),
                on_menu_toggle: move |_| menu_open.toggle(),
                on_nav_select: move |_| menu_open.set(false),
            }
            main { class: "mx-auto w-full max-w-6xl px-4 pb-24 pt-8 sm:px-6 lg:px-8",
                div { key: "{page.key()}", class: "{wrapper_class}", {page.render()} }
            }
            SiteFooterView { brand: config::BRAND }
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_past_breakpoint_closes_open_menu() {
        assert!(should_auto_close(COMPACT_MENU_BREAKPOINT, true));
        assert!(should_auto_close(1920.0, true));
    }

    #[test]
    fn resize_below_breakpoint_leaves_menu_alone() {
        assert!(!should_auto_close(COMPACT_MENU_BREAKPOINT - 1.0, true));
        assert!(!should_auto_close(375.0, true));
    }

    #[test]
    fn closed_menu_never_needs_closing() {
        assert!(!should_auto_close(1920.0, false));
    }

    #[test]
    fn route_change_swaps_after_the_exit_phase() {
        let mut swap = SwapState::new(Page::Home);

        assert!(swap.on_route(Page::Watch));
        assert_eq!(swap.shown, Page::Home);
        assert!(swap.exiting);

        swap.on_timer();
        assert_eq!(swap.shown, Page::Watch);
        assert!(!swap.exiting);
    }

    #[test]
    fn returning_mid_exit_drops_the_pending_swap() {
        let mut swap = SwapState::new(Page::Home);
        assert!(swap.on_route(Page::Watch));

        // Back on home while the exit is still playing: no new timer, and
        // a stale timer firing anyway must not mount the abandoned page.
        assert!(!swap.on_route(Page::Home));
        assert!(!swap.exiting);

        swap.on_timer();
        assert_eq!(swap.shown, Page::Home);
        assert!(!swap.exiting);
    }

    #[test]
    fn retargeting_mid_exit_lands_on_the_newest_destination() {
        let mut swap = SwapState::new(Page::Home);
        assert!(swap.on_route(Page::Watch));
        assert!(swap.on_route(Page::About));

        swap.on_timer();
        assert_eq!(swap.shown, Page::About);
        assert!(!swap.exiting);
    }
}

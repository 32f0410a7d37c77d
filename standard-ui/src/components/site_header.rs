//! Sticky site header with brand mark, primary nav, and the compact menu.

use dioxus::prelude::*;

use crate::components::icons::{ArrowRightIcon, CrownIcon};
use crate::display_types::Brand;

/// Viewport width (CSS pixels) at or above which the inline nav replaces
/// the compact menu and any open menu is forced closed.
pub const COMPACT_MENU_BREAKPOINT: f64 = 1024.0;

/// One entry in the primary navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Route key the entry navigates to, without the `#/` prefix.
    pub key: &'static str,
    pub label: &'static str,
}

/// Header chrome. Pure view: the owner tracks the active route and the
/// compact menu flag, and hears about toggles and selections through the
/// event handlers.
///
/// Navigation itself is plain `#/<key>` anchors; the browser fires
/// `hashchange` and the route signal catches up. `on_nav_select` only
/// exists so the owner can close the compact menu after a choice.
#[component]
pub fn SiteHeaderView(
    brand: Brand,
    nav: &'static [NavItem],
    active_key: String,
    menu_open: bool,
    on_menu_toggle: EventHandler<()>,
    on_nav_select: EventHandler<()>,
) -> Element {
    rsx! {
        header { class: "sticky top-0 z-40 border-b border-white/10 bg-neutral-950/70 backdrop-blur",
            div { class: "mx-auto flex max-w-6xl items-center justify-between px-4 py-3 sm:px-6 lg:px-8",
                a { href: "#/home", class: "group flex items-center gap-3",
                    div { class: "flex h-9 w-9 items-center justify-center rounded-2xl border border-white/10 bg-white/5",
                        CrownIcon { class: "h-4 w-4 text-yellow-400" }
                    }
                    div { class: "leading-tight",
                        div { class: "text-sm font-semibold tracking-wide", "{brand.name}" }
                        div { class: "text-xs text-neutral-400", "{brand.subtitle}" }
                    }
                }

                nav { class: "hidden items-center gap-1 lg:flex",
                    for item in nav.iter() {
                        a {
                            key: "{item.key}",
                            href: "#/{item.key}",
                            class: nav_link_class(active_key == item.key),
                            "{item.label}"
                        }
                    }
                    a {
                        href: "#/contact",
                        class: "ml-2 inline-flex items-center gap-2 rounded-2xl bg-yellow-500 px-4 py-2 text-sm font-semibold text-neutral-950 shadow-lg shadow-yellow-500/10 hover:bg-yellow-400",
                        "Inquire "
                        ArrowRightIcon {}
                    }
                }

                button {
                    class: "lg:hidden rounded-2xl border border-white/10 bg-white/5 px-3 py-2 text-sm",
                    aria_expanded: if menu_open { "true" } else { "false" },
                    onclick: move |_| on_menu_toggle.call(()),
                    "Menu"
                }
            }

            if menu_open {
                div { class: "lg:hidden overflow-hidden border-t border-white/10",
                    div { class: "mx-auto max-w-6xl px-4 py-3 sm:px-6 lg:px-8",
                        div { class: "grid grid-cols-2 gap-2",
                            for item in nav.iter() {
                                a {
                                    key: "{item.key}",
                                    href: "#/{item.key}",
                                    class: nav_link_class(active_key == item.key),
                                    onclick: move |_| on_nav_select.call(()),
                                    "{item.label}"
                                }
                            }
                        }
                        a {
                            href: "#/contact",
                            class: "mt-3 inline-flex w-full items-center justify-center gap-2 rounded-2xl bg-yellow-500 px-4 py-2 text-sm font-semibold text-neutral-950",
                            onclick: move |_| on_nav_select.call(()),
                            "Inquire "
                            ArrowRightIcon {}
                        }
                    }
                }
            }
        }
    }
}

fn nav_link_class(active: bool) -> &'static str {
    if active {
        "rounded-2xl px-3 py-2 text-sm transition bg-white/10 text-white"
    } else {
        "rounded-2xl px-3 py-2 text-sm transition text-neutral-300 hover:bg-white/5 hover:text-white"
    }
}

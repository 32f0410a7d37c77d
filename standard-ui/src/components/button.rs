//! Call-to-action button component
//!
//! Renders an anchor when `href` is set (hash routes, mailto/tel, external
//! pages) and a plain button otherwise. External targets open in a new tab
//! and get an external-link marker, so pages never need to special-case
//! outbound links.

use dioxus::prelude::*;

use crate::components::icons::ExternalLinkIcon;

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Gold background - the page's main call to action
    Primary,
    /// Translucent panel with border - secondary actions
    Ghost,
    /// Border only, transparent body - tertiary actions
    Outline,
}

fn variant_class(variant: ButtonVariant) -> &'static str {
    match variant {
        ButtonVariant::Primary => {
            "bg-yellow-500 text-neutral-950 hover:bg-yellow-400 shadow-lg shadow-yellow-500/10"
        }
        ButtonVariant::Ghost => "border border-white/10 bg-white/5 text-white hover:bg-white/10",
        ButtonVariant::Outline => {
            "border border-white/10 bg-transparent text-white hover:bg-white/5"
        }
    }
}

/// Call-to-action with consistent styling across pages.
#[component]
pub fn Button(
    #[props(default = ButtonVariant::Primary)] variant: ButtonVariant,
    /// Link target. Empty means "render a real button element" (form submits).
    #[props(default)]
    href: String,
    #[props(into)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let base =
        "inline-flex items-center justify-center gap-2 rounded-2xl px-4 py-2 text-sm font-semibold transition";
    let class = format!("{base} {}", variant_class(variant));

    if !href.is_empty() {
        let external = href.starts_with("http");
        return rsx! {
            a {
                class: "{class}",
                href: "{href}",
                target: if external { Some("_blank") } else { None },
                rel: if external { Some("noreferrer") } else { None },
                onclick: move |evt| {
                    if let Some(handler) = &onclick {
                        handler.call(evt);
                    }
                },
                {children}
                if external {
                    ExternalLinkIcon {}
                }
            }
        };
    }

    rsx! {
        button {
            class: "{class}",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

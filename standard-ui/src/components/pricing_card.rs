//! Sponsorship pricing tier card

use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::icons::ArrowRightIcon;

/// One sponsorship tier. All values are fixed at build time; the ordered
/// tier list is part of the site configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingTier {
    pub title: &'static str,
    pub price: &'static str,
    pub subtitle: &'static str,
    pub bullets: &'static [&'static str],
    /// Highlighted tiers get gold trim and a "Recommended" badge.
    pub highlight: bool,
}

/// Card presenting a single [`PricingTier`] with its call to action.
#[component]
pub fn PricingCard(tier: PricingTier, cta_label: &'static str, cta_href: String) -> Element {
    let frame = if tier.highlight {
        "rounded-[28px] border p-6 border-yellow-500/40 bg-yellow-500/10"
    } else {
        "rounded-[28px] border p-6 border-white/10 bg-white/5"
    };

    rsx! {
        div { class: "{frame}",
            div { class: "flex items-start justify-between gap-4",
                div {
                    div { class: "text-sm font-semibold", "{tier.title}" }
                    div { class: "mt-1 text-xs text-neutral-400", "{tier.subtitle}" }
                }
                if tier.highlight {
                    span { class: "rounded-2xl bg-yellow-500 px-3 py-1 text-xs font-semibold text-neutral-950",
                        "Recommended"
                    }
                }
            }
            div { class: "mt-5 text-3xl font-semibold tracking-tight", "{tier.price}" }
            ul { class: "mt-4 space-y-2 text-sm text-neutral-300",
                for bullet in tier.bullets.iter() {
                    li { key: "{bullet}", class: "flex gap-2",
                        span { class: "mt-1 h-1.5 w-1.5 rounded-full bg-yellow-400" }
                        span { "{bullet}" }
                    }
                }
            }
            div { class: "mt-6",
                Button { variant: ButtonVariant::Primary, href: cta_href,
                    "{cta_label}"
                    ArrowRightIcon {}
                }
            }
        }
    }
}

//! Audience-specific contact card

use dioxus::prelude::*;

use crate::components::button::Button;

/// Card routing one audience (guests, sponsors, media) to its mailto CTA.
#[component]
pub fn ContactCard(
    icon: Element,
    title: &'static str,
    desc: &'static str,
    cta_label: &'static str,
    href: String,
) -> Element {
    rsx! {
        div { class: "rounded-[28px] border border-white/10 bg-white/5 p-6",
            div { class: "flex h-12 w-12 items-center justify-center rounded-2xl bg-yellow-500/10",
                {icon}
            }
            div { class: "mt-4 text-lg font-semibold", "{title}" }
            div { class: "mt-2 text-sm text-neutral-300", "{desc}" }
            div { class: "mt-5",
                Button { href, "{cta_label}" }
            }
        }
    }
}

//! Section-level building blocks shared by the marketing pages

use dioxus::prelude::*;

/// Eyebrow + heading + optional description introducing a page section.
#[component]
pub fn SectionTitle(
    #[props(default = "")] eyebrow: &'static str,
    title: &'static str,
    #[props(default = "")] desc: &'static str,
) -> Element {
    rsx! {
        div { class: "mb-6",
            if !eyebrow.is_empty() {
                div { class: "text-xs font-semibold uppercase tracking-widest text-yellow-400",
                    "{eyebrow}"
                }
            }
            div { class: "mt-2 text-3xl font-semibold tracking-tight sm:text-4xl", "{title}" }
            if !desc.is_empty() {
                div { class: "mt-3 max-w-2xl text-neutral-300", "{desc}" }
            }
        }
    }
}

/// Single statistic tile in the hero grid.
#[component]
pub fn Stat(value: &'static str, label: &'static str) -> Element {
    rsx! {
        div { class: "rounded-3xl border border-white/10 bg-white/5 p-5",
            div { class: "text-xl font-semibold leading-tight tracking-tight text-white sm:text-2xl break-words",
                "{value}"
            }
            div { class: "mt-1 text-sm text-neutral-400", "{label}" }
        }
    }
}

/// Icon + title + description feature card.
#[component]
pub fn Pill(icon: Element, title: &'static str, desc: &'static str) -> Element {
    rsx! {
        div { class: "flex gap-4 rounded-3xl border border-white/10 bg-white/5 p-5",
            div { class: "flex h-11 w-11 shrink-0 items-center justify-center rounded-2xl bg-yellow-500/10",
                {icon}
            }
            div {
                div { class: "text-sm font-semibold text-white", "{title}" }
                div { class: "mt-1 text-sm text-neutral-400", "{desc}" }
            }
        }
    }
}

//! Site footer: brand reprise, quick links, and the legal line.

use chrono::Datelike;
use dioxus::prelude::*;

use crate::display_types::Brand;

#[component]
pub fn SiteFooterView(brand: Brand) -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "border-t border-white/10 bg-neutral-950/70 backdrop-blur",
            div { class: "mx-auto max-w-6xl px-4 py-8 text-sm text-neutral-400 sm:px-6 lg:px-8",
                div { class: "flex flex-col gap-6 sm:flex-row sm:items-center sm:justify-between",
                    div {
                        div { class: "font-semibold text-neutral-200", "{brand.name}" }
                        div { class: "text-xs", "{brand.subtitle} • {brand.tagline}" }
                    }
                    div { class: "flex flex-wrap gap-3",
                        a { class: "hover:text-white", href: "#/watch", "Watch" }
                        a { class: "hover:text-white", href: "#/founding-guests", "Founding Guests" }
                        a { class: "hover:text-white", href: "#/sponsors", "Sponsors" }
                        a { class: "hover:text-white", href: "#/contact", "Contact" }
                    }
                }
                div { class: "mt-6 text-xs text-neutral-500",
                    "© {year} {brand.name}. All rights reserved. This site is a concept build; update legal and trademark language before launch. THE STANDARD is an independent documentary project and is not affiliated with or endorsed by Rolls‑Royce Motor Cars."
                }
            }
        }
    }
}

//! Fixed background decoration behind every page

use dioxus::prelude::*;

/// Soft gold/white glow layers pinned behind the page content.
/// Purely decorative; never intercepts pointer events.
#[component]
pub fn BackgroundGlow() -> Element {
    rsx! {
        div {
            aria_hidden: "true",
            class: "pointer-events-none fixed inset-0 overflow-hidden",
            div { class: "absolute -top-24 left-1/2 h-[420px] w-[820px] -translate-x-1/2 rounded-full bg-yellow-500/10 blur-3xl" }
            div { class: "absolute -bottom-24 right-[-120px] h-[360px] w-[520px] rounded-full bg-white/5 blur-3xl" }
            div { class: "absolute inset-0 bg-[radial-gradient(circle_at_50%_0%,rgba(255,255,255,0.08),transparent_60%)]" }
        }
    }
}

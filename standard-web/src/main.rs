//! THE STANDARD - marketing site for the documentary series.
//!
//! A hash-routed single-page site: episode player, partnership rate card,
//! and inquiry funnels, rendered entirely client side.

mod config;
mod links;
mod pages;
mod router;
mod self_check;

use dioxus::prelude::*;

use crate::pages::PageShell;

pub const FAVICON: Asset = asset!("/assets/favicon.svg");
pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Root component: document head plus the page shell.
#[component]
pub fn App() -> Element {
    // One pass over the shipped config before anything renders.
    use_hook(|| self_check::run());

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        PageShell {}
    }
}

fn main() {
    dioxus::launch(App);
}

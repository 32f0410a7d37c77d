use dioxus::prelude::*;
use standard_ui::Button;

#[component]
pub fn NotFound() -> Element {
    rsx! {
        div { class: "rounded-[28px] border border-white/10 bg-white/5 p-8",
            div { class: "text-2xl font-semibold", "Page not found" }
            div { class: "mt-2 text-neutral-300", "Try going back to the home page." }
            div { class: "mt-5",
                Button { href: "#/home", "Home" }
            }
        }
    }
}

//! Lead form field component
//!
//! The lead form posts through a mailto action (plain-text body), so the
//! fields carry `name` attributes for the browser's form serialization and
//! never need change handlers.

use dioxus::prelude::*;

/// Which control a [`Field`] renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
    /// Dropdown with a fixed option list; the first option is preselected.
    Select(&'static [&'static str]),
}

const CONTROL_CLASS: &str = "mt-1 w-full rounded-2xl border border-white/10 bg-white/5 px-4 py-2 text-sm text-white placeholder:text-neutral-500 focus:outline-none focus:ring-2 focus:ring-yellow-500/30";

/// Labeled form control for the contact page's lead form.
#[component]
pub fn Field(
    label: &'static str,
    name: &'static str,
    #[props(default = "")] placeholder: &'static str,
    #[props(default = FieldKind::Text)] kind: FieldKind,
) -> Element {
    rsx! {
        label { class: "block",
            div { class: "text-xs font-semibold uppercase tracking-widest text-neutral-400",
                "{label}"
            }
            match kind {
                FieldKind::Text => rsx! {
                    input {
                        name: "{name}",
                        r#type: "text",
                        placeholder: "{placeholder}",
                        class: CONTROL_CLASS,
                    }
                },
                FieldKind::Email => rsx! {
                    input {
                        name: "{name}",
                        r#type: "email",
                        placeholder: "{placeholder}",
                        class: CONTROL_CLASS,
                    }
                },
                FieldKind::TextArea => rsx! {
                    textarea {
                        name: "{name}",
                        placeholder: "{placeholder}",
                        rows: "4",
                        class: CONTROL_CLASS,
                    }
                },
                FieldKind::Select(options) => rsx! {
                    select { name: "{name}", class: CONTROL_CLASS,
                        for option in options.iter() {
                            option { key: "{option}", value: "{option}", class: "bg-neutral-900",
                                "{option}"
                            }
                        }
                    }
                },
            }
        }
    }
}

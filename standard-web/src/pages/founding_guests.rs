use dioxus::prelude::*;
use standard_ui::{
    ArrowRightIcon, Button, ButtonVariant, FilmIcon, MailIcon, Pill, SectionTitle, ShieldIcon,
    SparklesIcon,
};

use crate::config;
use crate::links;

/// The six segments of a production day, in order.
const PRODUCTION_STEPS: &[(&str, &str)] = &[
    ("Arrival", "A composed, cinematic entrance"),
    ("Setting", "Five‑star venue or private location"),
    ("Interview", "Your story—vision, journey, philosophy"),
    ("Craft", "Cinematic B‑roll and portrait moments"),
    ("Review", "Collaborative approval‑first workflow"),
    ("Premiere", "Private screening invitation"),
];

#[component]
pub fn FoundingGuests() -> Element {
    let email_href = links::mailto_with_subject(config::BRAND.contact_email, links::FOUNDING_GUEST_SUBJECT);

    rsx! {
        div { class: "space-y-10",
            SectionTitle {
                eyebrow: "Founding Guests",
                title: "Your story. Your legacy.",
                desc: "A premium portrait experience for select principals—crafted as a permanent record of how you built your life.",
            }

            section { class: "grid gap-4 lg:grid-cols-3",
                Pill {
                    icon: rsx! {
                        FilmIcon { class: "h-5 w-5 text-yellow-400" }
                    },
                    title: "Cinematic profile",
                    desc: "A dedicated profile segment with professional filming, editing, and color grading—built to premium standards.",
                }
                Pill {
                    icon: rsx! {
                        SparklesIcon { class: "h-5 w-5 text-yellow-400" }
                    },
                    title: "Full content suite",
                    desc: "Lifestyle stills, supporting footage, and a digital press kit—usable for PR and personal archives.",
                }
                Pill {
                    icon: rsx! {
                        ShieldIcon { class: "h-5 w-5 text-yellow-400" }
                    },
                    title: "Discreet and collaborative",
                    desc: "A curated production day, edit consultation, and a private premiere invitation.",
                }
            }

            section { class: "rounded-[28px] border border-white/10 bg-white/5 p-7",
                div { class: "grid gap-6 lg:grid-cols-3",
                    div { class: "lg:col-span-2",
                        div { class: "text-2xl font-semibold", "The production experience" }
                        p { class: "mt-3 text-neutral-300",
                            "Filming is designed as an experience: pre‑production consultation, a focused shoot window, and a collaborative edit process to preserve discretion and accuracy."
                        }
                        div { class: "mt-5 grid gap-2 sm:grid-cols-2",
                            for (step , detail) in PRODUCTION_STEPS.iter().copied() {
                                div { key: "{step}", class: "rounded-3xl border border-white/10 bg-white/5 p-4",
                                    div { class: "text-sm font-semibold", "{step}" }
                                    div { class: "mt-1 text-sm text-neutral-400", "{detail}" }
                                }
                            }
                        }
                    }
                    div { class: "rounded-3xl border border-white/10 bg-neutral-950/40 p-5",
                        div { class: "text-sm font-semibold", "Next steps" }
                        ol { class: "mt-3 space-y-2 text-sm text-neutral-300",
                            li { class: "flex gap-2",
                                span { class: "text-yellow-400", "1." }
                                " Submit an inquiry"
                            }
                            li { class: "flex gap-2",
                                span { class: "text-yellow-400", "2." }
                                " Brief conversation"
                            }
                            li { class: "flex gap-2",
                                span { class: "text-yellow-400", "3." }
                                " Schedule filming"
                            }
                        }
                        div { class: "mt-5 flex flex-col gap-2",
                            Button { href: "#/contact",
                                "Request the guest brief "
                                ArrowRightIcon {}
                            }
                            Button { href: email_href, variant: ButtonVariant::Ghost,
                                "Email "
                                MailIcon {}
                            }
                        }
                        div { class: "mt-4 text-xs text-neutral-400", "Participation is invitation‑only." }
                    }
                }
            }
        }
    }
}

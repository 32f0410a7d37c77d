use dioxus::prelude::*;
use standard_ui::{
    Button, ButtonVariant, FilmIcon, MailIcon, Pill, PlayIcon, QuoteIcon, SectionTitle,
    ShieldIcon, SparklesIcon,
};

#[component]
pub fn About() -> Element {
    rsx! {
        div { class: "space-y-10",
            SectionTitle {
                eyebrow: "About",
                title: "A documentary series worthy of the marque",
                desc: "THE STANDARD is built around premium storytelling, brand protection, and an editorial standard of discretion.",
            }

            section { class: "grid gap-4 lg:grid-cols-3",
                Pill {
                    icon: rsx! {
                        ShieldIcon { class: "h-5 w-5 text-yellow-400" }
                    },
                    title: "Brand protection commitment",
                    desc: "Approval‑first workflow, restricted associations, and a standard of excellence in every frame.",
                }
                Pill {
                    icon: rsx! {
                        FilmIcon { class: "h-5 w-5 text-yellow-400" }
                    },
                    title: "Episode architecture",
                    desc: "Consistent segments enable seamless storytelling and repeatable creative production.",
                }
                Pill {
                    icon: rsx! {
                        SparklesIcon { class: "h-5 w-5 text-yellow-400" }
                    },
                    title: "Distribution",
                    desc: "YouTube for proof‑of‑concept, with pathways to premium platform expansion and live screenings.",
                }
            }

            section { class: "rounded-[28px] border border-white/10 bg-white/5 p-7",
                div { class: "grid gap-6 lg:grid-cols-2",
                    div {
                        div { class: "text-2xl font-semibold", "Host & Executive Producer" }
                        p { class: "mt-3 text-neutral-300",
                            "Kris Buban is a Rolls‑Royce owner and member of the Whispers community, creating from inside the community—peer to the guests, not an outside reviewer."
                        }
                        div { class: "mt-5 rounded-3xl border border-white/10 bg-neutral-950/40 p-5",
                            div { class: "flex items-start gap-3",
                                QuoteIcon { class: "mt-0.5 h-5 w-5 text-yellow-400" }
                                div { class: "text-sm text-neutral-300",
                                    "“We don’t review cars. We document a philosophy of living.”"
                                }
                            }
                        }
                    }
                    div { class: "rounded-3xl border border-white/10 bg-neutral-950/40 p-6",
                        div { class: "text-sm font-semibold", "What makes this different" }
                        div { class: "mt-3 space-y-3 text-sm text-neutral-300",
                            div { class: "flex gap-2",
                                span { class: "text-yellow-400", "•" }
                                " Selected guests (owners, not influencers)"
                            }
                            div { class: "flex gap-2",
                                span { class: "text-yellow-400", "•" }
                                " Relationship‑led partnerships"
                            }
                            div { class: "flex gap-2",
                                span { class: "text-yellow-400", "•" }
                                " Broadcast‑ready production quality"
                            }
                            div { class: "flex gap-2",
                                span { class: "text-yellow-400", "•" }
                                " Discretion, approvals, and brand protection"
                            }
                        }
                        div { class: "mt-6 flex flex-wrap gap-3",
                            Button { href: "#/watch", variant: ButtonVariant::Ghost,
                                PlayIcon {}
                                " Watch"
                            }
                            Button { href: "#/contact", variant: ButtonVariant::Ghost,
                                MailIcon {}
                                " Inquire"
                            }
                        }
                    }
                }
            }
        }
    }
}

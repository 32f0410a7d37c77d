use dioxus::prelude::*;
use standard_ui::{
    ArrowRightIcon, Button, ButtonVariant, CrownIcon, FilmIcon, HandshakeIcon, LockIcon, Pill,
    PlayIcon, ShieldIcon, SparklesIcon, Stat, YouTubeEmbed,
};

use crate::config;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "space-y-12",
            section { class: "grid items-center gap-10 lg:grid-cols-2",
                div {
                    div { class: "inline-flex items-center gap-2 rounded-2xl border border-white/10 bg-white/5 px-3 py-2 text-xs text-neutral-300",
                        ShieldIcon { class: "h-4 w-4 text-yellow-400" }
                        " Brand‑safe, approval‑first production"
                    }
                    h1 { class: "mt-5 text-4xl font-semibold tracking-tight sm:text-5xl",
                        "A cinematic portrait series featuring members of the Rolls‑Royce Whispers community."
                    }
                    p { class: "mt-4 max-w-xl text-neutral-300",
                        "We don’t review cars. We document a philosophy of living—discipline, legacy, and the architecture of excellence."
                    }

                    div { class: "mt-6 flex flex-wrap items-center gap-3",
                        Button { href: "#/watch",
                            PlayIcon {}
                            " Watch"
                        }
                        Button { href: "#/founding-guests", variant: ButtonVariant::Ghost,
                            CrownIcon {}
                            " Founding Guests"
                        }
                        Button { href: "#/sponsors", variant: ButtonVariant::Ghost,
                            HandshakeIcon {}
                            " Sponsors"
                        }
                    }

                    div { class: "mt-8 grid grid-cols-2 gap-3 sm:grid-cols-3",
                        Stat { value: "14–15", label: "Episodes (Season 1 target)" }
                        Stat { value: "15", label: "Founding guest positions" }
                        Stat { value: "Invitation‑only", label: "Participation" }
                    }
                }

                div { class: "space-y-4",
                    YouTubeEmbed {
                        video_id: config::VIDEO.featured_video_id.to_string(),
                        title: "THE STANDARD — Featured",
                    }
                    div { class: "grid gap-3 sm:grid-cols-2",
                        Pill {
                            icon: rsx! {
                                FilmIcon { class: "h-5 w-5 text-yellow-400" }
                            },
                            title: "Broadcast‑ready production",
                            desc: "4K cinematic capture, color grading, multi‑camera interviews, original score.",
                        }
                        Pill {
                            icon: rsx! {
                                LockIcon { class: "h-5 w-5 text-yellow-400" }
                            },
                            title: "Relationship‑led partnerships",
                            desc: "Carefully curated, season‑long associations.",
                        }
                    }
                }
            }

            section { class: "grid gap-4 lg:grid-cols-3",
                Pill {
                    icon: rsx! {
                        SparklesIcon { class: "h-5 w-5 text-yellow-400" }
                    },
                    title: "For viewers",
                    desc: "Substance over spectacle—what excellence looks like in practice, from those who live it.",
                }
                Pill {
                    icon: rsx! {
                        CrownIcon { class: "h-5 w-5 text-yellow-400" }
                    },
                    title: "For Founding Guests",
                    desc: "A permanent, cinematic legacy piece—crafted with discretion, input, and premium distribution.",
                }
                Pill {
                    icon: rsx! {
                        HandshakeIcon { class: "h-5 w-5 text-yellow-400" }
                    },
                    title: "For Sponsors",
                    desc: "Select, category‑aligned partnerships structured privately and with long‑term fit in mind.",
                }
            }

            section { class: "rounded-[28px] border border-white/10 bg-white/5 p-7",
                div { class: "grid gap-6 lg:grid-cols-3",
                    div { class: "lg:col-span-2",
                        div { class: "text-xs font-semibold uppercase tracking-widest text-yellow-400",
                            "Positioning"
                        }
                        div { class: "mt-2 text-2xl font-semibold", "The gap in luxury content" }
                        p { class: "mt-3 text-neutral-300",
                            "Most automotive media focuses on mechanics and features. THE STANDARD focuses on the mindset and lifestyle behind ownership—why people build what they build, and how they choose to live."
                        }
                    }
                    div { class: "flex items-end justify-start lg:justify-end",
                        Button { href: "#/about", variant: ButtonVariant::Ghost,
                            "Read the story "
                            ArrowRightIcon {}
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use standard_ui::{
    ArrowRightIcon, ContactCard, CrownIcon, Field, FieldKind, HandshakeIcon, MailIcon, PhoneIcon,
    PlayIcon, SectionTitle,
};

use crate::config;
use crate::links;

const INQUIRY_TYPES: &[&str] = &["Founding Guest", "Sponsor", "Media", "Viewer"];

#[component]
pub fn Contact() -> Element {
    let email = config::BRAND.contact_email;
    let phone = config::BRAND.contact_phone;
    let guest_href = links::mailto_with_subject(email, links::FOUNDING_GUEST_SUBJECT);
    let sponsor_href = links::mailto_with_subject(email, links::SPONSOR_SUBJECT);
    let media_href = links::mailto_with_subject(email, links::MEDIA_SUBJECT);
    let direct_href = links::mailto_url(email);
    let phone_href = links::tel_url(phone);

    rsx! {
        div { class: "space-y-10",
            SectionTitle {
                eyebrow: "Contact",
                title: "Request a brief. Schedule a call.",
                desc: "Tell us whether you’re a Founding Guest, Sponsor, or Media/Viewer inquiry.",
            }

            section { class: "grid gap-4 lg:grid-cols-3",
                ContactCard {
                    icon: rsx! {
                        CrownIcon { class: "h-5 w-5 text-yellow-400" }
                    },
                    title: "Founding Guests",
                    desc: "Selection‑based invitations for members of the Whispers community and aligned principals.",
                    cta_label: "Email guest team",
                    href: guest_href,
                }
                ContactCard {
                    icon: rsx! {
                        HandshakeIcon { class: "h-5 w-5 text-yellow-400" }
                    },
                    title: "Sponsors",
                    desc: "Category exclusivity and limited seasonal participation.",
                    cta_label: "Email partnerships",
                    href: sponsor_href,
                }
                ContactCard {
                    icon: rsx! {
                        PlayIcon { class: "h-5 w-5 text-yellow-400" }
                    },
                    title: "Viewers / Media",
                    desc: "Press, distribution inquiries, or collaborations.",
                    cta_label: "Email media",
                    href: media_href,
                }
            }

            section { class: "rounded-[28px] border border-white/10 bg-white/5 p-7",
                div { class: "grid gap-6 lg:grid-cols-2",
                    div {
                        div { class: "text-sm font-semibold", "Direct" }
                        div { class: "mt-4 space-y-3 text-sm text-neutral-300",
                            div { class: "flex items-center gap-3",
                                MailIcon { class: "h-4 w-4 text-yellow-400" }
                                a { class: "hover:underline", href: "{direct_href}", "{email}" }
                            }
                            div { class: "flex items-center gap-3",
                                PhoneIcon { class: "h-4 w-4 text-yellow-400" }
                                a { class: "hover:underline", href: "{phone_href}", "{phone}" }
                            }
                        }

                        div { class: "mt-6 rounded-3xl border border-white/10 bg-neutral-950/40 p-5",
                            div { class: "text-sm font-semibold", "Quick note" }
                            p { class: "mt-2 text-sm text-neutral-300",
                                "We protect discretion. Guest details and category availability are shared on request."
                            }
                        }
                    }

                    div { class: "rounded-3xl border border-white/10 bg-neutral-950/40 p-6",
                        div { class: "text-sm font-semibold", "Lead form (optional)" }
                        p { class: "mt-2 text-sm text-neutral-400",
                            "If you want a real form submission, connect this to your backend (e.g., a form service or CRM endpoint) and replace the mailto action."
                        }

                        form {
                            class: "mt-4 space-y-3",
                            action: "{direct_href}",
                            method: "post",
                            enctype: "text/plain",
                            Field { label: "Name", placeholder: "Full name", name: "name" }
                            Field {
                                label: "Company",
                                placeholder: "Company / Organization",
                                name: "company",
                            }
                            Field {
                                label: "Email",
                                placeholder: "you@company.com",
                                name: "email",
                                kind: FieldKind::Email,
                            }
                            Field {
                                label: "I’m reaching out as",
                                name: "type",
                                kind: FieldKind::Select(INQUIRY_TYPES),
                            }
                            Field {
                                label: "Message",
                                placeholder: "What would you like to accomplish?",
                                name: "message",
                                kind: FieldKind::TextArea,
                            }
                            button {
                                r#type: "submit",
                                class: "inline-flex w-full items-center justify-center gap-2 rounded-2xl bg-yellow-500 px-4 py-2 text-sm font-semibold text-neutral-950 hover:bg-yellow-400",
                                "Send "
                                ArrowRightIcon {}
                            }
                        }
                    }
                }
            }

            section { class: "text-xs text-neutral-500",
                "By contacting us, you acknowledge that communications may be used to coordinate production logistics and partnership discussions. Guest contact is shared only by explicit consent."
            }
        }
    }
}

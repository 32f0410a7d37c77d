use dioxus::prelude::*;
use standard_ui::{
    ArrowRightIcon, Button, ButtonVariant, MailIcon, PricingCard, PricingTier, SectionTitle,
};

use crate::config;
use crate::links;

const TIER_BULLETS: &[&str] = &[
    "Category exclusivity",
    "Seasonal alignment",
    "Private collaboration",
    "Details shared by request",
];

/// Sponsorship tiers in display order. Middle tier carries the highlight.
const TIERS: [PricingTier; 3] = [
    PricingTier {
        title: "Category Lock",
        price: "$10,000",
        subtitle: "30‑day exclusive hold",
        bullets: TIER_BULLETS,
        highlight: false,
    },
    PricingTier {
        title: "Episode Participation",
        price: "$65,000",
        subtitle: "Per episode",
        bullets: TIER_BULLETS,
        highlight: true,
    },
    PricingTier {
        title: "Season / Premier",
        price: "$325K – $650K",
        subtitle: "Full‑season partnership",
        bullets: TIER_BULLETS,
        highlight: false,
    },
];

#[component]
pub fn Sponsors() -> Element {
    let email_href = links::mailto_with_subject(config::BRAND.contact_email, links::SPONSOR_SUBJECT);

    rsx! {
        div { class: "space-y-10",
            SectionTitle {
                eyebrow: "Sponsors",
                title: "Select partnerships, discreetly structured",
                desc: "THE STANDARD partners with a small number of category‑aligned institutions each season. Participation is by qualification and designed to preserve trust, discretion, and long‑term relationships.",
            }

            section { class: "grid gap-4 lg:grid-cols-3",
                for tier in TIERS {
                    PricingCard {
                        key: "{tier.title}",
                        tier,
                        cta_label: "Request brief",
                        cta_href: "#/contact",
                    }
                }
            }

            section { class: "rounded-[28px] border border-white/10 bg-white/5 p-7",
                div { class: "grid gap-6 lg:grid-cols-3",
                    div { class: "lg:col-span-2",
                        div { class: "text-2xl font-semibold", "How partnerships are approached" }
                        p { class: "mt-3 text-neutral-300",
                            "Sponsorship is intentionally limited. Each partnership is structured privately to align values, category relevance, and long‑term fit. Operational details are never public and are discussed only after mutual interest is established."
                        }
                    }
                    div { class: "rounded-3xl border border-white/10 bg-neutral-950/40 p-5",
                        div { class: "text-sm font-semibold", "Inquiry process" }
                        ol { class: "mt-3 space-y-2 text-sm text-neutral-300",
                            li { class: "flex gap-2",
                                span { class: "text-yellow-400", "1." }
                                " Submit an inquiry"
                            }
                            li { class: "flex gap-2",
                                span { class: "text-yellow-400", "2." }
                                " Qualification conversation"
                            }
                            li { class: "flex gap-2",
                                span { class: "text-yellow-400", "3." }
                                " Private sponsor brief"
                            }
                        }
                        div { class: "mt-5 flex flex-col gap-2",
                            Button { href: "#/contact",
                                "Request sponsor brief "
                                ArrowRightIcon {}
                            }
                            Button { href: email_href, variant: ButtonVariant::Ghost,
                                "Contact partnerships "
                                MailIcon {}
                            }
                        }
                        div { class: "mt-4 text-xs text-neutral-400",
                            "All discussions are confidential and non‑obligatory."
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_tier_is_highlighted() {
        let highlighted: Vec<_> = TIERS.iter().filter(|t| t.highlight).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].title, "Episode Participation");
    }

    #[test]
    fn tiers_follow_the_rate_card_order() {
        let titles: Vec<_> = TIERS.iter().map(|t| t.title).collect();
        assert_eq!(
            titles,
            ["Category Lock", "Episode Participation", "Season / Premier"]
        );
    }

    #[test]
    fn tier_pricing_matches_the_rate_card() {
        assert_eq!(TIERS[0].price, "$10,000");
        assert_eq!(TIERS[1].price, "$65,000");
        assert_eq!(TIERS[2].price, "$325K – $650K");
    }

    #[test]
    fn every_tier_shares_the_same_terms() {
        for tier in &TIERS {
            assert_eq!(tier.bullets, TIER_BULLETS);
        }
    }
}

//! Site content: brand identity, YouTube catalog, and primary navigation.
//!
//! Everything here is compile-time data. Editing this file is how the site
//! gets a new episode or a new nav entry; no other module hardcodes content.

use standard_ui::display_types::{Brand, Episode};
use standard_ui::NavItem;

pub const BRAND: Brand = Brand {
    name: "THE STANDARD",
    subtitle: "A Rolls‑Royce Life",
    tagline: "Excellence is the standard. Everything else is optional.",
    contact_email: "Partnerships@TheStandardSeries.com",
    contact_phone: "(240) 946‑0774",
};

/// YouTube wiring for the embeds on Home and Watch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoConfig {
    pub playlist_id: &'static str,
    /// Fallback for the Watch page when the curated catalog is empty, and
    /// the hero embed on Home.
    pub featured_video_id: &'static str,
}

// TODO: swap in the production playlist ID once the channel goes live.
pub const VIDEO: VideoConfig = VideoConfig {
    playlist_id: "PLxxxxxxxxxxxxxxxx",
    featured_video_id: "dQw4w9WgXcQ",
};

/// Curated episode catalog shown on the Watch page, newest last.
pub const EPISODES: &[Episode] = &[
    Episode {
        id: "dQw4w9WgXcQ",
        title: "Episode 1 — The Architecture of Excellence",
        runtime: "24:18",
        blurb: "A cinematic portrait of discipline, legacy, and the mindset behind extraordinary achievement.",
    },
    Episode {
        id: "M7lc1UVf-VE",
        title: "Episode 2 — Destination: Luxury",
        runtime: "22:05",
        blurb: "An intimate look at how high performers curate their worlds—where they stay, how they move, what they value.",
    },
    Episode {
        id: "ysz5S6PUM-U",
        title: "Episode 3 — The Vault Insight",
        runtime: "26:41",
        blurb: "Wisdom, strategy, and the principles that compound over time.",
    },
];

/// Primary navigation, in display order. Every key here must be a route the
/// resolver recognizes; the startup self-check enforces that.
pub const NAV: &[NavItem] = &[
    NavItem { key: "home", label: "Home" },
    NavItem { key: "watch", label: "Watch" },
    NavItem { key: "founding-guests", label: "Founding Guests" },
    NavItem { key: "sponsors", label: "Sponsors" },
    NavItem { key: "about", label: "About" },
    NavItem { key: "contact", label: "Contact" },
];

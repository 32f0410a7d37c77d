//! Shared UI components

pub mod background;
pub mod button;
pub mod contact_card;
pub mod embed;
pub mod field;
pub mod icons;
pub mod pricing_card;
pub mod section;
pub mod site_footer;
pub mod site_header;

pub use background::BackgroundGlow;
pub use button::{Button, ButtonVariant};
pub use contact_card::ContactCard;
pub use embed::{
    embed_url, playlist_embed_url, playlist_url, watch_url, YouTubeEmbed, YouTubePlaylistEmbed,
};
pub use field::{Field, FieldKind};
pub use icons::{
    ArrowRightIcon, CrownIcon, ExternalLinkIcon, FilmIcon, HandshakeIcon, LockIcon, MailIcon,
    PhoneIcon, PlayIcon, QuoteIcon, ShieldIcon, SparklesIcon,
};
pub use pricing_card::{PricingCard, PricingTier};
pub use section::{Pill, SectionTitle, Stat};
pub use site_footer::SiteFooterView;
pub use site_header::{NavItem, SiteHeaderView, COMPACT_MENU_BREAKPOINT};

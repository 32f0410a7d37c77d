//! Pages and the route-key → page table.

pub mod about;
pub mod contact;
pub mod founding_guests;
pub mod home;
pub mod layout;
pub mod not_found;
pub mod sponsors;
pub mod watch;

pub use layout::PageShell;

use dioxus::prelude::*;

/// Every page the site can show. The enum is the whole page table; adding
/// a page means adding a variant and wiring it into [`Page::from_key`] and
/// [`Page::render`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Watch,
    FoundingGuests,
    Sponsors,
    About,
    Contact,
    NotFound,
}

impl Page {
    /// Resolves a route key to a page.
    ///
    /// Unknown keys land on [`Page::NotFound`]. The empty key counts as
    /// home so a stray `#/` fragment still renders something sensible.
    pub fn from_key(key: &str) -> Self {
        match key {
            "" | "home" => Page::Home,
            "watch" => Page::Watch,
            "founding-guests" => Page::FoundingGuests,
            "sponsors" => Page::Sponsors,
            "about" => Page::About,
            "contact" => Page::Contact,
            _ => Page::NotFound,
        }
    }

    /// Canonical route key. Used to key the page wrapper node so a page
    /// change remounts it (restarting the enter animation).
    pub fn key(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Watch => "watch",
            Page::FoundingGuests => "founding-guests",
            Page::Sponsors => "sponsors",
            Page::About => "about",
            Page::Contact => "contact",
            Page::NotFound => "not-found",
        }
    }

    pub fn render(self) -> Element {
        match self {
            Page::Home => rsx! {
                home::Home {}
            },
            Page::Watch => rsx! {
                watch::Watch {}
            },
            Page::FoundingGuests => rsx! {
                founding_guests::FoundingGuests {}
            },
            Page::Sponsors => rsx! {
                sponsors::Sponsors {}
            },
            Page::About => rsx! {
                about::About {}
            },
            Page::Contact => rsx! {
                contact::Contact {}
            },
            Page::NotFound => rsx! {
                not_found::NotFound {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn every_nav_key_resolves_to_a_page() {
        for item in config::NAV {
            assert_ne!(
                Page::from_key(item.key),
                Page::NotFound,
                "nav entry {:?} does not resolve",
                item.key
            );
        }
    }

    #[test]
    fn empty_key_falls_back_to_home() {
        assert_eq!(Page::from_key(""), Page::Home);
    }

    #[test]
    fn unknown_key_resolves_to_not_found() {
        assert_eq!(Page::from_key("does-not-exist"), Page::NotFound);
    }

    #[test]
    fn canonical_keys_round_trip() {
        let pages = [
            Page::Home,
            Page::Watch,
            Page::FoundingGuests,
            Page::Sponsors,
            Page::About,
            Page::Contact,
        ];
        for page in pages {
            assert_eq!(Page::from_key(page.key()), page);
        }
    }
}

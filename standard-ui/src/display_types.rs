//! Display types for the site's view components
//!
//! Everything on the site is fixed at build time, so these are plain
//! `&'static str` records rather than owned models. They let components
//! render from whatever configuration the app crate bakes in.

/// Brand identity shown in the header, footer, and contact surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brand {
    pub name: &'static str,
    pub subtitle: &'static str,
    pub tagline: &'static str,
    pub contact_email: &'static str,
    pub contact_phone: &'static str,
}

/// One entry of the episode catalog on the Watch page.
///
/// Identity is the platform-assigned video id; the catalog itself is an
/// ordered, immutable slice defined by the app's configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Episode {
    pub id: &'static str,
    pub title: &'static str,
    pub runtime: &'static str,
    pub blurb: &'static str,
}

//! Startup configuration diagnostics.
//!
//! The site's content lives in compile-time constants, so the failure mode
//! is not a crash but a quietly wrong site: a nav entry pointing at a page
//! that resolves to not-found, a Watch page with nothing playable, a
//! contact address that cannot receive mail. These checks run once at
//! launch and report anything inconsistent. They only ever log; a broken
//! check must never take the site down with it.

use tracing::error;

use crate::config;
use crate::pages::Page;

/// Returns a description of every configuration inconsistency found.
pub fn startup_inconsistencies() -> Vec<String> {
    let mut issues = Vec::new();

    for item in config::NAV {
        if Page::from_key(item.key) == Page::NotFound {
            issues.push(format!("nav entry {:?} does not resolve to a page", item.key));
        }
    }

    if Page::from_key("") != Page::Home {
        issues.push("empty route key does not fall back to home".to_string());
    }

    if config::EPISODES.is_empty() && config::VIDEO.featured_video_id.is_empty() {
        issues.push("watch page has nothing playable: episode catalog and featured id are both empty".to_string());
    }

    for (i, episode) in config::EPISODES.iter().enumerate() {
        if config::EPISODES[..i].iter().any(|e| e.id == episode.id) {
            issues.push(format!("duplicate episode id {:?} in the catalog", episode.id));
        }
    }

    if !config::BRAND.contact_email.contains('@') {
        issues.push(format!(
            "contact email {:?} is not a mail address",
            config::BRAND.contact_email
        ));
    }

    issues
}

/// Runs the checks and logs each finding.
pub fn run() {
    for issue in startup_inconsistencies() {
        error!("startup self-check: {}", issue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipping_config_is_consistent() {
        let issues = startup_inconsistencies();
        assert!(issues.is_empty(), "unexpected issues: {issues:?}");
    }
}

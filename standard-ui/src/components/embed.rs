//! YouTube embed components and URL construction
//!
//! Embeds go through the privacy-enhanced youtube-nocookie.com endpoint.
//! Outbound "open on YouTube" links use the regular host so they land in
//! the viewer's signed-in session.

use dioxus::prelude::*;

/// Player parameters shared by every embed: no related videos from other
/// channels, minimal branding, inline playback on mobile.
const EMBED_PARAMS: &str = "rel=0&modestbranding=1&playsinline=1";

/// Privacy-enhanced embed URL for a single video.
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube-nocookie.com/embed/{video_id}?{EMBED_PARAMS}")
}

/// Privacy-enhanced embed URL for a whole playlist.
pub fn playlist_embed_url(playlist_id: &str) -> String {
    format!("https://www.youtube-nocookie.com/embed/videoseries?list={playlist_id}&{EMBED_PARAMS}")
}

/// Outbound watch-page URL for a single video.
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

/// Outbound playlist-page URL.
pub fn playlist_url(playlist_id: &str) -> String {
    format!("https://www.youtube.com/playlist?list={playlist_id}")
}

/// 16:9 iframe player for a single video.
#[component]
pub fn YouTubeEmbed(video_id: String, #[props(default = "")] title: &'static str) -> Element {
    let title = if title.is_empty() {
        "YouTube video player"
    } else {
        title
    };

    rsx! {
        div { class: "overflow-hidden rounded-3xl border border-white/10 bg-black",
            div { class: "relative w-full", style: "padding-top: 56.25%;",
                iframe {
                    class: "absolute inset-0 h-full w-full border-0",
                    src: embed_url(&video_id),
                    title: "{title}",
                    allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share",
                    allowfullscreen: true,
                }
            }
        }
    }
}

/// 16:9 iframe player for the season playlist.
#[component]
pub fn YouTubePlaylistEmbed(playlist_id: String) -> Element {
    rsx! {
        div { class: "overflow-hidden rounded-3xl border border-white/10 bg-black",
            div { class: "relative w-full", style: "padding-top: 56.25%;",
                iframe {
                    class: "absolute inset-0 h-full w-full border-0",
                    src: playlist_embed_url(&playlist_id),
                    title: "YouTube playlist player",
                    allow: "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share",
                    allowfullscreen: true,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_uses_nocookie_host() {
        let url = embed_url("dQw4w9WgXcQ");
        assert!(url.starts_with("https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ?"));
        assert!(url.contains("rel=0"));
        assert!(url.contains("modestbranding=1"));
        assert!(url.contains("playsinline=1"));
    }

    #[test]
    fn playlist_embed_uses_videoseries() {
        let url = playlist_embed_url("PL123");
        assert!(url.starts_with("https://www.youtube-nocookie.com/embed/videoseries?list=PL123&"));
        assert!(url.contains("rel=0"));
    }

    #[test]
    fn outbound_links_use_regular_host() {
        assert_eq!(
            watch_url("M7lc1UVf-VE"),
            "https://www.youtube.com/watch?v=M7lc1UVf-VE"
        );
        assert_eq!(
            playlist_url("PL123"),
            "https://www.youtube.com/playlist?list=PL123"
        );
    }
}

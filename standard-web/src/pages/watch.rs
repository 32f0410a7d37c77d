use dioxus::prelude::*;
use standard_ui::display_types::Episode;
use standard_ui::{
    playlist_url, watch_url, Button, ButtonVariant, PlayIcon, SectionTitle, YouTubeEmbed,
    YouTubePlaylistEmbed,
};

use crate::config;

/// Video selected when the page first loads: the first catalog entry, or
/// the featured video when no episodes are curated yet.
fn initial_selection() -> &'static str {
    config::EPISODES
        .first()
        .map(|episode| episode.id)
        .unwrap_or(config::VIDEO.featured_video_id)
}

#[component]
pub fn Watch() -> Element {
    let mut selected = use_signal(initial_selection);
    let selected_meta =
        use_memo(move || config::EPISODES.iter().find(|e| e.id == selected()).copied());

    rsx! {
        div { class: "space-y-8",
            SectionTitle {
                eyebrow: "Watch",
                title: "Episodes on YouTube",
                desc: "Stream full episodes here. Embeds use youtube‑nocookie.com.",
            }

            div { class: "grid gap-6 lg:grid-cols-5",
                div { class: "lg:col-span-3",
                    YouTubeEmbed {
                        video_id: selected().to_string(),
                        title: selected_meta().map_or("Episode", |e| e.title),
                    }
                    div { class: "mt-4 rounded-3xl border border-white/10 bg-white/5 p-5",
                        div { class: "flex items-start justify-between gap-4",
                            div {
                                div { class: "text-sm font-semibold text-white",
                                    {selected_meta().map_or("Featured", |e| e.title)}
                                }
                                div { class: "mt-1 text-sm text-neutral-400",
                                    {selected_meta().map_or("", |e| e.runtime)}
                                }
                                div { class: "mt-3 text-sm text-neutral-300",
                                    {selected_meta().map_or("", |e| e.blurb)}
                                }
                            }
                            Button { href: watch_url(selected()), variant: ButtonVariant::Ghost,
                                "Open on YouTube"
                            }
                        }
                    }
                }

                div { class: "lg:col-span-2",
                    div { class: "rounded-3xl border border-white/10 bg-white/5 p-5",
                        div { class: "text-sm font-semibold", "All Episodes" }
                        div { class: "mt-3 space-y-2",
                            for episode in config::EPISODES.iter().copied() {
                                EpisodeRow {
                                    key: "{episode.id}",
                                    episode,
                                    selected: episode.id == selected(),
                                    on_select: move |_| selected.set(episode.id),
                                }
                            }
                        }

                        div { class: "mt-4",
                            div { class: "text-xs text-neutral-400", "Prefer a playlist view?" }
                            div { class: "mt-2",
                                Button {
                                    href: playlist_url(config::VIDEO.playlist_id),
                                    variant: ButtonVariant::Outline,
                                    "Open playlist"
                                }
                            }
                        }
                    }
                }
            }

            SectionTitle { eyebrow: "Playlist", title: "Watch the full season" }
            YouTubePlaylistEmbed { playlist_id: config::VIDEO.playlist_id.to_string() }
        }
    }
}

#[component]
fn EpisodeRow(episode: Episode, selected: bool, on_select: EventHandler<()>) -> Element {
    let row_class = if selected {
        "w-full rounded-2xl border px-4 py-3 text-left transition border-yellow-500/40 bg-yellow-500/10"
    } else {
        "w-full rounded-2xl border px-4 py-3 text-left transition border-white/10 bg-white/5 hover:bg-white/10"
    };
    let play_class = if selected {
        "h-4 w-4 text-yellow-400"
    } else {
        "h-4 w-4 text-neutral-400"
    };

    rsx! {
        button { class: "{row_class}", onclick: move |_| on_select.call(()),
            div { class: "flex items-start justify-between gap-3",
                div {
                    div { class: "text-sm font-semibold text-white", "{episode.title}" }
                    div { class: "mt-1 text-xs text-neutral-400", "{episode.runtime}" }
                }
                PlayIcon { class: play_class }
            }
            div { class: "mt-2 line-clamp-2 text-sm text-neutral-300", "{episode.blurb}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_selection_prefers_the_catalog() {
        assert_eq!(initial_selection(), config::EPISODES[0].id);
    }

    #[test]
    fn selection_metadata_lookup_matches_by_id() {
        let found = config::EPISODES.iter().find(|e| e.id == "M7lc1UVf-VE");
        assert_eq!(found.map(|e| e.runtime), Some("22:05"));
    }
}

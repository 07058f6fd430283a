//! Embedded media players. The embeds are opaque iframes; each app keeps an
//! "open externally" fallback for browsers that block third-party frames.

use desktop_app_contract::AppServices;
use leptos::*;

use crate::content::{SPOTIFY_PLAYLIST_EMBED, YOUTUBE_VIDEOS};

/// Privacy-enhanced embed URL for a Youtube video id.
pub fn youtube_embed_url(video_id: &str) -> String {
    format!("https://www.youtube-nocookie.com/embed/{video_id}")
}

/// Watch page URL for a Youtube video id.
pub fn youtube_watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

/// Public page for an embed URL (drops the `/embed` path segment).
pub fn spotify_page_url(embed_url: &str) -> String {
    embed_url.replacen("/embed/", "/", 1)
}

#[component]
/// Spotify playlist embed.
pub fn SpotifyApp(
    /// Runtime services used for the external fallback.
    services: AppServices,
) -> impl IntoView {
    view! {
        <div class="app-shell app-spotify-shell">
            <iframe
                title="Spotify playlist"
                src=SPOTIFY_PLAYLIST_EMBED
                allow="autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture"
                loading="lazy"
            ></iframe>
            <footer class="app-statusbar">
                <button
                    type="button"
                    on:click=move |_| services.shell.open_external_url(spotify_page_url(SPOTIFY_PLAYLIST_EMBED))
                >
                    "Open in Spotify"
                </button>
            </footer>
        </div>
    }
}

#[component]
/// Youtube player with a small playlist.
pub fn YoutubeApp(
    /// Runtime services used for the external fallback.
    services: AppServices,
) -> impl IntoView {
    let current = create_rw_signal(0usize);
    let video_id = move || YOUTUBE_VIDEOS[current.get() % YOUTUBE_VIDEOS.len()].0;

    view! {
        <div class="app-shell app-youtube-shell">
            <div class="youtube-player">
                <iframe
                    title="Youtube player"
                    src=move || youtube_embed_url(video_id())
                    allow="accelerometer; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen=true
                    loading="lazy"
                ></iframe>
            </div>
            <ul class="youtube-playlist">
                {YOUTUBE_VIDEOS
                    .iter()
                    .enumerate()
                    .map(|(index, (_, title))| {
                        view! {
                            <li>
                                <button
                                    type="button"
                                    class:active=move || current.get() == index
                                    on:click=move |_| current.set(index)
                                >
                                    {*title}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <footer class="app-statusbar">
                <button type="button" on:click=move |_| services.shell.open_external_url(youtube_watch_url(video_id()))>
                    "Watch on Youtube"
                </button>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn media_urls() {
        assert_eq!(
            youtube_embed_url("abc"),
            "https://www.youtube-nocookie.com/embed/abc"
        );
        assert_eq!(youtube_watch_url("abc"), "https://www.youtube.com/watch?v=abc");
        assert_eq!(
            spotify_page_url("https://open.spotify.com/embed/playlist/xyz"),
            "https://open.spotify.com/playlist/xyz"
        );
    }
}

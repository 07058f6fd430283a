//! Photos app: album filter and a lightbox with wrap-around navigation.

use leptos::{ev::KeyboardEvent, *};

use crate::content::{Photo, GALLERY};

/// Album names in first-appearance order.
pub fn albums() -> Vec<&'static str> {
    let mut albums = Vec::new();
    for photo in GALLERY {
        if !albums.contains(&photo.album) {
            albums.push(photo.album);
        }
    }
    albums
}

/// Photos in `album`, or every photo when `album` is `None`.
pub fn photos_in(album: Option<&str>) -> Vec<Photo> {
    GALLERY
        .into_iter()
        .filter(|photo| album.map_or(true, |album| photo.album == album))
        .collect()
}

/// Moves `index` by `delta` within `len`, wrapping at both ends.
pub fn step_index(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (index as isize + delta).rem_euclid(len) as usize
}

#[component]
/// Photo grid with album chips and a lightbox.
pub fn GalleryApp() -> impl IntoView {
    let album = create_rw_signal(None::<&'static str>);
    let open_index = create_rw_signal(None::<usize>);
    let visible = create_memo(move |_| photos_in(album.get()));

    let step = move |delta: isize| {
        let len = visible.with(Vec::len);
        open_index.update(|index| {
            if let Some(index) = index {
                *index = step_index(*index, delta, len);
            }
        });
    };

    view! {
        <div
            class="app-shell app-gallery-shell"
            tabindex="0"
            on:keydown=move |ev: KeyboardEvent| match ev.key().as_str() {
                "ArrowLeft" => step(-1),
                "ArrowRight" => step(1),
                "Escape" => open_index.set(None),
                _ => {}
            }
        >
            <nav class="gallery-albums" aria-label="Albums">
                <button type="button" class:active=move || album.get().is_none() on:click=move |_| {
                    album.set(None);
                    open_index.set(None);
                }>
                    "All Photos"
                </button>
                {albums()
                    .into_iter()
                    .map(|name| {
                        view! {
                            <button
                                type="button"
                                class:active=move || album.get() == Some(name)
                                on:click=move |_| {
                                    album.set(Some(name));
                                    open_index.set(None);
                                }
                            >
                                {name}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <div class="gallery-grid">
                {move || {
                    visible
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, photo)| {
                            view! {
                                <button type="button" class="gallery-thumb" on:click=move |_| open_index.set(Some(index))>
                                    <img src=photo.src alt=photo.title loading="lazy" />
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
            {move || {
                open_index
                    .get()
                    .and_then(|index| visible.with(|photos| photos.get(index).copied()))
                    .map(|photo| {
                        view! {
                            <div class="gallery-lightbox" role="dialog" aria-label=photo.title on:click=move |_| open_index.set(None)>
                                <button type="button" class="gallery-prev" aria-label="Previous" on:click=move |ev| {
                                    ev.stop_propagation();
                                    step(-1);
                                }>"‹"</button>
                                <figure on:click=|ev| ev.stop_propagation()>
                                    <img src=photo.src alt=photo.title />
                                    <figcaption>{photo.title}</figcaption>
                                </figure>
                                <button type="button" class="gallery-next" aria-label="Next" on:click=move |ev| {
                                    ev.stop_propagation();
                                    step(1);
                                }>"›"</button>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn albums_and_filtering() {
        assert_eq!(albums(), vec!["Travel", "Nature", "Work"]);
        assert_eq!(photos_in(None).len(), GALLERY.len());
        let work: Vec<_> = photos_in(Some("Work")).into_iter().map(|photo| photo.id).collect();
        assert_eq!(work, vec!["desk", "meetup"]);
        assert!(photos_in(Some("Pets")).is_empty());
    }

    #[test]
    fn stepping_wraps_both_ways() {
        assert_eq!(step_index(0, -1, 3), 2);
        assert_eq!(step_index(2, 1, 3), 0);
        assert_eq!(step_index(1, 1, 3), 2);
        assert_eq!(step_index(5, 1, 0), 0);
    }
}

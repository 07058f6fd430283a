//! Camera app: live preview, capture into a persisted photo roll, delete and download.

use leptos::*;
use platform_host::{load_pref_with, save_pref_with, unix_time_ms_now};
use platform_host_web::{camera, WebPrefsStore};
use serde::{Deserialize, Serialize};

/// Preference key holding the photo roll.
pub const CAMERA_PHOTOS_KEY: &str = "camera-photos";

/// Photos kept in the roll; older captures are dropped.
pub const MAX_PHOTOS: usize = 12;

/// One captured frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPhoto {
    /// Capture id (unix ms as text).
    pub id: String,
    /// JPEG data URL.
    #[serde(rename = "dataUrl")]
    pub data_url: String,
    /// Capture time in unix ms.
    pub timestamp: u64,
}

/// Newest-first photo roll capped at [`MAX_PHOTOS`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoRoll {
    photos: Vec<CapturedPhoto>,
}

impl PhotoRoll {
    /// Roll from stored photos, re-applying the cap.
    pub fn from_photos(mut photos: Vec<CapturedPhoto>) -> Self {
        photos.truncate(MAX_PHOTOS);
        Self { photos }
    }

    /// Photos, newest first.
    pub fn photos(&self) -> &[CapturedPhoto] {
        &self.photos
    }

    /// Prepends a capture, dropping the oldest past the cap.
    pub fn add(&mut self, data_url: String, timestamp: u64) -> &CapturedPhoto {
        let mut id = timestamp.to_string();
        if self.photos.iter().any(|photo| photo.id == id) {
            id = format!("{timestamp}-{}", self.photos.len());
        }
        self.photos.insert(
            0,
            CapturedPhoto {
                id,
                data_url,
                timestamp,
            },
        );
        self.photos.truncate(MAX_PHOTOS);
        &self.photos[0]
    }

    /// Removes a photo; returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.photos.len();
        self.photos.retain(|photo| photo.id != id);
        self.photos.len() != before
    }
}

fn persist(roll: PhotoRoll) {
    spawn_local(async move {
        if let Err(err) = save_pref_with(&WebPrefsStore, CAMERA_PHOTOS_KEY, &roll).await {
            logging::warn!("camera roll persist failed: {err}");
        }
    });
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum CameraStatus {
    Starting,
    Live,
    Unavailable(String),
}

#[component]
/// Camera preview and photo roll.
pub fn CameraApp(
    /// Runtime window id, used to give the preview element a unique DOM id.
    window_id: u64,
) -> impl IntoView {
    let video_id = format!("camera-preview-{window_id}");
    let roll = create_rw_signal(PhotoRoll::default());
    let status = create_rw_signal(CameraStatus::Starting);
    let selected = create_rw_signal(None::<String>);
    let flash = create_rw_signal(false);

    spawn_local(async move {
        match load_pref_with::<_, Vec<CapturedPhoto>>(&WebPrefsStore, CAMERA_PHOTOS_KEY).await {
            Ok(Some(photos)) => roll.set(PhotoRoll::from_photos(photos)),
            Ok(None) => {}
            Err(err) => logging::warn!("camera roll load failed: {err}"),
        }
    });

    {
        let video_id = video_id.clone();
        spawn_local(async move {
            match camera::start_camera(&video_id).await {
                Ok(()) => status.set(CameraStatus::Live),
                Err(err) => {
                    logging::warn!("camera unavailable: {err}");
                    status.set(CameraStatus::Unavailable(err));
                }
            }
        });
    }
    on_cleanup({
        let video_id = video_id.clone();
        move || camera::stop_camera(&video_id)
    });

    let capture = {
        let video_id = video_id.clone();
        move |_: ev::MouseEvent| match camera::capture_frame(&video_id) {
            Ok(data_url) => {
                roll.update(|roll| {
                    roll.add(data_url, unix_time_ms_now());
                });
                persist(roll.get_untracked());
                flash.set(true);
                set_timeout(move || flash.set(false), std::time::Duration::from_millis(150));
            }
            Err(err) => logging::warn!("camera capture failed: {err}"),
        }
    };

    let delete = move |id: String| {
        if roll.try_update(|roll| roll.remove(&id)).unwrap_or(false) {
            if selected.get_untracked().as_deref() == Some(id.as_str()) {
                selected.set(None);
            }
            persist(roll.get_untracked());
        }
    };

    let selected_photo = move || {
        selected.get().and_then(|id| {
            roll.with(|roll| roll.photos().iter().find(|photo| photo.id == id).cloned())
        })
    };

    view! {
        <div class="app-shell app-camera-shell">
            <div class="camera-stage" class:flash=move || flash.get()>
                <video id=video_id autoplay=true playsinline=true muted=true></video>
                {move || match status.get() {
                    CameraStatus::Starting => Some(view! { <p class="camera-status">"Starting camera"</p> }.into_view()),
                    CameraStatus::Live => None,
                    CameraStatus::Unavailable(reason) => Some(view! {
                        <div class="camera-status camera-unavailable" role="alert">
                            <strong>"Camera unavailable"</strong>
                            <span>{reason}</span>
                        </div>
                    }.into_view()),
                }}
            </div>
            <div class="camera-controls">
                <button
                    type="button"
                    class="camera-shutter"
                    aria-label="Take photo"
                    disabled=move || status.get() != CameraStatus::Live
                    on:click=capture
                ></button>
                <span>{move || format!("{} / {MAX_PHOTOS} photos", roll.with(|roll| roll.photos().len()))}</span>
            </div>
            <div class="camera-roll">
                <For
                    each=move || roll.with(|roll| roll.photos().to_vec())
                    key=|photo| photo.id.clone()
                    children=move |photo| {
                        let id = photo.id.clone();
                        let delete_id = photo.id.clone();
                        view! {
                            <div class="camera-thumb">
                                <img src=photo.data_url alt="Captured photo" on:click=move |_| selected.set(Some(id.clone())) />
                                <button type="button" aria-label="Delete photo" on:click=move |_| delete(delete_id.clone())>"×"</button>
                            </div>
                        }
                    }
                />
            </div>
            {move || selected_photo().map(|photo| {
                let download_name = format!("photo_{}.jpg", photo.timestamp);
                let href = photo.data_url.clone();
                let id = photo.id.clone();
                view! {
                    <div class="camera-viewer" on:click=move |_| selected.set(None)>
                        <img src=photo.data_url alt="Captured photo" />
                        <div class="camera-viewer-actions" on:click=|ev| ev.stop_propagation()>
                            <a href=href download=download_name>"Download"</a>
                            <button type="button" on:click=move |_| delete(id.clone())>"Delete"</button>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn roll_is_newest_first_and_capped() {
        let mut roll = PhotoRoll::default();
        for timestamp in 1..=14 {
            roll.add(format!("data:image/jpeg;base64,{timestamp}"), timestamp);
        }
        assert_eq!(roll.photos().len(), MAX_PHOTOS);
        assert_eq!(roll.photos()[0].id, "14");
        assert_eq!(roll.photos().last().map(|photo| photo.timestamp), Some(3));
    }

    #[test]
    fn same_millisecond_captures_get_distinct_ids() {
        let mut roll = PhotoRoll::default();
        roll.add("a".to_string(), 7);
        let second = roll.add("b".to_string(), 7).id.clone();
        assert_ne!(second, "7");
        assert!(roll.remove("7"));
        assert!(!roll.remove("7"));
        assert_eq!(roll.photos().len(), 1);
    }

    #[test]
    fn roll_round_trips_through_prefs_as_a_plain_array() {
        let store = MemoryPrefsStore::default();
        let mut roll = PhotoRoll::default();
        roll.add("data:image/jpeg;base64,AA".to_string(), 42);
        block_on(save_pref_with(&store, CAMERA_PHOTOS_KEY, &roll)).expect("save");

        let raw = store.raw(CAMERA_PHOTOS_KEY).expect("stored");
        assert!(raw.starts_with('['));
        assert!(raw.contains("\"dataUrl\""));

        let restored: Vec<CapturedPhoto> = block_on(load_pref_with(&store, CAMERA_PHOTOS_KEY))
            .expect("load")
            .expect("present");
        assert_eq!(PhotoRoll::from_photos(restored), roll);
    }
}

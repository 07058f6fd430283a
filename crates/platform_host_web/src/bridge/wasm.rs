use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};

fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| "localStorage unavailable".to_string())
}

pub fn local_storage_get(key: &str) -> Option<String> {
    local_storage().ok()?.get_item(key).ok().flatten()
}

pub fn local_storage_set(key: &str, value: &str) -> Result<(), String> {
    local_storage()?
        .set_item(key, value)
        .map_err(|e| format!("localStorage set_item failed: {e:?}"))
}

pub fn local_storage_remove(key: &str) -> Result<(), String> {
    local_storage()?
        .remove_item(key)
        .map_err(|e| format!("localStorage remove_item failed: {e:?}"))
}

pub fn open_in_new_tab(url: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    window
        .open_with_url_and_target(url, "_blank")
        .map(|_| ())
        .map_err(|e| format!("window.open failed: {e:?}"))
}

pub fn viewport_size() -> (i32, i32) {
    let Some(window) = web_sys::window() else {
        return (1200, 800);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1200.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(800.0);
    (width as i32, height as i32)
}

pub fn prefers_dark_scheme() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn navigator_platform() -> Option<String> {
    web_sys::window()?.navigator().platform().ok()
}

fn video_element(video_element_id: &str) -> Result<HtmlVideoElement, String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(video_element_id))
        .ok_or_else(|| format!("video element `{video_element_id}` not found"))?
        .dyn_into::<HtmlVideoElement>()
        .map_err(|_| format!("element `{video_element_id}` is not a <video>"))
}

pub async fn start_camera(video_element_id: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| format!("media devices unavailable: {e:?}"))?;
    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    constraints.set_audio(&JsValue::FALSE);
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| format!("getUserMedia rejected: {e:?}"))?;
    let stream = JsFuture::from(promise)
        .await
        .map_err(|e| format!("camera permission denied: {e:?}"))?
        .dyn_into::<MediaStream>()
        .map_err(|_| "getUserMedia returned a non-stream value".to_string())?;

    let video = video_element(video_element_id)?;
    video.set_src_object(Some(&stream));
    if let Ok(play) = video.play() {
        let _ = JsFuture::from(play).await;
    }
    Ok(())
}

pub fn capture_frame(video_element_id: &str) -> Result<String, String> {
    let video = video_element(video_element_id)?;
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "document unavailable".to_string())?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| format!("create canvas failed: {e:?}"))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| "canvas element cast failed".to_string())?;
    canvas.set_width(video.video_width());
    canvas.set_height(video.video_height());
    let context = canvas
        .get_context("2d")
        .map_err(|e| format!("2d context failed: {e:?}"))?
        .ok_or_else(|| "2d context unavailable".to_string())?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "2d context cast failed".to_string())?;
    context
        .draw_image_with_html_video_element(&video, 0.0, 0.0)
        .map_err(|e| format!("draw frame failed: {e:?}"))?;
    canvas
        .to_data_url_with_type("image/jpeg")
        .map_err(|e| format!("encode frame failed: {e:?}"))
}

pub fn stop_camera(video_element_id: &str) {
    let Ok(video) = video_element(video_element_id) else {
        return;
    };
    if let Some(stream) = video.src_object() {
        for track in stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
    }
    video.set_src_object(None);
}

//! Browser API bridge.
//!
//! Routes calls to the `wasm32` implementation or to inert native fallbacks while keeping one
//! API for the adapter modules.

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub fn local_storage_get(key: &str) -> Option<String> {
    imp::local_storage_get(key)
}

pub fn local_storage_set(key: &str, value: &str) -> Result<(), String> {
    imp::local_storage_set(key, value)
}

pub fn local_storage_remove(key: &str) -> Result<(), String> {
    imp::local_storage_remove(key)
}

pub fn open_in_new_tab(url: &str) -> Result<(), String> {
    imp::open_in_new_tab(url)
}

pub fn viewport_size() -> (i32, i32) {
    imp::viewport_size()
}

pub fn prefers_dark_scheme() -> bool {
    imp::prefers_dark_scheme()
}

pub fn navigator_platform() -> Option<String> {
    imp::navigator_platform()
}

pub async fn start_camera(video_element_id: &str) -> Result<(), String> {
    imp::start_camera(video_element_id).await
}

pub fn capture_frame(video_element_id: &str) -> Result<String, String> {
    imp::capture_frame(video_element_id)
}

pub fn stop_camera(video_element_id: &str) {
    imp::stop_camera(video_element_id)
}

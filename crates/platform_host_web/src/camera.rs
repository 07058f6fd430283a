//! Camera capture helpers for the Camera app.
//!
//! Streams are attached to a `<video>` element identified by DOM id so callers do not have to
//! hold `web_sys` handles across reactive boundaries.

use crate::bridge;

/// Requests a video-only camera stream and attaches it to the `<video id=video_element_id>`.
///
/// # Errors
///
/// Returns an error when the element is missing, the browser has no media devices, or the user
/// denies permission.
pub async fn start_camera(video_element_id: &str) -> Result<(), String> {
    bridge::start_camera(video_element_id).await
}

/// Grabs the current frame of the attached stream as a JPEG data URL.
///
/// # Errors
///
/// Returns an error when the element or a 2D canvas context is unavailable.
pub fn capture_frame(video_element_id: &str) -> Result<String, String> {
    bridge::capture_frame(video_element_id)
}

/// Stops every track of the stream attached to the element and detaches it.
pub fn stop_camera(video_element_id: &str) {
    bridge::stop_camera(video_element_id);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn native_target_reports_camera_unavailable() {
        assert!(block_on(start_camera("camera-preview")).is_err());
        assert!(capture_frame("camera-preview").is_err());
        stop_camera("camera-preview");
    }
}

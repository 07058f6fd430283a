pub fn local_storage_get(_key: &str) -> Option<String> {
    None
}

pub fn local_storage_set(_key: &str, _value: &str) -> Result<(), String> {
    Ok(())
}

pub fn local_storage_remove(_key: &str) -> Result<(), String> {
    Ok(())
}

pub fn open_in_new_tab(url: &str) -> Result<(), String> {
    Err(format!("no browser available to open `{url}`"))
}

pub fn viewport_size() -> (i32, i32) {
    (1200, 800)
}

pub fn prefers_dark_scheme() -> bool {
    true
}

pub fn navigator_platform() -> Option<String> {
    None
}

pub async fn start_camera(_video_element_id: &str) -> Result<(), String> {
    Err("camera unavailable outside the browser".to_string())
}

pub fn capture_frame(_video_element_id: &str) -> Result<String, String> {
    Err("camera unavailable outside the browser".to_string())
}

pub fn stop_camera(_video_element_id: &str) {}

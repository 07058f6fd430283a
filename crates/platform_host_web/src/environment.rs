//! Live browser environment probes.

use platform_host::HostEnvironment;

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// Reads `window.inner{Width,Height}`, `prefers-color-scheme` and `navigator.platform`.
pub struct WebEnvironment;

impl HostEnvironment for WebEnvironment {
    fn viewport_size(&self) -> (i32, i32) {
        bridge::viewport_size()
    }

    fn prefers_dark_scheme(&self) -> bool {
        bridge::prefers_dark_scheme()
    }

    fn is_mac_platform(&self) -> bool {
        bridge::navigator_platform()
            .map(|platform| platform.to_uppercase().contains("MAC"))
            .unwrap_or(false)
    }
}

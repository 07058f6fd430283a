//! Environment probes the shell layout depends on.

/// Read-only view of the host display environment.
pub trait HostEnvironment {
    /// Current viewport size in CSS pixels as `(width, height)`.
    fn viewport_size(&self) -> (i32, i32);

    /// Whether the host reports a dark color-scheme preference.
    fn prefers_dark_scheme(&self) -> bool;

    /// Whether the host platform uses the Command key as the primary shortcut modifier.
    fn is_mac_platform(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Environment with fixed answers, used on non-browser targets and in tests.
pub struct FixedEnvironment {
    /// Viewport width in CSS pixels.
    pub width: i32,
    /// Viewport height in CSS pixels.
    pub height: i32,
    /// Reported dark color-scheme preference.
    pub prefers_dark: bool,
    /// Reported macOS-style platform.
    pub mac_platform: bool,
}

impl Default for FixedEnvironment {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            prefers_dark: true,
            mac_platform: false,
        }
    }
}

impl HostEnvironment for FixedEnvironment {
    fn viewport_size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn prefers_dark_scheme(&self) -> bool {
        self.prefers_dark
    }

    fn is_mac_platform(&self) -> bool {
        self.mac_platform
    }
}

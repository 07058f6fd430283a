//! Inline SVG glyphs for the menu bar and overlay chrome.
//!
//! App icons are PNG assets under `/icons/`; these glyphs cover the controls that are drawn
//! rather than shipped as images.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic glyph identifiers used by shell components.
pub enum IconName {
    /// Logo menu glyph.
    Logo,
    /// Spotlight search glyph.
    Search,
    /// Shown in dark mode; switches to light.
    Sun,
    /// Shown in light mode; switches to dark.
    Moon,
    /// Launchpad grid glyph.
    Launchpad,
    WifiOn,
    Bluetooth,
    Battery,
    /// Checked menu item marker.
    Checkmark,
    /// Submenu marker.
    ChevronRight,
    Settings,
}

impl IconName {
    /// Stable token used for CSS hooks and debugging.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Logo => "logo",
            Self::Search => "search",
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Launchpad => "launchpad",
            Self::WifiOn => "wifi-on",
            Self::Bluetooth => "bluetooth",
            Self::Battery => "battery",
            Self::Checkmark => "checkmark",
            Self::ChevronRight => "chevron-right",
            Self::Settings => "settings",
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::Logo => {
                r#"<path d="M12 3.5a8.5 8.5 0 1 0 0 17 8.5 8.5 0 0 0 0-17ZM2 12C2 6.48 6.48 2 12 2s10 4.48 10 10-4.48 10-10 10S2 17.52 2 12Zm10-5a5 5 0 0 1 4.9 4h-2.04a3 3 0 1 0 0 2h2.04A5 5 0 1 1 12 7Z"/>"#
            }
            Self::Search => {
                r#"<path d="M10 2.75a7.25 7.25 0 0 1 5.63 11.82l4.9 4.9a.75.75 0 0 1-.98 1.13l-.08-.07-4.9-4.9A7.25 7.25 0 1 1 10 2.75Zm0 1.5a5.75 5.75 0 1 0 0 11.5 5.75 5.75 0 0 0 0-11.5Z"/>"#
            }
            Self::Sun => {
                r#"<path d="M12 2c.41 0 .75.34.75.75v1.5a.75.75 0 0 1-1.5 0v-1.5c0-.41.34-.75.75-.75Zm0 15a5 5 0 1 0 0-10 5 5 0 0 0 0 10Zm0-1.5a3.5 3.5 0 1 1 0-7 3.5 3.5 0 0 1 0 7Zm9.25-2.75a.75.75 0 0 0 0-1.5h-1.5a.75.75 0 0 0 0 1.5h1.5ZM12 19c.41 0 .75.34.75.75v1.5a.75.75 0 0 1-1.5 0v-1.5c0-.41.34-.75.75-.75Zm-7.75-6.25a.75.75 0 0 0 0-1.5h-1.5a.75.75 0 0 0 0 1.5h1.5Zm-.03-8.53c.3-.3.77-.3 1.06 0l1.5 1.5a.75.75 0 0 1-1.06 1.06l-1.5-1.5a.75.75 0 0 1 0-1.06Zm1.06 15.56a.75.75 0 1 1-1.06-1.06l1.5-1.5a.75.75 0 1 1 1.06 1.06l-1.5 1.5Zm14.5-15.56a.75.75 0 0 0-1.06 0l-1.5 1.5a.75.75 0 0 0 1.06 1.06l1.5-1.5c.3-.3.3-.77 0-1.06Zm-1.06 15.56a.75.75 0 1 0 1.06-1.06l-1.5-1.5a.75.75 0 1 0-1.06 1.06l1.5 1.5Z"/>"#
            }
            Self::Moon => {
                r#"<path d="M20.03 15.4a.75.75 0 0 0-.93-.97 7.5 7.5 0 0 1-9.53-9.53.75.75 0 0 0-.97-.93A9 9 0 1 0 20.03 15.4ZM12 19.5a7.5 7.5 0 0 1-4.15-13.75 9 9 0 0 0 10.4 10.4A7.5 7.5 0 0 1 12 19.5Z"/>"#
            }
            Self::Launchpad => {
                r#"<path d="M5 4h3a1 1 0 0 1 1 1v3a1 1 0 0 1-1 1H5a1 1 0 0 1-1-1V5a1 1 0 0 1 1-1Zm5.5 0h3a1 1 0 0 1 1 1v3a1 1 0 0 1-1 1h-3a1 1 0 0 1-1-1V5a1 1 0 0 1 1-1ZM16 4h3a1 1 0 0 1 1 1v3a1 1 0 0 1-1 1h-3a1 1 0 0 1-1-1V5a1 1 0 0 1 1-1ZM5 15h3a1 1 0 0 1 1 1v3a1 1 0 0 1-1 1H5a1 1 0 0 1-1-1v-3a1 1 0 0 1 1-1Zm5.5 0h3a1 1 0 0 1 1 1v3a1 1 0 0 1-1 1h-3a1 1 0 0 1-1-1v-3a1 1 0 0 1 1-1ZM16 15h3a1 1 0 0 1 1 1v3a1 1 0 0 1-1 1h-3a1 1 0 0 1-1-1v-3a1 1 0 0 1 1-1ZM5 9.5h3a1 1 0 0 1 1 1v3a1 1 0 0 1-1 1H5a1 1 0 0 1-1-1v-3a1 1 0 0 1 1-1Zm5.5 0h3a1 1 0 0 1 1 1v3a1 1 0 0 1-1 1h-3a1 1 0 0 1-1-1v-3a1 1 0 0 1 1-1Zm5.5 0h3a1 1 0 0 1 1 1v3a1 1 0 0 1-1 1h-3a1 1 0 0 1-1-1v-3a1 1 0 0 1 1-1Z"/>"#
            }
            Self::WifiOn => {
                r#"<path d="M17.74 10.75c.6.6 1.1 1.3 1.5 2.07a.75.75 0 1 1-1.34.68 6.56 6.56 0 0 0-11.71-.02.75.75 0 1 1-1.34-.67 8.06 8.06 0 0 1 12.9-2.06Zm-2.1 3.07c.45.45.82 1 1.08 1.58a.75.75 0 1 1-1.38.6A3.6 3.6 0 0 0 8.75 16a.75.75 0 1 1-1.37-.6 5.1 5.1 0 0 1 8.26-1.57Zm4.8-5.54c.52.5 1 1.09 1.42 1.7a.75.75 0 1 1-1.24.85 10.45 10.45 0 0 0-17.23 0 .75.75 0 0 1-1.23-.86 11.95 11.95 0 0 1 18.29-1.69Zm-7.38 8.16a1.5 1.5 0 1 1-2.12 2.12 1.5 1.5 0 0 1 2.12-2.12Z"/>"#
            }
            Self::Bluetooth => {
                r#"<path d="M11.47 2.22a.75.75 0 0 1 .8.12l5 4.5a.75.75 0 0 1 0 1.12L13.12 11.7l4.15 3.74a.75.75 0 0 1 0 1.12l-5 4.5A.75.75 0 0 1 11 20.5v-7.12l-3.5 3.18a.75.75 0 1 1-1-1.12l4.1-3.73-4.1-3.72a.75.75 0 0 1 1-1.12l3.5 3.17V2.9c0-.3.18-.56.47-.68ZM12.5 13.3v5.5l3.05-2.75-3.05-2.75Zm0-3.2 3.05-2.75L12.5 4.6v5.5Z"/>"#
            }
            Self::Battery => {
                r#"<path d="M17 6a3 3 0 0 1 3 3v.5h.5c.83 0 1.5.67 1.5 1.5v2c0 .83-.67 1.5-1.5 1.5H20v.5a3 3 0 0 1-3 3H5a3 3 0 0 1-3-3V9a3 3 0 0 1 3-3h12Zm0 1.5H5c-.83 0-1.5.67-1.5 1.5v6c0 .83.67 1.5 1.5 1.5h12c.83 0 1.5-.67 1.5-1.5V9c0-.83-.67-1.5-1.5-1.5ZM6 9h8.5c.28 0 .5.22.5.5v5a.5.5 0 0 1-.5.5H6a.5.5 0 0 1-.5-.5v-5c0-.28.22-.5.5-.5Z"/>"#
            }
            Self::Checkmark => {
                r#"<path d="M4.53 12.97a.75.75 0 0 0-1.06 1.06l4.5 4.5c.3.3.77.3 1.06 0l11-11a.75.75 0 0 0-1.06-1.06L8.5 16.94l-3.97-3.97Z"/>"#
            }
            Self::ChevronRight => {
                r#"<path d="M8.47 4.22a.75.75 0 0 0 0 1.06L15.19 12l-6.72 6.72a.75.75 0 1 0 1.06 1.06l7.25-7.25c.3-.3.3-.77 0-1.06L9.53 4.22a.75.75 0 0 0-1.06 0Z"/>"#
            }
            Self::Settings => {
                r#"<path d="M12 2a1 1 0 0 1 .98.8l.25 1.2a8.1 8.1 0 0 1 1.74.72l1.06-.64a1 1 0 0 1 1.24.15l1.58 1.58a1 1 0 0 1 .15 1.24l-.64 1.06c.3.55.54 1.13.72 1.74l1.2.25a1 1 0 0 1 .8.98v2.24a1 1 0 0 1-.8.98l-1.2.25a8.1 8.1 0 0 1-.72 1.74l.64 1.06a1 1 0 0 1-.15 1.24l-1.58 1.58a1 1 0 0 1-1.24.15l-1.06-.64a8.1 8.1 0 0 1-1.74.72l-.25 1.2a1 1 0 0 1-.98.8H9.76a1 1 0 0 1-.98-.8l-.25-1.2a8.1 8.1 0 0 1-1.74-.72l-1.06.64a1 1 0 0 1-1.24-.15l-1.58-1.58a1 1 0 0 1-.15-1.24l.64-1.06a8.1 8.1 0 0 1-.72-1.74l-1.2-.25a1 1 0 0 1-.8-.98V9.76a1 1 0 0 1 .8-.98l1.2-.25c.18-.61.42-1.19.72-1.74l-.64-1.06a1 1 0 0 1 .15-1.24l1.58-1.58a1 1 0 0 1 1.24-.15l1.06.64c.55-.3 1.13-.54 1.74-.72l.25-1.2A1 1 0 0 1 9.76 2H12Zm-.38 1.5H10.4l-.24 1.16a1 1 0 0 1-.76.78 6.6 6.6 0 0 0-2.2.91 1 1 0 0 1-1.09.02l-1.02-.62-.86.86.62 1.02a1 1 0 0 1-.02 1.09 6.6 6.6 0 0 0-.91 2.2 1 1 0 0 1-.78.76L2 11.62v1.2l1.16.24a1 1 0 0 1 .78.76 6.6 6.6 0 0 0 .91 2.2 1 1 0 0 1 .02 1.09l-.62 1.02.86.86 1.02-.62a1 1 0 0 1 1.09.02 6.6 6.6 0 0 0 2.2.91 1 1 0 0 1 .76.78l.24 1.16h1.2l.24-1.16a1 1 0 0 1 .76-.78 6.6 6.6 0 0 0 2.2-.91 1 1 0 0 1 1.09-.02l1.02.62.86-.86-.62-1.02a1 1 0 0 1 .02-1.09 6.6 6.6 0 0 0 .91-2.2 1 1 0 0 1 .78-.76l1.16-.24v-1.2l-1.16-.24a1 1 0 0 1-.78-.76 6.6 6.6 0 0 0-.91-2.2 1 1 0 0 1-.02-1.09l.62-1.02-.86-.86-1.02.62a1 1 0 0 1-1.09-.02 6.6 6.6 0 0 0-2.2-.91 1 1 0 0 1-.76-.78l-.24-1.16ZM11 8a3 3 0 1 1 0 6 3 3 0 0 1 0-6Zm0 1.5a1.5 1.5 0 1 0 0 3 1.5 1.5 0 0 0 0-3Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized shell icon sizes.
pub enum IconSize {
    /// 12px (menu markers).
    Xs,
    /// 16px (menu bar status items).
    #[default]
    Sm,
    /// 20px (overlay controls).
    Md,
}

impl IconSize {
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 20,
        }
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

#[component]
/// Renders a glyph from the shell icon catalog.
pub fn ShellIcon(
    icon: IconName,
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}

//! Inline SVG stroke icons (Lucide set, 24x24 grid).

use leptos::prelude::*;
use serde::Serialize;

/// Icons used on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Glyph {
    /// Brand mark
    Shield,
    /// Rack server
    Server,
    /// Processor chip
    Cpu,
    /// Padlock
    Lock,
    /// Download arrow
    Download,
    /// Right chevron
    ChevronRight,
    /// Hamburger menu
    Menu,
    /// Close (x)
    Close,
    /// Envelope
    Mail,
    /// Map pin
    MapPin,
}

impl Glyph {
    /// SVG child elements drawn inside a `0 0 24 24` viewBox.
    pub const fn markup(self) -> &'static str {
        match self {
            Glyph::Shield => ICON_SHIELD,
            Glyph::Server => ICON_SERVER,
            Glyph::Cpu => ICON_CPU,
            Glyph::Lock => ICON_LOCK,
            Glyph::Download => ICON_DOWNLOAD,
            Glyph::ChevronRight => ICON_CHEVRON_RIGHT,
            Glyph::Menu => ICON_MENU,
            Glyph::Close => ICON_X,
            Glyph::Mail => ICON_MAIL,
            Glyph::MapPin => ICON_MAP_PIN,
        }
    }
}

/// Renders a stroke icon.
///
/// `class` carries sizing and color; icons inherit `currentColor`.
#[component]
pub fn Icon(
    /// Icon to draw
    glyph: Glyph,
    /// Additional CSS class names
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
            inner_html=glyph.markup()
        ></svg>
    }
}

// =============================================================================
// Lucide icons - https://lucide.dev/
// =============================================================================

const ICON_SHIELD: &str = r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/>"#;

const ICON_SERVER: &str = r#"<rect width="20" height="8" x="2" y="2" rx="2" ry="2"/><rect width="20" height="8" x="2" y="14" rx="2" ry="2"/><line x1="6" x2="6.01" y1="6" y2="6"/><line x1="6" x2="6.01" y1="18" y2="18"/>"#;

const ICON_CPU: &str = r#"<rect width="16" height="16" x="4" y="4" rx="2"/><rect width="6" height="6" x="9" y="9" rx="1"/><path d="M15 2v2"/><path d="M15 20v2"/><path d="M2 15h2"/><path d="M2 9h2"/><path d="M20 15h2"/><path d="M20 9h2"/><path d="M9 2v2"/><path d="M9 20v2"/>"#;

const ICON_LOCK: &str = r#"<rect width="18" height="11" x="3" y="11" rx="2" ry="2"/><path d="M7 11V7a5 5 0 0 1 10 0v4"/>"#;

const ICON_DOWNLOAD: &str = r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="7 10 12 15 17 10"/><line x1="12" x2="12" y1="15" y2="3"/>"#;

const ICON_CHEVRON_RIGHT: &str = r#"<path d="m9 18 6-6-6-6"/>"#;

const ICON_MENU: &str = r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#;

const ICON_X: &str = r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#;

const ICON_MAIL: &str = r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#;

const ICON_MAP_PIN: &str = r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#;

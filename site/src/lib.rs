//! # aegis-site
//!
//! Leptos components for the Aegis Applied Computing landing page.
//!
//! One component tree, two delivery targets:
//!
//! - **CSR** (`csr` feature) - the `landing/` crate mounts [`App`] to `<body>`
//!   and the navigation state runs on signals and a window scroll listener.
//! - **Static export** - [`render_page`] renders the complete document to a
//!   string. The navigation behavior ships as an inline script that drives
//!   the same CSS state classes.
//!
//! ## Quick Start
//!
//! ```rust
//! use aegis_site::{render_page, PageMeta};
//!
//! let html = render_page(&PageMeta::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains(r#"id="whitepaper""#));
//! ```
//!
//! ## Architecture
//!
//! - [`state`] - navigation UI state (menu flag, scroll flag)
//! - [`sections`] - section identifiers, anchors and markers
//! - [`content`] - static page copy
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
mod scroll;
pub mod sections;
pub mod state;
pub mod styles;

pub use components::{App, PageDocument, PageMeta, SiteStyles};

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render the complete landing page as a standalone HTML document.
///
/// The result includes `<!DOCTYPE html>`, the inline stylesheet and the
/// inline navigation script. It references no external assets.
pub fn render_page(meta: &PageMeta) -> String {
    let doc = view! { <PageDocument meta=meta.clone() /> };

    let html = doc.to_html();
    tracing::debug!(bytes = html.len(), "rendered landing page");

    // Leptos doesn't include DOCTYPE
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_document_shell() {
        let html = render_page(&PageMeta::default());

        assert!(html.starts_with("<!DOCTYPE html>\n<html"));
        assert!(html.contains(r#"lang="en""#));
        assert!(html.contains("<title>Aegis Applied Computing | Sovereign Compute For The Edge</title>"));
        assert!(html.contains("<style>"));
        assert!(html.contains("<script>"));
    }

    #[test]
    fn honors_custom_meta() {
        let meta = PageMeta {
            title: "Aegis-1 Preview".into(),
            description: "Preview build".into(),
            lang: "en-US".into(),
        };
        let html = render_page(&meta);

        assert!(html.contains("<title>Aegis-1 Preview</title>"));
        assert!(html.contains(r#"content="Preview build""#));
        assert!(html.contains(r#"lang="en-US""#));
    }

    #[test]
    fn navigation_renders_closed_and_unscrolled() {
        let html = render_page(&PageMeta::default());

        assert!(html.contains(r#"class="site-nav""#));
        assert!(html.contains(r#"class="nav-mobile""#));
        assert!(html.contains(r#"aria-label="Open menu""#));
        assert!(html.contains(r#"aria-expanded="false""#));
        assert!(!html.contains("site-nav scrolled"));
    }
}

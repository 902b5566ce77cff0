//! Root components: the page body and, for static export, the full document.

use super::{Features, Footer, Hero, Nav, Specs, WhitePaper};
use crate::state::SCROLL_THRESHOLD_PX;
use crate::styles::SITE_CSS;
use leptos::prelude::*;

/// Document-level options for the static export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    /// `<title>` text
    pub title: String,
    /// `<meta name="description">` content
    pub description: String,
    /// `lang` attribute of `<html>`
    pub lang: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: "Aegis Applied Computing | Sovereign Compute For The Edge".into(),
            description: "Turnkey, air-gapped GPU infrastructure designed for secure LLM inference and fine-tuning."
                .into(),
            lang: "en".into(),
        }
    }
}

/// The page: six sections in fixed order.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="page">
            <Nav />
            <Hero />
            <Features />
            <Specs />
            <WhitePaper />
            <Footer />
        </div>
    }
}

/// The site stylesheet as a `<style>` element.
#[component]
pub fn SiteStyles() -> impl IntoView {
    view! { <style inner_html=SITE_CSS></style> }
}

/// Complete HTML document for the static export.
///
/// No WASM runs in the exported file, so the navigation behavior ships as
/// a small inline script driving the same state classes.
#[component]
pub fn PageDocument(
    /// Head metadata
    meta: PageMeta,
) -> impl IntoView {
    view! {
        <html lang=meta.lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <meta name="description" content=meta.description />
                <title>{meta.title}</title>
                <SiteStyles />
            </head>
            <body>
                <App />
                <script inner_html=nav_script()></script>
            </body>
        </html>
    }
}

/// Inline navigation script for the static export.
pub fn nav_script() -> String {
    NAV_SCRIPT.replace("__SCROLL_THRESHOLD__", &SCROLL_THRESHOLD_PX.to_string())
}

/// Menu toggle and scroll threshold, mirroring `NavState`.
const NAV_SCRIPT: &str = r##"
(() => {
  const SCROLL_THRESHOLD = __SCROLL_THRESHOLD__;
  const nav = document.querySelector('nav.site-nav');
  if (!nav) return;

  const button = nav.querySelector('[data-role="menu-toggle"]');
  const panel = nav.querySelector('[data-role="menu-panel"]');

  const setMenuOpen = (open) => {
    button.classList.toggle('open', open);
    panel.classList.toggle('open', open);
    button.setAttribute('aria-expanded', String(open));
    button.setAttribute('aria-label', open ? 'Close menu' : 'Open menu');
  };

  button.addEventListener('click', () => setMenuOpen(!panel.classList.contains('open')));
  nav.querySelectorAll('a[href^="#"]').forEach((link) => {
    link.addEventListener('click', () => setMenuOpen(false));
  });

  window.addEventListener('scroll', () => {
    nav.classList.toggle('scrolled', window.scrollY > SCROLL_THRESHOLD);
  });
})();
"##;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_script_inlines_threshold() {
        let script = nav_script();
        assert!(script.contains("const SCROLL_THRESHOLD = 20;"));
        assert!(!script.contains("__SCROLL_THRESHOLD__"));
    }

    #[test]
    fn nav_script_is_complete() {
        let script = nav_script();
        assert!(script.contains(r##"nav.querySelectorAll('a[href^="#"]')"##));
        assert!(script.contains("window.addEventListener('scroll'"));
        assert!(script.trim_end().ends_with("})();"));
    }

    #[test]
    fn nav_script_stays_local() {
        let script = nav_script();
        for api in ["fetch(", "XMLHttpRequest", "localStorage", "sessionStorage", "document.cookie"] {
            assert!(!script.contains(api), "nav script must not use {api}");
        }
    }
}

//! Structural checks over rendered page HTML.
//!
//! Two rules:
//! - every in-page `href="#…"` resolves to an element `id`
//! - each top-level section marker appears exactly once, in page order

use std::collections::HashSet;

use aegis_site::sections::PageSection;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// Attributes are only matched inside a start tag; text nodes keep `"` unescaped.
static FRAGMENT_HREF_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r##"<[A-Za-z][^<>]*?\shref="#([^"]*)""##).unwrap());

static ELEMENT_ID_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r#"<[A-Za-z][^<>]*?\sid="([^"]*)""#).unwrap());

static SECTION_MARKER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<[A-Za-z][^<>]*?\sdata-section="([^"]*)""#).unwrap());

/// A single structural problem in rendered HTML.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageProblem {
    #[error("link to #{0} has no matching id")]
    BrokenAnchor(String),

    #[error("section '{0}' is missing")]
    MissingSection(&'static str),

    #[error("section '{key}' appears {count} times")]
    DuplicateSection { key: &'static str, count: usize },

    #[error("unknown section marker '{0}'")]
    UnknownSection(String),

    #[error("sections out of order: expected {expected}, found {found}")]
    OutOfOrder { expected: String, found: String },
}

/// Run every check. Problems come back in discovery order; empty means clean.
pub fn check_page(html: &str) -> Vec<PageProblem> {
    let mut problems = check_anchors(html);
    problems.extend(check_sections(html));
    problems
}

/// In-page links whose fragment matches no element id.
pub fn check_anchors(html: &str) -> Vec<PageProblem> {
    let ids: HashSet<&str> = ELEMENT_ID_REGEX
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect();

    let mut seen = HashSet::new();
    FRAGMENT_HREF_REGEX
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .filter(|target| !ids.contains(target) && seen.insert(*target))
        .map(|target| PageProblem::BrokenAnchor(target.to_string()))
        .collect()
}

/// Section markers: each expected key exactly once, in render order.
pub fn check_sections(html: &str) -> Vec<PageProblem> {
    let found: Vec<&str> = SECTION_MARKER_REGEX
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect();

    let mut problems = Vec::new();

    for key in &found {
        if !PageSection::ALL.iter().any(|section| section.key() == *key) {
            problems.push(PageProblem::UnknownSection((*key).to_string()));
        }
    }

    for section in PageSection::ALL {
        let key = section.key();
        match found.iter().filter(|k| **k == key).count() {
            0 => problems.push(PageProblem::MissingSection(key)),
            1 => {}
            count => problems.push(PageProblem::DuplicateSection { key, count }),
        }
    }

    if problems.is_empty() {
        let expected: Vec<&str> = PageSection::ALL.iter().map(|s| s.key()).collect();
        if found != expected {
            problems.push(PageProblem::OutOfOrder {
                expected: expected.join(" > "),
                found: found.join(" > "),
            });
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use aegis_site::{PageMeta, render_page};
    use pretty_assertions::assert_eq;

    fn sections_html(keys: &[&str]) -> String {
        keys.iter()
            .map(|key| format!(r#"<section data-section="{key}"></section>"#))
            .collect()
    }

    const ALL_KEYS: [&str; 6] = ["navigation", "hero", "features", "specs", "whitepaper", "footer"];

    #[test]
    fn rendered_page_is_clean() {
        let html = render_page(&PageMeta::default());
        assert_eq!(check_page(&html), Vec::<PageProblem>::new());
    }

    #[test]
    fn reports_broken_anchor_once() {
        let html = r##"<a href="#specs"></a><a href="#pricing"></a><a href="#pricing"></a><div id="specs"></div>"##;
        assert_eq!(check_anchors(html), vec![PageProblem::BrokenAnchor("pricing".into())]);
    }

    #[test]
    fn ignores_non_fragment_links() {
        let html = r#"<a href="/"></a><a href="https://example.com/#x"></a>"#;
        assert!(check_anchors(html).is_empty());
    }

    #[test]
    fn ignores_attribute_lookalikes_in_text() {
        let text = r##"<title>See our id="x" a href="#pricing" data-section="promo" deal</title>"##;
        let html = format!("{text}{}", sections_html(&ALL_KEYS));
        assert_eq!(check_page(&html), Vec::<PageProblem>::new());
    }

    #[test]
    fn rendered_page_with_attribute_like_title_is_clean() {
        let meta = PageMeta {
            title: r##"See our id="x" a href="#pricing" data-section="promo" deal"##.into(),
            ..PageMeta::default()
        };
        assert_eq!(check_page(&render_page(&meta)), Vec::<PageProblem>::new());
    }

    #[test]
    fn matches_attributes_after_other_attributes() {
        let html = r##"<a class="nav-link" href="#missing">Go</a>"##;
        assert_eq!(check_anchors(html), vec![PageProblem::BrokenAnchor("missing".into())]);
    }

    #[test]
    fn accepts_sections_in_order() {
        assert!(check_sections(&sections_html(&ALL_KEYS)).is_empty());
    }

    #[test]
    fn reports_missing_section() {
        let html = sections_html(&["navigation", "hero", "features", "specs", "footer"]);
        assert_eq!(check_sections(&html), vec![PageProblem::MissingSection("whitepaper")]);
    }

    #[test]
    fn reports_duplicate_section() {
        let html = sections_html(&["navigation", "hero", "hero", "features", "specs", "whitepaper", "footer"]);
        assert_eq!(
            check_sections(&html),
            vec![PageProblem::DuplicateSection { key: "hero", count: 2 }]
        );
    }

    #[test]
    fn reports_unknown_section() {
        let mut keys = ALL_KEYS.to_vec();
        keys.push("pricing");
        assert_eq!(
            check_sections(&sections_html(&keys)),
            vec![PageProblem::UnknownSection("pricing".into())]
        );
    }

    #[test]
    fn reports_swapped_sections() {
        let html = sections_html(&["navigation", "hero", "specs", "features", "whitepaper", "footer"]);
        let problems = check_sections(&html);
        assert_eq!(problems.len(), 1);
        assert_eq!(
            problems[0].to_string(),
            "sections out of order: expected navigation > hero > features > specs > whitepaper > footer, \
             found navigation > hero > specs > features > whitepaper > footer"
        );
    }
}

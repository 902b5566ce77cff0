//! Section identifiers shared by links, anchors and render-order checks.

use serde::Serialize;

/// In-page anchor targets reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Feature cards
    Technology,
    /// Specifications table
    Specs,
    /// White paper viewer
    WhitePaper,
    /// Footer contact block
    Contact,
}

impl SectionId {
    /// Every anchor target, in page order.
    pub const ALL: [SectionId; 4] = [
        SectionId::Technology,
        SectionId::Specs,
        SectionId::WhitePaper,
        SectionId::Contact,
    ];

    /// Element `id` of the section.
    pub const fn anchor(self) -> &'static str {
        match self {
            SectionId::Technology => "technology",
            SectionId::Specs => "specs",
            SectionId::WhitePaper => "whitepaper",
            SectionId::Contact => "contact",
        }
    }

    /// Fragment link pointing at the section.
    pub const fn href(self) -> &'static str {
        match self {
            SectionId::Technology => "#technology",
            SectionId::Specs => "#specs",
            SectionId::WhitePaper => "#whitepaper",
            SectionId::Contact => "#contact",
        }
    }
}

/// The six top-level sections of the page, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSection {
    /// Fixed navigation bar
    Navigation,
    /// Hero banner
    Hero,
    /// Feature cards
    Features,
    /// Specifications table
    Specs,
    /// White paper viewer
    WhitePaper,
    /// Page footer
    Footer,
}

impl PageSection {
    /// Render order of the page.
    pub const ALL: [PageSection; 6] = [
        PageSection::Navigation,
        PageSection::Hero,
        PageSection::Features,
        PageSection::Specs,
        PageSection::WhitePaper,
        PageSection::Footer,
    ];

    /// Value of the `data-section` marker on the section root.
    pub const fn key(self) -> &'static str {
        match self {
            PageSection::Navigation => "navigation",
            PageSection::Hero => "hero",
            PageSection::Features => "features",
            PageSection::Specs => "specs",
            PageSection::WhitePaper => "whitepaper",
            PageSection::Footer => "footer",
        }
    }

    /// The `data-section="…"` attribute as it appears in rendered HTML.
    pub fn marker(self) -> String {
        format!("data-section=\"{}\"", self.key())
    }

    /// Anchor id carried by the section root, if any.
    pub const fn anchor(self) -> Option<SectionId> {
        match self {
            PageSection::Features => Some(SectionId::Technology),
            PageSection::Specs => Some(SectionId::Specs),
            PageSection::WhitePaper => Some(SectionId::WhitePaper),
            PageSection::Footer => Some(SectionId::Contact),
            PageSection::Navigation | PageSection::Hero => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn href_is_fragment_of_anchor() {
        for id in SectionId::ALL {
            assert_eq!(id.href(), format!("#{}", id.anchor()));
        }
    }

    #[test]
    fn every_anchor_has_a_page_section() {
        for id in SectionId::ALL {
            let owners = PageSection::ALL
                .iter()
                .filter(|section| section.anchor() == Some(id))
                .count();
            assert_eq!(owners, 1, "{id:?} must be carried by exactly one section");
        }
    }

    #[test]
    fn anchors_follow_page_order() {
        let anchored: Vec<SectionId> = PageSection::ALL.iter().filter_map(|s| s.anchor()).collect();
        assert_eq!(anchored, SectionId::ALL.to_vec());
    }

    #[test]
    fn marker_quotes_key() {
        assert_eq!(PageSection::WhitePaper.marker(), "data-section=\"whitepaper\"");
    }
}

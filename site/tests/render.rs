//! Rendering tests for the static export.

use aegis_site::content::NAV_LINKS;
use aegis_site::sections::{PageSection, SectionId};
use aegis_site::{PageMeta, render_page};
use pretty_assertions::assert_eq;

fn page() -> String {
    render_page(&PageMeta::default())
}

#[test]
fn six_sections_render_once_in_order() {
    let html = page();

    let positions: Vec<usize> = PageSection::ALL
        .iter()
        .map(|section| {
            let marker = section.marker();
            assert_eq!(html.matches(&marker).count(), 1, "{marker} should appear once");
            html.find(&marker).unwrap()
        })
        .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn every_nav_link_targets_an_element_id() {
    let html = page();

    for link in NAV_LINKS.iter() {
        let id = format!(r#"id="{}""#, link.target.anchor());
        assert_eq!(html.matches(&id).count(), 1, "missing or duplicate {id}");
        assert!(html.contains(&format!(r#"href="{}""#, link.href())));
    }
}

#[test]
fn hero_calls_to_action_point_at_sections() {
    let html = page();

    assert!(html.contains(&format!(r#"href="{}" class="btn btn-primary""#, SectionId::WhitePaper.href())));
    assert!(html.contains(&format!(r#"href="{}" class="btn btn-secondary""#, SectionId::Specs.href())));
}

#[test]
fn anchored_sections_carry_their_ids() {
    let html = page();

    for section in PageSection::ALL {
        let Some(anchor) = section.anchor() else {
            continue;
        };
        let marker_at = html.find(&section.marker()).unwrap();
        let id_at = html.find(&format!(r#"id="{}""#, anchor.anchor())).unwrap();
        // id and marker live on the same opening tag
        let tag_start = html[..marker_at].rfind('<').unwrap();
        assert!(tag_start < id_at && id_at < marker_at, "{} id is not on its root", anchor.anchor());
    }
}

#[test]
fn document_is_self_contained() {
    let html = page();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(".site-nav.scrolled"));
    assert!(html.contains("const SCROLL_THRESHOLD = 20;"));
    assert!(!html.contains("<link"));
    assert!(!html.contains(" src="));
    assert!(!html.contains("fetch("));
}

#[test]
fn white_paper_copy_is_present() {
    let html = page();

    for text in [
        "AEGIS-WP-2025-001",
        "Download PDF",
        "Executive Summary",
        "Technology Concept",
        "Approach",
        "ROM Cost/Schedule",
        "$385,000",
    ] {
        assert!(html.contains(text), "missing {text}");
    }
}

#[test]
fn footer_lists_contact_details() {
    let html = page();

    assert!(html.contains("slam@mba2027.hbs.edu"));
    assert!(html.contains("Fairfax Station, VA 22039"));
    assert!(html.contains("FOUO // PROPRIETARY"));
}

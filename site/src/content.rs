//! Static page content.
//!
//! Copy that is rendered as lists (links, cards, table rows, milestones)
//! lives here so the components stay declarative and the `aegis content`
//! command can dump it as JSON. Long-form prose stays inline in the
//! components that render it.

use crate::components::Glyph;
use crate::sections::SectionId;
use serde::Serialize;

/// Company name as written in prose.
pub const COMPANY: &str = "Aegis Applied Computing";

/// Product name.
pub const PRODUCT: &str = "Aegis-1";

/// A navigation bar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Link text
    pub label: &'static str,
    /// Section the link scrolls to
    pub target: SectionId,
}

impl NavLink {
    /// Fragment link of the target section.
    pub const fn href(&self) -> &'static str {
        self.target.href()
    }
}

/// A feature card in the Technology section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Feature {
    /// Card heading
    pub title: &'static str,
    /// Card body
    pub description: &'static str,
    /// Icon above the heading
    pub glyph: Glyph,
}

/// One row of the specifications table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpecRow {
    /// Left column, e.g. "Compute"
    pub label: &'static str,
    /// Right column, set in monospace
    pub value: &'static str,
}

/// Floating badge next to the hero rack visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeroBadge {
    /// Badge text
    pub label: &'static str,
    /// Leading icon
    pub glyph: Glyph,
}

/// Label/value pair on the white paper title block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaperField {
    /// Small caps label
    pub label: &'static str,
    /// Field value
    pub value: &'static str,
    /// Spans both columns of the metadata grid.
    pub wide: bool,
}

/// White paper header and title block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaperMeta {
    /// Section heading above the document
    pub heading: &'static str,
    /// Line under the section heading
    pub lead: &'static str,
    /// Document type shown in the paper header
    pub kind: &'static str,
    /// Document reference number
    pub doc_ref: &'static str,
    /// Paper title
    pub title: &'static str,
    /// Paper subtitle
    pub subtitle: &'static str,
    /// Metadata grid under the title
    pub fields: &'static [PaperField],
}

/// A line item of the cost breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostLine {
    /// What is paid for
    pub item: &'static str,
    /// Dollar amount as displayed
    pub amount: &'static str,
}

/// A schedule milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Milestone {
    /// Month label, e.g. "Mo 2-3:"
    pub period: &'static str,
    /// Work done in that period
    pub task: &'static str,
}

/// A numbered step of the white paper approach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApproachStep {
    /// Two-digit step number
    pub number: &'static str,
    /// Bold lead-in
    pub title: &'static str,
    /// Step description
    pub body: &'static str,
}

/// A bullet of the technology concept list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConceptPoint {
    /// Bold lead-in
    pub title: &'static str,
    /// Bullet text
    pub body: &'static str,
}

/// Footer contact details, rendered as text only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Contact {
    /// Contact email address
    pub email: &'static str,
    /// Mailing location
    pub location: &'static str,
}

/// Navigation bar links, one per anchored section.
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { label: "Technology", target: SectionId::Technology },
    NavLink { label: "Specifications", target: SectionId::Specs },
    NavLink { label: "White Paper", target: SectionId::WhitePaper },
    NavLink { label: "Contact", target: SectionId::Contact },
];

/// Technology section cards.
pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Secure Staging",
        description: "Pre-provisioned at secure colocation facilities to ensure hardware integrity before deployment.",
        glyph: Glyph::Lock,
    },
    Feature {
        title: "Turnkey Deployment",
        description: "Ships with hardened OS, drivers, and containerized AI libraries. No internet required for setup.",
        glyph: Glyph::Server,
    },
    Feature {
        title: "High Density",
        description: "Optimized 4U chassis with liquid-assist cooling options for maximum compute per rack unit.",
        glyph: Glyph::Cpu,
    },
];

/// Aegis-1 specifications table.
pub const SPEC_ROWS: [SpecRow; 6] = [
    SpecRow { label: "Compute", value: "8x NVIDIA H100 (NVLink)" },
    SpecRow { label: "Memory", value: "2TB DDR5 System RAM" },
    SpecRow { label: "Storage", value: "30TB NVMe Gen5 (Raid 10)" },
    SpecRow { label: "Networking", value: "Dual Isolated 100GbE NICs" },
    SpecRow { label: "Power", value: "Max 30A @ 208V (Standard Rack)" },
    SpecRow { label: "Software", value: "Hardened Linux, K8s, Local LLM Repo" },
];

/// Floating badges on the hero rack, top then bottom.
pub const HERO_BADGES: [HeroBadge; 2] = [
    HeroBadge { label: "8x H100 GPU", glyph: Glyph::Cpu },
    HeroBadge { label: "Air-Gapped Ready", glyph: Glyph::Lock },
];

/// Number of node rows drawn in the hero rack visual.
pub const RACK_NODES: usize = 4;

/// White paper header, title block and metadata.
pub const PAPER: PaperMeta = PaperMeta {
    heading: "SOFWERX Assessment Submission",
    lead: "Official White Paper response for the Hardware-Enabled AI Acceleration Event.",
    kind: "Assessment Event (AE) White Paper",
    doc_ref: "AEGIS-WP-2025-001",
    title: "Aegis-1: High-Density, Air-Gapped Ready AI Inference Node",
    subtitle: "Turnkey GPU Infrastructure for Remote LLM Workloads",
    fields: &[
        PaperField { label: "Company", value: COMPANY, wide: false },
        PaperField { label: "Date", value: "November 27, 2025", wide: false },
        PaperField { label: "Point of Contact", value: "Nathan Alam", wide: false },
        PaperField { label: "Contact", value: "nathanalam99@gmail.com", wide: false },
        PaperField {
            label: "Technology Focus Area",
            value: "Hardware-Enabled AI Acceleration",
            wide: true,
        },
    ],
};

/// Technology Concept bullets.
pub const CONCEPT_POINTS: [ConceptPoint; 4] = [
    ConceptPoint {
        title: "Compute Architecture:",
        body: "8x NVIDIA H100 interconnected via high-bandwidth NVLink bridges to ensure unified memory access, essential for large model parameter handling.",
    },
    ConceptPoint {
        title: "Memory & Storage:",
        body: "2TB of System RAM to support RAG vector databases in-memory, paired with 30TB of NVMe Gen5 storage for rapid model swapping.",
    },
    ConceptPoint {
        title: "Physical Infrastructure:",
        body: "The chassis is designed to fit standard EIA-310 racks with a maximum power draw capped at 30A per rack to align with remote site limitations.",
    },
    ConceptPoint {
        title: "Secure Isolation:",
        body: "Physically distinct NICs for dual-network support, ensuring total physical and logical separation between classified and unclassified data streams.",
    },
];

/// Approach steps, in order.
pub const APPROACH_STEPS: [ApproachStep; 3] = [
    ApproachStep {
        number: "01",
        title: "Hardware Integration:",
        body: "Utilizing a \"Bring-Your-Own-Hardware\" assembly model validated with Digital Realty. We integrate high-density GPUs into a chassis optimized for air cooling efficiency.",
    },
    ApproachStep {
        number: "02",
        title: "Software Readiness:",
        body: "Drawing on experience building custom AI platforms for national security, Aegis-1 ships with a pre-hardened Linux kernel and pre-loaded containerized environments. No internet required.",
    },
    ApproachStep {
        number: "03",
        title: "Network Isolation:",
        body: "Hardware-level virtualization constraints to prevent data leakage between the two required network interfaces.",
    },
];

/// Headline unit price.
pub const UNIT_PRICE: &str = "$385,000";

/// Cost breakdown. Sums to [`UNIT_PRICE`].
pub const COST_LINES: [CostLine; 2] = [
    CostLine { item: "Hardware (GPUs, Chassis, NVMe)", amount: "$325,000" },
    CostLine { item: "Integration & Secure Staging", amount: "$60,000" },
];

/// Six-month delivery schedule.
pub const SCHEDULE: [Milestone; 5] = [
    Milestone { period: "Mo 1:", task: "Design & Procure (MVP Specs)" },
    Milestone { period: "Mo 2-3:", task: "Assembly & Staging at Digital Realty" },
    Milestone { period: "Mo 4:", task: "Software Load & Stress Test" },
    Milestone { period: "Mo 5:", task: "Validation (100+ User Load)" },
    Milestone { period: "Mo 6:", task: "Delivery to Remote Site" },
];

/// Footer contact details.
pub const CONTACT: Contact =
    Contact { email: "slam@mba2027.hbs.edu", location: "Fairfax Station, VA 22039" };

/// Footer legal links. All of them point at the site root.
pub const LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "CAGE Code (Pending)"];

/// Borrowed view over all list-shaped content, for serialization.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SiteContent {
    /// Company name
    pub company: &'static str,
    /// Product name
    pub product: &'static str,
    /// Navigation links
    pub nav_links: &'static [NavLink],
    /// Feature cards
    pub features: &'static [Feature],
    /// Specification rows
    pub specs: &'static [SpecRow],
    /// Hero badges
    pub hero_badges: &'static [HeroBadge],
    /// White paper metadata
    pub paper: PaperMeta,
    /// Technology Concept bullets
    pub concept: &'static [ConceptPoint],
    /// Approach steps
    pub approach: &'static [ApproachStep],
    /// Headline unit price
    pub unit_price: &'static str,
    /// Cost breakdown
    pub costs: &'static [CostLine],
    /// Schedule milestones
    pub schedule: &'static [Milestone],
    /// Contact details
    pub contact: Contact,
    /// Legal link labels
    pub legal: &'static [&'static str],
}

/// All static content of the page.
pub fn site_content() -> SiteContent {
    SiteContent {
        company: COMPANY,
        product: PRODUCT,
        nav_links: &NAV_LINKS,
        features: &FEATURES,
        specs: &SPEC_ROWS,
        hero_badges: &HERO_BADGES,
        paper: PAPER,
        concept: &CONCEPT_POINTS,
        approach: &APPROACH_STEPS,
        unit_price: UNIT_PRICE,
        costs: &COST_LINES,
        schedule: &SCHEDULE,
        contact: CONTACT,
        legal: &LEGAL_LINKS,
    }
}

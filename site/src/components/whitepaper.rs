//! White paper viewer - a styled, read-only rendition of the assessment paper.
//!
//! The "Download PDF" button is presentational only: there is no file to
//! serve, so a click is logged and nothing else happens.

use super::{Glyph, Icon};
use crate::content::{
    APPROACH_STEPS, CONCEPT_POINTS, COST_LINES, PAPER, PaperField, SCHEDULE, UNIT_PRICE,
};
use crate::sections::{PageSection, SectionId};
use leptos::prelude::*;

/// The assessment white paper, rendered as a document card.
#[component]
pub fn WhitePaper() -> impl IntoView {
    let request_download = move |_| {
        tracing::debug!(doc_ref = PAPER.doc_ref, "white paper download requested; no file is wired");
    };

    view! {
        <section
            id=SectionId::WhitePaper.anchor()
            class="whitepaper"
            data-section=PageSection::WhitePaper.key()
        >
            <div class="container-narrow">
                <div class="section-header">
                    <h2 class="paper-heading">{PAPER.heading}</h2>
                    <p class="paper-lead">{PAPER.lead}</p>
                </div>

                <div class="paper">
                    <div class="paper-header">
                        <div>
                            <h3 class="paper-kind">{PAPER.kind}</h3>
                            <p class="paper-ref">"Document Ref: " {PAPER.doc_ref}</p>
                        </div>
                        <button class="paper-download" type="button" on:click=request_download>
                            <Icon glyph=Glyph::Download class="icon-xs" />
                            "Download PDF"
                        </button>
                    </div>

                    <div class="paper-body">
                        <TitleBlock />
                        <div class="paper-sections">
                            <ExecutiveSummary />
                            <TechnologyConcept />
                            <Approach />
                            <CostSchedule />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn TitleBlock() -> impl IntoView {
    view! {
        <div class="paper-title-block">
            <h1 class="paper-title">{PAPER.title}</h1>
            <p class="paper-subtitle">{PAPER.subtitle}</p>
            <div class="paper-meta">
                {PAPER.fields.iter().map(|field| view! { <MetaField field=*field /> }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn MetaField(field: PaperField) -> impl IntoView {
    let class = if field.wide { "paper-meta-field wide" } else { "paper-meta-field" };
    view! {
        <div class=class>
            <span class="paper-meta-label">{field.label}</span>
            <span class="paper-meta-value">{field.value}</span>
        </div>
    }
}

/// Section heading with the blue rule on its left edge.
#[component]
fn PaperSection(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="paper-section">
            <h4 class="paper-section-title">{title}</h4>
            {children()}
        </section>
    }
}

#[component]
fn ExecutiveSummary() -> impl IntoView {
    view! {
        <PaperSection title="Executive Summary">
            <p>
                "Aegis Applied Computing proposes the "
                <strong>"Aegis-1"</strong>
                ", a fully turnkey, rack-mounted high-performance computing (HPC) appliance designed specifically \
                 for secure, remote Large Language Model (LLM) inference. Addressing the USSOCOM J24 need for a \
                 solution supporting 100+ concurrent users, the Aegis-1 integrates enterprise-grade GPU acceleration \
                 with a proprietary \"Secure-boot\" software architecture derived from experience deploying AI agents \
                 on classified networks."
            </p>
            <p class="paper-gap">
                "Unlike standard commercial-off-the-shelf (COTS) servers that require extensive on-site configuration, \
                 the Aegis-1 is pre-provisioned at a secure staging facility with all necessary drivers, containerized \
                 LLM libraries, and network isolation protocols prior to shipment. This approach ensures the system is \
                 \"mission-ready\" immediately upon installation at the remote site. Leveraging the Principal \
                 Investigator’s background in high-reliability hardware controls at SpaceX and classified AI deployment \
                 at Scale AI, this solution prioritizes physical robustness, thermal efficiency, and logical network \
                 isolation."
            </p>
            <div class="paper-callout">
                <p>
                    <span class="paper-callout-label">"TRL Status:"</span>
                    "Current TRL 4 (Component Validation). Targeting TRL 7 within 4 months via Digital Realty \
                     partnership validation."
                </p>
            </div>
        </PaperSection>
    }
}

#[component]
fn TechnologyConcept() -> impl IntoView {
    view! {
        <PaperSection title="Technology Concept">
            <p>
                "The Aegis-1 is a 4U rack-mounted server optimized for high-throughput LLM inference and fine-tuning."
            </p>
            <ul class="paper-list">
                {CONCEPT_POINTS
                    .iter()
                    .map(|point| {
                        view! {
                            <li>
                                <strong>{point.title}</strong>
                                " "
                                {point.body}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </PaperSection>
    }
}

#[component]
fn Approach() -> impl IntoView {
    view! {
        <PaperSection title="Approach">
            <p>
                "USSOCOM requires a solution that balances \"reliability,\" \"scalability,\" and \"immediate \
                 operation\". Our approach solves this through "
                <strong>"Pre-Deployment Staging."</strong>
            </p>

            <div class="paper-steps">
                {APPROACH_STEPS
                    .iter()
                    .map(|step| {
                        view! {
                            <div class="paper-step">
                                <div class="paper-step-number">{step.number}</div>
                                <div>
                                    <strong class="paper-step-title">{step.title}</strong>
                                    " "
                                    {step.body}
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <p class="paper-note">
                <strong>"Past/Current Efforts:"</strong>
                " The architecture is informed by the Principal Investigator's work deploying AI on classified \
                 networks for 500+ customers at Scale AI and managing high-reliability hardware at SpaceX."
            </p>
        </PaperSection>
    }
}

#[component]
fn CostSchedule() -> impl IntoView {
    view! {
        <PaperSection title="ROM Cost/Schedule">
            <div class="paper-columns">
                <div class="paper-card">
                    <h5 class="paper-card-title">"Cost Structure"</h5>
                    <p class="paper-price">
                        {UNIT_PRICE}
                        " "
                        <span class="paper-price-unit">"per unit"</span>
                    </p>
                    <ul class="paper-card-list">
                        {COST_LINES
                            .iter()
                            .map(|line| view! { <li>"• " {line.item} ": " {line.amount}</li> })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
                <div class="paper-card">
                    <h5 class="paper-card-title">"6-Month Schedule"</h5>
                    <ul class="paper-card-list">
                        {SCHEDULE
                            .iter()
                            .map(|milestone| {
                                view! {
                                    <li>
                                        <strong>{milestone.period}</strong>
                                        " "
                                        {milestone.task}
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
            </div>
        </PaperSection>
    }
}

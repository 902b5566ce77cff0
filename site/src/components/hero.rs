use super::{Glyph, Icon};
use crate::content::{HERO_BADGES, RACK_NODES};
use crate::sections::{PageSection, SectionId};
use leptos::prelude::*;

/// Hero banner with the calls to action and the rack visual.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero" data-section=PageSection::Hero.key()>
            <div class="hero-noise"></div>
            <div class="hero-fade"></div>

            <div class="container hero-inner">
                <div class="hero-grid">
                    <div class="hero-content">
                        <div class="hero-badge">
                            <span class="hero-badge-dot"></span>
                            "Mission Ready"
                        </div>
                        <h1 class="hero-title">
                            "Sovereign Compute "
                            <br />
                            <span class="hero-title-accent">"For The Edge"</span>
                        </h1>
                        <p class="hero-description">
                            "Turnkey, air-gapped GPU infrastructure designed for secure LLM inference and fine-tuning. "
                            "Deployed instantly, anywhere."
                        </p>
                        <div class="hero-actions">
                            <a href=SectionId::WhitePaper.href() class="btn btn-primary">
                                "View Assessment Paper"
                                <Icon glyph=Glyph::ChevronRight class="icon-sm btn-icon" />
                            </a>
                            <a href=SectionId::Specs.href() class="btn btn-secondary">
                                "Technical Specs"
                            </a>
                        </div>
                    </div>

                    <RackVisual />
                </div>
            </div>
        </section>
    }
}

/// Decorative server rack with status rows and two floating badges.
#[component]
fn RackVisual() -> impl IntoView {
    let [top_badge, bottom_badge] = HERO_BADGES;

    view! {
        <div class="rack">
            <div class="rack-frame">
                <div class="rack-glow"></div>
                <div class="rack-nodes">
                    {(1..=RACK_NODES)
                        .map(|_| {
                            view! {
                                <div class="rack-node">
                                    <div class="rack-node-status">
                                        <div class="rack-led"></div>
                                        <div class="rack-bar pulse"></div>
                                    </div>
                                    <div class="rack-node-ports">
                                        <div class="rack-port"></div>
                                        <div class="rack-port"></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="rack-footer">
                    <span>"STATUS: ONLINE"</span>
                    <span>"AEGIS-1 NODE"</span>
                </div>
            </div>

            <div class="rack-badge rack-badge-top">
                <Icon glyph=top_badge.glyph class="icon-sm accent-blue" />
                <span>{top_badge.label}</span>
            </div>
            <div class="rack-badge rack-badge-bottom">
                <Icon glyph=bottom_badge.glyph class="icon-sm accent-green" />
                <span>{bottom_badge.label}</span>
            </div>
        </div>
    }
}

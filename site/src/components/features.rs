use super::{Glyph, Icon};
use crate::content::{COMPANY, FEATURES};
use crate::sections::{PageSection, SectionId};
use leptos::prelude::*;

/// Technology section: three feature cards.
#[component]
pub fn Features() -> impl IntoView {
    let description = format!(
        "{COMPANY} bridges the gap between commercial innovation and mission-critical security requirements."
    );

    view! {
        <section
            id=SectionId::Technology.anchor()
            class="features"
            data-section=PageSection::Features.key()
        >
            <div class="container">
                <div class="section-header">
                    <h2 class="section-eyebrow">"Technology"</h2>
                    <p class="section-title">"Built for the Disconnected Edge"</p>
                    <p class="section-description">{description}</p>
                </div>

                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            view! {
                                <FeatureCard
                                    glyph=feature.glyph
                                    title=feature.title
                                    description=feature.description
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(glyph: Glyph, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">
                <Icon glyph=glyph class="icon-md accent-blue" />
            </div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}

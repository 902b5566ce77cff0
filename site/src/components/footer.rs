use super::{Brand, Glyph, Icon};
use crate::content::{COMPANY, CONTACT, LEGAL_LINKS};
use crate::sections::{PageSection, SectionId};
use leptos::prelude::*;

/// Footer with contact details and legal links.
#[component]
pub fn Footer() -> impl IntoView {
    let copyright = format!("© 2025 {COMPANY}. All rights reserved.");

    view! {
        <footer
            id=SectionId::Contact.anchor()
            class="footer"
            data-section=PageSection::Footer.key()
        >
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-about">
                        <Brand class="footer-brand" />
                        <p class="footer-blurb">
                            "Empowering national security with sovereign, high-performance AI infrastructure. "
                            "Built in Virginia, deployed globally."
                        </p>
                    </div>

                    <div>
                        <h4 class="footer-heading">"Contact"</h4>
                        <ul class="footer-list">
                            <li class="footer-contact">
                                <Icon glyph=Glyph::Mail class="icon-xs" />
                                {CONTACT.email}
                            </li>
                            <li class="footer-contact">
                                <Icon glyph=Glyph::MapPin class="icon-xs" />
                                {CONTACT.location}
                            </li>
                        </ul>
                    </div>

                    <div>
                        <h4 class="footer-heading">"Legal"</h4>
                        <ul class="footer-list">
                            {LEGAL_LINKS
                                .iter()
                                .map(|label| view! { <li><a href="/" class="footer-link">{*label}</a></li> })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p class="footer-copyright">{copyright}</p>
                    <p class="footer-marking">"FOUO // PROPRIETARY"</p>
                </div>
            </div>
        </footer>
    }
}

use super::{Glyph, Icon};
use leptos::prelude::*;

/// Shield mark and two-tone wordmark, shared by the nav bar and the footer.
#[component]
pub fn Brand(
    /// Class of the wrapping element
    #[prop(default = "brand")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <div class=class>
            <Icon glyph=Glyph::Shield class="brand-mark" />
            <span class="brand-name">
                "AEGIS "
                <span class="brand-accent">"APPLIED"</span>
            </span>
        </div>
    }
}

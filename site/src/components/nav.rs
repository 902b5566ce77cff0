use super::{Brand, Glyph, Icon};
use crate::content::NAV_LINKS;
use crate::scroll::watch_scroll;
use crate::sections::PageSection;
use crate::state::NavState;
use leptos::prelude::*;

/// Fixed navigation bar with the mobile menu. Owns the page's only state.
#[component]
pub fn Nav() -> impl IntoView {
    let state = RwSignal::new(NavState::default());

    watch_scroll(move |offset| state.update(|s| s.observe_scroll(offset)));

    let toggle_menu = move |_| {
        state.update(NavState::toggle_menu);
        tracing::debug!(open = state.get_untracked().menu_open(), "mobile menu toggled");
    };

    view! {
        <nav class=move || state.get().nav_class() data-section=PageSection::Navigation.key()>
            <div class="container">
                <div class="nav-bar">
                    <Brand class="nav-brand" />

                    <div class="nav-links">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href()
                                        class="nav-link"
                                        on:click=move |_| state.update(NavState::close_menu)
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>

                    <div class="nav-toggle">
                        <button
                            class=move || state.get().menu_button_class()
                            data-role="menu-toggle"
                            aria-label=move || state.get().menu_button_label()
                            aria-expanded=move || state.get().menu_open().to_string()
                            on:click=toggle_menu
                        >
                            <span class="icon-when-closed">
                                <Icon glyph=Glyph::Menu class="icon-md" />
                            </span>
                            <span class="icon-when-open">
                                <Icon glyph=Glyph::Close class="icon-md" />
                            </span>
                        </button>
                    </div>
                </div>
            </div>

            <div
                class=move || state.get().menu_panel_class()
                data-role="menu-panel"
            >
                <div class="nav-mobile-inner">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href()
                                    class="nav-mobile-link"
                                    on:click=move |_| state.update(NavState::close_menu)
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </nav>
    }
}

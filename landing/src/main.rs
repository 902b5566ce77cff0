// Aegis Applied Computing landing page - Leptos 0.8 CSR entry
// Build with `trunk serve` / `trunk build --release` from this directory.

use aegis_site::{App, SiteStyles};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| {
        view! {
            <SiteStyles />
            <App />
        }
    });
}

//! Window scroll subscription.
//!
//! The listener is attached when the owning component mounts and removed
//! when its reactive owner is cleaned up. Only the browser build listens;
//! static rendering has no window and no scrolling.

/// Calls `on_offset` with the window's vertical scroll offset on every
/// scroll event, for as long as the current reactive owner lives.
#[cfg(target_arch = "wasm32")]
pub fn watch_scroll(on_offset: impl Fn(f64) + 'static) {
    use leptos::prelude::{on_cleanup, window, window_event_listener};

    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        on_offset(window().scroll_y().unwrap_or_default());
    });
    on_cleanup(move || handle.remove());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn watch_scroll(_on_offset: impl Fn(f64) + 'static) {}

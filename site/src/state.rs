//! Navigation UI state.
//!
//! The navigation bar owns the only state on the page: whether the mobile
//! menu is expanded and whether the page has scrolled past
//! [`SCROLL_THRESHOLD_PX`]. Both flags reset on reload.

/// Vertical offset (in CSS pixels) past which the navigation bar switches to
/// its translucent "scrolled" style.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Returns `true` when `offset_px` is strictly past [`SCROLL_THRESHOLD_PX`].
pub fn is_scrolled(offset_px: f64) -> bool {
    offset_px > SCROLL_THRESHOLD_PX
}

/// Menu and scroll flags held by the navigation component.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    menu_open: bool,
    scrolled: bool,
}

impl NavState {
    /// Whether the mobile menu panel is expanded.
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Whether the page is scrolled past the threshold.
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }

    /// Flip the mobile menu (menu button click).
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the mobile menu (navigation link click).
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Record the latest vertical scroll offset.
    pub fn observe_scroll(&mut self, offset_px: f64) {
        self.scrolled = is_scrolled(offset_px);
    }

    /// Class list for the `<nav>` root.
    pub fn nav_class(&self) -> &'static str {
        if self.scrolled {
            "site-nav scrolled"
        } else {
            "site-nav"
        }
    }

    /// Class list for the mobile menu button.
    pub fn menu_button_class(&self) -> &'static str {
        if self.menu_open {
            "nav-toggle-btn open"
        } else {
            "nav-toggle-btn"
        }
    }

    /// Class list for the mobile menu panel.
    pub fn menu_panel_class(&self) -> &'static str {
        if self.menu_open {
            "nav-mobile open"
        } else {
            "nav-mobile"
        }
    }

    /// Accessible label for the menu button.
    pub fn menu_button_label(&self) -> &'static str {
        if self.menu_open {
            "Close menu"
        } else {
            "Open menu"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_unscrolled() {
        let state = NavState::default();
        assert!(!state.menu_open());
        assert!(!state.scrolled());
        assert_eq!(state.nav_class(), "site-nav");
    }

    #[test]
    fn toggle_flips_menu() {
        let mut state = NavState::default();
        state.toggle_menu();
        assert!(state.menu_open());
        assert_eq!(state.menu_button_label(), "Close menu");
        assert_eq!(state.menu_panel_class(), "nav-mobile open");
        assert_eq!(state.menu_button_class(), "nav-toggle-btn open");
        state.toggle_menu();
        assert!(!state.menu_open());
        assert_eq!(state.menu_button_label(), "Open menu");
    }

    #[test]
    fn link_click_closes_open_menu() {
        let mut state = NavState::default();
        state.toggle_menu();
        state.close_menu();
        assert!(!state.menu_open());

        // closing an already closed menu is a no-op
        state.close_menu();
        assert!(!state.menu_open());
    }

    #[test]
    fn threshold_is_exclusive() {
        for offset in [0.0, 1.0, 19.5, 20.0] {
            assert!(!is_scrolled(offset), "offset {offset} should not count as scrolled");
        }
        for offset in [20.01, 21.0, 500.0, 1e6] {
            assert!(is_scrolled(offset), "offset {offset} should count as scrolled");
        }
    }

    #[test]
    fn scroll_flag_follows_latest_offset() {
        let mut state = NavState::default();
        state.observe_scroll(120.0);
        assert!(state.scrolled());
        assert_eq!(state.nav_class(), "site-nav scrolled");

        state.observe_scroll(0.0);
        assert!(!state.scrolled());
    }

    #[test]
    fn scroll_does_not_touch_menu() {
        let mut state = NavState::default();
        state.toggle_menu();
        state.observe_scroll(300.0);
        assert!(state.menu_open());
        assert!(state.scrolled());
    }
}

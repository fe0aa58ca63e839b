//! Interaction state of the navigation bar.
//!
//! Three independent pieces of local UI state: the active dropdown, the
//! scrolled flag, and the mobile menu toggle. Every transition is a total
//! function of the current value and one input event.

use super::panel::PanelView;

/// Vertical offset past which the header switches to its scrolled style.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    active_dropdown: Option<String>,
    scrolled: bool,
    mobile_menu_open: bool,
}

impl NavState {
    /// Closed, unscrolled, mobile menu hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered a trigger. Replaces whatever was active before.
    pub fn pointer_enter(&mut self, trigger_label: &str) {
        if self.active_dropdown.as_deref() == Some(trigger_label) {
            return;
        }
        tracing::trace!(trigger = trigger_label, "dropdown activated");
        self.active_dropdown = Some(trigger_label.to_string());
    }

    /// Pointer left the whole trigger row (not a single trigger).
    pub fn pointer_leave_row(&mut self) {
        self.active_dropdown = None;
    }

    /// Recompute the scrolled flag from the live vertical offset.
    pub fn scroll_to(&mut self, offset_y: f64) {
        self.scrolled = offset_y > SCROLL_THRESHOLD_PX;
    }

    /// Whether `offset_y` would flip the scrolled flag.
    pub fn scroll_changes(&self, offset_y: f64) -> bool {
        (offset_y > SCROLL_THRESHOLD_PX) != self.scrolled
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Following a link from the mobile menu closes it.
    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn active_dropdown(&self) -> Option<&str> {
        self.active_dropdown.as_deref()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn panel(&self) -> PanelView {
        PanelView::for_trigger(self.active_dropdown())
    }

    /// Header background: solid at the top, translucent with blur once scrolled.
    pub fn header_class(&self) -> &'static str {
        if self.scrolled {
            "site-nav site-nav--scrolled"
        } else {
            "site-nav"
        }
    }
}

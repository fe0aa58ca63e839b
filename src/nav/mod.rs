//! Navigation menu model: static content, interaction state, panel layout.
//!
//! Nothing here touches the DOM. The Dioxus components in
//! `app::components::navigation` hold a [`NavState`] in a signal and render
//! from [`NavState::panel`].

pub mod menu;
pub mod panel;
pub mod state;

pub use menu::{find_link, DropdownContent, DropdownItem, DropdownSection, NavLink, NAV_LINKS};
pub use panel::{panel_columns, panel_geometry, PanelColumn, PanelGeometry, PanelView};
pub use state::{NavState, SCROLL_THRESHOLD_PX};

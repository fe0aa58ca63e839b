//! End-to-end navigation walkthrough against the public model.
//!
//! Mirrors a pointer session on the desktop header: mount, hover two
//! triggers in turn, leave the row. The panel is re-derived after every
//! event the way the component derives it on render.

use cuts_site::nav::{panel_geometry, NavState, PanelView, NAV_LINKS, SCROLL_THRESHOLD_PX};

fn assert_closed(view: &PanelView) {
    assert!(view.link.is_none());
    assert_eq!(view.opacity(), 0.0);
    assert_eq!(view.pointer_events(), "none");
}

#[test]
fn hover_walkthrough() {
    let mut state = NavState::new();
    assert_closed(&state.panel());

    state.pointer_enter("For Restaurants");
    let view = state.panel();
    let columns = view.columns();
    assert_eq!(columns.len(), 3);
    assert!(columns.iter().all(|c| c.heading.is_some()));
    assert_eq!(view.geometry, panel_geometry("For Restaurants").unwrap());
    assert_eq!(view.opacity(), 1.0);
    assert_eq!(view.pointer_events(), "auto");

    // Moving straight to the next trigger never passes through "none".
    state.pointer_enter("For Drivers");
    let view = state.panel();
    assert!(view.is_visible());
    assert_eq!(view.link.map(|l| l.label), Some("For Drivers"));
    let columns = view.columns();
    assert_eq!(columns.len(), 1);
    assert_eq!(columns[0].heading, None);
    assert!(view.geometry.width < panel_geometry("For Restaurants").unwrap().width);

    state.pointer_leave_row();
    assert_closed(&state.panel());
}

#[test]
fn every_trigger_opens_its_own_content() {
    for link in NAV_LINKS {
        let mut state = NavState::new();
        state.pointer_enter(link.label);
        let view = state.panel();
        assert_eq!(view.link, Some(link));
        let rendered: usize = view.columns().iter().map(|c| c.items.len()).sum();
        assert_eq!(rendered, link.dropdown.item_count(), "{}", link.label);
    }
}

#[test]
fn scrolling_and_mobile_menu_do_not_touch_the_dropdown() {
    let mut state = NavState::new();
    state.pointer_enter("About");

    for offset in [0.0, SCROLL_THRESHOLD_PX, SCROLL_THRESHOLD_PX + 1.0, 400.0, 2.0] {
        state.scroll_to(offset);
        assert_eq!(state.is_scrolled(), offset > SCROLL_THRESHOLD_PX);
        assert_eq!(state.active_dropdown(), Some("About"));
    }

    state.toggle_mobile_menu();
    state.close_mobile_menu();
    assert_eq!(state.active_dropdown(), Some("About"));
    assert!(!state.is_mobile_menu_open());
}

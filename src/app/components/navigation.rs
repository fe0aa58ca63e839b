//! Site header: brand, hover-activated dropdown triggers, CTA, mobile menu.
//!
//! All interaction state lives in one `Signal<NavState>` owned here. The
//! panel is derived from it on every render and never stored separately.
//!
//! Server-rendered pages have no event handlers, so the bar also emits inert
//! `<template>` elements carrying the markup of every state the page script
//! switches to: one open panel per trigger, the mobile menu, and both toggle
//! icons.

use dioxus::prelude::*;

use crate::app::components::{Button, ButtonSize, Container};
use crate::app::embedded_assets::LOGO_DATA_URL;
use crate::app::scroll::use_window_scroll;
use crate::icons::{Icon, IconName};
use crate::nav::menu::{BRAND_NAME, CTA_HREF, CTA_LABEL};
use crate::nav::{DropdownItem, NavState, PanelView, NAV_LINKS, SCROLL_THRESHOLD_PX};

#[component]
pub fn NavigationBar(
    /// Path of the page being rendered, marks the matching trigger
    #[props(default, into)]
    current: String,
) -> Element {
    let mut nav = use_signal(NavState::new);

    use_window_scroll(move |offset| {
        if nav.peek().scroll_changes(offset) {
            nav.write().scroll_to(offset);
        }
    });

    let state = nav.read().clone();
    let panel = state.panel();
    let mobile_open = state.is_mobile_menu_open();
    let logo = LOGO_DATA_URL.as_str();

    rsx! {
        nav {
            class: state.header_class(),
            "aria-label": "Main",
            "data-scroll-threshold": "{SCROLL_THRESHOLD_PX}",
            Container {
                div { class: "site-nav__bar",
                    a { href: "/", class: "site-nav__brand",
                        img {
                            src: "{logo}",
                            alt: BRAND_NAME,
                            width: "32",
                            height: "32",
                        }
                        span { "{BRAND_NAME}" }
                    }

                    div {
                        class: "site-nav__triggers",
                        onmouseleave: move |_| nav.write().pointer_leave_row(),
                        for link in NAV_LINKS.iter() {
                            a {
                                key: "{link.label}",
                                href: link.href,
                                class: "site-nav__trigger",
                                "data-trigger": link.label,
                                "data-active": "{state.active_dropdown() == Some(link.label)}",
                                "aria-current": (current == link.href).then_some("page"),
                                onmouseenter: move |_| nav.write().pointer_enter(link.label),
                                "{link.label}"
                                Icon { name: IconName::ChevronDown, size: 14 }
                            }
                        }
                        DropdownPanel { view: panel }
                        for link in NAV_LINKS.iter() {
                            template { key: "{link.label}", "data-panel-for": link.label,
                                DropdownPanel { view: PanelView::for_trigger(Some(link.label)) }
                            }
                        }
                    }

                    div { class: "site-nav__cta",
                        Button { size: ButtonSize::Sm, href: CTA_HREF, "{CTA_LABEL}" }
                    }

                    button {
                        class: "site-nav__toggle",
                        r#type: "button",
                        "aria-label": "Toggle menu",
                        "aria-expanded": "{mobile_open}",
                        onclick: move |_| nav.write().toggle_mobile_menu(),
                        if mobile_open {
                            Icon { name: IconName::X, size: 20 }
                        } else {
                            Icon { name: IconName::Menu, size: 20 }
                        }
                    }
                }
            }

            if mobile_open {
                MobileMenu { on_navigate: move |_| nav.write().close_mobile_menu() }
            }

            template { "data-mobile-menu": "true",
                MobileMenu { on_navigate: move |_| nav.write().close_mobile_menu() }
            }
            template { "data-toggle-icon": "open",
                Icon { name: IconName::X, size: 20 }
            }
            template { "data-toggle-icon": "closed",
                Icon { name: IconName::Menu, size: 20 }
            }
        }
    }
}

/// Floating panel under the trigger row. Always mounted; hidden by style.
#[component]
pub fn DropdownPanel(view: PanelView) -> Element {
    let columns = view.columns();
    let trigger = view.link.map(|link| link.label);
    let shape = match view.link {
        Some(link) if link.dropdown.is_sectioned() => "sectioned",
        Some(_) => "flat",
        None => "none",
    };

    rsx! {
        div {
            class: "dropdown-panel",
            style: view.style(),
            "aria-hidden": "{!view.is_visible()}",
            "data-trigger": trigger,
            "data-shape": shape,
            "data-columns": "{columns.len()}",
            div { class: "dropdown-panel__columns",
                for column in columns.iter() {
                    div { class: "dropdown-panel__column",
                        if let Some(heading) = column.heading {
                            h4 { class: "dropdown-panel__heading", "{heading}" }
                        }
                        ul { class: "dropdown-panel__list",
                            for item in column.items.iter() {
                                li { key: "{item.href}{item.label}",
                                    DropdownEntry { item: *item }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DropdownEntry(item: DropdownItem) -> Element {
    rsx! {
        a { href: item.href, class: "dropdown-entry",
            span { class: "dropdown-entry__icon",
                Icon { name: item.icon, size: 20 }
            }
            span {
                span { class: "dropdown-entry__label", "{item.label}" }
                span { class: "dropdown-entry__description", "{item.description}" }
            }
        }
    }
}

/// Flat list of top-level links plus the CTA. No dropdown nesting.
#[component]
pub fn MobileMenu(on_navigate: EventHandler<()>) -> Element {
    rsx! {
        div { class: "mobile-menu",
            Container {
                div { class: "mobile-menu__links",
                    for link in NAV_LINKS.iter() {
                        a {
                            key: "{link.href}",
                            href: link.href,
                            class: "mobile-menu__link",
                            onclick: move |_| on_navigate.call(()),
                            "{link.label}"
                        }
                    }
                    div { class: "mobile-menu__cta",
                        Button {
                            size: ButtonSize::Sm,
                            class: "button--block",
                            href: CTA_HREF,
                            "{CTA_LABEL}"
                        }
                    }
                }
            }
        }
    }
}

//! Dropdown panel geometry and column layout.
//!
//! Geometry is a fixed table keyed by trigger label. Content never changes at
//! runtime, so each panel's size is declared up front instead of measured.

use super::menu::{find_link, DropdownContent, DropdownItem, NavLink};

/// Panel size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelGeometry {
    pub width: u32,
    pub height: u32,
}

/// Size of the panel while nothing is active.
pub const CLOSED_GEOMETRY: PanelGeometry = PanelGeometry {
    width: 0,
    height: 0,
};

/// Declared size per trigger.
///
/// Sectioned three-column content gets the wide tier, flat single-column the
/// narrow tier, flat two-column the middle tier.
const PANEL_GEOMETRY: &[(&str, PanelGeometry)] = &[
    (
        "For Restaurants",
        PanelGeometry {
            width: 720,
            height: 300,
        },
    ),
    (
        "For Drivers",
        PanelGeometry {
            width: 340,
            height: 320,
        },
    ),
    (
        "About",
        PanelGeometry {
            width: 560,
            height: 260,
        },
    ),
];

/// Look up the declared geometry for a trigger.
pub fn panel_geometry(trigger_label: &str) -> Option<PanelGeometry> {
    PANEL_GEOMETRY
        .iter()
        .find(|(label, _)| *label == trigger_label)
        .map(|(_, geometry)| *geometry)
}

/// One rendered column of a dropdown panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelColumn {
    /// Section heading; `None` for flat content.
    pub heading: Option<&'static str>,
    pub items: &'static [DropdownItem],
}

/// Split dropdown content into the columns the panel renders.
///
/// Flat content is chunked in order: with `n` columns each column holds
/// `ceil(len / n)` items, the last one possibly fewer.
pub fn panel_columns(content: &DropdownContent) -> Vec<PanelColumn> {
    match *content {
        DropdownContent::Sectioned(sections) => sections
            .iter()
            .map(|section| PanelColumn {
                heading: Some(section.title),
                items: section.items,
            })
            .collect(),
        DropdownContent::Flat { items, columns } => {
            let columns = columns.max(1);
            let per_column = items.len().div_ceil(columns).max(1);
            items
                .chunks(per_column)
                .map(|chunk| PanelColumn {
                    heading: None,
                    items: chunk,
                })
                .collect()
        }
    }
}

/// Everything the panel needs to render, derived from the active trigger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelView {
    pub link: Option<&'static NavLink>,
    pub geometry: PanelGeometry,
}

impl PanelView {
    /// Derive the panel for the currently active trigger (or none).
    pub fn for_trigger(active: Option<&str>) -> Self {
        let open = active.and_then(|label| {
            let link = find_link(label)?;
            let geometry = panel_geometry(label)?;
            Some((link, geometry))
        });

        match open {
            Some((link, geometry)) => PanelView {
                link: Some(link),
                geometry,
            },
            None => PanelView {
                link: None,
                geometry: CLOSED_GEOMETRY,
            },
        }
    }

    pub fn is_visible(&self) -> bool {
        self.link.is_some()
    }

    pub fn opacity(&self) -> f32 {
        if self.is_visible() {
            1.0
        } else {
            0.0
        }
    }

    /// The inactive panel stays in the tree but ignores the pointer.
    pub fn pointer_events(&self) -> &'static str {
        if self.is_visible() {
            "auto"
        } else {
            "none"
        }
    }

    pub fn columns(&self) -> Vec<PanelColumn> {
        self.link
            .map(|link| panel_columns(&link.dropdown))
            .unwrap_or_default()
    }

    /// Inline style carrying geometry and visibility.
    pub fn style(&self) -> String {
        format!(
            "width: {}px; height: {}px; opacity: {}; pointer-events: {};",
            self.geometry.width,
            self.geometry.height,
            self.opacity(),
            self.pointer_events()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::menu::NAV_LINKS;

    #[test]
    fn every_trigger_declares_geometry() {
        for link in NAV_LINKS {
            let geometry = panel_geometry(link.label)
                .unwrap_or_else(|| panic!("{} has no declared geometry", link.label));
            assert!(geometry.width > 0 && geometry.height > 0);
        }
    }

    #[test]
    fn geometry_lookup_is_pure() {
        for link in NAV_LINKS {
            assert_eq!(panel_geometry(link.label), panel_geometry(link.label));
        }
        assert_eq!(panel_geometry("Careers"), None);
    }

    #[test]
    fn sectioned_content_gets_the_widest_panel() {
        let sectioned = panel_geometry("For Restaurants").unwrap();
        for link in NAV_LINKS.iter().filter(|l| !l.dropdown.is_sectioned()) {
            assert!(panel_geometry(link.label).unwrap().width < sectioned.width);
        }
    }

    #[test]
    fn sectioned_columns_carry_headings() {
        let link = find_link("For Restaurants").unwrap();
        let columns = panel_columns(&link.dropdown);
        let headings: Vec<_> = columns.iter().map(|c| c.heading).collect();
        assert_eq!(
            headings,
            vec![Some("Partner with us"), Some("Grow"), Some("Support")]
        );
    }

    #[test]
    fn single_column_flat_content() {
        let link = find_link("For Drivers").unwrap();
        let columns = panel_columns(&link.dropdown);
        assert_eq!(columns.len(), 1);
        assert_eq!(columns[0].heading, None);
        assert_eq!(columns[0].items.len(), 4);
    }

    #[test]
    fn flat_content_is_chunked_in_order() {
        let link = find_link("About").unwrap();
        let columns = panel_columns(&link.dropdown);
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].items.len(), 3);
        assert_eq!(columns[1].items.len(), 3);
        assert_eq!(columns[0].items[0].label, "Our story");
        assert_eq!(columns[1].items[0].label, "Investors");
    }

    #[test]
    fn uneven_chunks_leave_the_last_column_short() {
        const ITEMS: &[DropdownItem] = &[
            DropdownItem {
                label: "a",
                href: "/a",
                description: "",
                icon: crate::icons::IconName::Check,
            },
            DropdownItem {
                label: "b",
                href: "/b",
                description: "",
                icon: crate::icons::IconName::Check,
            },
            DropdownItem {
                label: "c",
                href: "/c",
                description: "",
                icon: crate::icons::IconName::Check,
            },
            DropdownItem {
                label: "d",
                href: "/d",
                description: "",
                icon: crate::icons::IconName::Check,
            },
            DropdownItem {
                label: "e",
                href: "/e",
                description: "",
                icon: crate::icons::IconName::Check,
            },
        ];
        let columns = panel_columns(&DropdownContent::Flat {
            items: ITEMS,
            columns: 3,
        });
        let sizes: Vec<_> = columns.iter().map(|c| c.items.len()).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
    }

    #[test]
    fn closed_panel_is_transparent_and_inert() {
        let view = PanelView::for_trigger(None);
        assert!(!view.is_visible());
        assert_eq!(view.opacity(), 0.0);
        assert_eq!(view.pointer_events(), "none");
        assert_eq!(view.geometry, CLOSED_GEOMETRY);
        assert!(view.columns().is_empty());
        assert!(view.style().contains("pointer-events: none"));
    }

    #[test]
    fn unknown_trigger_renders_closed() {
        let view = PanelView::for_trigger(Some("Careers"));
        assert!(!view.is_visible());
        assert_eq!(view.geometry, CLOSED_GEOMETRY);
    }

    #[test]
    fn open_panel_style_carries_declared_geometry() {
        let view = PanelView::for_trigger(Some("For Drivers"));
        assert_eq!(
            view.style(),
            "width: 340px; height: 320px; opacity: 1; pointer-events: auto;"
        );
    }
}

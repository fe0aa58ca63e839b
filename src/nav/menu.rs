//! Static navigation content.
//!
//! The menu is defined once at compile time and never mutated. Each trigger
//! carries its own dropdown content; how that content is laid out lives in
//! [`super::panel`].

use crate::icons::IconName;

/// A single entry inside a dropdown panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropdownItem {
    pub label: &'static str,
    pub href: &'static str,
    pub description: &'static str,
    pub icon: IconName,
}

/// A titled group of items, rendered as one column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropdownSection {
    pub title: &'static str,
    pub items: &'static [DropdownItem],
}

/// The two content shapes a dropdown can take.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DropdownContent {
    /// An undifferentiated list, split into `columns` columns.
    Flat {
        items: &'static [DropdownItem],
        columns: usize,
    },
    /// Titled groups, one column each.
    Sectioned(&'static [DropdownSection]),
}

impl DropdownContent {
    /// Total number of links in this dropdown.
    pub fn item_count(&self) -> usize {
        match self {
            DropdownContent::Flat { items, .. } => items.len(),
            DropdownContent::Sectioned(sections) => sections.iter().map(|s| s.items.len()).sum(),
        }
    }

    pub fn is_sectioned(&self) -> bool {
        matches!(self, DropdownContent::Sectioned(_))
    }
}

/// A top-level navigation trigger.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub dropdown: DropdownContent,
}

/// Call-to-action shown at the end of the desktop row and the mobile menu.
pub const CTA_LABEL: &str = "Download App";
pub const CTA_HREF: &str = "/#download";

pub const BRAND_NAME: &str = "Cuts";

const RESTAURANT_PARTNER: &[DropdownItem] = &[
    DropdownItem {
        label: "Become a partner",
        href: "/restaurants#apply",
        description: "List your kitchen in under a week",
        icon: IconName::Store,
    },
    DropdownItem {
        label: "Pricing",
        href: "/restaurants#pricing",
        description: "Flat 15% commission, no hidden fees",
        icon: IconName::DollarSign,
    },
    DropdownItem {
        label: "Success stories",
        href: "/restaurants#stories",
        description: "How partners grow with Cuts",
        icon: IconName::Star,
    },
];

const RESTAURANT_GROW: &[DropdownItem] = &[
    DropdownItem {
        label: "Restaurant dashboard",
        href: "/restaurants#dashboard",
        description: "Orders, menu and analytics in real time",
        icon: IconName::BarChart,
    },
    DropdownItem {
        label: "Smart matching",
        href: "/restaurants#matching",
        description: "Reach customers looking for your menu",
        icon: IconName::Target,
    },
    DropdownItem {
        label: "Nutrition labeling",
        href: "/restaurants#nutrition",
        description: "Macros and ingredients on every dish",
        icon: IconName::Leaf,
    },
];

const RESTAURANT_SUPPORT: &[DropdownItem] = &[
    DropdownItem {
        label: "Onboarding",
        href: "/restaurants#how-it-works",
        description: "From signup to first order",
        icon: IconName::ChefHat,
    },
    DropdownItem {
        label: "Partner support",
        href: "/contact",
        description: "A dedicated team on call",
        icon: IconName::MessageCircle,
    },
];

const RESTAURANT_SECTIONS: &[DropdownSection] = &[
    DropdownSection {
        title: "Partner with us",
        items: RESTAURANT_PARTNER,
    },
    DropdownSection {
        title: "Grow",
        items: RESTAURANT_GROW,
    },
    DropdownSection {
        title: "Support",
        items: RESTAURANT_SUPPORT,
    },
];

const DRIVER_ITEMS: &[DropdownItem] = &[
    DropdownItem {
        label: "Apply now",
        href: "/drivers#apply",
        description: "A 10-minute application",
        icon: IconName::UserCheck,
    },
    DropdownItem {
        label: "Earnings",
        href: "/drivers#earnings",
        description: "AED 45-60 per hour plus tips",
        icon: IconName::Banknote,
    },
    DropdownItem {
        label: "Requirements",
        href: "/drivers#requirements",
        description: "License, vehicle and a smartphone",
        icon: IconName::CheckCircle2,
    },
    DropdownItem {
        label: "Driver support",
        href: "/contact",
        description: "Help around the clock",
        icon: IconName::Shield,
    },
];

const ABOUT_ITEMS: &[DropdownItem] = &[
    DropdownItem {
        label: "Our story",
        href: "/about#story",
        description: "Why we started Cuts",
        icon: IconName::Heart,
    },
    DropdownItem {
        label: "Mission",
        href: "/about#mission",
        description: "Healthy eating made effortless",
        icon: IconName::Target,
    },
    DropdownItem {
        label: "Values",
        href: "/about#values",
        description: "The principles behind every meal",
        icon: IconName::Sparkles,
    },
    DropdownItem {
        label: "Investors",
        href: "/about#investors",
        description: "The opportunity in numbers",
        icon: IconName::TrendingUp,
    },
    DropdownItem {
        label: "Press",
        href: "/about#press",
        description: "Media resources and contacts",
        icon: IconName::File,
    },
    DropdownItem {
        label: "Contact",
        href: "/contact",
        description: "Talk to the team in Abu Dhabi",
        icon: IconName::Mail,
    },
];

/// The navigation triggers, in display order.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        href: "/restaurants",
        label: "For Restaurants",
        dropdown: DropdownContent::Sectioned(RESTAURANT_SECTIONS),
    },
    NavLink {
        href: "/drivers",
        label: "For Drivers",
        dropdown: DropdownContent::Flat {
            items: DRIVER_ITEMS,
            columns: 1,
        },
    },
    NavLink {
        href: "/about",
        label: "About",
        dropdown: DropdownContent::Flat {
            items: ABOUT_ITEMS,
            columns: 2,
        },
    },
];

/// Look up a trigger by its label.
pub fn find_link(label: &str) -> Option<&'static NavLink> {
    NAV_LINKS.iter().find(|link| link.label == label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn trigger_labels_are_unique() {
        let labels: HashSet<_> = NAV_LINKS.iter().map(|l| l.label).collect();
        assert_eq!(labels.len(), NAV_LINKS.len());
    }

    #[test]
    fn restaurants_is_sectioned_into_three() {
        let link = find_link("For Restaurants").unwrap();
        match link.dropdown {
            DropdownContent::Sectioned(sections) => assert_eq!(sections.len(), 3),
            other => panic!("expected sectioned content, got {other:?}"),
        }
    }

    #[test]
    fn flat_dropdowns_declare_at_least_one_column() {
        for link in NAV_LINKS {
            if let DropdownContent::Flat { columns, items } = link.dropdown {
                assert!(columns >= 1, "{}", link.label);
                assert!(!items.is_empty(), "{}", link.label);
            }
        }
    }

    #[test]
    fn every_href_is_site_relative() {
        for link in NAV_LINKS {
            assert!(link.href.starts_with('/'));
            match link.dropdown {
                DropdownContent::Flat { items, .. } => {
                    assert!(items.iter().all(|i| i.href.starts_with('/')))
                }
                DropdownContent::Sectioned(sections) => assert!(sections
                    .iter()
                    .flat_map(|s| s.items)
                    .all(|i| i.href.starts_with('/'))),
            }
        }
    }

    #[test]
    fn item_count_sums_sections() {
        let link = find_link("For Restaurants").unwrap();
        assert_eq!(link.dropdown.item_count(), 8);
        assert!(link.dropdown.is_sectioned());
        assert_eq!(find_link("About").unwrap().dropdown.item_count(), 6);
    }

    #[test]
    fn unknown_label_has_no_link() {
        assert!(find_link("Careers").is_none());
    }
}

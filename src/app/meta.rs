//! Per-page metadata for the document head.

/// Title, description and Open Graph copy for one page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
    pub og_title: &'static str,
    pub og_description: &'static str,
}

impl PageMeta {
    pub fn keywords_content(&self) -> String {
        self.keywords.join(", ")
    }
}

/// Every page the site serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Contact,
    Drivers,
    Restaurants,
    NotFound,
}

const SITE_META: PageMeta = PageMeta {
    title: "Cuts - Healthy Meals Delivered",
    description: "UAE's first nutrition-focused food delivery platform",
    keywords: &[
        "healthy food delivery",
        "nutrition",
        "Abu Dhabi",
        "meal delivery",
    ],
    og_title: "Cuts - Healthy Meals Delivered",
    og_description: "UAE's first nutrition-focused food delivery platform",
};

const ABOUT_META: PageMeta = PageMeta {
    title: "About Cuts - Our Mission & Story",
    description: "Learn about Cuts' mission to make healthy eating accessible in the UAE. \
                  We're building a healthier future, one meal at a time.",
    keywords: &[
        "about Cuts",
        "healthy food mission",
        "UAE startup",
        "food delivery story",
        "nutrition platform",
    ],
    og_title: "About Cuts - Our Mission & Story",
    og_description: "Building a healthier UAE, one meal at a time",
};

const CONTACT_META: PageMeta = PageMeta {
    title: "Contact Us - Get in Touch with Cuts",
    description: "Have questions? Contact the Cuts team in Abu Dhabi. We're here to help with \
                  restaurant partnerships, driver applications, and customer inquiries.",
    keywords: &[
        "contact Cuts",
        "customer support",
        "Abu Dhabi contact",
        "get in touch",
        "help",
    ],
    og_title: "Contact Us - Get in Touch with Cuts",
    og_description: "We'd love to hear from you",
};

const DRIVERS_META: PageMeta = PageMeta {
    title: "For Drivers - Deliver with Cuts",
    description: "Earn competitive pay with flexible hours delivering healthy meals in Abu Dhabi. \
                  Join the Cuts driver community with weekly payouts and 24/7 support.",
    keywords: &[
        "delivery driver jobs",
        "Abu Dhabi jobs",
        "flexible work",
        "driver earnings",
        "food delivery",
    ],
    og_title: "For Drivers - Deliver with Cuts",
    og_description: "Flexible hours, competitive pay, supportive community",
};

const RESTAURANTS_META: PageMeta = PageMeta {
    title: "For Restaurants - Partner with Cuts",
    description: "Join the Cuts health-focused food delivery platform. Reach health-conscious \
                  customers in Abu Dhabi with a fair 15% commission and powerful restaurant tools.",
    keywords: &[
        "restaurant partnership",
        "food delivery",
        "Abu Dhabi restaurants",
        "healthy food",
        "restaurant platform",
    ],
    og_title: "For Restaurants - Partner with Cuts",
    og_description: "Join the healthiest food delivery platform in UAE",
};

const NOT_FOUND_META: PageMeta = PageMeta {
    title: "Page Not Found - Cuts",
    description: "Sorry, we couldn't find the page you're looking for.",
    keywords: &[],
    og_title: "Page Not Found - Cuts",
    og_description: "Sorry, we couldn't find the page you're looking for.",
};

impl Page {
    /// Pages reachable by a fixed path.
    pub const ROUTED: &'static [Page] = &[
        Page::Home,
        Page::About,
        Page::Contact,
        Page::Drivers,
        Page::Restaurants,
    ];

    /// Canonical path; the 404 page has none of its own.
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Contact => "/contact",
            Page::Drivers => "/drivers",
            Page::Restaurants => "/restaurants",
            Page::NotFound => "",
        }
    }

    pub fn from_path(path: &str) -> Page {
        let trimmed = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        Page::ROUTED
            .iter()
            .copied()
            .find(|page| page.path() == trimmed)
            .unwrap_or(Page::NotFound)
    }

    pub fn meta(&self) -> &'static PageMeta {
        match self {
            Page::Home => &SITE_META,
            Page::About => &ABOUT_META,
            Page::Contact => &CONTACT_META,
            Page::Drivers => &DRIVERS_META,
            Page::Restaurants => &RESTAURANTS_META,
            Page::NotFound => &NOT_FOUND_META,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for page in Page::ROUTED {
            assert_eq!(Page::from_path(page.path()), *page);
        }
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(Page::from_path("/drivers/"), Page::Drivers);
        assert_eq!(Page::from_path(""), Page::Home);
    }

    #[test]
    fn unknown_path_is_not_found() {
        assert_eq!(Page::from_path("/careers"), Page::NotFound);
        assert_eq!(Page::from_path("/drivers/apply"), Page::NotFound);
    }

    #[test]
    fn every_page_has_a_title_and_description() {
        for page in Page::ROUTED.iter().chain([&Page::NotFound]) {
            let meta = page.meta();
            assert!(!meta.title.is_empty());
            assert!(!meta.description.is_empty());
        }
    }

    #[test]
    fn keywords_join_with_commas() {
        let meta = Page::Drivers.meta();
        assert!(meta
            .keywords_content()
            .starts_with("delivery driver jobs, Abu Dhabi jobs"));
    }
}

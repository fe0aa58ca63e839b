use chrono::Datelike;
use dioxus::prelude::*;

use super::Container;
use crate::nav::menu::BRAND_NAME;

struct FooterSection {
    title: &'static str,
    links: &'static [(&'static str, &'static str)],
}

const FOOTER_SECTIONS: &[FooterSection] = &[
    FooterSection {
        title: "Product",
        links: &[
            ("Download App", "/#download"),
            ("How it Works", "/#how-it-works"),
            ("Pricing", "/restaurants#pricing"),
        ],
    },
    FooterSection {
        title: "For Partners",
        links: &[
            ("Restaurants", "/restaurants"),
            ("Drivers", "/drivers"),
            ("Contact", "/contact"),
        ],
    },
    FooterSection {
        title: "Company",
        links: &[("About", "/about"), ("Press", "/about#press")],
    },
];

const TAGLINE: &str = "Healthy meals, delivered with care.";
const LOCATION: &str = "Abu Dhabi, United Arab Emirates";

fn copyright_line(year: i32) -> String {
    format!("© {year} {BRAND_NAME} LLC, {LOCATION}. All rights reserved.")
}

/// Site-wide footer.
#[component]
pub fn Footer() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "site-footer", role: "contentinfo", "aria-label": "Site footer",
            Container {
                div { class: "site-footer__grid",
                    div {
                        div { class: "site-footer__brand", "{BRAND_NAME}" }
                        p { class: "site-footer__tagline", "{TAGLINE}" }
                    }
                    for section in FOOTER_SECTIONS.iter() {
                        div { key: "{section.title}",
                            h3 { class: "site-footer__heading", "{section.title}" }
                            ul { class: "site-footer__links",
                                for (label, href) in section.links.iter() {
                                    li { key: "{href}",
                                        a { href: *href, "{label}" }
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "site-footer__legal",
                    p { {copyright_line(year)} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_year_and_location() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 Cuts LLC, Abu Dhabi, United Arab Emirates. All rights reserved."
        );
    }

    #[test]
    #[cfg(feature = "server")]
    fn renders_every_section() {
        let html = dioxus::ssr::render_element(rsx! { Footer {} });
        for section in FOOTER_SECTIONS {
            assert!(html.contains(section.title), "missing {}", section.title);
        }
        let year = chrono::Local::now().year().to_string();
        assert!(html.contains(&year), "{html}");
    }
}

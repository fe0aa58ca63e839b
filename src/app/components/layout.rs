//! Page chrome and the full HTML document used for server rendering.

use dioxus::prelude::*;

use super::{Footer, NavigationBar};
use crate::app::embedded_assets::{LOGO_DATA_URL, SITE_CSS, SITE_SCRIPT};
use crate::app::meta::Page;

/// Navigation, page body and footer.
#[component]
pub fn Layout(page: Page, children: Element) -> Element {
    rsx! {
        NavigationBar { current: page.path() }
        main { id: "main", {children} }
        Footer {}
    }
}

/// `<head>` and `<body>` for one server-rendered page.
///
/// The caller adds the doctype and the `<html>` element. The body ends with
/// the enhancement script, which drives the navigation and contact form on
/// the static markup.
#[component]
pub fn Document(page: Page, children: Element) -> Element {
    let page_meta = page.meta();
    let keywords = page_meta.keywords_content();
    let logo = LOGO_DATA_URL.as_str();

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{page_meta.title}" }
            meta { name: "description", content: page_meta.description }
            if !keywords.is_empty() {
                meta { name: "keywords", content: "{keywords}" }
            }
            meta { "property": "og:title", content: page_meta.og_title }
            meta { "property": "og:description", content: page_meta.og_description }
            meta { "property": "og:type", content: "website" }
            link { rel: "icon", r#type: "image/svg+xml", href: "{logo}" }
            style { dangerous_inner_html: SITE_CSS }
        }
        body {
            {children}
            script { dangerous_inner_html: SITE_SCRIPT }
        }
    }
}

use dioxus::prelude::*;

use crate::app::components::{Button, ButtonSize};

/// Catch-all page. Rendered without the site chrome.
#[component]
pub fn NotFound(#[props(default)] segments: Vec<String>) -> Element {
    if !segments.is_empty() {
        tracing::debug!(path = %segments.join("/"), "No route matched");
    }

    rsx! {
        div { class: "not-found",
            div {
                h1 { class: "not-found__code", "404" }
                h2 { "Page Not Found" }
                p { class: "hero__subtitle", "Sorry, we couldn't find the page you're looking for." }
                Button { size: ButtonSize::Lg, href: "/", "Go Back Home" }
            }
        }
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[test]
    fn links_back_home_without_navigation() {
        let html = dioxus::ssr::render_element(rsx! {
            NotFound { segments: vec!["careers".to_string()] }
        });
        assert!(html.contains(">404<"), "{html}");
        assert!(html.contains("href=\"/\""), "{html}");
        assert!(!html.contains("site-nav"), "{html}");
    }
}

//! Dioxus application: routes, layout chrome, pages.
//!
//! The server renders each page through SSR; the `web` build mounts [`App`]
//! and hydrates the same components so the navigation becomes interactive.

use dioxus::prelude::*;

pub mod components;
pub mod embedded_assets;
pub mod meta;
pub mod pages;
pub mod scroll;

use pages::{About, Contact, Drivers, Home, NotFound, Restaurants};

/// Root app component with routing
#[component]
pub fn App() -> Element {
    rsx! {
        style { dangerous_inner_html: embedded_assets::SITE_CSS }
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
    #[route("/drivers")]
    Drivers {},
    #[route("/restaurants")]
    Restaurants {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

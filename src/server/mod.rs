//! HTTP server: SSR pages, embedded static assets, health check.

use axum::{
    extract::Path,
    http::{header, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use dioxus::prelude::*;
use rust_embed::Embed;
use serde::Serialize;
use tokio::signal;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::app::components::Document;
use crate::app::meta::Page;
use crate::app::pages::{About, Contact, Drivers, Home, NotFound, Restaurants};

/// Files under `public/`, compiled into the binary.
#[derive(Embed)]
#[folder = "public/"]
struct PublicAssets;

/// Health check response
#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
}

/// Render one page as a complete HTML document.
pub fn render_page(page: Page) -> String {
    let html = match page {
        Page::Home => dioxus::ssr::render_element(rsx! { Document { page, Home {} } }),
        Page::About => dioxus::ssr::render_element(rsx! { Document { page, About {} } }),
        Page::Contact => dioxus::ssr::render_element(rsx! { Document { page, Contact {} } }),
        Page::Drivers => dioxus::ssr::render_element(rsx! { Document { page, Drivers {} } }),
        Page::Restaurants => {
            dioxus::ssr::render_element(rsx! { Document { page, Restaurants {} } })
        }
        Page::NotFound => dioxus::ssr::render_element(rsx! { Document { page, NotFound {} } }),
    };
    format!("<!DOCTYPE html>\n<html lang=\"en\">\n{}</html>", html)
}

/// Build the site router with all layers applied.
pub fn router() -> Router {
    let pages = Page::ROUTED.iter().fold(Router::new(), |router, &page| {
        router.route(page.path(), get(move || async move { Html(render_page(page)) }))
    });

    pages
        .route("/status", get(status_handler))
        .route("/assets/{*path}", get(asset_handler))
        .route("/robots.txt", get(|| asset_response("robots.txt")))
        .fallback(fallback_handler)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// GET /status - Service health
pub async fn status_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        version: env!("CUTS_VERSION"),
        git_sha: env!("CUTS_GIT_SHA"),
    })
}

/// GET /assets/{*path} - Embedded static file
async fn asset_handler(Path(path): Path<String>) -> Response {
    asset_response(&path).await
}

async fn asset_response(path: &str) -> Response {
    match PublicAssets::get(path) {
        Some(file) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            (
                [
                    (header::CONTENT_TYPE, mime.as_ref().to_string()),
                    (header::CACHE_CONTROL, "public, max-age=3600".to_string()),
                ],
                file.data.into_owned(),
            )
                .into_response()
        }
        None => {
            tracing::debug!("Asset not found: {}", path);
            (StatusCode::NOT_FOUND, "Not found").into_response()
        }
    }
}

/// Unmatched paths. A trailing slash on a known page still resolves to it.
async fn fallback_handler(uri: Uri) -> impl IntoResponse {
    match Page::from_path(uri.path()) {
        Page::NotFound => {
            tracing::debug!("No page for {}", uri.path());
            (StatusCode::NOT_FOUND, Html(render_page(Page::NotFound)))
        }
        page => (StatusCode::OK, Html(render_page(page))),
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down..."),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down..."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_routed_page_renders_a_full_document() {
        for page in Page::ROUTED {
            let html = render_page(*page);
            assert!(html.starts_with("<!DOCTYPE html>"), "{:?}", page);
            assert!(html.ends_with("</html>"), "{:?}", page);
            let title = page.meta().title.replace('&', "&#38;");
            assert!(html.contains(&title), "{:?}", page);
        }
    }

    #[test]
    fn titles_with_ampersands_are_escaped() {
        let html = render_page(Page::About);
        assert!(html.contains("<title>About Cuts - Our Mission &#38; Story</title>"), "{html}");
    }

    #[test]
    fn embedded_assets_include_the_stylesheet() {
        assert!(PublicAssets::get("site.css").is_some());
        assert!(PublicAssets::get("site.js").is_some());
        assert!(PublicAssets::get("missing.css").is_none());
    }
}

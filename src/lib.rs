//! Cuts marketing site
//!
//! Server-rendered Dioxus pages for the Cuts food delivery platform.
//!
//! This library provides:
//! - The navigation model (menu content, dropdown state, panel geometry)
//! - An inline SVG icon library
//! - Page components and shared layout
//! - The axum server that renders and serves the pages (`server` feature)

pub mod app;
pub mod contact;
pub mod icons;
pub mod nav;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;

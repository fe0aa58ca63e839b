//! Embedded static assets for single-binary distribution.
//!
//! The stylesheet and the enhancement script are compiled in with
//! `include_str!` and inlined into every server-rendered page. The logo is
//! served as a base64 data URL so the favicon and brand mark need no extra
//! request.

use base64::{engine::general_purpose::STANDARD, Engine};
use std::sync::LazyLock;

/// Site stylesheet
pub const SITE_CSS: &str = include_str!("../../public/site.css");

/// Navigation and contact form behaviour for server-rendered pages
pub const SITE_SCRIPT: &str = include_str!("../../public/site.js");

/// Logo bytes
const LOGO_BYTES: &[u8] = include_bytes!("../../public/logo.svg");

/// Logo as data URL (lazily encoded)
pub static LOGO_DATA_URL: LazyLock<String> =
    LazyLock::new(|| format!("data:image/svg+xml;base64,{}", STANDARD.encode(LOGO_BYTES)));

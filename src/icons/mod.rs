//! Hand-rolled icon library.
//!
//! Icons are a closed set: every [`IconName`] maps to static stroke data in
//! [`glyphs`], so a missing glyph is a compile error rather than a blank box.
//! Size is always passed by the caller; nothing is inferred from context.

use std::str::FromStr;

use dioxus::prelude::*;

mod glyphs;

pub use glyphs::Shape;

/// Default rendered size in pixels.
pub const DEFAULT_SIZE: u32 = 24;

/// Default stroke width, matching the site's thin line style.
pub const DEFAULT_STROKE_WIDTH: f32 = 1.5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown icon: {0}")]
pub struct UnknownIcon(pub String);

macro_rules! icon_names {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// Every glyph the site can render.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum IconName {
            $($variant),+
        }

        impl IconName {
            pub const ALL: &'static [IconName] = &[$(IconName::$variant),+];

            /// Kebab-case identifier, e.g. `"chef-hat"`.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(IconName::$variant => $name),+
                }
            }
        }

        impl FromStr for IconName {
            type Err = UnknownIcon;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(IconName::$variant),)+
                    other => Err(UnknownIcon(other.to_string())),
                }
            }
        }
    };
}

icon_names! {
    Menu => "menu",
    X => "x",
    ChevronDown => "chevron-down",
    ChevronRight => "chevron-right",
    ArrowRight => "arrow-right",
    ArrowUpRight => "arrow-up-right",
    ExternalLink => "external-link",
    Home => "home",
    Check => "check",
    CheckCircle => "check-circle",
    CheckCircle2 => "check-circle-2",
    Info => "info",
    AlertCircle => "alert-circle",
    Clock => "clock",
    Mail => "mail",
    Phone => "phone",
    MessageCircle => "message-circle",
    Send => "send",
    MapPin => "map-pin",
    Globe => "globe",
    Heart => "heart",
    Star => "star",
    Shield => "shield",
    Zap => "zap",
    Leaf => "leaf",
    Target => "target",
    Sparkles => "sparkles",
    Award => "award",
    TrendingUp => "trending-up",
    BarChart => "bar-chart",
    Users => "users",
    UserCheck => "user-check",
    DollarSign => "dollar-sign",
    CreditCard => "credit-card",
    Banknote => "banknote",
    ShoppingBag => "shopping-bag",
    Package => "package",
    Store => "store",
    Building2 => "building-2",
    Utensils => "utensils",
    ChefHat => "chef-hat",
    Smartphone => "smartphone",
    Download => "download",
    File => "file",
    Lock => "lock",
}

impl IconName {
    /// Stroke primitives for this glyph.
    pub fn shapes(&self) -> &'static [Shape] {
        glyphs::shapes(*self)
    }
}

/// Render an icon as inline SVG at the requested pixel size.
#[component]
pub fn Icon(
    name: IconName,
    #[props(default = DEFAULT_SIZE)] size: u32,
    #[props(default)] class: String,
    #[props(default = DEFAULT_STROKE_WIDTH)] stroke_width: f32,
) -> Element {
    rsx! {
        svg {
            class: "{class}",
            width: "{size}",
            height: "{size}",
            "viewBox": "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            "stroke-width": "{stroke_width}",
            "stroke-linecap": "round",
            "stroke-linejoin": "round",
            "aria-hidden": "true",
            "data-icon": name.as_str(),
            for shape in name.shapes().iter() {
                {render_shape(shape)}
            }
        }
    }
}

fn render_shape(shape: &Shape) -> Element {
    match *shape {
        Shape::Path(d) => rsx! { path { d: d } },
        Shape::Circle { cx, cy, r } => rsx! { circle { cx: "{cx}", cy: "{cy}", r: "{r}" } },
        Shape::Line { x1, y1, x2, y2 } => rsx! {
            line { x1: "{x1}", y1: "{y1}", x2: "{x2}", y2: "{y2}" }
        },
        Shape::Polyline(points) => rsx! { polyline { points: points } },
        Shape::Polygon(points) => rsx! { polygon { points: points } },
        Shape::Rect {
            x,
            y,
            width,
            height,
            rx,
        } => rsx! {
            rect { x: "{x}", y: "{y}", width: "{width}", height: "{height}", rx: "{rx}" }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for name in IconName::ALL {
            assert_eq!(name.as_str().parse::<IconName>(), Ok(*name));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "pizza-slice".parse::<IconName>().unwrap_err();
        assert_eq!(err, UnknownIcon("pizza-slice".to_string()));
        assert_eq!(err.to_string(), "unknown icon: pizza-slice");
    }

    #[test]
    #[cfg(feature = "server")]
    fn renders_at_requested_size() {
        let html = dioxus::ssr::render_element(rsx! {
            Icon { name: IconName::ChefHat, size: 40 }
        });
        assert!(html.contains("width=\"40\""), "{html}");
        assert!(html.contains("height=\"40\""), "{html}");
        assert!(html.contains("data-icon=\"chef-hat\""), "{html}");
        assert!(html.contains("<path"), "{html}");
    }

    #[test]
    #[cfg(feature = "server")]
    fn renders_every_shape_kind() {
        let html = dioxus::ssr::render_element(rsx! {
            Icon { name: IconName::Banknote }
            Icon { name: IconName::Menu }
            Icon { name: IconName::Star }
            Icon { name: IconName::Clock }
        });
        for tag in ["<rect", "<circle", "<line", "<polygon", "<polyline", "<path"] {
            assert!(html.contains(tag), "missing {tag} in {html}");
        }
        assert!(html.contains("width=\"24\""), "default size: {html}");
    }
}

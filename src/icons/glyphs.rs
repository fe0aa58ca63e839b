//! Static vector data for every icon, on a 24x24 view box.

use super::IconName;

/// One primitive of a stroked glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Path(&'static str),
    Circle { cx: f32, cy: f32, r: f32 },
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    Polyline(&'static str),
    Polygon(&'static str),
    Rect { x: f32, y: f32, width: f32, height: f32, rx: f32 },
}

use Shape::{Circle, Line, Path, Polygon, Polyline, Rect};

const fn circle(cx: f32, cy: f32, r: f32) -> Shape {
    Circle { cx, cy, r }
}

const fn line(x1: f32, y1: f32, x2: f32, y2: f32) -> Shape {
    Line { x1, y1, x2, y2 }
}

const fn rect(x: f32, y: f32, width: f32, height: f32, rx: f32) -> Shape {
    Rect {
        x,
        y,
        width,
        height,
        rx,
    }
}

const USER_BODY: &str = "M16 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2";

pub(super) fn shapes(name: IconName) -> &'static [Shape] {
    match name {
        // Navigation & UI
        IconName::Menu => const { &[
            line(3.0, 12.0, 21.0, 12.0),
            line(3.0, 6.0, 21.0, 6.0),
            line(3.0, 18.0, 21.0, 18.0),
        ] },
        IconName::X => const { &[Path("M18 6 6 18"), Path("m6 6 12 12")] },
        IconName::ChevronDown => const { &[Polyline("6 9 12 15 18 9")] },
        IconName::ChevronRight => const { &[Polyline("9 18 15 12 9 6")] },
        IconName::ArrowRight => const { &[Path("M5 12h14"), Path("m12 5 7 7-7 7")] },
        IconName::ArrowUpRight => const { &[Path("M7 17 17 7"), Path("M7 7h10v10")] },
        IconName::ExternalLink => const { &[
            Path("M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"),
            Polyline("15 3 21 3 21 9"),
            line(10.0, 14.0, 21.0, 3.0),
        ] },
        IconName::Home => const { &[
            Path("M3 9l9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"),
            Polyline("9 22 9 12 15 12 15 22"),
        ] },

        // Status
        IconName::Check => const { &[Polyline("20 6 9 17 4 12")] },
        IconName::CheckCircle => const { &[
            Path("M22 11.08V12a10 10 0 1 1-5.93-9.14"),
            Path("M22 4 12 14.01l-3-3"),
        ] },
        IconName::CheckCircle2 => const { &[circle(12.0, 12.0, 10.0), Path("m9 12 2 2 4-4")] },
        IconName::Info => const { &[
            circle(12.0, 12.0, 10.0),
            Path("M12 16v-4"),
            Path("M12 8h.01"),
        ] },
        IconName::AlertCircle => const { &[
            circle(12.0, 12.0, 10.0),
            line(12.0, 8.0, 12.0, 12.0),
            line(12.0, 16.0, 12.01, 16.0),
        ] },
        IconName::Clock => const { &[circle(12.0, 12.0, 10.0), Polyline("12 6 12 12 16 14")] },

        // Communication & location
        IconName::Mail => const { &[
            Path("M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"),
            Polyline("22,6 12,13 2,6"),
        ] },
        IconName::Phone => const { &[Path(
            "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 \
             19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 \
             .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 \
             12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z",
        )] },
        IconName::MessageCircle => const { &[Path("M7.9 20A9 9 0 1 0 4 16.1L2 22Z")] },
        IconName::Send => const { &[Path("M22 2 11 13"), Path("M22 2 15 22l-4-9-9-4 20-7z")] },
        IconName::MapPin => const { &[
            Path("M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z"),
            circle(12.0, 10.0, 3.0),
        ] },
        IconName::Globe => const { &[
            circle(12.0, 12.0, 10.0),
            Path("M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20"),
            Path("M2 12h20"),
        ] },

        // Brand values
        IconName::Heart => const { &[Path(
            "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2\
             A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z",
        )] },
        IconName::Star => const { &[Polygon(
            "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2",
        )] },
        IconName::Shield => const { &[Path("M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z")] },
        IconName::Zap => const { &[Polygon("13 2 3 14 12 14 11 22 21 10 12 10 13 2")] },
        IconName::Leaf => const { &[
            Path("M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z"),
            Path("M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12"),
        ] },
        IconName::Target => const { &[
            circle(12.0, 12.0, 10.0),
            circle(12.0, 12.0, 6.0),
            circle(12.0, 12.0, 2.0),
        ] },
        IconName::Sparkles => const { &[
            Path(
                "m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21\
                 l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z",
            ),
            Path("M5 3v4"),
            Path("M19 17v4"),
            Path("M3 5h4"),
            Path("M17 19h4"),
        ] },
        IconName::Award => const { &[
            circle(12.0, 8.0, 7.0),
            Polyline("8.21 13.89 7 23 12 20 17 23 15.79 13.88"),
        ] },

        // Analytics & people
        IconName::TrendingUp => const { &[
            Polyline("22 7 13.5 15.5 8.5 10.5 2 17"),
            Polyline("16 7 22 7 22 13"),
        ] },
        IconName::BarChart => const { &[
            line(12.0, 20.0, 12.0, 10.0),
            line(18.0, 20.0, 18.0, 4.0),
            line(6.0, 20.0, 6.0, 16.0),
        ] },
        IconName::Users => const { &[
            Path("M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"),
            circle(9.0, 7.0, 4.0),
            Path("M22 21v-2a4 4 0 0 0-3-3.87"),
            Path("M16 3.13a4 4 0 0 1 0 7.75"),
        ] },
        IconName::UserCheck => const { &[
            Path(USER_BODY),
            circle(8.5, 7.0, 4.0),
            Polyline("17 11 19 13 23 9"),
        ] },

        // Commerce
        IconName::DollarSign => const { &[
            line(12.0, 1.0, 12.0, 23.0),
            Path("M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"),
        ] },
        IconName::CreditCard => const { &[
            rect(1.0, 4.0, 22.0, 16.0, 2.0),
            line(1.0, 10.0, 23.0, 10.0),
        ] },
        IconName::Banknote => const { &[
            rect(2.0, 6.0, 20.0, 12.0, 2.0),
            circle(12.0, 12.0, 2.0),
            Path("M6 12h.01"),
            Path("M18 12h.01"),
        ] },
        IconName::ShoppingBag => const { &[
            Path("M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z"),
            Path("M3 6h18"),
            Path("M16 10a4 4 0 0 1-8 0"),
        ] },
        IconName::Package => const { &[
            line(16.5, 9.4, 7.5, 4.21),
            Path(
                "M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73\
                 l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z",
            ),
            Polyline("3.27 6.96 12 12.01 20.73 6.96"),
            line(12.0, 22.08, 12.0, 12.0),
        ] },
        IconName::Store => const { &[
            Path("m2 7 4.41-4.41A2 2 0 0 1 7.83 2h8.34a2 2 0 0 1 1.42.59L22 7"),
            Path("M4 12v8a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-8"),
            Path("M15 22v-4a2 2 0 0 0-2-2h-2a2 2 0 0 0-2 2v4"),
            Path("M2 7h20"),
        ] },
        IconName::Building2 => const { &[
            Path("M3 21h18"),
            Path("M9 8h1"),
            Path("M9 12h1"),
            Path("M9 16h1"),
            Path("M14 8h1"),
            Path("M14 12h1"),
            Path("M14 16h1"),
            Path("M5 21V5a2 2 0 0 1 2-2h10a2 2 0 0 1 2 2v16"),
        ] },

        // Food
        IconName::Utensils => const { &[
            Path("M3 2v7c0 1.1.9 2 2 2h4a2 2 0 0 0 2-2V2"),
            Path("M7 2v20"),
            Path("M21 15V2v0a5 5 0 0 0-5 5v6c0 1.1.9 2 2 2h3z"),
            line(21.0, 15.0, 21.0, 22.0),
        ] },
        IconName::ChefHat => const { &[
            Path(
                "M6 13.87A4 4 0 0 1 7.41 6a5.11 5.11 0 0 1 1.05-1.54 5 5 0 0 1 7.08 0\
                 A5.11 5.11 0 0 1 16.59 6 4 4 0 0 1 18 13.87V21H6Z",
            ),
            Path("M6 17h12"),
        ] },

        // Devices & files
        IconName::Smartphone => const { &[
            rect(5.0, 2.0, 14.0, 20.0, 2.0),
            line(12.0, 18.0, 12.01, 18.0),
        ] },
        IconName::Download => const { &[
            Path("M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"),
            Polyline("7 10 12 15 17 10"),
            line(12.0, 15.0, 12.0, 3.0),
        ] },
        IconName::File => const { &[
            Path("M13 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V9z"),
            Polyline("13 2 13 9 20 9"),
        ] },
        IconName::Lock => const { &[
            rect(3.0, 11.0, 18.0, 11.0, 2.0),
            Path("M7 11V7a5 5 0 0 1 10 0v4"),
        ] },
    }
}

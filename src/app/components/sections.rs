//! Content blocks shared by the marketing pages.
//!
//! Every block takes `'static` tables so page copy stays in `const` data.

use dioxus::prelude::*;

use super::Container;
use crate::icons::{Icon, IconName};

/// Delay between consecutive entrance animations.
pub const REVEAL_STAGGER_MS: u32 = 100;

/// Inline style delaying the `reveal` animation of the `index`th sibling.
pub fn reveal_delay(index: usize) -> String {
    format!("animation-delay: {}ms;", index as u32 * REVEAL_STAGGER_MS)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub description: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub icon: IconName,
    pub title: &'static str,
    pub body: &'static str,
    pub meta: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub title: &'static str,
    pub body: &'static str,
}

/// Page-top banner. `title` and `highlight` render on one heading.
#[component]
pub fn Hero(
    #[props(default)] eyebrow: &'static str,
    title: &'static str,
    highlight: &'static str,
    subtitle: &'static str,
    #[props(default)] stats: &'static [Stat],
    children: Element,
) -> Element {
    rsx! {
        section { class: "hero",
            Container {
                div { class: "hero__inner reveal",
                    if !eyebrow.is_empty() {
                        span { class: "hero__eyebrow",
                            Icon { name: IconName::Sparkles, size: 16 }
                            "{eyebrow}"
                        }
                    }
                    h1 { class: "hero__title",
                        "{title} "
                        span { class: "hero__highlight", "{highlight}" }
                    }
                    p { class: "hero__subtitle", "{subtitle}" }
                    div { class: "hero__actions", {children} }
                    if !stats.is_empty() {
                        StatRow { stats }
                    }
                }
            }
        }
    }
}

#[component]
pub fn StatRow(stats: &'static [Stat]) -> Element {
    rsx! {
        div { class: "stat-row",
            for (index, stat) in stats.iter().enumerate() {
                div { key: "{stat.label}", class: "stat reveal", style: reveal_delay(index),
                    div { class: "stat__value", "{stat.value}" }
                    div { class: "stat__label", "{stat.label}" }
                    if let Some(description) = stat.description {
                        div { class: "stat__description", "{description}" }
                    }
                }
            }
        }
    }
}

/// Centred `h2` plus lead paragraph.
#[component]
pub fn SectionHeading(title: &'static str, #[props(default)] lead: &'static str) -> Element {
    rsx! {
        div { class: "section-heading reveal",
            h2 { "{title}" }
            if !lead.is_empty() {
                p { "{lead}" }
            }
        }
    }
}

/// Icon cards, `columns` per row on wide screens.
#[component]
pub fn FeatureGrid(features: &'static [Feature], #[props(default = 3)] columns: u8) -> Element {
    rsx! {
        div { class: "card-grid card-grid--{columns}",
            for (index, feature) in features.iter().enumerate() {
                div { key: "{feature.title}", class: "card reveal", style: reveal_delay(index),
                    div { class: "card__icon",
                        Icon { name: feature.icon, size: 32 }
                    }
                    h3 { class: "card__title", "{feature.title}" }
                    p { class: "card__body", "{feature.body}" }
                    if let Some(meta) = feature.meta {
                        div { class: "card__meta", "{meta}" }
                    }
                }
            }
        }
    }
}

/// Numbered steps; numbers are 1-based and zero padded.
#[component]
pub fn StepList(steps: &'static [Step]) -> Element {
    rsx! {
        div { class: "steps steps--{steps.len()}",
            for (index, step) in steps.iter().enumerate() {
                div { key: "{step.title}", class: "card reveal", style: reveal_delay(index),
                    div { class: "step__number", {format!("{:02}", index + 1)} }
                    h3 { class: "card__title", "{step.title}" }
                    p { class: "card__body", "{step.body}" }
                }
            }
        }
    }
}

#[component]
pub fn Checklist(items: &'static [&'static str]) -> Element {
    rsx! {
        ul { class: "checklist",
            for item in items.iter() {
                li { key: "{item}",
                    Icon { name: IconName::CheckCircle2, size: 24 }
                    span { "{item}" }
                }
            }
        }
    }
}

/// Closing call-to-action card; buttons go in `children`.
#[component]
pub fn CtaBanner(title: &'static str, body: &'static str, children: Element) -> Element {
    rsx! {
        section { class: "section section--tight",
            Container {
                div { class: "cta-banner reveal",
                    h2 { "{title}" }
                    p { "{body}" }
                    div { class: "hero__actions", {children} }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_delay_staggers_by_index() {
        assert_eq!(reveal_delay(0), "animation-delay: 0ms;");
        assert_eq!(reveal_delay(3), "animation-delay: 300ms;");
    }

    #[cfg(feature = "server")]
    mod render {
        use super::super::*;

        const STEPS: &[Step] = &[
            Step {
                title: "Apply",
                body: "Fill in the form",
            },
            Step {
                title: "Ride",
                body: "Start delivering",
            },
        ];

        #[test]
        fn steps_are_numbered_from_one() {
            let html = dioxus::ssr::render_element(rsx! { StepList { steps: STEPS } });
            assert!(html.contains(">01<"), "{html}");
            assert!(html.contains(">02<"), "{html}");
            assert!(html.contains("steps--2"), "{html}");
        }

        #[test]
        fn stat_description_is_optional() {
            const STATS: &[Stat] = &[
                Stat {
                    value: "50+",
                    label: "Restaurants",
                    description: None,
                },
                Stat {
                    value: "4.9",
                    label: "Rating",
                    description: Some("App Store"),
                },
            ];
            let html = dioxus::ssr::render_element(rsx! { StatRow { stats: STATS } });
            assert_eq!(html.matches("stat__description").count(), 1, "{html}");
            assert!(html.contains("animation-delay: 100ms"), "{html}");
        }
    }
}

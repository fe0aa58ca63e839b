use dioxus::prelude::*;

use crate::app::components::{
    Button, ButtonSize, ButtonVariant, Container, Feature, FeatureGrid, Hero, Layout,
    SectionHeading, Stat, StatRow,
};
use crate::app::meta::Page;
use crate::icons::{Icon, IconName};

/// One narrative block with a headline figure beside it.
struct StoryBlock {
    id: &'static str,
    eyebrow: &'static str,
    title: &'static str,
    paragraphs: &'static [&'static str],
    icon: IconName,
    figure: &'static str,
    caption: &'static str,
}

const STORY: &[StoryBlock] = &[
    StoryBlock {
        id: "story",
        eyebrow: "Our Story",
        title: "Born from a simple observation",
        paragraphs: &[
            "People want to eat healthy, but finding nutritious meals that are convenient, \
             delicious, and transparent about ingredients is surprisingly difficult.",
            "We saw an opportunity to bridge this gap in the UAE market. While food delivery has \
             made ordering meals convenient, most platforms focus on speed and variety without \
             prioritizing nutrition or transparency.",
        ],
        icon: IconName::Heart,
        figure: "10K+",
        caption: "Healthy meals delivered",
    },
    StoryBlock {
        id: "mission",
        eyebrow: "Our Mission",
        title: "Making healthy eating effortless",
        paragraphs: &[
            "We believe that good nutrition shouldn't be a luxury or require hours of meal prep. \
             It should be as easy as ordering from your favorite restaurant.",
            "That's why we created Cuts, the first food delivery platform in the UAE that puts \
             health and nutrition at the center.",
        ],
        icon: IconName::Target,
        figure: "50+",
        caption: "Partner restaurants",
    },
];

const VALUES: &[Feature] = &[
    Feature {
        icon: IconName::Heart,
        title: "Health First",
        body: "We believe nutrition is the foundation of wellbeing and make healthy eating \
               accessible to everyone",
        meta: None,
    },
    Feature {
        icon: IconName::Users,
        title: "Community Focused",
        body: "We're building a supportive ecosystem that connects restaurants, drivers, and \
               customers",
        meta: None,
    },
    Feature {
        icon: IconName::Shield,
        title: "Transparency",
        body: "Complete nutrition information and honest communication in everything we do",
        meta: None,
    },
    Feature {
        icon: IconName::Zap,
        title: "Innovation",
        body: "Using technology to solve real problems and make healthy choices effortless",
        meta: None,
    },
];

const IMPACT: &[Stat] = &[
    Stat {
        value: "50+",
        label: "Partner Restaurants",
        description: Some("Healthy restaurants in Abu Dhabi"),
    },
    Stat {
        value: "10K+",
        label: "Meals Delivered",
        description: Some("Nutritious meals to happy customers"),
    },
    Stat {
        value: "4.9/5",
        label: "Customer Satisfaction",
        description: Some("Average rating across all orders"),
    },
];

const INVESTOR_METRICS: &[Stat] = &[
    Stat {
        value: "23% YoY",
        label: "Market Growth",
        description: None,
    },
    Stat {
        value: "85%",
        label: "Customer Retention",
        description: None,
    },
    Stat {
        value: "AED 85",
        label: "Avg Order Value",
        description: None,
    },
];

#[component]
pub fn About() -> Element {
    rsx! {
        Layout { page: Page::About,
            Hero {
                eyebrow: "Our Story",
                title: "Building a healthier UAE,",
                highlight: "one meal at a time",
                subtitle: "We're on a mission to make healthy eating accessible, convenient, and enjoyable for everyone in Abu Dhabi.",
            }

            section { class: "section",
                Container {
                    for block in STORY.iter() {
                        div { key: "{block.id}", id: block.id, class: "card-grid card-grid--2 reveal",
                            div {
                                span { class: "hero__eyebrow", "{block.eyebrow}" }
                                h2 { "{block.title}" }
                                for paragraph in block.paragraphs.iter() {
                                    p { class: "card__body", "{paragraph}" }
                                }
                            }
                            div { class: "card",
                                div { class: "card__icon",
                                    Icon { name: block.icon, size: 40 }
                                }
                                div { class: "stat__value", "{block.figure}" }
                                div { class: "stat__label", "{block.caption}" }
                            }
                        }
                    }
                }
            }

            section { class: "section section--muted", id: "values",
                Container {
                    SectionHeading {
                        title: "Our Values",
                        lead: "The principles that guide everything we do",
                    }
                    FeatureGrid { features: VALUES, columns: 2 }
                }
            }

            section { class: "section", id: "impact",
                Container {
                    SectionHeading {
                        title: "Impact by the numbers",
                        lead: "Growing together with our community",
                    }
                    StatRow { stats: IMPACT }
                }
            }

            section { class: "section section--tight", id: "investors",
                Container {
                    div { class: "cta-banner reveal",
                        span { class: "hero__eyebrow", "For Investors" }
                        h2 { "Interested in investing?" }
                        p {
                            "We're addressing a massive market opportunity in the UAE's food delivery space by focusing on the rapidly growing health and wellness segment. Our unique positioning combines nutrition transparency, quality partnerships, and technology to create a platform that serves an underserved market."
                        }
                        Button {
                            size: ButtonSize::Lg,
                            variant: ButtonVariant::Secondary,
                            href: "/contact",
                            "Get in Touch"
                            Icon { name: IconName::ArrowRight, size: 20 }
                        }
                        StatRow { stats: INVESTOR_METRICS }
                    }
                }
            }

            section { class: "section", id: "press",
                Container {
                    SectionHeading {
                        title: "In the News",
                        lead: "For press inquiries, partnership opportunities, or media coverage, we'd love to hear from you.",
                    }
                    div { class: "hero__actions",
                        Button {
                            variant: ButtonVariant::Secondary,
                            href: "mailto:press@cuts.ae",
                            Icon { name: IconName::Mail, size: 20 }
                            " Press Contact"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[test]
    fn renders_values_and_investor_metrics() {
        let html = dioxus::ssr::render_element(rsx! { About {} });
        for value in VALUES {
            assert!(html.contains(value.title), "missing {}", value.title);
        }
        for metric in INVESTOR_METRICS {
            assert!(html.contains(metric.value), "missing {}", metric.value);
        }
        assert!(html.contains("id=\"press\""));
    }
}

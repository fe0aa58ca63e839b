//! Landing page.

use dioxus::prelude::*;

use crate::app::components::{
    reveal_delay, Button, ButtonSize, ButtonVariant, Container, CtaBanner, Feature, FeatureGrid,
    Grid, GridCross, Hero, Layout, SectionHeading, Stat, Step, StepList,
};
use crate::app::meta::Page;
use crate::icons::{Icon, IconName};

const HERO_STATS: &[Stat] = &[
    Stat {
        value: "50+",
        label: "Partner Restaurants",
        description: None,
    },
    Stat {
        value: "10K+",
        label: "Happy Customers",
        description: None,
    },
    Stat {
        value: "4.9",
        label: "Average Rating",
        description: None,
    },
];

const FEATURES: &[Feature] = &[
    Feature {
        icon: IconName::Leaf,
        title: "Nutrition First",
        body: "Every meal is crafted with nutritional balance in mind. Macros, calories, and \
               ingredients clearly labeled.",
        meta: None,
    },
    Feature {
        icon: IconName::Zap,
        title: "Lightning Fast",
        body: "Average delivery time of 25 minutes. Your healthy meal arrives fresh and hot, right \
               when you need it.",
        meta: None,
    },
    Feature {
        icon: IconName::Heart,
        title: "Made with Love",
        body: "Premium quality at competitive prices. No hidden fees, transparent pricing on every \
               order.",
        meta: None,
    },
];

const HIGHLIGHTS: &[(IconName, &str)] = &[
    (IconName::Clock, "Real-time tracking"),
    (IconName::Shield, "Food safety certified"),
    (IconName::Star, "4.9 average rating"),
];

const STEPS: &[Step] = &[
    Step {
        title: "Browse & Select",
        body: "Choose from 50+ restaurants offering healthy, nutritious meals with detailed \
               nutritional information.",
    },
    Step {
        title: "Customize & Order",
        body: "Personalize your meal to fit your dietary preferences and fitness goals. Place your \
               order in seconds.",
    },
    Step {
        title: "Enjoy Fresh Food",
        body: "Track your order in real-time. Your meal arrives fresh, hot, and ready to fuel your \
               day.",
    },
];

struct Testimonial {
    name: &'static str,
    role: &'static str,
    quote: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah M.",
        role: "Fitness Enthusiast",
        quote: "Finally, a delivery app that actually cares about nutrition! The macro breakdowns \
                are incredibly helpful for my fitness goals.",
    },
    Testimonial {
        name: "Ahmed K.",
        role: "Business Professional",
        quote: "Super fast delivery and the food quality is outstanding. This has become my go-to \
                for lunch every day.",
    },
    Testimonial {
        name: "Layla H.",
        role: "Nutrition Coach",
        quote: "Game changer for meal prep. The variety of healthy options means I never get bored \
                with my diet.",
    },
];

const STAR_COUNT: usize = 5;

#[component]
pub fn Home() -> Element {
    rsx! {
        Layout { page: Page::Home,
            Hero {
                title: "Healthy meals.",
                highlight: "Delivered with care.",
                subtitle: "UAE's first nutrition-focused food delivery platform.",
                stats: HERO_STATS,
                Button { size: ButtonSize::Lg, href: "#download", "Download App" }
                Button {
                    size: ButtonSize::Lg,
                    variant: ButtonVariant::Secondary,
                    href: "/restaurants",
                    "For Restaurants"
                }
            }

            section { class: "section section--muted", id: "features",
                Container {
                    SectionHeading {
                        title: "Why Choose Cuts?",
                        lead: "Healthy eating made simple, fast, and delicious",
                    }
                    FeatureGrid { features: FEATURES }
                    div { class: "card-grid card-grid--3",
                        for (index, (icon, text)) in HIGHLIGHTS.iter().enumerate() {
                            div { key: "{text}", class: "card reveal", style: reveal_delay(index),
                                Icon { name: *icon, size: 20 }
                                span { " {text}" }
                            }
                        }
                    }
                }
            }

            section { class: "section", id: "how-it-works",
                Container {
                    SectionHeading {
                        title: "How It Works",
                        lead: "Three simple steps to healthier eating",
                    }
                    StepList { steps: STEPS }
                }
            }

            section { class: "section section--muted", id: "download",
                Container {
                    div { class: "card-grid card-grid--2",
                        div { class: "reveal",
                            h2 { "Download the app today" }
                            p {
                                "Available on iOS. Start your journey to healthier eating with the tap of a button."
                            }
                            p { class: "stat__label",
                                "Meals starting from AED 25 • Free delivery on orders over AED 100"
                            }
                            Button { size: ButtonSize::Lg, href: "#download",
                                Icon { name: IconName::Smartphone, size: 20 }
                                " App Store"
                            }
                        }
                        div { class: "reveal", "aria-hidden": "true",
                            Grid { rows: 5, columns: 4,
                                GridCross { row: 2, column: 2 }
                                GridCross { row: 5, column: 4 }
                            }
                            div { class: "cta-banner",
                                Icon { name: IconName::Smartphone, size: 80 }
                                p { "App Preview" }
                            }
                        }
                    }
                }
            }

            section { class: "section", id: "testimonials",
                Container {
                    SectionHeading {
                        title: "What Our Customers Say",
                        lead: "Join thousands of satisfied customers",
                    }
                    div { class: "card-grid card-grid--3",
                        for (index, testimonial) in TESTIMONIALS.iter().enumerate() {
                            div { key: "{testimonial.name}", class: "card reveal", style: reveal_delay(index),
                                div { class: "testimonial__stars",
                                    for star in 0..STAR_COUNT {
                                        Icon { key: "{star}", name: IconName::Star, size: 20 }
                                    }
                                }
                                p { class: "testimonial__quote", "{testimonial.quote}" }
                                div { class: "testimonial__name", "{testimonial.name}" }
                                div { class: "testimonial__role", "{testimonial.role}" }
                            }
                        }
                    }
                }
            }

            CtaBanner {
                title: "Ready to start eating healthier?",
                body: "Join thousands of customers who have transformed their eating habits with Cuts.",
                Button {
                    size: ButtonSize::Lg,
                    variant: ButtonVariant::Secondary,
                    href: "#download",
                    "Download App"
                }
                Button {
                    size: ButtonSize::Lg,
                    variant: ButtonVariant::Ghost,
                    href: "/about",
                    "Learn More"
                }
            }
        }
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[test]
    fn renders_every_testimonial_with_five_stars() {
        let html = dioxus::ssr::render_element(rsx! { Home {} });
        for testimonial in TESTIMONIALS {
            assert!(html.contains(testimonial.name), "missing {}", testimonial.name);
        }
        let testimonials = &html[html.find("id=\"testimonials\"").unwrap()..];
        assert_eq!(
            testimonials.matches("data-icon=\"star\"").count(),
            TESTIMONIALS.len() * STAR_COUNT
        );
    }

    #[test]
    fn hero_carries_stats_and_ctas() {
        let html = dioxus::ssr::render_element(rsx! { Home {} });
        for stat in HERO_STATS {
            assert!(html.contains(stat.value));
        }
        assert!(html.contains("href=\"/restaurants\""));
        assert!(html.contains("id=\"download\""));
    }
}

use dioxus::prelude::*;

use crate::app::components::{
    Button, ButtonSize, ButtonVariant, Checklist, Container, CtaBanner, Feature, FeatureGrid, Hero,
    Layout, SectionHeading, Stat, Step, StepList,
};
use crate::app::meta::Page;
use crate::icons::{Icon, IconName};

const HERO_STATS: &[Stat] = &[
    Stat {
        value: "15%",
        label: "Commission",
        description: None,
    },
    Stat {
        value: "AED 85",
        label: "Avg Order Value",
        description: None,
    },
    Stat {
        value: "10K+",
        label: "Active Users",
        description: None,
    },
];

const BENEFITS: &[Feature] = &[
    Feature {
        icon: IconName::TrendingUp,
        title: "Reach new customers",
        body: "Connect with health-conscious customers actively seeking nutritious meal options",
        meta: None,
    },
    Feature {
        icon: IconName::DollarSign,
        title: "Fair commission",
        body: "Only 15% commission with transparent pricing and no hidden fees",
        meta: None,
    },
    Feature {
        icon: IconName::BarChart,
        title: "Powerful dashboard",
        body: "Track orders, manage your menu, and view analytics in real-time",
        meta: None,
    },
    Feature {
        icon: IconName::Users,
        title: "Dedicated support",
        body: "Onboarding team to help you succeed from day one",
        meta: None,
    },
    Feature {
        icon: IconName::Target,
        title: "Smart matching",
        body: "AI-powered recommendations show your menu to the right customers",
        meta: None,
    },
    Feature {
        icon: IconName::Zap,
        title: "Fast payments",
        body: "Weekly direct deposits with detailed earnings breakdown",
        meta: None,
    },
];

const STEPS: &[Step] = &[
    Step {
        title: "Sign Up",
        body: "Quick online registration process takes just 5 minutes. Provide basic details about \
               your restaurant and menu.",
    },
    Step {
        title: "Add Your Menu",
        body: "Upload your menu items with nutrition info. Our team will help you get everything \
               formatted perfectly.",
    },
    Step {
        title: "Receive Orders",
        body: "Get real-time notifications and manage orders through our powerful restaurant \
               dashboard.",
    },
    Step {
        title: "Grow Together",
        body: "We handle delivery and customer service so you can focus on what you do best: \
               making great food.",
    },
];

const REQUIREMENTS: &[&str] = &[
    "Active food license in Abu Dhabi",
    "Quality, healthy menu items",
    "Ability to provide nutrition information",
    "Commitment to food safety standards",
];

#[component]
pub fn Restaurants() -> Element {
    rsx! {
        Layout { page: Page::Restaurants,
            Hero {
                eyebrow: "For Restaurant Partners",
                title: "Join the healthiest",
                highlight: "food delivery platform",
                subtitle: "Reach health-conscious customers in Abu Dhabi. Fair commission. Real growth. Zero compromises.",
                stats: HERO_STATS,
                Button { size: ButtonSize::Lg, href: "#apply",
                    "Get Started "
                    Icon { name: IconName::ArrowRight, size: 20 }
                }
                Button {
                    size: ButtonSize::Lg,
                    variant: ButtonVariant::Secondary,
                    href: "#pricing",
                    "View Partnership Details"
                }
            }

            section { class: "section section--muted", id: "pricing",
                Container {
                    SectionHeading {
                        title: "Why partner with Cuts",
                        lead: "We're building more than a platform. We're building a community.",
                    }
                    FeatureGrid { features: BENEFITS }
                }
            }

            section { class: "section", id: "how-it-works",
                Container {
                    SectionHeading {
                        title: "Get started in 4 steps",
                        lead: "From signup to serving customers in under a week",
                    }
                    StepList { steps: STEPS }
                }
            }

            section { class: "section section--muted", id: "requirements",
                Container {
                    SectionHeading {
                        title: "What you need",
                        lead: "Simple requirements to get started",
                    }
                    Checklist { items: REQUIREMENTS }
                }
            }

            div { id: "apply",
                CtaBanner {
                    title: "Ready to partner with us?",
                    body: "Join Cuts today and start reaching health-conscious customers",
                    Button {
                        size: ButtonSize::Lg,
                        variant: ButtonVariant::Secondary,
                        href: "/contact",
                        "Sign Up Now"
                    }
                    Button {
                        size: ButtonSize::Lg,
                        variant: ButtonVariant::Ghost,
                        href: "/contact",
                        "Contact Us"
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
    fn renders_six_benefits() {
        let html = dioxus::ssr::render_element(rsx! { Restaurants {} });
        for benefit in BENEFITS {
            assert!(html.contains(benefit.title), "missing {}", benefit.title);
        }
        assert_eq!(BENEFITS.len(), 6);
        assert!(html.contains("id=\"pricing\""), "{html}");
    }
}

use dioxus::prelude::*;

use crate::app::components::{
    Button, ButtonSize, ButtonVariant, Checklist, Container, CtaBanner, Feature, FeatureGrid, Hero,
    Layout, SectionHeading, Stat, StatRow, Step, StepList,
};
use crate::app::meta::Page;
use crate::icons::{Icon, IconName};

const HERO_STATS: &[Stat] = &[
    Stat {
        value: "AED 45-60",
        label: "Avg Hourly",
        description: None,
    },
    Stat {
        value: "4.8/5.0",
        label: "Satisfaction",
        description: None,
    },
    Stat {
        value: "100+",
        label: "Active Drivers",
        description: None,
    },
];

const BENEFITS: &[Feature] = &[
    Feature {
        icon: IconName::DollarSign,
        title: "Competitive Earnings",
        body: "Earn AED 45-60/hour plus tips with weekly direct deposit payouts",
        meta: Some("Weekly Payouts"),
    },
    Feature {
        icon: IconName::Clock,
        title: "Your Schedule",
        body: "Work when you want with flexible hours that fit your lifestyle",
        meta: Some("100% Flexible"),
    },
    Feature {
        icon: IconName::Shield,
        title: "Support & Safety",
        body: "Insurance coverage and 24/7 support team always ready to help",
        meta: Some("24/7 Support"),
    },
];

const STEPS: &[Step] = &[
    Step {
        title: "Apply Online",
        body: "Quick 10-minute application form. Upload your license and vehicle documents.",
    },
    Step {
        title: "Get Approved",
        body: "Background check completed within 1-2 business days. We'll notify you instantly.",
    },
    Step {
        title: "Start Delivering",
        body: "Download the driver app, go online, and start accepting orders immediately.",
    },
    Step {
        title: "Get Paid Weekly",
        body: "Receive weekly direct deposits every Monday. Track your earnings in real-time.",
    },
];

const REQUIREMENTS: &[&str] = &[
    "Valid UAE driver's license",
    "Own vehicle (bike, car, or motorcycle)",
    "Smartphone with GPS",
    "18+ years old",
];

const EARNINGS: &[Stat] = &[
    Stat {
        value: "AED 45-60",
        label: "Average Hourly",
        description: Some("Including base pay + tips"),
    },
    Stat {
        value: "AED 75+",
        label: "Top Earners",
        description: Some("During peak hours"),
    },
    Stat {
        value: "4.8/5.0",
        label: "Driver Rating",
        description: Some("Average satisfaction score"),
    },
];

#[component]
pub fn Drivers() -> Element {
    rsx! {
        Layout { page: Page::Drivers,
            Hero {
                eyebrow: "For Delivery Partners",
                title: "Deliver health,",
                highlight: "earn well",
                subtitle: "Flexible hours. Competitive pay. Supportive community. Join Abu Dhabi's healthiest delivery platform.",
                stats: HERO_STATS,
                Button { size: ButtonSize::Lg, href: "#apply",
                    "Apply Now "
                    Icon { name: IconName::ArrowRight, size: 20 }
                }
                Button {
                    size: ButtonSize::Lg,
                    variant: ButtonVariant::Secondary,
                    href: "#benefits",
                    "Learn More"
                }
            }

            section { class: "section section--muted", id: "benefits",
                Container {
                    SectionHeading {
                        title: "Why deliver with Cuts",
                        lead: "Join a community of drivers who love what they do",
                    }
                    FeatureGrid { features: BENEFITS }
                }
            }

            section { class: "section", id: "how-it-works",
                Container {
                    SectionHeading {
                        title: "Start earning in 4 steps",
                        lead: "From application to your first delivery in 1-2 days",
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

            section { class: "section", id: "earnings",
                Container {
                    SectionHeading {
                        title: "Your earnings potential",
                        lead: "Real numbers from our driver community",
                    }
                    StatRow { stats: EARNINGS }
                }
            }

            div { id: "apply",
                CtaBanner {
                    title: "Start earning today",
                    body: "Join Cuts and become part of a community delivering healthy food. Join 100+ happy drivers across Abu Dhabi.",
                    Button {
                        size: ButtonSize::Lg,
                        variant: ButtonVariant::Secondary,
                        href: "/contact",
                        "Apply Now"
                    }
                    Button {
                        size: ButtonSize::Lg,
                        variant: ButtonVariant::Ghost,
                        href: "/contact",
                        "Contact Support"
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
    fn lists_requirements_and_four_steps() {
        let html = dioxus::ssr::render_element(rsx! { Drivers {} });
        for requirement in REQUIREMENTS.iter().filter(|r| !r.contains('\'')) {
            assert!(html.contains(requirement), "missing {requirement}");
        }
        assert!(html.contains("steps--4"), "{html}");
        assert!(html.contains("id=\"apply\""), "{html}");
    }
}

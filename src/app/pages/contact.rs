use dioxus::prelude::*;

use crate::app::components::{
    reveal_delay, Button, ButtonSize, Container, ContainerSize, Hero, Layout, SectionHeading,
};
use crate::app::meta::Page;
use crate::contact::{ContactField, ContactSubmission, Subject};
use crate::icons::{Icon, IconName};

struct ContactChannel {
    icon: IconName,
    title: &'static str,
    value: &'static str,
    link: Option<&'static str>,
}

const CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: IconName::Mail,
        title: "Email",
        value: "hello@cuts.ae",
        link: Some("mailto:hello@cuts.ae"),
    },
    ContactChannel {
        icon: IconName::MapPin,
        title: "Office",
        value: "Abu Dhabi, UAE",
        link: None,
    },
    ContactChannel {
        icon: IconName::Phone,
        title: "Phone",
        value: "+971 XX XXX XXXX",
        link: Some("tel:+971XXXXXXXX"),
    },
];

#[component]
pub fn Contact() -> Element {
    rsx! {
        Layout { page: Page::Contact,
            Hero {
                eyebrow: "Get in Touch",
                title: "Let's",
                highlight: "talk",
                subtitle: "We'd love to hear from you. Send us a message and we'll respond as soon as possible.",
            }

            section { class: "section section--tight",
                Container {
                    div { class: "card-grid card-grid--3",
                        for (index, channel) in CHANNELS.iter().enumerate() {
                            div { key: "{channel.title}", class: "card reveal", style: reveal_delay(index),
                                div { class: "card__icon",
                                    Icon { name: channel.icon, size: 32 }
                                }
                                h3 { class: "card__title", "{channel.title}" }
                                if let Some(link) = channel.link {
                                    a { class: "card__body", href: link, "{channel.value}" }
                                } else {
                                    p { class: "card__body", "{channel.value}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "section section--muted", id: "message",
                Container { size: ContainerSize::Narrow,
                    SectionHeading {
                        title: "Send us a message",
                        lead: "Fill out the form below and we'll get back to you within 24 hours",
                    }
                    ContactForm {}
                }
            }

            section { class: "section section--tight",
                Container {
                    div { class: "cta-banner reveal",
                        Icon { name: IconName::MessageCircle, size: 40 }
                        h3 { "Quick Response Time" }
                        p {
                            "We typically respond to all inquiries within 24 hours during business days. For urgent matters, please call us directly."
                        }
                    }
                }
            }

            section { class: "section", id: "office",
                Container {
                    SectionHeading {
                        title: "Visit Our Office",
                        lead: "We're based in the heart of Abu Dhabi",
                    }
                    div { class: "card reveal",
                        div { class: "card__icon",
                            Icon { name: IconName::MapPin, size: 32 }
                        }
                        h3 { class: "card__title", "Abu Dhabi Office" }
                        p { class: "card__body", "Exact location to be announced" }
                        p { class: "card__meta",
                            Icon { name: IconName::Clock, size: 16 }
                            " Mon - Fri: 9AM - 6PM"
                        }
                    }
                }
            }
        }
    }
}

/// Controlled contact form. Submitting logs the values and stays on the page.
#[component]
fn ContactForm() -> Element {
    let mut form = use_signal(ContactSubmission::default);
    let values = form.read().clone();

    rsx! {
        form {
            id: "contact-form",
            class: "form card",
            onsubmit: move |event: FormEvent| {
                event.prevent_default();
                form.read().submit();
            },
            div { class: "form__row",
                div {
                    label { class: "form__label", r#for: "name", "Name" }
                    input {
                        class: "form__control",
                        r#type: "text",
                        id: "name",
                        name: "name",
                        required: true,
                        placeholder: "Your name",
                        value: "{values.name}",
                        oninput: move |event| form.write().set(ContactField::Name, event.value()),
                    }
                }
                div {
                    label { class: "form__label", r#for: "email", "Email" }
                    input {
                        class: "form__control",
                        r#type: "email",
                        id: "email",
                        name: "email",
                        required: true,
                        placeholder: "your.email@example.com",
                        value: "{values.email}",
                        oninput: move |event| form.write().set(ContactField::Email, event.value()),
                    }
                }
            }
            div {
                label { class: "form__label", r#for: "subject", "Subject" }
                select {
                    class: "form__control",
                    id: "subject",
                    name: "subject",
                    value: values.subject.as_str(),
                    onchange: move |event| form.write().set(ContactField::Subject, event.value()),
                    for subject in Subject::ALL.iter() {
                        option {
                            key: "{subject.as_str()}",
                            value: subject.as_str(),
                            selected: *subject == values.subject,
                            "{subject.label()}"
                        }
                    }
                }
            }
            div {
                label { class: "form__label", r#for: "message", "Message" }
                textarea {
                    class: "form__control",
                    id: "message",
                    name: "message",
                    required: true,
                    rows: "6",
                    placeholder: "Tell us more about your inquiry...",
                    value: "{values.message}",
                    oninput: move |event| form.write().set(ContactField::Message, event.value()),
                }
            }
            Button { submit: true, size: ButtonSize::Lg,
                Icon { name: IconName::Send, size: 20 }
                " Send Message"
            }
        }
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[test]
    fn email_and_phone_are_links_office_is_text() {
        let html = dioxus::ssr::render_element(rsx! { Contact {} });
        assert!(html.contains("href=\"mailto:hello@cuts.ae\""), "{html}");
        assert!(html.contains("href=\"tel:+971XXXXXXXX\""), "{html}");
        assert!(!html.contains("href=\"Abu Dhabi, UAE\""), "{html}");
    }

    #[test]
    fn form_lists_every_subject_and_marks_required_fields() {
        let html = dioxus::ssr::render_element(rsx! { ContactForm {} });
        for subject in Subject::ALL {
            assert!(html.contains(subject.label()), "missing {}", subject.label());
        }
        assert_eq!(html.matches("required").count(), 3, "{html}");
        assert!(html.contains("type=\"submit\""), "{html}");
        assert!(html.contains("id=\"contact-form\""), "{html}");
    }
}

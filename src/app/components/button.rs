use dioxus::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[non_exhaustive]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Ghost,
    Orange,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Orange => "orange",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonSize::Default => "default",
            ButtonSize::Sm => "sm",
            ButtonSize::Lg => "lg",
            ButtonSize::Icon => "icon",
        }
    }
}

/// Pill button. Renders a link when `href` is set, a `<button>` otherwise.
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] href: Option<&'static str>,
    /// Submit the enclosing form instead of acting as a plain button
    #[props(default = false)]
    submit: bool,
    #[props(default, into)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let class = format!("button {class}");

    if let Some(href) = href {
        return rsx! {
            a {
                href: "{href}",
                class: "{class}",
                "data-style": variant.class(),
                "data-size": size.class(),
                onclick: move |event| {
                    if let Some(f) = &onclick {
                        f.call(event);
                    }
                },
                {children}
            }
        };
    }

    rsx! {
        button {
            r#type: if submit { "submit" } else { "button" },
            class: "{class}",
            "data-style": variant.class(),
            "data-size": size.class(),
            onclick: move |event| {
                if let Some(f) = &onclick {
                    f.call(event);
                }
            },
            {children}
        }
    }
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[test]
    fn link_button_renders_anchor() {
        let html = dioxus::ssr::render_element(rsx! {
            Button { href: "/drivers", size: ButtonSize::Lg, "Apply Now" }
        });
        assert!(html.starts_with("<a"), "{html}");
        assert!(html.contains("href=\"/drivers\""), "{html}");
        assert!(html.contains("data-size=\"lg\""), "{html}");
        assert!(html.contains("data-style=\"primary\""), "{html}");
    }

    #[test]
    fn submit_button_sets_type() {
        let html = dioxus::ssr::render_element(rsx! {
            Button { submit: true, variant: ButtonVariant::Secondary, "Send" }
        });
        assert!(html.starts_with("<button"), "{html}");
        assert!(html.contains("type=\"submit\""), "{html}");
        assert!(html.contains("data-style=\"secondary\""), "{html}");
    }
}

use dioxus::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum ContainerSize {
    #[default]
    Default,
    Narrow,
    Wide,
}

impl ContainerSize {
    pub fn class(&self) -> &'static str {
        match self {
            ContainerSize::Default => "container--default",
            ContainerSize::Narrow => "container--narrow",
            ContainerSize::Wide => "container--wide",
        }
    }
}

/// Centred, padded, max-width wrapper.
#[component]
pub fn Container(
    #[props(default)] size: ContainerSize,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "container {size.class()} {class}",
            {children}
        }
    }
}

//! Small generic widgets styled by the app stylesheet in `lib.rs`.

#![allow(non_snake_case)]

use dioxus::prelude::*;

/// A dark card grouping one section of the dashboard.
#[component]
pub fn Panel(children: Element) -> Element {
    rsx! { section { class: "panel", {children} } }
}

/// The small letter-spaced caption above each section.
#[component]
pub fn SectionLabel(text: String) -> Element {
    rsx! { div { class: "section-label", "{text}" } }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default = false)]
    disabled: bool,
}

/// The primary action button. Disabled while a scan is in flight.
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            class: "scan-button",
            disabled: props.disabled,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

use dioxus::prelude::*;

/// One labeled market figure in the result grid.
#[component]
pub fn StatTile(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "stat-tile",
            div { class: "stat-label", "{label}" }
            div { class: "stat-value", "{value}" }
        }
    }
}

use crate::theme::risk_style;
use api::risk::RiskLevel;
use dioxus::prelude::*;

/// The score-and-verdict badge in the result panel header.
#[component]
pub fn RiskBadge(score: u8, level: RiskLevel) -> Element {
    let style = risk_style(level);

    rsx! {
        div {
            class: "risk-badge",
            style: "background: {style.bg}; border: 2px solid {style.color};",
            div { class: "risk-score", style: "color: {style.color};", "{score}" }
            div { class: "risk-label", style: "color: {style.color};", "{style.label}" }
        }
    }
}

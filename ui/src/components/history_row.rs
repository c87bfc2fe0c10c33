use crate::format::abbreviate_address;
use crate::theme::risk_style;
use api::types::HistoryEntry;
use dioxus::prelude::*;

/// One past scan. Clicking it hands the full contract address back to
/// the parent; it does not start a new analysis and leaves the chain
/// selector alone.
#[component]
pub fn HistoryRow(entry: HistoryEntry, on_select: EventHandler<String>) -> Element {
    let style = risk_style(entry.risk_level);
    let symbol = entry.symbol.clone().unwrap_or_else(|| "???".to_string());
    let short = abbreviate_address(&entry.contract_address);
    let address = entry.contract_address.clone();

    rsx! {
        div {
            class: "history-row",
            onclick: move |_| on_select.call(address.clone()),
            div {
                span { class: "history-symbol", "{symbol}" }
                span { class: "history-address", "{short}" }
            }
            div {
                class: "history-verdict",
                style: "color: {style.color};",
                "{entry.risk_score}/100 — {style.label}"
            }
        }
    }
}

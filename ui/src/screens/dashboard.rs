//=============================================================================
// File: src/screens/dashboard.rs
//=============================================================================
use crate::app_state::AppState;
use crate::components::flag_row::FlagRow;
use crate::components::history_row::HistoryRow;
use crate::components::risk_badge::RiskBadge;
use crate::components::stat_tile::StatTile;
use crate::components::widgets::{Button, Panel, SectionLabel};
use crate::format;
use crate::scan;
use crate::scan::ScanPhase;
use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

use api::chain::Chain;
use api::chain::ALL_CHAINS;
use api::types::AnalysisRequest;
use api::types::AnalysisResult;

/// How many past scans we ask for. The server may return fewer; the
/// list renders whatever comes back.
const HISTORY_LIMIT: usize = 10;

#[component]
pub fn DashboardScreen() -> Element {
    let app_state = use_context::<AppState>();

    let mut address = use_signal(String::new);
    let mut chain = use_signal(Chain::default);
    let mut phase = use_signal(ScanPhase::default);

    // Best-effort history: a failed fetch is logged and rendered as an
    // empty list, nothing more.
    let history_state = app_state.clone();
    let mut history = use_resource(move || {
        let state = history_state.clone();
        async move {
            match state.scanner.recent_history(HISTORY_LIMIT).await {
                Ok(entries) => entries,
                Err(err) => {
                    dioxus_logger::tracing::warn!("history fetch failed: {err}");
                    Vec::new()
                }
            }
        }
    });

    let scan_state = app_state.clone();
    let run_scan = move || {
        let Some(contract_address) = scan::submitted_address(&address.read()) else {
            return;
        };
        // the button is disabled while scanning, but Enter is not
        if phase.peek().is_scanning() {
            return;
        }
        let request = AnalysisRequest {
            contract_address,
            chain: chain(),
        };
        phase.set(ScanPhase::Scanning);

        let state = scan_state.clone();
        spawn(async move {
            let outcome = state.scanner.analyze(&request).await;
            let succeeded = outcome.is_ok();
            phase.set(ScanPhase::settled(outcome));
            // refresh strictly after settlement, and only on success
            if succeeded {
                history.restart();
            }
        });
    };
    let mut scan_on_click = run_scan.clone();
    let mut scan_on_enter = run_scan;

    rsx! {
        Panel {
            SectionLabel { text: "ANALIZZA TOKEN" }
            div {
                class: "scan-form",
                input {
                    class: "scan-input",
                    placeholder: "0x... indirizzo contratto",
                    value: "{address}",
                    oninput: move |evt| address.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            scan_on_enter();
                        }
                    },
                }
                select {
                    class: "chain-select",
                    onchange: move |evt| {
                        if let Ok(selected) = evt.value().parse::<Chain>() {
                            chain.set(selected);
                        }
                    },
                    for option in ALL_CHAINS {
                        option {
                            value: "{option}",
                            selected: chain() == option,
                            "{option.label()}"
                        }
                    }
                }
                Button {
                    disabled: phase.read().is_scanning(),
                    on_click: move |_| scan_on_click(),
                    if phase.read().is_scanning() { "Scansione..." } else { "SCANSIONA" }
                }
            }
            if let ScanPhase::Failed(message) = &*phase.read() {
                div { class: "scan-error", "⚠ {message}" }
            }
        }

        if let ScanPhase::Done(result) = &*phase.read() {
            ResultPanel { result: result.clone() }
        }

        match &*history.read() {
            Some(entries) if !entries.is_empty() => rsx! {
                Panel {
                    SectionLabel { text: "SCANSIONI RECENTI" }
                    for entry in entries.iter().cloned() {
                        HistoryRow {
                            entry,
                            on_select: move |selected: String| address.set(selected),
                        }
                    }
                }
            },
            _ => rsx! {},
        }
    }
}

#[component]
fn ResultPanel(result: AnalysisResult) -> Element {
    let style = crate::theme::risk_style(result.risk_level);
    let dex = result
        .details
        .market_data
        .dex_id
        .clone()
        .unwrap_or_else(|| "N/A".to_string());

    rsx! {
        section {
            class: "panel",
            style: "border: 1px solid {style.color}33;",
            div {
                class: "result-head",
                div {
                    div {
                        class: "result-name",
                        "{result.contract_name} "
                        span { class: "result-symbol", "${result.symbol}" }
                    }
                    div { class: "result-address", "{result.contract_address}" }
                }
                RiskBadge { score: result.risk_score, level: result.risk_level }
            }

            div {
                class: "stat-grid",
                StatTile { label: "Prezzo", value: format::format_price(result.price_usd.as_deref()) }
                StatTile { label: "Liquidità", value: format::format_compact_usd(result.liquidity_usd) }
                StatTile { label: "Volume 24h", value: format::format_compact_usd(result.volume_24h) }
                StatTile { label: "DEX", value: dex }
            }

            if result.flags.is_empty() {
                div { class: "all-clear", "✅ Nessun flag critico — usa comunque il buon senso" }
            } else {
                div {
                    SectionLabel { text: "FLAGS RILEVATI" }
                    for flag in result.flags.iter().cloned() {
                        FlagRow { flag }
                    }
                }
            }
        }
    }
}

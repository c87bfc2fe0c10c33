// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod components;
mod format;
mod scan;
mod screens;
mod theme;

pub use api::ScannerConfig;

use app_state::AppState;
use screens::dashboard::DashboardScreen;

#[allow(non_snake_case)]
#[component]
pub fn App(config: ScannerConfig) -> Element {
    use_context_provider(|| AppState::new(config.clone()));

    let app_css = r#"
    * { box-sizing: border-box; }

    html, body {
        margin: 0;
        padding: 0;
        min-height: 100vh;
        background: #0a0a0f;
        color: #e2e8f0;
        font-family: monospace;
    }

    /* --- TOP BAR --- */
    .topbar {
        border-bottom: 1px solid #1e293b;
        padding: 20px 32px;
        display: flex;
        align-items: center;
        gap: 12px;
    }
    .topbar-icon { font-size: 24px; }
    .topbar-brand { font-size: 20px; font-weight: 700; color: #a78bfa; }
    .topbar-sub { font-size: 12px; color: #64748b; margin-left: 8px; }

    /* --- PAGE FRAME --- */
    .page { max-width: 900px; margin: 0 auto; padding: 32px 20px; }

    .panel {
        background: #0f172a;
        border: 1px solid #1e293b;
        border-radius: 12px;
        padding: 24px;
        margin-bottom: 32px;
    }
    .section-label {
        font-size: 12px;
        color: #64748b;
        margin-bottom: 12px;
        letter-spacing: 1px;
    }

    /* --- SCAN FORM --- */
    .scan-form { display: flex; gap: 10px; flex-wrap: wrap; }
    .scan-input {
        flex: 1;
        min-width: 280px;
        background: #1e293b;
        border: 1px solid #334155;
        border-radius: 8px;
        padding: 12px 16px;
        color: #e2e8f0;
        font-size: 14px;
        outline: none;
        font-family: monospace;
    }
    .chain-select {
        background: #1e293b;
        border: 1px solid #334155;
        border-radius: 8px;
        padding: 12px 16px;
        color: #e2e8f0;
        font-size: 13px;
        cursor: pointer;
    }
    .scan-button {
        background: #6d28d9;
        color: white;
        border: none;
        border-radius: 8px;
        padding: 12px 24px;
        font-size: 14px;
        font-weight: 600;
        cursor: pointer;
        font-family: monospace;
    }
    .scan-button:disabled { background: #312e81; cursor: wait; }
    .scan-error { margin-top: 12px; color: #ef4444; font-size: 13px; }

    /* --- RESULT PANEL --- */
    .result-head {
        display: flex;
        align-items: center;
        justify-content: space-between;
        flex-wrap: wrap;
        gap: 16px;
        margin-bottom: 24px;
    }
    .result-name { font-size: 22px; font-weight: 700; }
    .result-symbol { color: #64748b; font-size: 16px; }
    .result-address {
        font-size: 12px;
        color: #475569;
        margin-top: 4px;
        word-break: break-all;
    }
    .risk-badge {
        border-radius: 12px;
        padding: 16px 24px;
        text-align: center;
        min-width: 120px;
    }
    .risk-score { font-size: 36px; font-weight: 700; line-height: 1; }
    .risk-label { font-size: 12px; margin-top: 4px; letter-spacing: 2px; }

    .stat-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
        gap: 12px;
        margin-bottom: 24px;
    }
    .stat-tile { background: #1e293b; border-radius: 8px; padding: 12px 16px; }
    .stat-label { font-size: 11px; color: #64748b; margin-bottom: 4px; }
    .stat-value { font-size: 15px; font-weight: 600; }

    .flag-row {
        border-radius: 8px;
        padding: 10px 14px;
        font-size: 13px;
        margin-bottom: 8px;
    }
    .all-clear {
        color: #22c55e;
        font-size: 14px;
        padding: 12px;
        background: #052e1622;
        border-radius: 8px;
        border: 1px solid #22c55e33;
    }

    /* --- HISTORY --- */
    .history-row {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 10px 14px;
        background: #1e293b;
        border-radius: 8px;
        cursor: pointer;
        margin-bottom: 8px;
        flex-wrap: wrap;
        gap: 8px;
    }
    .history-symbol { font-weight: 600; }
    .history-address { color: #475569; font-size: 12px; margin-left: 8px; }
    .history-verdict { font-size: 13px; font-weight: 600; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style {
            "{app_css}"
        }
        div {
            class: "topbar",
            span { class: "topbar-icon", "🔍" }
            span { class: "topbar-brand", "DegenScope" }
            span { class: "topbar-sub", "Token Intelligence Terminal" }
        }
        div {
            class: "page",
            DashboardScreen {}
        }
    }
}

use dioxus::prelude::*;
use ui::ScannerConfig;

fn main() {
    console_error_panic_hook::set_once();

    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The browser has no environment to read, so the scanner base URL is
    // baked in at build time. Empty means same-origin.
    let config = ScannerConfig {
        base_url: option_env!("DEGENSCOPE_API_URL").unwrap_or("").to_string(),
    };

    rsx! {
        ui::App { config }
    }
}

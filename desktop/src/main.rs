use dioxus::prelude::*;
use ui::ScannerConfig;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = ScannerConfig {
        base_url: std::env::var("DEGENSCOPE_API_URL").unwrap_or_default(),
    };

    rsx! {
        ui::App { config }
    }
}

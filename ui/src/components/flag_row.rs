use crate::theme::flag_color;
use api::risk::TokenFlag;
use dioxus::prelude::*;

/// A single warning emitted by the scanner. Rows appear in the exact
/// order the service returned them.
#[component]
pub fn FlagRow(flag: TokenFlag) -> Element {
    // the two-digit suffixes are alpha channels on the hex color
    let color = flag_color(flag.severity);

    rsx! {
        div {
            class: "flag-row",
            style: "color: {color}; border: 1px solid {color}44; background: {color}11;",
            "{flag.msg}"
        }
    }
}

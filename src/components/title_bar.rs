use dioxus::prelude::*;
use crate::constants::*;

#[component]
pub fn TitleBar(source_url: String) -> Element {
    let shown_url = if source_url.is_empty() { "None".to_string() } else { source_url };
    rsx! {
        div {
            style: "
                display: flex; align-items: center; justify-content: space-between; gap: 20px;
                height: 40px; padding: 0 16px;
                background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                user-select: none;
            ",
            span { style: "font-size: 13px; font-weight: 600; letter-spacing: 1px; color: {TEXT_SECONDARY};", "TIMESTAMPER" }
            div {
                style: "display: flex; align-items: center; gap: 8px; min-width: 0;",
                span {
                    style: "font-size: 10px; color: {TEXT_DIM}; text-transform: uppercase; letter-spacing: 0.6px;",
                    "Current Video URL"
                }
                span {
                    style: "font-size: 12px; color: {TEXT_PRIMARY}; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; user-select: text;",
                    "{shown_url}"
                }
            }
        }
    }
}

use dioxus::prelude::*;

/// Solid colored button used for the toolbar and list actions.
#[component]
pub fn ActionButton(
    label: &'static str,
    color: &'static str,
    #[props(default = false)] compact: bool,
    on_click: EventHandler<MouseEvent>,
) -> Element {
    let padding = if compact { "5px 10px" } else { "10px 20px" };
    rsx! {
        button {
            class: "action-btn",
            style: "padding: {padding}; background-color: {color}; color: white; border: none; border-radius: 4px; font-size: 12px; cursor: pointer; transition: opacity 0.12s ease;",
            onclick: move |e| on_click.call(e),
            "{label}"
        }
    }
}

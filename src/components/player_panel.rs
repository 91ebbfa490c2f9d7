use dioxus::prelude::*;
use crate::components::common::{ActionButton, TextField};
use crate::constants::*;
use crate::state::PlayerSize;

/// URL bar, embedded player, and the add/export/import toolbar.
#[component]
pub fn PlayerPanel(
    url_input: String,
    player_size: PlayerSize,
    is_resizing: bool,
    on_url_input: EventHandler<String>,
    on_load: EventHandler<()>,
    on_input_focus: EventHandler<bool>,
    on_resize_start: EventHandler<MouseEvent>,
    on_add: EventHandler<()>,
    on_export: EventHandler<()>,
    on_import: EventHandler<()>,
) -> Element {
    let width = player_size.width;
    let height = player_size.height;
    let handle_color = if is_resizing { BORDER_ACCENT } else { BORDER_STRONG };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 16px; flex: 1; min-width: 0; padding: 20px; overflow: auto;",

            // URL bar
            div {
                style: "display: flex; align-items: center; gap: 10px;",
                TextField {
                    value: url_input,
                    placeholder: "Enter YouTube URL",
                    on_input: move |value| on_url_input.call(value),
                    on_submit: move |_| on_load.call(()),
                    on_focus_change: move |focused| on_input_focus.call(focused),
                }
                ActionButton {
                    label: "Load Video",
                    color: ACCENT_LOAD,
                    on_click: move |_| on_load.call(()),
                }
            }

            // Player host; the iframe is created by the player script
            div {
                style: "position: relative; width: {width}px; height: {height}px; background-color: {BG_ELEVATED}; border: 1px solid {BORDER_DEFAULT}; flex-shrink: 0;",
                div {
                    id: "{PLAYER_MOUNT_ID}",
                    style: "width: 100%; height: 100%;",
                }
                div {
                    class: "resize-handle",
                    title: "Drag to resize",
                    style: "position: absolute; right: -6px; bottom: -6px; width: 12px; height: 12px; border-radius: 2px; background-color: {handle_color}; cursor: nwse-resize;",
                    onmousedown: move |e| {
                        e.prevent_default();
                        e.stop_propagation();
                        on_resize_start.call(e);
                    },
                }
            }

            // Toolbar
            div {
                style: "display: flex; align-items: center; gap: 10px;",
                ActionButton {
                    label: "Add Timestamp",
                    color: ACCENT_ADD,
                    on_click: move |_| on_add.call(()),
                }
                ActionButton {
                    label: "Download JSON",
                    color: ACCENT_EXPORT,
                    on_click: move |_| on_export.call(()),
                }
                button {
                    class: "collapse-btn",
                    style: "padding: 10px 16px; background: {BG_SURFACE}; border: 1px solid {BORDER_DEFAULT}; border-radius: 4px; color: {TEXT_SECONDARY}; font-size: 12px; cursor: pointer;",
                    onclick: move |_| on_import.call(()),
                    "Upload JSON"
                }
            }
        }
    }
}

use dioxus::prelude::*;
use crate::components::common::{ActionButton, LabelSelect, SecondsField};
use crate::constants::*;
use crate::state::{AnnotationField, TimestampAnnotation, EMOTIONS, GENDERS};

/// Scrollable list of annotations with per-item editors.
#[component]
pub fn AnnotationList(
    annotations: Vec<TimestampAnnotation>,
    active_id: Option<i64>,
    on_edit: EventHandler<(i64, AnnotationField, String)>,
    on_delete: EventHandler<i64>,
    on_play: EventHandler<i64>,
    on_input_focus: EventHandler<bool>,
) -> Element {
    rsx! {
        div {
            style: "
                display: flex; flex-direction: column;
                width: {LIST_PANEL_WIDTH}px; min-width: {LIST_PANEL_WIDTH}px;
                background-color: {BG_ELEVATED}; border-left: 1px solid {BORDER_DEFAULT};
            ",
            div {
                style: "padding: 12px 16px; font-size: 13px; font-weight: 600; color: {TEXT_SECONDARY}; border-bottom: 1px solid {BORDER_SUBTLE};",
                "Timestamps"
            }
            div {
                style: "flex: 1; overflow-y: auto; padding: 12px;",
                if annotations.is_empty() {
                    p { style: "font-size: 12px; color: {TEXT_MUTED};", "No timestamps added yet." }
                }
                for (index, annotation) in annotations.iter().enumerate() {
                    AnnotationItem {
                        key: "{annotation.id}",
                        number: index + 1,
                        is_active: active_id == Some(annotation.id),
                        annotation: annotation.clone(),
                        on_edit: on_edit,
                        on_delete: on_delete,
                        on_play: on_play,
                        on_input_focus: on_input_focus,
                    }
                }
            }
        }
    }
}

#[component]
fn AnnotationItem(
    number: usize,
    annotation: TimestampAnnotation,
    is_active: bool,
    on_edit: EventHandler<(i64, AnnotationField, String)>,
    on_delete: EventHandler<i64>,
    on_play: EventHandler<i64>,
    on_input_focus: EventHandler<bool>,
) -> Element {
    let id = annotation.id;
    let background = if is_active { BG_ACTIVE_ITEM } else { "transparent" };
    let border = if is_active { BORDER_ACCENT } else { BORDER_DEFAULT };

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column; gap: 8px;
                margin-bottom: 12px; padding: 10px;
                border: 1px solid {border}; border-radius: 5px;
                background-color: {background};
            ",
            div {
                style: "display: flex; align-items: center; gap: 10px;",
                strong { style: "font-size: 12px; color: {TEXT_PRIMARY};", "#{number}" }
                SecondsField {
                    label: "Start",
                    value: annotation.start,
                    on_commit: move |value| on_edit.call((id, AnnotationField::Start, value)),
                    on_focus_change: move |focused| on_input_focus.call(focused),
                }
                SecondsField {
                    label: "End",
                    value: annotation.end,
                    on_commit: move |value| on_edit.call((id, AnnotationField::End, value)),
                    on_focus_change: move |focused| on_input_focus.call(focused),
                }
            }
            div {
                style: "display: flex; align-items: center; gap: 10px;",
                LabelSelect {
                    label: "Emotion",
                    value: annotation.emotion.clone(),
                    options: EMOTIONS,
                    on_change: move |value| on_edit.call((id, AnnotationField::Emotion, value)),
                }
                LabelSelect {
                    label: "Gender",
                    value: annotation.gender.clone(),
                    options: GENDERS,
                    on_change: move |value| on_edit.call((id, AnnotationField::Gender, value)),
                }
                ActionButton {
                    label: "Delete",
                    color: ACCENT_DELETE,
                    compact: true,
                    on_click: move |_| on_delete.call(id),
                }
            }
            div {
                ActionButton {
                    label: "Play",
                    color: ACCENT_LOAD,
                    compact: true,
                    on_click: move |_| on_play.call(id),
                }
            }
        }
    }
}

use dioxus::prelude::*;
use crate::constants::*;
use crate::state::PlaybackStatus;
use crate::utils::format_timecode;

#[component]
pub fn StatusBar(
    status: PlaybackStatus,
    active_segment: Option<(f64, f64)>,
    video_id: String,
    annotation_count: usize,
    player_ready: bool,
) -> Element {
    let status_label = status.label();
    let segment = active_segment
        .map(|(start, end)| format!("{} → {}", format_timecode(start), format_timecode(end)))
        .unwrap_or_default();
    let player_label = if player_ready { "Player ready" } else { "Loading player…" };
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; height: 22px; padding: 0 14px; background-color: {BG_SURFACE}; border-top: 1px solid {BORDER_DEFAULT}; font-size: 11px; color: {TEXT_DIM};",
            div {
                style: "display: flex; gap: 12px;",
                span { "{status_label}" }
                span { "{segment}" }
            }
            div {
                style: "display: flex; gap: 16px; font-family: 'SF Mono', Consolas, monospace;",
                span { "{player_label}" }
                span { "{video_id}" }
                span { "{annotation_count} timestamps" }
            }
        }
    }
}

//! Root application component
//!
//! Owns the editor state, the player bridge and the segment polling task.
//! UI events are forwarded to [`TimestamperState`] operations.

use dioxus::core::Task;
use dioxus::prelude::*;
use std::rc::Rc;
use std::time::Duration;
use crate::components::{AnnotationList, PlayerPanel, StatusBar, TitleBar};
use crate::constants::*;
use crate::core::paths::app_config_root;
use crate::core::player::{send_command, IframePlayer, PlayerCommand, PlayerControl, PlayerEvent, PositionCache};
use crate::core::task_slot::TaskSlot;
use crate::error::AppError;
use crate::hotkeys::{handle_hotkey, HotkeyAction, HotkeyContext, HotkeyResult};
use crate::state::{AnnotationField, AppSettings, ResizeDrag, TickOutcome, TimestamperState};

/// Log the error and show it in a blocking alert.
fn report_error(err: &AppError) {
    tracing::warn!(%err, "operation failed");
    let _ = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Warning)
        .set_title(err.title())
        .set_description(err.to_string())
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

#[component]
pub fn App() -> Element {
    let mut settings = use_signal(|| AppSettings::load_or_default(&app_config_root()));
    let mut state = use_signal(|| TimestamperState::new(&settings.peek()));

    // Player bridge
    let position = use_hook(|| Rc::new(PositionCache::default()));
    let mut player_eval = use_signal(|| None::<document::Eval>);
    let player = use_signal(|| None::<IframePlayer>);
    let mut poll_slot = use_signal(TaskSlot::<Task>::default);

    let mut input_focused = use_signal(|| false);
    let mut resize_drag = use_signal(|| None::<ResizeDrag>);

    use_effect(move || {
        if player_eval.peek().is_some() {
            return;
        }
        let eval = document::eval(YOUTUBE_PLAYER_SCRIPT);
        let (video_id, size) = {
            let current = state.peek();
            (current.video_id().to_string(), current.player_size())
        };
        send_command(&eval, PlayerCommand::Mount {
            video_id,
            width: size.width,
            height: size.height,
        });
        player_eval.set(Some(eval));
    });

    use_future(move || {
        let mut player = player.clone();
        let player_eval = player_eval.clone();
        let position = position.clone();
        async move {
            let mut eval = loop {
                if let Some(eval) = player_eval.peek().clone() {
                    break eval;
                }
                tokio::time::sleep(Duration::from_millis(100)).await;
            };
            loop {
                let message = match eval.recv::<serde_json::Value>().await {
                    Ok(message) => message,
                    Err(err) => {
                        tracing::warn!(?err, "player channel closed");
                        return;
                    }
                };
                match PlayerEvent::from_message(message) {
                    Ok(PlayerEvent::Ready) => {
                        tracing::info!("player ready");
                        player.set(Some(IframePlayer::new(eval.clone(), position.clone())));
                    }
                    Ok(PlayerEvent::Time { seconds, seq }) => {
                        position.observe(seconds, seq);
                    }
                    Ok(PlayerEvent::Error { code }) => {
                        tracing::warn!(code, "player reported an error");
                    }
                    Err(err) => {
                        tracing::warn!(%err, "ignoring unrecognized player message");
                    }
                }
            }
        }
    });

    use_drop(move || {
        if let Ok(mut slot) = poll_slot.try_write() {
            slot.cancel();
        }
    });

    // =========================================================================
    // Operations
    // =========================================================================

    let send_to_player = move |command: PlayerCommand| {
        if let Some(eval) = player_eval.peek().as_ref() {
            send_command(eval, command);
        }
    };

    // Cancels the poll and pauses a segment that was still running.
    let mut halt_segment = move |was_playing: bool| {
        poll_slot.write().cancel();
        if was_playing {
            if let Some(active) = player.peek().as_ref() {
                active.pause();
            }
        }
    };

    let mut start_segment_poll = move || {
        let interval = settings.peek().poll_interval();
        if poll_slot.peek().is_active() {
            tracing::debug!("replacing running segment poll");
        }
        let task = spawn(async move {
            let mut poll_slot = poll_slot;
            let mut state = state;
            let mut ticker = tokio::time::interval(interval);
            // The first tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let Some(active) = player.peek().clone() else {
                    continue;
                };
                match state.write().tick(&active) {
                    TickOutcome::Continue => {}
                    TickOutcome::Finished | TickOutcome::Idle => break,
                }
            }
            poll_slot.write().release();
        });
        poll_slot.write().replace(task);
    };

    let mut load_video = move || {
        let was_playing = state.peek().playback().is_playing();
        let result = state.write().load_video();
        match result {
            Ok(()) => {
                halt_segment(was_playing);
                let video_id = state.peek().video_id().to_string();
                send_to_player(PlayerCommand::Cue { video_id });
            }
            Err(err) => report_error(&err),
        }
    };

    let mut add_timestamp = move || {
        let now = chrono::Utc::now().timestamp_millis();
        let active = player.peek().clone();
        state.write().add_annotation(active.as_ref(), now);
    };

    let mut play_segment = move |id: i64| {
        let active = player.peek().clone();
        let started = state.write().play_annotation(id, active.as_ref());
        if started {
            start_segment_poll();
        }
    };

    let export_annotations = move || {
        let file = state.peek().export_file();
        let file_name = settings.peek().export_file_name.clone();
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(file_name)
            .add_filter("JSON", &["json"])
            .save_file()
        else {
            return;
        };
        match file.save_to(&path) {
            Ok(()) => tracing::info!(
                path = %path.display(),
                count = file.timestamps.len(),
                "annotations exported"
            ),
            Err(err) => report_error(&err),
        }
    };

    let mut import_annotations = move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .pick_file()
        else {
            return;
        };
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                report_error(&AppError::from(err));
                return;
            }
        };

        let was_playing = state.peek().playback().is_playing();
        let previous_id = state.peek().video_id().to_string();
        let result = state.write().import_json(&text);
        // A malformed file leaves everything untouched.
        let applied = !matches!(result, Err(AppError::MalformedImport(_)));
        if applied {
            halt_segment(was_playing);
            let video_id = state.peek().video_id().to_string();
            if video_id != previous_id {
                send_to_player(PlayerCommand::Cue { video_id });
            }
        }
        if let Err(err) = result {
            report_error(&err);
        }
    };

    let mut persist_player_size = move || {
        let size = state.peek().player_size();
        settings.with_mut(|s| {
            s.player_width = size.width;
            s.player_height = size.height;
        });
        if let Err(err) = settings.peek().save(&app_config_root()) {
            tracing::warn!(%err, "failed to save settings");
        }
    };

    // =========================================================================
    // Render
    // =========================================================================

    let snapshot = state.read();
    let annotations = snapshot.annotations().items().to_vec();
    let annotation_count = annotations.len();
    let active_id = snapshot.playback().active_id();
    let active_segment = snapshot.playback().active().map(|ts| (ts.start, ts.end));
    let status = snapshot.playback().status();
    let video_id = snapshot.video_id().to_string();
    let source_url = snapshot.source_url().to_string();
    let url_input = snapshot.url_input().to_string();
    let player_size = snapshot.player_size();
    drop(snapshot);

    let is_resizing = resize_drag().is_some();
    let user_select_style = if is_resizing { "none" } else { "auto" };
    let drag_cursor = if is_resizing { "nwse-resize" } else { "default" };

    rsx! {
        style {
            r#"
            *, *::before, *::after {{ box-sizing: border-box; }}
            html, body {{ margin: 0; padding: 0; overflow: hidden; background-color: {BG_BASE}; }}
            body {{ -webkit-font-smoothing: antialiased; }}
            ::-webkit-scrollbar {{ width: 6px; height: 6px; }}
            ::-webkit-scrollbar-track {{ background: transparent; }}
            ::-webkit-scrollbar-thumb {{ background: {BORDER_DEFAULT}; border-radius: 3px; }}
            ::-webkit-scrollbar-thumb:hover {{ background: {BORDER_STRONG}; }}
            .collapse-btn {{ opacity: 0.8; transition: opacity 0.15s ease, background-color 0.15s ease; }}
            .collapse-btn:hover {{ opacity: 1; background-color: {BG_HOVER} !important; }}
            .action-btn {{ transition: filter 0.15s ease; }}
            .action-btn:hover {{ filter: brightness(1.15); }}
            .resize-handle {{ transition: background-color 0.15s ease; }}
            .resize-handle:hover {{ background-color: {BORDER_ACCENT} !important; }}
            "#
        }

        div {
            class: "app-container",
            style: "
                display: flex; flex-direction: column;
                width: 100vw; height: 100vh;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
                overflow: hidden; position: fixed; top: 0; left: 0;
                user-select: {user_select_style};
                cursor: {drag_cursor};
            ",

            onmousemove: move |e| {
                let Some(drag) = resize_drag() else {
                    return;
                };
                e.prevent_default();
                let coords = e.client_coordinates();
                let size = drag.size_at(coords.x, coords.y);
                if size != state.peek().player_size() {
                    state.write().set_player_size(size);
                    send_to_player(PlayerCommand::Resize { width: size.width, height: size.height });
                }
            },
            onmouseup: move |_| {
                if resize_drag.peek().is_some() {
                    resize_drag.set(None);
                    persist_player_size();
                }
            },
            tabindex: "0",
            onkeydown: move |e: KeyboardEvent| {
                let hotkey_context = HotkeyContext {
                    input_focused: input_focused(),
                };
                let modifiers = e.modifiers();

                match handle_hotkey(&e.key(), modifiers.ctrl(), modifiers.meta(), &hotkey_context) {
                    HotkeyResult::Action(action) => {
                        e.prevent_default();
                        match action {
                            HotkeyAction::AddTimestamp => add_timestamp(),
                            HotkeyAction::ExportAnnotations => export_annotations(),
                            HotkeyAction::ImportAnnotations => import_annotations(),
                        }
                    }
                    HotkeyResult::NoMatch | HotkeyResult::Suppressed => {}
                }
            },

            TitleBar { source_url: source_url }

            div {
                style: "display: flex; flex: 1; min-height: 0;",
                PlayerPanel {
                    url_input: url_input,
                    player_size: player_size,
                    is_resizing: is_resizing,
                    on_url_input: move |value: String| state.write().set_url_input(value),
                    on_load: move |_| load_video(),
                    on_input_focus: move |focused| input_focused.set(focused),
                    on_resize_start: move |e: MouseEvent| {
                        let coords = e.client_coordinates();
                        resize_drag.set(Some(ResizeDrag {
                            origin_x: coords.x,
                            origin_y: coords.y,
                            start: state.peek().player_size(),
                        }));
                    },
                    on_add: move |_| add_timestamp(),
                    on_export: move |_| export_annotations(),
                    on_import: move |_| import_annotations(),
                }
                AnnotationList {
                    annotations: annotations,
                    active_id: active_id,
                    on_edit: move |(id, field, value): (i64, AnnotationField, String)| {
                        state.write().edit_annotation(id, field, &value);
                    },
                    on_delete: move |id| {
                        state.write().delete_annotation(id);
                    },
                    on_play: move |id| play_segment(id),
                    on_input_focus: move |focused| input_focused.set(focused),
                }
            }

            StatusBar {
                status: status,
                active_segment: active_segment,
                video_id: video_id,
                annotation_count: annotation_count,
                player_ready: player().is_some(),
            }
        }
    }
}

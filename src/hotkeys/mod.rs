//! Hotkey system
//!
//! Maps key events to semantic actions so the App component does not match
//! on raw keys.
//!
//! # Adding New Hotkeys
//!
//! 1. Add a variant to `HotkeyAction`
//! 2. Add the key binding in `handle_hotkey()`
//! 3. Handle the action in the App component's hotkey handler

use dioxus::prelude::Key;

/// All actions that can be triggered by hotkeys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Add an annotation at the current playback position.
    AddTimestamp,
    /// Export annotations to a JSON file.
    ExportAnnotations,
    /// Import annotations from a JSON file.
    ImportAnnotations,
}

/// Context information that affects which hotkeys are active.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether an input field has focus (suppresses all hotkeys)
    pub input_focused: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
    /// Hotkey would match but is suppressed (e.g., input field focused)
    Suppressed,
}

/// Maps a key event to an action, considering the current context.
pub fn handle_hotkey(key: &Key, ctrl: bool, meta: bool, context: &HotkeyContext) -> HotkeyResult {
    if context.input_focused {
        return HotkeyResult::Suppressed;
    }

    let command = ctrl || meta;
    match key {
        Key::Character(c) if command && c.eq_ignore_ascii_case("s") => {
            HotkeyResult::Action(HotkeyAction::ExportAnnotations)
        }
        Key::Character(c) if command && c.eq_ignore_ascii_case("o") => {
            HotkeyResult::Action(HotkeyAction::ImportAnnotations)
        }
        Key::Character(c) if !command && c.eq_ignore_ascii_case("m") => {
            HotkeyResult::Action(HotkeyAction::AddTimestamp)
        }
        _ => HotkeyResult::NoMatch,
    }
}

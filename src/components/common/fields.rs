use dioxus::prelude::*;
use crate::constants::*;
use crate::utils::{parse_seconds_input, should_commit};

/// Seconds input that commits its raw text on blur or Enter.
///
/// Only edited text is committed. Coercion happens in the store; after a
/// commit the field shows the coerced value.
#[component]
pub fn SecondsField(
    label: &'static str,
    value: f64,
    on_commit: EventHandler<String>,
    on_focus_change: EventHandler<bool>,
) -> Element {
    let mut text = use_signal(|| format!("{:.2}", value));
    // What the field last displayed without user edits
    let mut shown = use_signal(|| format!("{:.2}", value));
    let mut last_prop_value = use_signal(|| value);

    use_effect(use_reactive!(|value| {
        if (value - *last_prop_value.peek()).abs() > 0.0001 {
            let formatted = format!("{:.2}", value);
            text.set(formatted.clone());
            shown.set(formatted);
            last_prop_value.set(value);
        }
    }));

    let make_commit = || {
        let mut text = text.clone();
        let mut shown = shown.clone();
        let on_commit = on_commit.clone();
        move || {
            let raw = text();
            if !should_commit(&shown.peek(), &raw) {
                return;
            }
            on_commit.call(raw.clone());
            let formatted = format!("{:.2}", parse_seconds_input(&raw));
            text.set(formatted.clone());
            shown.set(formatted);
        }
    };

    let mut commit_on_blur = make_commit();
    let mut commit_on_key = make_commit();

    rsx! {
        label {
            style: "display: flex; align-items: center; gap: 6px; font-size: 11px; color: {TEXT_MUTED};",
            "{label}"
            input {
                r#type: "number",
                step: "0.01",
                min: "0",
                value: "{text()}",
                style: "
                    width: 80px; box-sizing: border-box;
                    padding: 4px 6px; font-size: 12px;
                    background-color: {BG_SURFACE}; color: {TEXT_PRIMARY};
                    border: 1px solid {BORDER_DEFAULT}; border-radius: 4px;
                    outline: none;
                    user-select: text;
                ",
                oninput: move |e| text.set(e.value()),
                onfocus: move |_| on_focus_change.call(true),
                onblur: move |_| {
                    on_focus_change.call(false);
                    commit_on_blur();
                },
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        commit_on_key();
                    }
                },
            }
        }
    }
}

/// Dropdown over a fixed label set. A stored value outside the set is
/// shown as an extra option so it is never silently replaced.
#[component]
pub fn LabelSelect(
    label: &'static str,
    value: String,
    options: &'static [&'static str],
    on_change: EventHandler<String>,
) -> Element {
    let is_listed = options.contains(&value.as_str());

    rsx! {
        label {
            style: "display: flex; align-items: center; gap: 6px; font-size: 11px; color: {TEXT_MUTED};",
            "{label}"
            select {
                value: "{value}",
                style: "
                    padding: 4px 6px; font-size: 12px;
                    background-color: {BG_SURFACE}; color: {TEXT_PRIMARY};
                    border: 1px solid {BORDER_DEFAULT}; border-radius: 4px;
                    outline: none;
                ",
                onchange: move |e| on_change.call(e.value()),
                if !is_listed {
                    option { value: "{value}", selected: true, "{value}" }
                }
                for option_label in options.iter() {
                    option {
                        key: "{option_label}",
                        value: "{option_label}",
                        selected: *option_label == value.as_str(),
                        "{option_label}"
                    }
                }
            }
        }
    }
}

/// Single-line text input used for the URL bar.
#[component]
pub fn TextField(
    value: String,
    placeholder: &'static str,
    on_input: EventHandler<String>,
    on_submit: EventHandler<()>,
    on_focus_change: EventHandler<bool>,
) -> Element {
    rsx! {
        input {
            r#type: "text",
            placeholder: "{placeholder}",
            value: "{value}",
            style: "
                flex: 1; min-width: 0; box-sizing: border-box;
                padding: 8px 10px; font-size: 13px;
                background-color: {BG_SURFACE}; color: {TEXT_PRIMARY};
                border: 1px solid {BORDER_DEFAULT}; border-radius: 6px;
                outline: none;
                user-select: text;
            ",
            oninput: move |e| on_input.call(e.value()),
            onfocus: move |_| on_focus_change.call(true),
            onblur: move |_| on_focus_change.call(false),
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Enter {
                    on_submit.call(());
                }
            },
        }
    }
}

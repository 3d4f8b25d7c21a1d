//! Code panel: editor with debounced propagation, copy, export and sync

use crate::components::icons::{CheckIcon, CopyIcon, DownloadIcon, RefreshIcon};
use crate::components::Button;
use crate::hooks::use_debounced;
use md3_common::editor::CodeEditorState;
use md3_common::preview::{ButtonVariant, Color, Size};
use dioxus::prelude::*;
use std::time::Duration;
use tracing::warn;

#[component]
pub fn CodeView(
    /// Code held by the playground state
    code: String,
    #[props(default = "rust".to_string())] language: String,
    /// Quiet period before edits reach `on_change`
    debounce_ms: u64,
    /// Suggested file name for export
    file_name: String,
    /// Current props as JSON, offered as a second export
    props_json: String,
    on_change: EventHandler<String>,
    /// Regenerate the code from the current props
    on_sync: EventHandler<()>,
) -> Element {
    let mut copied = use_signal(|| false);

    let copy_code = {
        let code = code.clone();
        move |_: MouseEvent| {
            let code = code.clone();
            spawn(async move {
                match copy_to_clipboard(&code).await {
                    Ok(()) => copied.set(true),
                    Err(e) => warn!("Copy to clipboard failed: {e}"),
                }
            });
        }
    };
    let export_code = {
        let code = code.clone();
        let file_name = file_name.clone();
        move |_: MouseEvent| spawn_download(file_name.clone(), code.clone())
    };
    let export_props = {
        let file_name = props_file_name(&file_name);
        move |_: MouseEvent| spawn_download(file_name.clone(), props_json.clone())
    };

    rsx! {
        div { class: "flex flex-col gap-2 h-full",
            div { class: "flex items-center justify-end gap-2",
                Button {
                    variant: ButtonVariant::Text,
                    size: Size::Small,
                    color: Color::Default,
                    title: "Regenerate the snippet from the current props",
                    icon: rsx! { RefreshIcon {} },
                    onclick: move |_| {
                        copied.set(false);
                        on_sync.call(());
                    },
                    "Sync from props"
                }
                Button {
                    variant: ButtonVariant::Text,
                    size: Size::Small,
                    color: Color::Default,
                    title: "Copy code",
                    icon: { if copied() { rsx! { CheckIcon {} } } else { rsx! { CopyIcon {} } } },
                    onclick: copy_code,
                    if copied() { "Copied" } else { "Copy" }
                }
                Button {
                    variant: ButtonVariant::Text,
                    size: Size::Small,
                    color: Color::Default,
                    title: "Export code",
                    icon: rsx! { DownloadIcon {} },
                    onclick: export_code,
                    "Export"
                }
                Button {
                    variant: ButtonVariant::Text,
                    size: Size::Small,
                    color: Color::Default,
                    title: "Export the current props as JSON",
                    icon: rsx! { DownloadIcon {} },
                    onclick: export_props,
                    "Props JSON"
                }
            }
            CodeEditor {
                code,
                language,
                debounce_ms,
                on_change: move |code: String| {
                    copied.set(false);
                    on_change.call(code);
                },
            }
        }
    }
}

/// Textarea editor with bracket diagnostics.
///
/// Keystrokes update a local draft immediately; the draft reaches
/// `on_change` once typing pauses for `debounce_ms`. A pending edit is
/// dropped if the editor unmounts first.
#[component]
pub fn CodeEditor(
    code: String,
    language: String,
    debounce_ms: u64,
    on_change: EventHandler<String>,
) -> Element {
    let initial = code.clone();
    let mut draft = use_signal(move || initial);
    let debounced = use_debounced(Duration::from_millis(debounce_ms), move |text: String| {
        on_change.call(text)
    });

    // Replace the draft when the code changes from outside (selection, sync)
    use_effect(use_reactive!(|code| draft.set(code)));

    let editor = use_memo(move || CodeEditorState::new(draft(), language.clone()));
    let pending = debounced.is_pending();

    rsx! {
        div { class: "flex flex-col flex-1 min-h-[320px] rounded-lg border border-gray-800 bg-gray-950 overflow-hidden",
            div { class: "flex items-center justify-between px-3 py-1.5 border-b border-gray-800 text-xs text-gray-500",
                span { class: "font-mono uppercase", "{editor.read().language()}" }
                span {
                    if pending {
                        "Editing..."
                    } else {
                        "{editor.read().line_count()} lines"
                    }
                }
            }
            textarea {
                class: "flex-1 w-full resize-none bg-transparent p-3 font-mono text-sm text-gray-200 focus:outline-none",
                spellcheck: "false",
                aria_label: "Component code",
                value: "{draft}",
                oninput: {
                    let debounced = debounced.clone();
                    move |e: FormEvent| {
                        let text = e.value();
                        draft.set(text.clone());
                        debounced.schedule(text);
                    }
                },
                onblur: move |_| debounced.flush(),
            }
            if !editor.read().errors().is_empty() {
                ul { class: "border-t border-gray-800 px-3 py-2 text-xs text-amber-300 space-y-0.5",
                    for error in editor.read().errors().iter() {
                        li { key: "{error.line}-{error.message}",
                            span { class: "font-mono text-gray-500 mr-2", "{error.line}:" }
                            "{error.message}"
                        }
                    }
                }
            }
        }
    }
}

async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let literal = serde_json::to_string(text).map_err(|e| e.to_string())?;
    document::eval(&format!("await navigator.clipboard.writeText({literal}); return true;"))
        .await
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// `button.rs` -> `button.props.json`
fn props_file_name(code_file: &str) -> String {
    let stem = code_file.rsplit_once('.').map_or(code_file, |(stem, _)| stem);
    format!("{stem}.props.json")
}

fn spawn_download(file_name: String, text: String) {
    spawn(async move {
        if let Err(e) = download_text(&file_name, &text).await {
            warn!("Export of {file_name} failed: {e}");
        }
    });
}

async fn download_text(file_name: &str, text: &str) -> Result<(), String> {
    let text = serde_json::to_string(text).map_err(|e| e.to_string())?;
    let file_name = serde_json::to_string(file_name).map_err(|e| e.to_string())?;
    document::eval(&format!(
        r#"
        const blob = new Blob([{text}], {{ type: "text/plain" }});
        const url = URL.createObjectURL(blob);
        const link = document.createElement("a");
        link.href = url;
        link.download = {file_name};
        link.click();
        URL.revokeObjectURL(url);
        return true;
        "#
    ))
    .await
    .map(|_| ())
    .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_props_file_name() {
        assert_eq!(props_file_name("button.rs"), "button.props.json");
        assert_eq!(props_file_name("component"), "component.props.json");
    }
}

//! Amber warning banner with an optional action

use crate::components::icons::AlertTriangleIcon;
use crate::components::Button;
use md3_common::preview::{ButtonVariant, Color, Size};
use dioxus::prelude::*;

/// Non-fatal problem the user may want to act on, such as a settings file
/// that failed to load or a preview that can be retried.
#[component]
pub fn ErrorBanner(
    heading: String,
    detail: String,
    #[props(default)] button_label: Option<String>,
    #[props(default)] on_action: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div { class: "bg-amber-900/30 border border-amber-700/50 rounded-lg p-4",
            div { class: "flex items-start gap-3",
                AlertTriangleIcon { class: "w-5 h-5 text-amber-500 flex-shrink-0 mt-0.5" }
                div { class: "flex-1",
                    p { class: "text-sm font-medium text-amber-200 mb-1", "{heading}" }
                    p { class: "text-sm text-gray-400 select-text break-words", "{detail}" }
                    if let (Some(label), Some(on_action)) = (button_label, on_action) {
                        div { class: "mt-3 flex gap-2",
                            Button {
                                variant: ButtonVariant::Outlined,
                                color: Color::Warning,
                                size: Size::Small,
                                onclick: move |_| on_action.call(()),
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

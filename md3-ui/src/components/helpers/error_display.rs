//! Error display component

use crate::components::icons::AlertTriangleIcon;
use dioxus::prelude::*;

/// Inline error box, sized to sit where the failed content would have been
#[component]
pub fn ErrorDisplay(message: String, #[props(default)] detail: Option<String>) -> Element {
    rsx! {
        div {
            class: "flex items-start gap-3 bg-red-950/60 border border-red-800 text-red-100 px-4 py-3 rounded-lg",
            role: "alert",
            AlertTriangleIcon { class: "w-5 h-5 text-red-400 flex-shrink-0 mt-0.5" }
            div {
                p { class: "text-sm", "{message}" }
                if let Some(detail) = detail {
                    p { class: "text-xs text-red-300/80 mt-1 select-text break-words", "{detail}" }
                }
            }
        }
    }
}

//! Segmented control switching between the code, preview and props panels

use crate::components::icons::{CodeIcon, EyeIcon, SlidersIcon};
use md3_common::store::ViewMode;
use dioxus::prelude::*;

#[component]
pub fn ViewModeBar(mode: ViewMode, on_select: EventHandler<ViewMode>) -> Element {
    rsx! {
        div { class: "inline-flex gap-1 bg-gray-800/50 rounded-lg p-1", role: "tablist",
            for option in ViewMode::ALL {
                button {
                    key: "{option.label()}",
                    r#type: "button",
                    role: "tab",
                    aria_selected: if option == mode { "true" } else { "false" },
                    class: if option == mode { "inline-flex items-center gap-2 px-3 py-1.5 text-sm rounded-md bg-indigo-600 text-white" } else { "inline-flex items-center gap-2 px-3 py-1.5 text-sm rounded-md text-gray-400 hover:text-white hover:bg-gray-700/50" },
                    onclick: move |_| on_select.call(option),
                    match option {
                        ViewMode::Code => rsx! { CodeIcon {} },
                        ViewMode::Preview => rsx! { EyeIcon {} },
                        ViewMode::Props => rsx! { SlidersIcon {} },
                    }
                    "{option.label()}"
                }
            }
        }
    }
}

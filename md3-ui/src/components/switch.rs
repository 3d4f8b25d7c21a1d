//! On/off switch

use crate::palette;
use md3_common::preview::{Color, Size};
use dioxus::prelude::*;

/// Switch with a trailing label.
///
/// Without `onchange` the switch keeps its own state, seeded from `checked`.
#[component]
pub fn Switch(
    #[props(default)] checked: bool,
    #[props(default = Color::Primary)] color: Color,
    #[props(default = Size::Medium)] size: Size,
    #[props(default)] label: Option<String>,
    #[props(default)] disabled: bool,
    #[props(default)] onchange: Option<EventHandler<bool>>,
) -> Element {
    let mut local = use_signal(|| checked);
    // Follow the prop when a new value comes in from outside
    use_effect(use_reactive!(|checked| local.set(checked)));
    let is_on = if onchange.is_some() { checked } else { local() };

    let (track_size, thumb_size, travel) = match size {
        Size::Small => ("w-8 h-4", "w-3 h-3", "translate-x-4"),
        Size::Medium | Size::Large => ("w-11 h-6", "w-5 h-5", "translate-x-5"),
    };
    let track_color = if is_on {
        palette::track(color)
    } else {
        "bg-gray-600"
    };
    let thumb_offset = if is_on { travel } else { "translate-x-0" };

    rsx! {
        label {
            class: if disabled { "inline-flex items-center gap-3 opacity-50 cursor-not-allowed" } else { "inline-flex items-center gap-3 cursor-pointer" },
            button {
                r#type: "button",
                role: "switch",
                aria_checked: if is_on { "true" } else { "false" },
                disabled,
                class: "relative inline-flex items-center rounded-full p-0.5 transition-colors {track_size} {track_color}",
                onclick: move |_| {
                    let next = !is_on;
                    match onchange {
                        Some(ref handler) => handler.call(next),
                        None => local.set(next),
                    }
                },
                span { class: "inline-block rounded-full bg-white shadow transition-transform {thumb_size} {thumb_offset}" }
            }
            if let Some(label) = label {
                span { class: "text-sm text-gray-200", "{label}" }
            }
        }
    }
}

//! Compact chip for tags, filters and toggles

use crate::components::icons::XIcon;
use crate::palette;
use md3_common::preview::{ChipVariant, Color, Size};
use dioxus::prelude::*;

/// Chip with an optional click action and delete affordance.
///
/// A chip is clickable when `onclick` is set; the delete button shows when
/// `ondelete` is set.
#[component]
pub fn Chip(
    label: String,
    #[props(default = ChipVariant::Filled)] variant: ChipVariant,
    #[props(default = Size::Medium)] size: Size,
    #[props(default = Color::Primary)] color: Color,
    /// Highlighted as the active choice of a chip group
    #[props(default)]
    selected: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(default)] ondelete: Option<EventHandler<MouseEvent>>,
) -> Element {
    let size_class = match size {
        Size::Small => "h-6 px-2 text-xs",
        Size::Medium | Size::Large => "h-8 px-3 text-sm",
    };
    let variant_class = match (variant, selected) {
        (_, true) | (ChipVariant::Filled, false) => palette::filled(color),
        (ChipVariant::Outlined, false) => palette::outlined(color),
    };
    let cursor = if onclick.is_some() {
        "cursor-pointer"
    } else {
        "cursor-default"
    };

    rsx! {
        span {
            class: "inline-flex items-center gap-1 rounded-full select-none transition-colors {size_class} {variant_class} {cursor}",
            role: if onclick.is_some() { Some("button") } else { None },
            aria_pressed: if onclick.is_some() { Some(if selected { "true" } else { "false" }) } else { None },
            onclick: move |e| {
                if let Some(ref handler) = onclick {
                    handler.call(e);
                }
            },
            "{label}"
            if let Some(ondelete) = ondelete {
                button {
                    r#type: "button",
                    class: "rounded-full opacity-70 hover:opacity-100",
                    aria_label: "Delete {label}",
                    onclick: move |e: MouseEvent| {
                        e.stop_propagation();
                        ondelete.call(e);
                    },
                    XIcon { class: "w-3 h-3" }
                }
            }
        }
    }
}

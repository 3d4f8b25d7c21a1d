//! Labelled text field

use crate::palette;
use md3_common::preview::{Size, TextFieldVariant};
use dioxus::prelude::*;

/// Text field with floating label, helper text and error state.
///
/// Uncontrolled unless `oninput` is set.
#[component]
pub fn TextField(
    label: String,
    #[props(default)] value: Option<String>,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] helper_text: Option<String>,
    #[props(default = TextFieldVariant::Outlined)] variant: TextFieldVariant,
    #[props(default = Size::Medium)] size: Size,
    #[props(default)] required: bool,
    #[props(default)] error: bool,
    #[props(default)] disabled: bool,
    #[props(default)] monospace: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] oninput: Option<EventHandler<String>>,
    #[props(default)] onblur: Option<EventHandler<()>>,
) -> Element {
    let variant_class = match (variant, error) {
        (TextFieldVariant::Outlined, false) => "border border-gray-600 rounded-lg bg-transparent focus:border-indigo-400",
        (TextFieldVariant::Outlined, true) => "border border-red-500 rounded-lg bg-transparent",
        (TextFieldVariant::Filled, false) => "bg-gray-800 rounded-t-lg border-b-2 border-gray-500 focus:border-indigo-400",
        (TextFieldVariant::Filled, true) => "bg-gray-800 rounded-t-lg border-b-2 border-red-500",
        (TextFieldVariant::Standard, false) => "bg-transparent border-b border-gray-500 focus:border-indigo-400",
        (TextFieldVariant::Standard, true) => "bg-transparent border-b border-red-500",
    };
    let padding = palette::padding(size);
    let font = if monospace { "font-mono" } else { "" };
    let label_color = if error { "text-red-400" } else { "text-gray-400" };
    let helper_color = if error { "text-red-400" } else { "text-gray-500" };

    rsx! {
        label { class: "flex flex-col gap-1 w-full",
            span { class: "text-xs {label_color}",
                "{label}"
                if required {
                    span { class: "ml-0.5", "*" }
                }
            }
            input {
                r#type: "text",
                id: id.as_deref(),
                class: "w-full text-gray-200 placeholder-gray-500 focus:outline-none disabled:opacity-50 {variant_class} {padding} {font}",
                value: value.as_deref(),
                placeholder: placeholder.as_deref(),
                required,
                disabled,
                aria_invalid: if error { Some("true") } else { None },
                oninput: move |e| {
                    if let Some(ref handler) = oninput {
                        handler.call(e.value());
                    }
                },
                onblur: move |_| {
                    if let Some(ref handler) = onblur {
                        handler.call(());
                    }
                },
            }
            if let Some(helper) = helper_text {
                span { class: "text-xs {helper_color}", "{helper}" }
            }
        }
    }
}

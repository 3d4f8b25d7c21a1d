//! Native select styled to match the text fields

use md3_common::schema::SelectOption;
use dioxus::prelude::*;

#[component]
pub fn Select(
    value: String,
    options: Vec<SelectOption>,
    onchange: EventHandler<String>,
    #[props(default)] id: Option<String>,
    #[props(default)] disabled: bool,
    #[props(default)] error: bool,
) -> Element {
    let border = if error {
        "border-red-500"
    } else {
        "border-gray-600 focus:border-indigo-400"
    };

    rsx! {
        select {
            id: id.as_deref(),
            class: "w-full bg-gray-800/50 border rounded-lg px-3 py-2 text-sm text-gray-200 focus:outline-none disabled:opacity-50 {border}",
            disabled,
            onchange: move |e| onchange.call(e.value()),
            for option in options {
                option {
                    key: "{option.value}",
                    value: "{option.value}",
                    selected: option.value == value,
                    "{option.label}"
                }
            }
        }
    }
}

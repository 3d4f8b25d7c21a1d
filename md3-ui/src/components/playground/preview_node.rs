//! Maps resolved preview nodes onto the real components

use crate::components::icons::{InfoIcon, PlusIcon};
use crate::components::{Button, Chip, Switch, TextField, Typography};
use md3_common::preview::PreviewNode;
use dioxus::prelude::*;

/// Draw a resolved preview. Interaction inside the preview only logs.
#[component]
pub fn PreviewNodeView(node: PreviewNode) -> Element {
    match node {
        PreviewNode::Button(config) => rsx! {
            Button {
                variant: config.variant,
                size: config.size,
                color: config.color,
                disabled: config.disabled,
                full_width: config.full_width,
                icon: if config.show_icon { Some(rsx! { PlusIcon {} }) } else { None },
                onclick: move |_| tracing::info!("Preview button clicked"),
                "{config.label}"
            }
        },
        PreviewNode::Typography(config) => rsx! {
            Typography {
                variant: config.variant,
                gutter_bottom: config.gutter_bottom,
                no_wrap: config.no_wrap,
                class: "text-gray-100 max-w-full",
                "{config.text}"
            }
        },
        PreviewNode::Chip(config) => {
            let onclick = config
                .clickable
                .then(|| EventHandler::new(|_: MouseEvent| tracing::info!("Preview chip clicked")));
            let ondelete = config
                .deletable
                .then(|| EventHandler::new(|_: MouseEvent| tracing::info!("Preview chip deleted")));
            rsx! {
                Chip {
                    label: config.label,
                    variant: config.variant,
                    size: config.size,
                    color: config.color,
                    onclick,
                    ondelete,
                }
            }
        }
        PreviewNode::TextField(config) => rsx! {
            div { class: "w-72",
                TextField {
                    label: config.label,
                    placeholder: config.placeholder,
                    helper_text: config.helper_text,
                    variant: config.variant,
                    size: config.size,
                    required: config.required,
                    error: config.error,
                }
            }
        },
        PreviewNode::Switch(config) => rsx! {
            Switch {
                checked: config.checked,
                color: config.color,
                size: config.size,
                label: (!config.label.is_empty()).then_some(config.label),
                disabled: config.disabled,
            }
        },
        PreviewNode::Placeholder { component_id } => rsx! {
            div { class: "flex items-center gap-2 text-gray-400 text-sm",
                InfoIcon { class: "w-4 h-4" }
                code { class: "font-mono text-gray-300", "{component_id}" }
                " has no preview available"
            }
        },
    }
}

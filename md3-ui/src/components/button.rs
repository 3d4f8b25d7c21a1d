//! Material button

use crate::palette;
use md3_common::preview::{ButtonVariant, Color, Size};
use dioxus::prelude::*;

/// Unstyled `<button>` carrying the accessibility attributes; `Button` adds
/// the MD3 look on top
#[component]
fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_pressed: Option<bool>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: class.as_deref(),
            disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_pressed: aria_pressed.map(|p| if p { "true" } else { "false" }),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if disabled {
                    return;
                }
                if let Some(ref handler) = onclick {
                    handler.call(e);
                }
            },
            {children}
        }
    }
}

/// Button with contained, outlined and text variants
#[component]
pub fn Button(
    #[props(default = ButtonVariant::Contained)] variant: ButtonVariant,
    #[props(default = Size::Medium)] size: Size,
    #[props(default = Color::Primary)] color: Color,
    #[props(default)] disabled: bool,
    #[props(default)] full_width: bool,
    /// Leading icon
    #[props(default)]
    icon: Option<Element>,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let base = "inline-flex items-center justify-center gap-2 rounded-full font-medium transition-colors disabled:opacity-40 disabled:cursor-not-allowed";
    let variant_class = match variant {
        ButtonVariant::Contained => palette::filled(color),
        ButtonVariant::Outlined => palette::outlined(color),
        ButtonVariant::Text => palette::text(color),
    };
    let padding = palette::padding(size);
    let width = if full_width { "w-full" } else { "" };

    let computed_class = match &class {
        Some(extra) => format!("{base} {padding} {variant_class} {width} {extra}"),
        None => format!("{base} {padding} {variant_class} {width}"),
    };

    rsx! {
        ChromelessButton {
            disabled,
            class: Some(computed_class),
            title,
            onclick,
            if let Some(icon) = icon {
                {icon}
            }
            {children}
        }
    }
}

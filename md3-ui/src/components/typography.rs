//! Typography scale

use md3_common::preview::TypographyVariant;
use dioxus::prelude::*;

fn scale_class(variant: TypographyVariant) -> &'static str {
    match variant {
        TypographyVariant::H1 => "text-6xl font-light tracking-tight",
        TypographyVariant::H2 => "text-5xl font-light tracking-tight",
        TypographyVariant::H3 => "text-4xl font-normal",
        TypographyVariant::H4 => "text-3xl font-normal",
        TypographyVariant::H5 => "text-2xl font-normal",
        TypographyVariant::H6 => "text-xl font-medium",
        TypographyVariant::Body1 => "text-base",
        TypographyVariant::Body2 => "text-sm",
        TypographyVariant::Caption => "text-xs text-gray-400",
    }
}

/// Text rendered in one step of the type scale. Headings render as
/// heading elements, everything else as a paragraph.
#[component]
pub fn Typography(
    #[props(default = TypographyVariant::Body1)] variant: TypographyVariant,
    #[props(default)] gutter_bottom: bool,
    #[props(default)] no_wrap: bool,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let gutter = if gutter_bottom { "mb-2" } else { "" };
    let wrap = if no_wrap { "truncate" } else { "" };
    let extra = class.unwrap_or_default();
    let class = format!("{} {gutter} {wrap} {extra}", scale_class(variant));

    match variant {
        TypographyVariant::H1 => rsx! { h1 { class: "{class}", {children} } },
        TypographyVariant::H2 => rsx! { h2 { class: "{class}", {children} } },
        TypographyVariant::H3 => rsx! { h3 { class: "{class}", {children} } },
        TypographyVariant::H4 => rsx! { h4 { class: "{class}", {children} } },
        TypographyVariant::H5 => rsx! { h5 { class: "{class}", {children} } },
        TypographyVariant::H6 => rsx! { h6 { class: "{class}", {children} } },
        TypographyVariant::Caption => rsx! { span { class: "{class}", {children} } },
        TypographyVariant::Body1 | TypographyVariant::Body2 => {
            rsx! { p { class: "{class}", {children} } }
        }
    }
}

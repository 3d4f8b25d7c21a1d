//! Empty state shown while nothing is selected

use crate::components::icons::LayersIcon;
use crate::components::Typography;
use md3_common::preview::TypographyVariant;
use dioxus::prelude::*;

#[component]
pub fn WelcomeView(title: String, component_count: usize) -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center h-full text-center text-gray-400 gap-2 px-6",
            LayersIcon { class: "w-20 h-20 mb-4 text-gray-600" }
            Typography { variant: TypographyVariant::H4, gutter_bottom: true, class: "text-gray-300",
                "{title}"
            }
            Typography { variant: TypographyVariant::Body1, class: "max-w-md",
                "Pick one of the {component_count} components in the gallery to edit it live. "
                "Use the code view for the snippet and the props view to change its configuration."
            }
        }
    }
}

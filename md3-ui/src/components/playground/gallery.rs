//! Component gallery: search, category filter and selectable cards

use super::PreviewNodeView;
use crate::components::icons::SearchIcon;
use crate::components::Chip;
use md3_common::catalog::{CategoryFilter, ComponentMetadata};
use md3_common::preview::{ChipVariant, Color, PreviewNode, Size};
use dioxus::prelude::*;

/// One gallery card: metadata plus the specimen drawn with schema defaults
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryCard {
    pub metadata: ComponentMetadata,
    pub specimen: Option<PreviewNode>,
}

#[component]
pub fn GalleryView(
    search: String,
    category: CategoryFilter,
    /// Matches per category for the current search
    counts: Vec<(CategoryFilter, usize)>,
    cards: Vec<GalleryCard>,
    selected: Option<String>,
    on_search: EventHandler<String>,
    on_category: EventHandler<CategoryFilter>,
    on_toggle: EventHandler<String>,
) -> Element {
    let shown = cards.len();

    rsx! {
        div { class: "flex flex-col gap-3 h-full",
            // Search
            label { class: "relative block",
                span { class: "absolute inset-y-0 left-3 flex items-center text-gray-500",
                    SearchIcon {}
                }
                input {
                    r#type: "search",
                    class: "w-full bg-gray-800/50 rounded-lg pl-9 pr-3 py-2 text-sm text-gray-200 placeholder-gray-500 focus:outline-none focus:ring-1 focus:ring-indigo-400/50",
                    placeholder: "Search components...",
                    value: "{search}",
                    oninput: move |e| on_search.call(e.value()),
                }
            }

            // Filters
            div { class: "flex flex-wrap items-center gap-2",
                Chip {
                    label: format!("{shown} components"),
                    variant: ChipVariant::Outlined,
                    size: Size::Small,
                    color: Color::Default,
                }
                for (filter , count) in counts {
                    Chip {
                        key: "{filter.label()}",
                        label: format!("{} ({count})", filter.label()),
                        variant: ChipVariant::Outlined,
                        size: Size::Small,
                        selected: filter == category,
                        onclick: move |_| on_category.call(filter),
                    }
                }
            }

            // Cards
            if cards.is_empty() {
                div { class: "flex flex-col items-center justify-center py-12 text-gray-500",
                    SearchIcon { class: "w-12 h-12 mb-3" }
                    p { class: "text-lg", "No components found" }
                    p { class: "text-sm", "Try a different search or filter" }
                }
            } else {
                div { class: "flex flex-col gap-3 overflow-y-auto",
                    for card in cards {
                        GalleryCardView {
                            key: "{card.metadata.id}",
                            is_selected: selected.as_deref() == Some(card.metadata.id.as_str()),
                            card,
                            on_toggle,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn GalleryCardView(card: GalleryCard, is_selected: bool, on_toggle: EventHandler<String>) -> Element {
    let border = if is_selected {
        "border-indigo-500 ring-1 ring-indigo-500/40"
    } else {
        "border-gray-800 hover:border-gray-600"
    };
    let id = card.metadata.id.clone();

    rsx! {
        div {
            class: "block bg-gray-900 rounded-lg p-4 border cursor-pointer transition-colors {border}",
            role: "button",
            tabindex: "0",
            aria_pressed: if is_selected { "true" } else { "false" },
            onclick: move |_| on_toggle.call(id.clone()),
            div { class: "flex items-center justify-between mb-1",
                h3 { class: "font-medium text-gray-100", "{card.metadata.name}" }
                Chip {
                    label: card.metadata.category.label().to_string(),
                    size: Size::Small,
                    color: Color::Secondary,
                }
            }
            p { class: "text-sm text-gray-400 mb-3", "{card.metadata.description}" }
            if let Some(node) = card.specimen.clone() {
                div { class: "pointer-events-none mb-3 flex justify-center", PreviewNodeView { node } }
            }
            div { class: "flex flex-wrap gap-1",
                for tag in card.metadata.tags.iter() {
                    Chip {
                        key: "{tag}",
                        label: tag.clone(),
                        variant: ChipVariant::Outlined,
                        size: Size::Small,
                        color: Color::Default,
                    }
                }
            }
        }
    }
}

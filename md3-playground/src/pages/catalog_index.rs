//! Catalog index: every registered component grouped by category

use crate::ui::LinkCard;
use crate::{PlaygroundContext, Route};
use dioxus::prelude::*;
use md3_common::{Category, ComponentMetadata, PreviewNode, PropsSnapshot};
use md3_ui::{ErrorDisplay, PreviewNodeView};

#[component]
pub fn CatalogIndex() -> Element {
    let ctx = use_context::<PlaygroundContext>();

    let sections: Vec<(Category, Vec<ComponentMetadata>)> = Category::ALL
        .into_iter()
        .map(|category| {
            let members = ctx
                .registry
                .list_all()
                .filter(|m| m.category == category)
                .cloned()
                .collect::<Vec<_>>();
            (category, members)
        })
        .filter(|(_, members)| !members.is_empty())
        .collect();

    // Atomic components get a rendered specimen with their default props
    let specimen = |id: &str| -> Option<PreviewNode> {
        if !ctx.renderer.has_preview(id) {
            return None;
        }
        let defaults = PropsSnapshot::defaults_for(ctx.registry.schema_for(id));
        ctx.renderer.render(id, &defaults).ok()
    };
    let specimens: Vec<_> = sections
        .iter()
        .find(|(category, _)| *category == Category::Atomic)
        .map(|(_, members)| {
            members
                .iter()
                .filter_map(|m| specimen(&m.id).map(|node| (m.clone(), node)))
                .collect()
        })
        .unwrap_or_default();

    rsx! {
        div { class: "min-h-screen bg-gray-900 text-white p-8",
            h1 { class: "text-2xl font-bold mb-6", "{ctx.config.title}" }

            div { class: "space-y-2 mb-8",
                LinkCard {
                    to: Route::Playground { component: None },
                    title: "Playground",
                    description: "Gallery, live preview, props form and code panel",
                }
            }

            if let Some(message) = ctx.catalog_error.clone() {
                ErrorDisplay { message: "The component catalog could not be loaded", detail: message }
            }

            if !specimens.is_empty() {
                h2 { class: "text-lg font-semibold text-gray-400 mb-3", "Specimens" }
                div { class: "grid grid-cols-3 gap-4 mb-8",
                    for (metadata, node) in specimens {
                        SpecimenCard {
                            key: "{metadata.id}",
                            title: metadata.name.clone(),
                            to: Route::Playground {
                                component: Some(metadata.id.clone()),
                            },
                            PreviewNodeView { node }
                        }
                    }
                }
            }

            for (category, members) in sections {
                section { key: "{category}", class: "mb-8",
                    h2 { class: "text-lg font-semibold text-gray-400 mb-3", "{category.label()}" }
                    div { class: "space-y-2",
                        for metadata in members {
                            LinkCard {
                                key: "{metadata.id}",
                                to: Route::Playground {
                                    component: Some(metadata.id.clone()),
                                },
                                title: metadata.name.clone(),
                                description: metadata.description.clone(),
                            }
                        }
                    }
                }
            }
        }
    }
}

/// A card showing a specimen with a link into the playground
#[component]
fn SpecimenCard(title: String, to: Route, children: Element) -> Element {
    rsx! {
        Link {
            to,
            class: "block bg-gray-950 rounded-lg p-4 hover:bg-gray-900 transition-colors border border-gray-800",
            h3 { class: "text-sm font-medium text-gray-300 mb-3", "{title}" }
            div { class: "pointer-events-none", {children} }
        }
    }
}

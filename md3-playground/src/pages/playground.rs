//! The playground page: gallery on the left, active panel on the right

use crate::{PlaygroundContext, Route};
use dioxus::prelude::*;
use md3_common::{
    CategoryFilter, PlaygroundEvent, PreviewPane, PropsSnapshot, ViewCoordinator, ViewMode,
};
use md3_ui::{
    CodeView, ComponentPreview, ErrorBanner, ErrorDisplay, GalleryCard, GalleryView,
    PropsEditorView, ViewModeBar, WelcomeView,
};
use tracing::warn;

#[component]
pub fn Playground(component: Option<String>) -> Element {
    let ctx = use_context::<PlaygroundContext>();

    let mut coordinator = use_signal({
        let ctx = ctx.clone();
        move || {
            let mut coordinator = ViewCoordinator::new(ctx.registry.clone())
                .with_view_mode(ctx.config.initial_view_mode)
                .with_code_follows_props(ctx.config.code_follows_props);
            if let Some(id) = component {
                if let Err(e) = coordinator.apply(PlaygroundEvent::Select(id)) {
                    warn!("Initial selection failed: {e}");
                }
            }
            coordinator
        }
    });
    let search = use_signal(String::new);
    let category = use_signal(CategoryFilter::default);
    let mut pane = use_signal(PreviewPane::new);
    // Bumped by the preview's retry action to force a fresh render
    let mut retry = use_signal(|| 0u32);

    let mut dispatch = move |event: PlaygroundEvent| {
        if let Err(e) = coordinator.write().apply(event) {
            warn!("Playground event rejected: {e}");
        }
    };

    // What the preview depends on
    let active = use_memo(move || {
        let coordinator = coordinator.read();
        let state = coordinator.state();
        state
            .selected()
            .map(|id| (id.to_string(), state.props().clone()))
    });

    // Re-enter loading and resolve again whenever selection or props change
    {
        let renderer = ctx.renderer.clone();
        use_effect(move || {
            let _ = retry();
            let Some((id, props)) = active() else {
                return;
            };
            pane.write().begin();
            let renderer = renderer.clone();
            spawn(async move {
                let result = renderer.render(&id, &props);
                pane.write().finish(result);
            });
        });
    }

    let cards = {
        let ctx = ctx.clone();
        use_memo(move || {
            ctx.registry
                .filter(&search.read(), category())
                .into_iter()
                .map(|metadata| GalleryCard {
                    specimen: ctx
                        .renderer
                        .has_preview(&metadata.id)
                        .then(|| {
                            let defaults = PropsSnapshot::defaults_for(ctx.registry.schema_for(&metadata.id));
                            ctx.renderer.render(&metadata.id, &defaults).ok()
                        })
                        .flatten(),
                    metadata: metadata.clone(),
                })
                .collect::<Vec<_>>()
        })
    };
    let counts = {
        let registry = ctx.registry.clone();
        use_memo(move || registry.count_by_category(&search.read()))
    };

    let state = coordinator.read().state().clone();
    let schema = coordinator.read().active_schema().to_vec();
    let title = ctx.config.title.clone();
    let heading = coordinator
        .read()
        .active_metadata()
        .map(|m| m.name.clone())
        .unwrap_or_else(|| title.clone());
    let file_name = format!("{}.rs", state.selected().unwrap_or("component"));

    rsx! {
        div { class: "flex h-screen",
            // Gallery
            aside { class: "w-96 flex-shrink-0 border-r border-gray-800 bg-gray-950 p-4 flex flex-col gap-4",
                div { class: "flex items-center justify-between",
                    h1 { class: "text-lg font-semibold", "{title}" }
                    Link {
                        to: Route::CatalogIndex {},
                        class: "text-sm text-indigo-300 hover:text-indigo-200",
                        "Catalog"
                    }
                }
                if let Some(message) = ctx.catalog_error.clone() {
                    ErrorDisplay { message: "The component catalog could not be loaded", detail: message }
                }
                GalleryView {
                    search: search(),
                    category: category(),
                    counts: counts(),
                    cards: cards(),
                    selected: state.selected().map(str::to_string),
                    on_search: move |text: String| {
                        let mut search = search;
                        search.set(text);
                    },
                    on_category: move |filter: CategoryFilter| {
                        let mut category = category;
                        category.set(filter);
                    },
                    on_toggle: move |id: String| dispatch(PlaygroundEvent::ToggleSelect(id)),
                }
            }

            // Active panel
            main { class: "flex-1 flex flex-col gap-4 p-6 overflow-y-auto",
                if let Some(warning) = ctx.config_warning.clone() {
                    ErrorBanner {
                        heading: "Settings could not be read; defaults are in use",
                        detail: warning,
                    }
                }
                if state.selected().is_some() {
                    div { class: "flex items-center justify-between",
                        h2 { class: "text-xl font-semibold", "{heading}" }
                        ViewModeBar {
                            mode: state.view_mode(),
                            on_select: move |mode: ViewMode| dispatch(PlaygroundEvent::SetViewMode(mode)),
                        }
                    }
                    match state.view_mode() {
                        ViewMode::Preview => rsx! {
                            ComponentPreview {
                                state: pane.read().state().clone(),
                                on_retry: move |_| retry += 1,
                            }
                        },
                        ViewMode::Code => rsx! {
                            CodeView {
                                code: state.code().to_string(),
                                debounce_ms: ctx.config.debounce_ms,
                                file_name,
                                props_json: state.props().to_json(),
                                on_change: move |code: String| dispatch(PlaygroundEvent::SetCode(code)),
                                on_sync: move |_| dispatch(PlaygroundEvent::RegenerateCode),
                            }
                        },
                        ViewMode::Props => rsx! {
                            // Keyed so a new selection gets a fresh buffer and timer
                            PropsEditorView {
                                key: "{state.selected().unwrap_or_default()}",
                                schema,
                                current: state.props().clone(),
                                debounce_ms: ctx.config.debounce_ms,
                                on_propose: move |snapshot: PropsSnapshot| {
                                    dispatch(PlaygroundEvent::ProposeProps(snapshot))
                                },
                            }
                        },
                    }
                } else {
                    WelcomeView {
                        title: title.clone(),
                        component_count: ctx.registry.len(),
                    }
                }
            }
        }
    }
}

//! Live preview pane

use super::PreviewNodeView;
use crate::components::helpers::{ErrorBanner, LoadingSpinner};
use md3_common::preview::PreviewState;
use dioxus::prelude::*;

/// Shows the pane's current state: spinner, rendered node or error.
///
/// Errors stay inside the pane: factory failures arrive as `Errored`, and
/// an error raised while the collaborator component renders is caught by
/// the boundary around the node. `on_retry` re-runs the render.
#[component]
pub fn ComponentPreview(state: PreviewState, on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { class: "h-full min-h-[200px] flex items-center justify-center bg-gray-950 rounded-lg border border-gray-800 p-6 overflow-auto",
            match state {
                PreviewState::Loading => rsx! {
                    LoadingSpinner { message: "Rendering...", compact: true }
                },
                PreviewState::Errored(message) => rsx! {
                    div { class: "w-full max-w-lg",
                        ErrorBanner {
                            heading: "Preview failed",
                            detail: message,
                            button_label: "Retry",
                            on_action: move |_| on_retry.call(()),
                        }
                    }
                },
                PreviewState::Rendered(node) => rsx! {
                    ErrorBoundary {
                        handle_error: move |_: ErrorContext| rsx! {
                            div { class: "w-full max-w-lg",
                                ErrorBanner {
                                    heading: "Preview failed",
                                    detail: "The component raised an error while rendering",
                                    button_label: "Retry",
                                    on_action: move |_| on_retry.call(()),
                                }
                            }
                        },
                        div { class: "max-w-full", PreviewNodeView { node } }
                    }
                },
            }
        }
    }
}

//! md3 playground - browse and live-edit the md3-ui components
//!
//! Gallery, preview, props form and code panel on one page, plus a catalog
//! index listing every registered component.

pub mod pages;
pub mod ui;

use dioxus::prelude::*;
use md3_common::{ComponentRegistry, PlaygroundConfig, PreviewRenderer};
use pages::{CatalogIndex, Playground};
use std::sync::Arc;
use tracing::{error, info, warn};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Settings shipped with the app
const PLAYGROUND_YAML: &str = include_str!("../playground.yaml");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // Playground at root, optionally preselecting a component
    #[route("/?:component")]
    Playground { component: Option<String> },
    #[route("/catalog")]
    CatalogIndex {},
}

/// Shared, read-only app state provided as context
#[derive(Clone)]
pub struct PlaygroundContext {
    pub config: PlaygroundConfig,
    pub registry: Arc<ComponentRegistry>,
    pub renderer: Arc<PreviewRenderer>,
    /// Settings problem the user should know about; defaults are in use
    pub config_warning: Option<String>,
    /// Built-in catalog failed to load; the registry is empty
    pub catalog_error: Option<String>,
}

impl PlaygroundContext {
    pub fn load() -> Self {
        Self::from_sources(PLAYGROUND_YAML, ComponentRegistry::builtin())
    }

    fn from_sources(
        config_yaml: &str,
        registry: Result<ComponentRegistry, md3_common::RegistryError>,
    ) -> Self {
        let (config, config_warning) = match PlaygroundConfig::from_yaml_str(config_yaml) {
            Ok(config) => (config, None),
            Err(e) => {
                warn!("Invalid playground settings, using defaults: {e}");
                (PlaygroundConfig::default(), Some(e.to_string()))
            }
        };
        let (registry, catalog_error) = match registry {
            Ok(registry) => (registry, None),
            Err(e) => {
                error!("Failed to load component catalog: {e}");
                (ComponentRegistry::new(), Some(e.to_string()))
            }
        };
        info!(
            components = registry.len(),
            debounce_ms = config.debounce_ms,
            "Playground ready"
        );
        Self {
            config,
            registry: Arc::new(registry),
            renderer: Arc::new(PreviewRenderer::builtin()),
            config_warning,
            catalog_error,
        }
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(PlaygroundContext::load);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen bg-gray-900 text-white", Router::<Route> {} }
    }
}

//! Factory dispatch and the preview pane state machine

use super::configs::{ButtonConfig, ChipConfig, SwitchConfig, TextFieldConfig, TypographyConfig};
use super::{PreviewError, PreviewNode};
use crate::snapshot::PropsSnapshot;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, warn};

/// Builds a preview node from a props snapshot
pub type PreviewFactory =
    Arc<dyn Fn(&PropsSnapshot) -> Result<PreviewNode, PreviewError> + Send + Sync>;

/// Maps component ids to preview factories.
///
/// Adding a previewable component means registering a factory; ids without
/// one resolve to [`PreviewNode::Placeholder`].
#[derive(Clone, Default)]
pub struct PreviewRenderer {
    factories: HashMap<String, PreviewFactory>,
}

impl fmt::Debug for PreviewRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<_> = self.factories.keys().collect();
        ids.sort();
        f.debug_struct("PreviewRenderer")
            .field("factories", &ids)
            .finish()
    }
}

impl PreviewRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer with factories for every built-in previewable component
    pub fn builtin() -> Self {
        let mut renderer = Self::new();
        renderer.register("button", |p| {
            ButtonConfig::from_props(p).map(PreviewNode::Button)
        });
        renderer.register("typography", |p| {
            TypographyConfig::from_props(p).map(PreviewNode::Typography)
        });
        renderer.register("chip", |p| ChipConfig::from_props(p).map(PreviewNode::Chip));
        renderer.register("textfield", |p| {
            TextFieldConfig::from_props(p).map(PreviewNode::TextField)
        });
        renderer.register("switch", |p| {
            SwitchConfig::from_props(p).map(PreviewNode::Switch)
        });
        renderer
    }

    /// Register (or replace) the factory for `id`
    pub fn register<F>(&mut self, id: impl Into<String>, factory: F)
    where
        F: Fn(&PropsSnapshot) -> Result<PreviewNode, PreviewError> + Send + Sync + 'static,
    {
        self.factories.insert(id.into(), Arc::new(factory));
    }

    pub fn has_preview(&self, id: &str) -> bool {
        self.factories.contains_key(id)
    }

    /// Resolve `component_id` with `props`.
    ///
    /// Unknown ids produce a placeholder. A panicking factory is caught here
    /// and reported as [`PreviewError::Panicked`] where panics unwind (native
    /// and desktop builds). wasm32 aborts on panic, so factories must report
    /// bad input as `Err` rather than panicking.
    pub fn render(
        &self,
        component_id: &str,
        props: &PropsSnapshot,
    ) -> Result<PreviewNode, PreviewError> {
        let Some(factory) = self.factories.get(component_id) else {
            debug!(component_id, "No preview factory, using placeholder");
            return Ok(PreviewNode::Placeholder {
                component_id: component_id.to_string(),
            });
        };

        match panic::catch_unwind(AssertUnwindSafe(|| factory(props))) {
            Ok(result) => result,
            Err(payload) => Err(PreviewError::Panicked {
                component: component_id.to_string(),
                message: panic_message(payload.as_ref()),
            }),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// What the preview pane currently shows
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PreviewState {
    #[default]
    Loading,
    Rendered(PreviewNode),
    /// User-visible message for the failed attempt
    Errored(String),
}

impl PreviewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, PreviewState::Loading)
    }

    pub fn node(&self) -> Option<&PreviewNode> {
        match self {
            PreviewState::Rendered(node) => Some(node),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PreviewState::Errored(message) => Some(message),
            _ => None,
        }
    }
}

/// Preview pane state machine: `Loading -> Rendered | Errored`.
///
/// Every refresh re-enters `Loading` and resolves again, whether or not the
/// inputs changed since the last attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreviewPane {
    state: PreviewState,
    attempts: u64,
}

impl PreviewPane {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    /// Number of render attempts so far
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    pub fn begin(&mut self) {
        self.state = PreviewState::Loading;
        self.attempts += 1;
    }

    pub fn finish(&mut self, result: Result<PreviewNode, PreviewError>) {
        self.state = match result {
            Ok(node) => PreviewState::Rendered(node),
            Err(e) => {
                warn!("Component preview failed: {e}");
                PreviewState::Errored(format!("Component preview error: {e}"))
            }
        };
    }

    pub fn refresh(
        &mut self,
        renderer: &PreviewRenderer,
        component_id: &str,
        props: &PropsSnapshot,
    ) -> &PreviewState {
        self.begin();
        self.finish(renderer.render(component_id, props));
        &self.state
    }
}

//! Selection state and the props store operations
//!
//! `SelectionState` is owned by the view coordinator. Everything else reads
//! it through the getters; the mutating operations are crate-private and
//! reached only through coordinator events.

use crate::catalog::ComponentRegistry;
use crate::codegen::{example_or_placeholder, NO_SELECTION_CODE};
use crate::snapshot::{PropsSnapshot, SnapshotError};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from store updates
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Props do not fit the selected component: {0}")]
    NonConforming(#[from] SnapshotError),
    #[error("No component is selected")]
    NoSelection,
}

/// Which panel the playground shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Code,
    #[default]
    Preview,
    Props,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Preview, ViewMode::Code, ViewMode::Props];

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Code => "Code",
            ViewMode::Preview => "Preview",
            ViewMode::Props => "Props",
        }
    }
}

/// Selected component, view mode, code text and props snapshot
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<String>,
    view_mode: ViewMode,
    code: String,
    props: PropsSnapshot,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new(ViewMode::default())
    }
}

impl SelectionState {
    pub fn new(view_mode: ViewMode) -> Self {
        Self {
            selected: None,
            view_mode,
            code: NO_SELECTION_CODE.to_string(),
            props: PropsSnapshot::new(),
        }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn props(&self) -> &PropsSnapshot {
        &self.props
    }

    /// Select `id`, seeding props from schema defaults and code from the
    /// example snippet. The view mode is left alone.
    pub(crate) fn select(&mut self, registry: &ComponentRegistry, id: &str) {
        self.selected = Some(id.to_string());
        self.props = PropsSnapshot::defaults_for(registry.schema_for(id));
        self.code = example_or_placeholder(registry, id);
        debug!(
            component_id = id,
            known = registry.find(id).is_some(),
            "Selected component"
        );
    }

    /// Select `id`, or clear the selection if `id` is already selected
    pub(crate) fn toggle_select(&mut self, registry: &ComponentRegistry, id: &str) {
        if self.is_selected(id) {
            self.clear_selection();
        } else {
            self.select(registry, id);
        }
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected = None;
        self.props = PropsSnapshot::new();
        self.code = NO_SELECTION_CODE.to_string();
        debug!("Cleared selection");
    }

    pub(crate) fn set_code(&mut self, code: String) {
        self.code = code;
    }

    /// Replace the snapshot wholesale. A snapshot with stray keys or
    /// mistyped values is rejected and the current one kept.
    pub(crate) fn set_props(
        &mut self,
        registry: &ComponentRegistry,
        props: PropsSnapshot,
    ) -> Result<(), StoreError> {
        let id = self.selected.as_deref().ok_or(StoreError::NoSelection)?;
        if let Err(e) = props.conforms_to(registry.schema_for(id)) {
            warn!(component_id = id, "Rejected props snapshot: {e}");
            return Err(e.into());
        }
        self.props = props;
        Ok(())
    }

    pub(crate) fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }
}

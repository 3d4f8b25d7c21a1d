//! View coordinator
//!
//! Owns the selection state and the registry handle. UI handlers turn user
//! actions into [`PlaygroundEvent`]s and `apply` them; views read through
//! the accessors.

use crate::catalog::{CategoryFilter, ComponentMetadata, ComponentRegistry};
use crate::codegen::render_snippet;
use crate::preview::{PreviewError, PreviewNode, PreviewRenderer};
use crate::schema::PropsFieldSchema;
use crate::snapshot::PropsSnapshot;
use crate::store::{SelectionState, StoreError, ViewMode};
use std::sync::Arc;
use tracing::debug;

/// User actions that change playground state
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaygroundEvent {
    /// Select a component by id (known or not)
    Select(String),
    /// Select, or deselect if already selected
    ToggleSelect(String),
    ClearSelection,
    SetViewMode(ViewMode),
    /// Code text from the editor
    SetCode(String),
    /// Snapshot from the props form; rejected unless it fits the schema
    ProposeProps(PropsSnapshot),
    /// Replace the code with a snippet generated from the current props
    RegenerateCode,
}

#[derive(Clone, Debug)]
pub struct ViewCoordinator {
    registry: Arc<ComponentRegistry>,
    state: SelectionState,
    code_follows_props: bool,
}

impl PartialEq for ViewCoordinator {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.registry, &other.registry)
            && self.state == other.state
            && self.code_follows_props == other.code_follows_props
    }
}

impl ViewCoordinator {
    pub fn new(registry: Arc<ComponentRegistry>) -> Self {
        Self {
            registry,
            state: SelectionState::default(),
            code_follows_props: false,
        }
    }

    pub fn with_view_mode(mut self, mode: ViewMode) -> Self {
        self.state.set_view_mode(mode);
        self
    }

    /// Regenerate the code whenever props change
    pub fn with_code_follows_props(mut self, enabled: bool) -> Self {
        self.code_follows_props = enabled;
        self
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    pub fn code_follows_props(&self) -> bool {
        self.code_follows_props
    }

    /// Schema of the selected component; empty without a selection
    pub fn active_schema(&self) -> &[PropsFieldSchema] {
        match self.state.selected() {
            Some(id) => self.registry.schema_for(id),
            None => &[],
        }
    }

    pub fn active_metadata(&self) -> Option<&ComponentMetadata> {
        self.state.selected().and_then(|id| self.registry.find(id))
    }

    /// Resolve the preview for the current selection, `None` without one
    pub fn preview(
        &self,
        renderer: &PreviewRenderer,
    ) -> Option<Result<PreviewNode, PreviewError>> {
        let id = self.state.selected()?;
        Some(renderer.render(id, self.state.props()))
    }

    pub fn filter(&self, search: &str, category: CategoryFilter) -> Vec<&ComponentMetadata> {
        self.registry.filter(search, category)
    }

    pub fn apply(&mut self, event: PlaygroundEvent) -> Result<(), StoreError> {
        debug!(?event, "Playground event");
        match event {
            PlaygroundEvent::Select(id) => self.state.select(&self.registry, &id),
            PlaygroundEvent::ToggleSelect(id) => self.state.toggle_select(&self.registry, &id),
            PlaygroundEvent::ClearSelection => self.state.clear_selection(),
            PlaygroundEvent::SetViewMode(mode) => self.state.set_view_mode(mode),
            PlaygroundEvent::SetCode(code) => self.state.set_code(code),
            PlaygroundEvent::ProposeProps(props) => {
                self.state.set_props(&self.registry, props)?;
                if self.code_follows_props {
                    self.regenerate_code();
                }
            }
            PlaygroundEvent::RegenerateCode => self.regenerate_code(),
        }
        Ok(())
    }

    /// Only known components get a generated snippet; the code of an
    /// unknown selection stays as its placeholder.
    fn regenerate_code(&mut self) {
        let Some(metadata) = self.active_metadata() else {
            return;
        };
        let code = render_snippet(metadata, self.active_schema(), self.state.props());
        self.state.set_code(code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::NO_SELECTION_CODE;

    fn coordinator() -> ViewCoordinator {
        ViewCoordinator::new(Arc::new(ComponentRegistry::builtin().unwrap()))
    }

    #[test]
    fn test_active_schema_follows_selection() {
        let mut c = coordinator();
        assert!(c.active_schema().is_empty());
        assert!(c.active_metadata().is_none());

        c.apply(PlaygroundEvent::Select("switch".into())).unwrap();
        assert_eq!(c.active_metadata().unwrap().name, "Switch");
        assert!(c.active_schema().iter().any(|f| f.name == "checked"));
    }

    #[test]
    fn test_preview_without_selection() {
        let c = coordinator();
        assert!(c.preview(&PreviewRenderer::builtin()).is_none());
    }

    #[test]
    fn test_rejected_props_leave_state_untouched() {
        let mut c = coordinator();
        c.apply(PlaygroundEvent::Select("button".into())).unwrap();
        let before = c.state().clone();

        let stray = PropsSnapshot::new().with("elevation", "3");
        assert!(c.apply(PlaygroundEvent::ProposeProps(stray)).is_err());
        assert_eq!(c.state(), &before);
    }

    #[test]
    fn test_code_is_kept_when_props_change() {
        let mut c = coordinator();
        c.apply(PlaygroundEvent::Select("button".into())).unwrap();
        c.apply(PlaygroundEvent::SetCode("// my edits".into())).unwrap();

        let props = c.state().props().clone().with("disabled", true);
        c.apply(PlaygroundEvent::ProposeProps(props)).unwrap();
        assert_eq!(c.state().code(), "// my edits");
    }

    #[test]
    fn test_code_follows_props_when_enabled() {
        let mut c = coordinator().with_code_follows_props(true);
        c.apply(PlaygroundEvent::Select("button".into())).unwrap();

        let props = c.state().props().clone().with("disabled", true);
        c.apply(PlaygroundEvent::ProposeProps(props)).unwrap();
        assert!(c.state().code().contains("disabled: true,"));
    }

    #[test]
    fn test_regenerate_code() {
        let mut c = coordinator();
        c.apply(PlaygroundEvent::RegenerateCode).unwrap();
        assert_eq!(c.state().code(), NO_SELECTION_CODE);

        c.apply(PlaygroundEvent::Select("chip".into())).unwrap();
        c.apply(PlaygroundEvent::RegenerateCode).unwrap();
        assert!(c.state().code().starts_with("use md3_ui::Chip;"));
    }

    #[test]
    fn test_view_mode_changes_freely() {
        let mut c = coordinator().with_view_mode(ViewMode::Code);
        assert_eq!(c.state().view_mode(), ViewMode::Code);
        for mode in [ViewMode::Props, ViewMode::Preview, ViewMode::Code] {
            c.apply(PlaygroundEvent::SetViewMode(mode)).unwrap();
            assert_eq!(c.state().view_mode(), mode);
        }
    }
}

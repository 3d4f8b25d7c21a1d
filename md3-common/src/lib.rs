//! Core of the MD3 component playground: the component catalog, props
//! schemas and validation, selection state, preview resolution and code
//! generation. Nothing here depends on the UI framework.

pub mod catalog;
pub mod codegen;
pub mod config;
pub mod coordinator;
pub mod debounce;
pub mod editor;
pub mod form;
pub mod preview;
pub mod schema;
pub mod snapshot;
pub mod store;

pub use catalog::{
    Category, CategoryFilter, ComponentEntry, ComponentMetadata, ComponentRegistry, RegistryError,
};
pub use config::{ConfigError, PlaygroundConfig};
pub use coordinator::{PlaygroundEvent, ViewCoordinator};
pub use debounce::{Debouncer, Ticket};
pub use form::{FieldView, FormError, FormOutcome, Propagation, PropsBinder, PropsForm};
pub use preview::{PreviewError, PreviewNode, PreviewPane, PreviewRenderer, PreviewState};
pub use schema::{FieldError, FieldInput, FieldKind, PropValue, PropsFieldSchema};
pub use snapshot::{PropsSnapshot, SnapshotError};
pub use store::{SelectionState, StoreError, ViewMode};

//! Views the playground app assembles

mod code_view;
mod gallery;
mod preview;
mod preview_node;
mod props_editor;
mod view_mode_bar;
mod welcome;

pub use code_view::{CodeEditor, CodeView};
pub use gallery::{GalleryCard, GalleryView};
pub use preview::ComponentPreview;
pub use preview_node::PreviewNodeView;
pub use props_editor::PropsEditorView;
pub use view_mode_bar::ViewModeBar;
pub use welcome::WelcomeView;

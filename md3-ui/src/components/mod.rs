//! Design-system components and playground views

pub mod button;
pub mod chip;
pub mod helpers;
pub mod icons;
pub mod playground;
pub mod select;
pub mod switch;
pub mod text_field;
pub mod typography;

pub use button::Button;
pub use chip::Chip;
pub use helpers::{ErrorBanner, ErrorDisplay, LoadingSpinner};
pub use icons::{
    AlertTriangleIcon, CheckIcon, CodeIcon, CopyIcon, DownloadIcon, EyeIcon, InfoIcon,
    LayersIcon, PlusIcon, RefreshIcon, SearchIcon, SlidersIcon, XIcon,
};
pub use playground::{
    CodeEditor, CodeView, ComponentPreview, GalleryCard, GalleryView, PreviewNodeView,
    PropsEditorView, ViewModeBar, WelcomeView,
};
pub use select::Select;
pub use switch::Switch;
pub use text_field::TextField;
pub use typography::Typography;

//! Preview resolution
//!
//! Resolves a component id plus props snapshot into a [`PreviewNode`]: a
//! declarative description of what the preview pane should draw. The UI
//! crate turns nodes into real elements.

mod configs;
mod renderer;

pub use configs::{
    ButtonConfig, ButtonVariant, ChipConfig, ChipVariant, Color, Size, SwitchConfig,
    TextFieldConfig, TextFieldVariant, TypographyConfig, TypographyVariant,
};
pub use renderer::{PreviewFactory, PreviewPane, PreviewRenderer, PreviewState};

use thiserror::Error;

/// A renderable preview
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewNode {
    Button(ButtonConfig),
    Typography(TypographyConfig),
    Chip(ChipConfig),
    TextField(TextFieldConfig),
    Switch(SwitchConfig),
    /// Known or unknown id without a registered factory
    Placeholder { component_id: String },
}

impl PreviewNode {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, PreviewNode::Placeholder { .. })
    }
}

/// Rendering failures, scoped to the preview pane
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreviewError {
    #[error("{component}: '{value}' is not a supported {field}")]
    InvalidOption {
        component: String,
        field: String,
        value: String,
    },
    #[error("{component}: {field} must be a {expected} value")]
    WrongType {
        component: String,
        field: String,
        expected: &'static str,
    },
    #[error("{component} failed to render: {message}")]
    Panicked { component: String, message: String },
}

//! md3-ui - Material Design 3 components and playground views
//!
//! The component library the playground configures, plus the pure view
//! components the playground app assembles. Option enums are shared with
//! `md3-common` so preview configs map onto props without conversion.

pub mod components;
pub mod hooks;
pub mod palette;

pub use components::*;
pub use md3_common::preview::{
    ButtonVariant, ChipVariant, Color, Size, TextFieldVariant, TypographyVariant,
};

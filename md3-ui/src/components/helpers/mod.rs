//! Common helper UI components

mod error_banner;
mod error_display;
mod loading_spinner;

pub use error_banner::ErrorBanner;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;

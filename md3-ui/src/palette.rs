//! Tailwind class lookups for palette colors and sizes

use md3_common::preview::{Color, Size};

/// Filled surface: background, hover and on-color text
pub fn filled(color: Color) -> &'static str {
    match color {
        Color::Primary => "bg-indigo-600 hover:bg-indigo-500 text-white",
        Color::Secondary => "bg-pink-600 hover:bg-pink-500 text-white",
        Color::Error => "bg-red-600 hover:bg-red-500 text-white",
        Color::Warning => "bg-amber-500 hover:bg-amber-400 text-gray-900",
        Color::Info => "bg-sky-600 hover:bg-sky-500 text-white",
        Color::Success => "bg-emerald-600 hover:bg-emerald-500 text-white",
        Color::Default => "bg-gray-600 hover:bg-gray-500 text-white",
    }
}

/// Outline border and matching text
pub fn outlined(color: Color) -> &'static str {
    match color {
        Color::Primary => "border border-indigo-500 text-indigo-300 hover:bg-indigo-500/10",
        Color::Secondary => "border border-pink-500 text-pink-300 hover:bg-pink-500/10",
        Color::Error => "border border-red-500 text-red-300 hover:bg-red-500/10",
        Color::Warning => "border border-amber-500 text-amber-300 hover:bg-amber-500/10",
        Color::Info => "border border-sky-500 text-sky-300 hover:bg-sky-500/10",
        Color::Success => "border border-emerald-500 text-emerald-300 hover:bg-emerald-500/10",
        Color::Default => "border border-gray-500 text-gray-300 hover:bg-gray-500/10",
    }
}

/// Text only
pub fn text(color: Color) -> &'static str {
    match color {
        Color::Primary => "text-indigo-300 hover:bg-indigo-500/10",
        Color::Secondary => "text-pink-300 hover:bg-pink-500/10",
        Color::Error => "text-red-300 hover:bg-red-500/10",
        Color::Warning => "text-amber-300 hover:bg-amber-500/10",
        Color::Info => "text-sky-300 hover:bg-sky-500/10",
        Color::Success => "text-emerald-300 hover:bg-emerald-500/10",
        Color::Default => "text-gray-300 hover:bg-gray-500/10",
    }
}

/// Track color of an active switch
pub fn track(color: Color) -> &'static str {
    match color {
        Color::Primary => "bg-indigo-600",
        Color::Secondary => "bg-pink-600",
        Color::Error => "bg-red-600",
        Color::Warning => "bg-amber-500",
        Color::Info => "bg-sky-600",
        Color::Success => "bg-emerald-600",
        Color::Default => "bg-gray-400",
    }
}

/// Padding and font size for buttons and inputs
pub fn padding(size: Size) -> &'static str {
    match size {
        Size::Small => "px-3 py-1.5 text-sm",
        Size::Medium => "px-4 py-2",
        Size::Large => "px-6 py-3 text-lg",
    }
}

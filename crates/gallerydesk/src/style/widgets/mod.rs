//! Polished widget styles with shadows and rounded corners.

#![allow(dead_code)] // Utility presets for themeable components
#![allow(unused_imports)] // Re-exports for external theming use
#![allow(clippy::needless_update)] // Explicit struct updates for clarity

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

// Re-export palette for external access
pub use palette::*;

// Re-export radius constants
pub use shadows::radius;

// Re-export shadow functions
pub use shadows::{medium as shadow_medium, none as shadow_none, subtle as shadow_subtle};

// Re-export container styles
pub use containers::{
    card_style, category_badge_style, header_style, offline_banner_style, thumb_frame_style,
    toast_error_style, toast_info_style, toast_success_style,
};

// Re-export button styles
pub use buttons::{
    danger_button_style, ghost_button_style, primary_button_style, secondary_button_style,
};

// Re-export input styles
pub use inputs::{form_input_style, scrollable_style};

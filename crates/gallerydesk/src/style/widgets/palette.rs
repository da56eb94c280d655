//! Color palette for the admin console.
//!
//! A single light theme tuned for photo-heavy content: quiet neutral
//! chrome, an indigo primary and soft tints for status surfaces, so
//! the thumbnails carry the color.

use iced::Color;

/// Complete color palette for the application.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // Primary brand colors
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,
    pub primary_soft: Color,

    // Surface colors
    pub surface: Color,
    pub surface_sunken: Color,
    pub background: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_primary: Color,

    // Status colors
    pub success: Color,
    pub success_soft: Color,
    pub warning: Color,
    pub warning_soft: Color,
    pub danger: Color,
    pub danger_soft: Color,

    // State colors
    pub hover: Color,

    // Border colors
    pub border_subtle: Color,
    pub border_medium: Color,

    // Shadow colors
    pub shadow: Color,
    pub shadow_medium: Color,
}

impl Palette {
    /// Creates the light theme palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            // Primary - Indigo, calm against photographs
            primary: Color::from_rgb(0.39, 0.40, 0.95),
            primary_light: Color::from_rgb(0.55, 0.56, 1.0),
            primary_dark: Color::from_rgb(0.30, 0.31, 0.80),
            primary_soft: Color::from_rgb(0.93, 0.93, 1.0), // Tint for badges and pressed states

            // Surfaces - Soft, airy whites
            surface: Color::WHITE,
            surface_sunken: Color::from_rgb(0.965, 0.965, 0.98), // Recessed image wells
            background: Color::from_rgb(0.976, 0.976, 0.988),

            // Text - Clear hierarchy
            text_primary: Color::from_rgb(0.10, 0.10, 0.15),
            text_secondary: Color::from_rgb(0.42, 0.44, 0.52),
            text_muted: Color::from_rgb(0.60, 0.62, 0.68),
            text_on_primary: Color::WHITE,

            // Status - Saturated text colors with pale surfaces
            success: Color::from_rgb(0.13, 0.62, 0.40),
            success_soft: Color::from_rgb(0.90, 0.97, 0.93),
            warning: Color::from_rgb(0.72, 0.50, 0.04),
            warning_soft: Color::from_rgb(1.0, 0.97, 0.87),
            danger: Color::from_rgb(0.85, 0.24, 0.30),
            danger_soft: Color::from_rgb(0.99, 0.93, 0.93),

            // States
            hover: Color::from_rgb(0.955, 0.957, 0.985),

            // Borders - Soft, natural
            border_subtle: Color::from_rgb(0.91, 0.92, 0.95),
            border_medium: Color::from_rgb(0.85, 0.86, 0.90),

            // Shadows - Soft, natural depth
            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.05),
            shadow_medium: Color::from_rgba(0.0, 0.0, 0.0, 0.09),
        }
    }
}

/// Gets the palette used across the console.
#[must_use]
pub const fn current() -> Palette {
    Palette::light()
}

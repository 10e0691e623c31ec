use anyhow::bail;
use ratatui::style::Color;
use serde::Deserialize;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    /// Dark theme (default)
    Mocha,
    /// Light theme
    Latte,
}

impl Default for ThemeVariant {
    fn default() -> Self {
        Self::Mocha
    }
}

impl FromStr for ThemeVariant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mocha" => Ok(Self::Mocha),
            "latte" => Ok(Self::Latte),
            other => bail!("Unknown theme {:?} (expected mocha or latte)", other),
        }
    }
}

/// Catppuccin-based color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent_primary: Color,   // Focus, selection, primary highlight
    pub accent_tertiary: Color,  // Special emphasis, logo, background glyphs
    pub accent_error: Color,     // Errors, toast
    pub accent_success: Color,   // Valid/ready states
    pub accent_info: Color,      // Loading spinner

    pub text_primary: Color,     // Main content
    pub text_secondary: Color,   // Less important content
    pub text_tertiary: Color,    // Labels, hints, placeholders

    pub border_primary: Color,   // Main borders, separators
    pub border_secondary: Color, // Subtle borders, disabled state
    pub bg_base: Color,          // Main background
    pub bg_surface: Color,       // Elevated surfaces, selection bg
    pub bg_elevated: Color,      // Modals, floating elements
}

impl Theme {
    pub fn new(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Mocha => Self::mocha(),
            ThemeVariant::Latte => Self::latte(),
        }
    }

    fn mocha() -> Self {
        Self {
            accent_primary: Color::Rgb(0xb4, 0xbe, 0xfe),  // lavender
            accent_tertiary: Color::Rgb(0xcb, 0xa6, 0xf7), // mauve
            accent_error: Color::Rgb(0xf3, 0x8b, 0xa8),    // red
            accent_success: Color::Rgb(0xa6, 0xe3, 0xa1),  // green
            accent_info: Color::Rgb(0x94, 0xe2, 0xd5),     // teal

            text_primary: Color::Rgb(0xcd, 0xd6, 0xf4),    // text
            text_secondary: Color::Rgb(0xba, 0xc2, 0xde),  // subtext1
            text_tertiary: Color::Rgb(0xa6, 0xad, 0xc8),   // subtext0

            border_primary: Color::Rgb(0x7f, 0x84, 0x9c),  // overlay1
            border_secondary: Color::Rgb(0x6c, 0x70, 0x86), // overlay0
            bg_base: Color::Rgb(0x1e, 0x1e, 0x2e),         // base
            bg_surface: Color::Rgb(0x31, 0x32, 0x44),      // surface0
            bg_elevated: Color::Rgb(0x45, 0x47, 0x5a),     // surface1
        }
    }

    fn latte() -> Self {
        Self {
            accent_primary: Color::Rgb(0x72, 0x87, 0xfd),  // lavender
            accent_tertiary: Color::Rgb(0x88, 0x39, 0xef), // mauve
            accent_error: Color::Rgb(0xd2, 0x0f, 0x39),    // red
            accent_success: Color::Rgb(0x40, 0xa0, 0x2b),  // green
            accent_info: Color::Rgb(0x17, 0x92, 0x99),     // teal

            text_primary: Color::Rgb(0x4c, 0x4f, 0x69),    // text
            text_secondary: Color::Rgb(0x5c, 0x5f, 0x77),  // subtext1
            text_tertiary: Color::Rgb(0x6c, 0x6f, 0x85),   // subtext0

            border_primary: Color::Rgb(0x8c, 0x8f, 0xa1),  // overlay1
            border_secondary: Color::Rgb(0x9c, 0xa0, 0xb0), // overlay0
            bg_base: Color::Rgb(0xef, 0xf1, 0xf5),         // base
            bg_surface: Color::Rgb(0xcc, 0xd0, 0xda),      // surface0
            bg_elevated: Color::Rgb(0xbc, 0xc0, 0xcc),     // surface1
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeVariant::default())
    }
}

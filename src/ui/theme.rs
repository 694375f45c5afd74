//! # Theme System
//!
//! Centralized colors for the Forge dashboard. Rendering code references
//! theme fields instead of hardcoding `ratatui::style::Color` values;
//! the active theme is selected by name in the configuration file.
//!
//! ## Built-in Themes
//!
//! - **Forge** (default) - the red banner ramp of the original dashboard
//! - **Catppuccin Mocha** - warm, dark pastel theme
//! - **Nord** - arctic, north-bluish color palette
//! - **Dracula** - dark theme with vivid colors

use ratatui::style::Color;

/// RGB triple kept separate from [`Color`] so the banner gradient can
/// interpolate channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c.r, c.g, c.b)
    }
}

/// All colors used by the dashboard, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name matched against the config file.
    pub name: &'static str,

    /// Primary text color.
    pub fg: Color,
    /// Muted text (hints, footer legend, placeholders).
    pub fg_dim: Color,
    /// Focused borders, palette selection, titles.
    pub accent: Color,
    /// Captured stderr.
    pub warning: Color,
    /// Failure descriptions.
    pub error: Color,

    /// Left end of the banner gradient.
    pub gradient_start: Rgb,
    /// Right end of the banner gradient.
    pub gradient_end: Rgb,
}

impl Theme {
    /// Return the list of all built-in themes.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Forge).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }
}

// ---------------------------------------------------------------------------
// Built-in theme definitions
// ---------------------------------------------------------------------------

static BUILT_IN_THEMES: [Theme; 4] = [
    // 0 - Forge (default). Gradient endpoints are the original red ramp.
    Theme {
        name: "Forge",
        fg: Color::Rgb(220, 220, 220),
        fg_dim: Color::Rgb(120, 120, 120),
        accent: Color::Rgb(227, 0, 24),
        warning: Color::Rgb(230, 200, 80),
        error: Color::Rgb(227, 0, 24),
        gradient_start: Rgb::new(0xe3, 0x00, 0x18),
        gradient_end: Rgb::new(0xdf, 0xae, 0xb3),
    },
    // 1 - Catppuccin Mocha
    Theme {
        name: "Catppuccin Mocha",
        fg: Color::Rgb(205, 214, 244),     // text
        fg_dim: Color::Rgb(108, 112, 134), // overlay0
        accent: Color::Rgb(137, 180, 250), // blue
        warning: Color::Rgb(249, 226, 175), // yellow
        error: Color::Rgb(243, 139, 168),  // red
        gradient_start: Rgb::new(137, 180, 250), // blue
        gradient_end: Rgb::new(203, 166, 247),   // mauve
    },
    // 2 - Nord
    Theme {
        name: "Nord",
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208), // frost
        warning: Color::Rgb(235, 203, 139),
        error: Color::Rgb(191, 97, 106),
        gradient_start: Rgb::new(136, 192, 208),
        gradient_end: Rgb::new(94, 129, 172),
    },
    // 3 - Dracula
    Theme {
        name: "Dracula",
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(139, 233, 253), // cyan
        warning: Color::Rgb(241, 250, 140),
        error: Color::Rgb(255, 85, 85),
        gradient_start: Rgb::new(255, 121, 198), // pink
        gradient_end: Rgb::new(189, 147, 249),   // purple
    },
];

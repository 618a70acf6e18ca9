//! Theme structure and palettes
//!
//! Semantic color system: colors are organized by purpose, not by color
//! name. The active palette is selected by the persisted theme mode.

use ratatui::style::Color;

use crate::prefs::ThemeMode;

/// Theme colors with semantic organization.
#[derive(Clone, Debug)]
pub struct Theme {
    /// Main background color
    pub background: Color,
    /// Card/panel background (slightly elevated)
    pub surface: Color,
    /// Modals, drawers, tooltips (most elevated)
    pub surface_elevated: Color,

    /// Primary text - headers, active items
    pub text_primary: Color,
    /// Secondary text - descriptions, labels
    pub text_secondary: Color,
    /// Muted text - hints, disabled states, timestamps
    pub text_muted: Color,

    /// Primary accent - brand color
    pub accent: Color,
    /// Muted accent - hover states, subtle highlights
    pub accent_muted: Color,

    /// Success - positive actions, confirmations
    pub success: Color,
    /// Warning - caution, attention needed
    pub warning: Color,
    /// Error - failures, destructive actions
    pub error: Color,
    /// Info - informational, neutral
    pub info: Color,

    /// Default border color
    pub border: Color,
    /// Focused/active border color
    pub border_focused: Color,
}

impl Theme {
    /// Light palette, matching the portal's stock stylesheet.
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(243, 243, 249),      // #f3f3f9 - Page gray
            surface: Color::Rgb(255, 255, 255),         // #ffffff - Card white
            surface_elevated: Color::Rgb(248, 248, 252),

            text_primary: Color::Rgb(33, 37, 41),       // #212529
            text_secondary: Color::Rgb(73, 80, 87),     // #495057
            text_muted: Color::Rgb(135, 138, 153),      // #878a99

            accent: Color::Rgb(64, 81, 137),            // #405189 - Portal indigo
            accent_muted: Color::Rgb(130, 142, 184),

            success: Color::Rgb(10, 179, 156),          // #0ab39c
            warning: Color::Rgb(247, 184, 75),          // #f7b84b
            error: Color::Rgb(240, 101, 72),            // #f06548
            info: Color::Rgb(41, 156, 219),             // #299cdb

            border: Color::Rgb(224, 226, 237),
            border_focused: Color::Rgb(64, 81, 137),
        }
    }

    /// Dark palette.
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(26, 29, 33),         // #1a1d21 - Dark slate
            surface: Color::Rgb(33, 37, 41),            // #212529
            surface_elevated: Color::Rgb(45, 50, 56),

            text_primary: Color::Rgb(206, 210, 218),    // #ced2da
            text_secondary: Color::Rgb(173, 178, 189),
            text_muted: Color::Rgb(135, 138, 153),      // #878a99

            accent: Color::Rgb(134, 151, 201),          // Lightened indigo
            accent_muted: Color::Rgb(94, 106, 146),

            success: Color::Rgb(10, 179, 156),
            warning: Color::Rgb(247, 184, 75),
            error: Color::Rgb(240, 101, 72),
            info: Color::Rgb(41, 156, 219),

            border: Color::Rgb(50, 56, 62),
            border_focused: Color::Rgb(134, 151, 201),
        }
    }

    /// Palette for the persisted theme mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

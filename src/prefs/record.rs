//! Preference record schema
//!
//! The one persisted entity: layout mode, sidebar size, and theme mode.
//! Each field is a closed enum; unrecognized persisted values fall back to
//! the field default at parse time, so downstream dispatch is always an
//! exhaustive match.

use serde::{Deserialize, Serialize};

/// Page layout variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Layout {
    #[default]
    Vertical,
    Horizontal,
    TwoColumn,
    SemiBox,
}

impl Layout {
    /// All variants, in customizer display order.
    pub const ALL: [Layout; 4] = [
        Layout::Vertical,
        Layout::Horizontal,
        Layout::TwoColumn,
        Layout::SemiBox,
    ];

    /// The persisted / control value for this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Vertical => "vertical",
            Layout::Horizontal => "horizontal",
            Layout::TwoColumn => "twocolumn",
            Layout::SemiBox => "semibox",
        }
    }

    /// Exact, case-sensitive parse. Control values that do not match any
    /// variant are ignored by the caller.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == value)
    }
}

impl From<String> for Layout {
    fn from(value: String) -> Self {
        Self::from_value(&value).unwrap_or_default()
    }
}

impl From<Layout> for String {
    fn from(value: Layout) -> Self {
        value.as_str().to_string()
    }
}

/// Sidebar size variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SidebarSize {
    #[default]
    Lg,
    Md,
    Sm,
    SmHover,
}

impl SidebarSize {
    /// All variants, in customizer display order.
    pub const ALL: [SidebarSize; 4] = [
        SidebarSize::Lg,
        SidebarSize::Md,
        SidebarSize::Sm,
        SidebarSize::SmHover,
    ];

    /// The persisted / control value for this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            SidebarSize::Lg => "lg",
            SidebarSize::Md => "md",
            SidebarSize::Sm => "sm",
            SidebarSize::SmHover => "sm-hover",
        }
    }

    /// Exact, case-sensitive parse.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == value)
    }
}

impl From<String> for SidebarSize {
    fn from(value: String) -> Self {
        Self::from_value(&value).unwrap_or_default()
    }
}

impl From<SidebarSize> for String {
    fn from(value: SidebarSize) -> Self {
        value.as_str().to_string()
    }
}

/// Light/dark theme mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// All variants, in customizer display order.
    pub const ALL: [ThemeMode; 2] = [ThemeMode::Light, ThemeMode::Dark];

    /// The persisted / control value for this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Exact, case-sensitive parse.
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == value)
    }
}

impl From<String> for ThemeMode {
    fn from(value: String) -> Self {
        Self::from_value(&value).unwrap_or_default()
    }
}

impl From<ThemeMode> for String {
    fn from(value: ThemeMode) -> Self {
        value.as_str().to_string()
    }
}

/// Identifier for one of the three preference fields. Form controls carry
/// string name attributes; they are mapped through this enum once, at the
/// edge, so field dispatch is a closed match everywhere else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrefField {
    Layout,
    SidebarSize,
    ThemeMode,
}

impl PrefField {
    /// Map a form control's name attribute to a field. Unknown names are
    /// silently ignored by callers.
    pub fn from_control_name(name: &str) -> Option<Self> {
        match name {
            "layout" => Some(PrefField::Layout),
            "sidebar-size" => Some(PrefField::SidebarSize),
            "theme-mode" => Some(PrefField::ThemeMode),
            _ => None,
        }
    }

    /// The control name attribute for this field.
    pub fn control_name(self) -> &'static str {
        match self {
            PrefField::Layout => "layout",
            PrefField::SidebarSize => "sidebar-size",
            PrefField::ThemeMode => "theme-mode",
        }
    }
}

/// The persisted preference record. Missing fields deserialize to their
/// defaults, so a partial blob merges over the default record per-field
/// rather than replacing it wholesale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceRecord {
    pub layout: Layout,
    pub sidebar_size: SidebarSize,
    pub theme_mode: ThemeMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let record = PreferenceRecord::default();
        assert_eq!(record.layout, Layout::Vertical);
        assert_eq!(record.sidebar_size, SidebarSize::Lg);
        assert_eq!(record.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn unrecognized_values_fall_back_to_defaults() {
        assert_eq!(Layout::from(String::from("diagonal")), Layout::Vertical);
        assert_eq!(SidebarSize::from(String::from("xl")), SidebarSize::Lg);
        assert_eq!(ThemeMode::from(String::from("sepia")), ThemeMode::Light);
    }

    #[test]
    fn exact_parse_is_case_sensitive() {
        assert_eq!(Layout::from_value("horizontal"), Some(Layout::Horizontal));
        assert_eq!(Layout::from_value("Horizontal"), None);
        assert_eq!(SidebarSize::from_value("sm-hover"), Some(SidebarSize::SmHover));
        assert_eq!(ThemeMode::from_value("DARK"), None);
    }

    #[test]
    fn partial_blob_merges_over_defaults() {
        let record: PreferenceRecord =
            serde_json::from_str(r#"{"layout":"horizontal"}"#).unwrap();
        assert_eq!(record.layout, Layout::Horizontal);
        assert_eq!(record.sidebar_size, SidebarSize::Lg);
        assert_eq!(record.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn serializes_with_original_field_names() {
        let raw = serde_json::to_string(&PreferenceRecord::default()).unwrap();
        assert!(raw.contains("\"layout\""));
        assert!(raw.contains("\"sidebarSize\""));
        assert!(raw.contains("\"themeMode\""));
    }

    #[test]
    fn unknown_field_name_maps_to_none() {
        assert_eq!(PrefField::from_control_name("layout"), Some(PrefField::Layout));
        assert_eq!(PrefField::from_control_name("font-size"), None);
    }
}

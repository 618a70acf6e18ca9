//! Observable page state
//!
//! The portal's visual contract lives here: root and body attributes,
//! mutually exclusive marker classes, and per-region inline styles. The
//! renderer reads this state the way the web portal's stylesheets read the
//! equivalent DOM attributes; nothing else in the crate touches the terminal
//! directly. Regions are optional, and every accessor treats an absent
//! region as a guarded no-op rather than an error.

use std::collections::{BTreeMap, BTreeSet};

/// Horizontal page units per terminal column. The original layout engine
/// worked in CSS pixels; one cell maps to roughly ten of them, so the
/// 991-unit breakpoint stays meaningful in a terminal.
pub const UNITS_PER_COL: u16 = 10;

/// One addressable region of the page: a class set plus inline styles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    classes: BTreeSet<String>,
    styles: BTreeMap<String, String>,
}

impl Element {
    /// Create an empty element.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class. Adding an existing class is a no-op.
    pub fn add_class(&mut self, class: impl Into<String>) {
        self.classes.insert(class.into());
    }

    /// Remove a class if present.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.remove(class);
    }

    /// Remove every class in `classes` that is present.
    pub fn remove_classes(&mut self, classes: &[&str]) {
        for class in classes {
            self.classes.remove(*class);
        }
    }

    /// Toggle a class, returning whether it is present afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.classes.remove(class) {
            false
        } else {
            self.classes.insert(class.to_string());
            true
        }
    }

    /// Whether the class is present.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Set an inline style, replacing any previous value.
    pub fn set_style(&mut self, name: &str, value: impl Into<String>) {
        self.styles.insert(name.to_string(), value.into());
    }

    /// Clear an inline style.
    pub fn remove_style(&mut self, name: &str) {
        self.styles.remove(name);
    }

    /// Current value of an inline style.
    pub fn style(&self, name: &str) -> Option<&str> {
        self.styles.get(name).map(String::as_str)
    }

    /// Whether the element is displayed (`display` style is not "none").
    pub fn displayed(&self) -> bool {
        self.style("display") != Some("none")
    }
}

/// The whole observable page: attributes, the body element, and the
/// optional regions the chrome and preference applier act on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageState {
    root_attrs: BTreeMap<String, String>,
    body_attrs: BTreeMap<String, String>,
    /// The body element. Always present.
    pub body: Element,
    /// Viewport width in page units (see [`UNITS_PER_COL`]).
    pub viewport_width: u16,
    /// The navigation sidebar (".app-menu" in the original markup).
    pub sidebar: Option<Element>,
    /// The main content region.
    pub main_content: Option<Element>,
    /// The inner page content region (styled by the semibox layout).
    pub page_content: Option<Element>,
    /// The backdrop overlay shown behind the mobile sidebar.
    pub overlay: Option<Element>,
    /// The horizontal navigation bar. Created on demand by the horizontal
    /// layout routine; absent until then.
    pub horizontal_menu: Option<Element>,
    /// The settings drawer panel.
    pub customizer_panel: Option<Element>,
}

impl PageState {
    /// A fully populated page, as the portal shell constructs at startup.
    pub fn new() -> Self {
        Self {
            root_attrs: BTreeMap::new(),
            body_attrs: BTreeMap::new(),
            body: Element::new(),
            viewport_width: 1280,
            sidebar: Some(Element::new()),
            main_content: Some(Element::new()),
            page_content: Some(Element::new()),
            overlay: Some(Element::new()),
            horizontal_menu: None,
            customizer_panel: Some(Element::new()),
        }
    }

    /// Set a root-level attribute.
    pub fn set_root_attr(&mut self, name: &str, value: impl Into<String>) {
        self.root_attrs.insert(name.to_string(), value.into());
    }

    /// Read a root-level attribute.
    pub fn root_attr(&self, name: &str) -> Option<&str> {
        self.root_attrs.get(name).map(String::as_str)
    }

    /// Set a body-level attribute.
    pub fn set_body_attr(&mut self, name: &str, value: impl Into<String>) {
        self.body_attrs.insert(name.to_string(), value.into());
    }

    /// Read a body-level attribute.
    pub fn body_attr(&self, name: &str) -> Option<&str> {
        self.body_attrs.get(name).map(String::as_str)
    }

    /// Ensure the horizontal menu region exists, returning it. Idempotent:
    /// an existing menu is returned as-is, never duplicated.
    pub fn ensure_horizontal_menu(&mut self) -> &mut Element {
        self.horizontal_menu.get_or_insert_with(|| {
            let mut menu = Element::new();
            menu.add_class("horizontal-menu");
            menu
        })
    }

    /// Update the viewport width from a terminal resize.
    pub fn set_viewport_cols(&mut self, cols: u16) {
        self.viewport_width = cols.saturating_mul(UNITS_PER_COL);
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_class_round_trips() {
        let mut el = Element::new();
        assert!(el.toggle_class("show"));
        assert!(el.has_class("show"));
        assert!(!el.toggle_class("show"));
        assert!(!el.has_class("show"));
    }

    #[test]
    fn styles_overwrite() {
        let mut el = Element::new();
        el.set_style("margin-left", "250px");
        el.set_style("margin-left", "0");
        assert_eq!(el.style("margin-left"), Some("0"));
    }

    #[test]
    fn horizontal_menu_created_once() {
        let mut page = PageState::new();
        assert!(page.horizontal_menu.is_none());

        page.ensure_horizontal_menu().set_style("display", "block");
        page.ensure_horizontal_menu();
        let menu = page.horizontal_menu.as_ref().unwrap();
        assert!(menu.has_class("horizontal-menu"));
        // A second ensure must not reset the element.
        assert_eq!(menu.style("display"), Some("block"));
    }

    #[test]
    fn viewport_maps_cols_to_units() {
        let mut page = PageState::new();
        page.set_viewport_cols(80);
        assert_eq!(page.viewport_width, 800);
        page.set_viewport_cols(120);
        assert_eq!(page.viewport_width, 1200);
    }
}

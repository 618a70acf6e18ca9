//! Preference application
//!
//! Owns the active preference record and maps it onto the page state:
//! root/body attributes, the layout and sidebar-size marker classes, and the
//! per-layout inline styles. Applying is deterministic and idempotent, so a
//! change handler can always save-then-apply without tracking deltas.

use tracing::{debug, warn};

use crate::page::PageState;
use crate::prefs::record::{Layout, PrefField, PreferenceRecord, SidebarSize, ThemeMode};
use crate::prefs::store::{PrefStore, STORE_KEY};

/// The mutually exclusive body marker classes, one per layout variant.
const LAYOUT_CLASSES: [&str; 4] = [
    "vertical-layout",
    "horizontal-layout",
    "twocolumn-layout",
    "semibox-layout",
];

/// The mutually exclusive sidebar size marker classes.
const SIDEBAR_SIZE_CLASSES: [&str; 4] = [
    "sidebar-lg",
    "sidebar-md",
    "sidebar-sm",
    "sidebar-sm-hover",
];

/// Loads, persists, and applies the preference record. Sole owner of the
/// record; no other component reads or writes it.
pub struct PreferenceApplier<S: PrefStore> {
    record: PreferenceRecord,
    store: S,
}

impl<S: PrefStore> PreferenceApplier<S> {
    /// Load the persisted record, merging it over defaults field-by-field.
    /// Missing or unparsable storage never fails; it reads as defaults.
    pub fn load(store: S) -> Self {
        let record = match store.get(STORE_KEY) {
            Some(raw) => match serde_json::from_str::<PreferenceRecord>(&raw) {
                Ok(record) => record,
                Err(err) => {
                    warn!("discarding unparsable preference blob: {err}");
                    PreferenceRecord::default()
                }
            },
            None => PreferenceRecord::default(),
        };
        debug!(?record, "preferences loaded");
        Self { record, store }
    }

    /// The active record.
    pub fn record(&self) -> &PreferenceRecord {
        &self.record
    }

    /// Persist the active record. Best-effort; a failed write degrades to
    /// session-only preferences.
    pub fn save(&mut self) {
        if let Ok(raw) = serde_json::to_string(&self.record) {
            self.store.set(STORE_KEY, &raw);
        }
    }

    /// Map the active record onto the page.
    pub fn apply(&self, page: &mut PageState) {
        page.set_root_attr("data-layout", self.record.layout.as_str());
        page.set_root_attr("data-bs-theme", self.record.theme_mode.as_str());
        page.set_body_attr("data-sidebar-size", self.record.sidebar_size.as_str());

        self.apply_layout_classes(page);
        self.apply_sidebar_behavior(page);
    }

    /// Update one field from a form control value, then persist and
    /// re-apply, in that order. A value outside the field's enumerated set
    /// is silently ignored. Returns whether the change was accepted.
    pub fn set_field(&mut self, field: PrefField, value: &str, page: &mut PageState) -> bool {
        let accepted = match field {
            PrefField::Layout => match Layout::from_value(value) {
                Some(layout) => {
                    self.record.layout = layout;
                    true
                }
                None => false,
            },
            PrefField::SidebarSize => match SidebarSize::from_value(value) {
                Some(size) => {
                    self.record.sidebar_size = size;
                    true
                }
                None => false,
            },
            PrefField::ThemeMode => match ThemeMode::from_value(value) {
                Some(mode) => {
                    self.record.theme_mode = mode;
                    true
                }
                None => false,
            },
        };

        if accepted {
            debug!(field = field.control_name(), value, "preference changed");
            self.save();
            self.apply(page);
        }
        accepted
    }

    /// Restore the hardcoded defaults, persist, and re-apply. The caller
    /// re-syncs any reflecting controls and surfaces the success alert.
    pub fn reset(&mut self, page: &mut PageState) {
        self.record = PreferenceRecord::default();
        self.save();
        self.apply(page);
    }

    /// Swap the body layout marker class and dispatch to exactly one layout
    /// setup routine.
    fn apply_layout_classes(&self, page: &mut PageState) {
        page.body.remove_classes(&LAYOUT_CLASSES);
        page.body.add_class(format!("{}-layout", self.record.layout.as_str()));

        match self.record.layout {
            Layout::Vertical => setup_vertical(page),
            Layout::Horizontal => setup_horizontal(page),
            Layout::TwoColumn => setup_two_column(page),
            Layout::SemiBox => setup_semi_box(page),
        }
    }

    /// Swap the sidebar size marker class. Hover behavior is keyed off the
    /// "sidebar-sm-hover" marker by the sidebar chrome; a re-apply also
    /// drops any expanded marker left over from a previous hover session.
    fn apply_sidebar_behavior(&self, page: &mut PageState) {
        if let Some(sidebar) = page.sidebar.as_mut() {
            sidebar.remove_classes(&SIDEBAR_SIZE_CLASSES);
            sidebar.remove_class("sidebar-expanded");
            sidebar.add_class(format!("sidebar-{}", self.record.sidebar_size.as_str()));
        }
    }
}

fn setup_vertical(page: &mut PageState) {
    if let Some(sidebar) = page.sidebar.as_mut() {
        sidebar.set_style("display", "block");
    }
    if let Some(main) = page.main_content.as_mut() {
        main.set_style("margin-left", "250px");
        main.set_style("margin-top", "70px");
    }
}

fn setup_horizontal(page: &mut PageState) {
    if let Some(sidebar) = page.sidebar.as_mut() {
        sidebar.set_style("display", "none");
    }
    if let Some(main) = page.main_content.as_mut() {
        main.set_style("margin-left", "0");
        // Topbar plus the horizontal menu row.
        main.set_style("margin-top", "120px");
    }
    page.ensure_horizontal_menu().set_style("display", "block");
}

fn setup_two_column(page: &mut PageState) {
    if let Some(sidebar) = page.sidebar.as_mut() {
        sidebar.set_style("display", "block");
    }
    if let Some(main) = page.main_content.as_mut() {
        main.set_style("margin-left", "300px");
        main.set_style("margin-top", "70px");
    }
}

fn setup_semi_box(page: &mut PageState) {
    if let Some(main) = page.main_content.as_mut() {
        main.set_style("margin-left", "250px");
        main.set_style("margin-top", "70px");
        main.set_style("padding", "24px");
        main.set_style("background", "#f3f3f9");
    }
    if let Some(content) = page.page_content.as_mut() {
        content.set_style("background", "#fff");
        content.set_style("border-radius", "8px");
        content.set_style("box-shadow", "0 2px 4px rgba(15, 34, 58, 0.12)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::store::MemoryStore;

    fn applier_with(raw: Option<&str>) -> PreferenceApplier<MemoryStore> {
        let store = match raw {
            Some(raw) => MemoryStore::with_entry(STORE_KEY, raw),
            None => MemoryStore::new(),
        };
        PreferenceApplier::load(store)
    }

    #[test]
    fn empty_storage_loads_defaults() {
        let applier = applier_with(None);
        assert_eq!(*applier.record(), PreferenceRecord::default());
    }

    #[test]
    fn partial_blob_merges_per_field() {
        let applier = applier_with(Some(r#"{"layout":"horizontal"}"#));
        assert_eq!(applier.record().layout, Layout::Horizontal);
        assert_eq!(applier.record().sidebar_size, SidebarSize::Lg);
        assert_eq!(applier.record().theme_mode, ThemeMode::Light);
    }

    #[test]
    fn malformed_blob_loads_defaults() {
        let applier = applier_with(Some("{\"layout\": 12"));
        assert_eq!(*applier.record(), PreferenceRecord::default());
    }

    #[test]
    fn save_then_fresh_load_round_trips_every_combination() {
        for layout in Layout::ALL {
            for size in SidebarSize::ALL {
                for mode in ThemeMode::ALL {
                    let mut page = PageState::new();
                    let mut applier = applier_with(None);
                    applier.set_field(PrefField::Layout, layout.as_str(), &mut page);
                    applier.set_field(PrefField::SidebarSize, size.as_str(), &mut page);
                    applier.set_field(PrefField::ThemeMode, mode.as_str(), &mut page);

                    // Simulate a new page load over the same store.
                    let reloaded = PreferenceApplier::load(applier.store);
                    assert_eq!(reloaded.record().layout, layout);
                    assert_eq!(reloaded.record().sidebar_size, size);
                    assert_eq!(reloaded.record().theme_mode, mode);
                }
            }
        }
    }

    #[test]
    fn apply_sets_attributes_and_marker_classes() {
        let mut page = PageState::new();
        let applier = applier_with(Some(
            r#"{"layout":"twocolumn","sidebarSize":"md","themeMode":"dark"}"#,
        ));
        applier.apply(&mut page);

        assert_eq!(page.root_attr("data-layout"), Some("twocolumn"));
        assert_eq!(page.root_attr("data-bs-theme"), Some("dark"));
        assert_eq!(page.body_attr("data-sidebar-size"), Some("md"));
        assert!(page.body.has_class("twocolumn-layout"));
        assert!(!page.body.has_class("vertical-layout"));

        let sidebar = page.sidebar.as_ref().unwrap();
        assert!(sidebar.has_class("sidebar-md"));
        assert!(!sidebar.has_class("sidebar-lg"));
    }

    #[test]
    fn apply_is_idempotent() {
        let mut applier = applier_with(None);
        let mut page = PageState::new();
        applier.set_field(PrefField::Layout, "semibox", &mut page);

        let once = page.clone();
        applier.apply(&mut page);
        assert_eq!(page, once);
    }

    #[test]
    fn layout_change_swaps_marker_class() {
        let mut applier = applier_with(None);
        let mut page = PageState::new();
        applier.apply(&mut page);
        assert!(page.body.has_class("vertical-layout"));

        applier.set_field(PrefField::Layout, "horizontal", &mut page);
        assert!(page.body.has_class("horizontal-layout"));
        assert!(!page.body.has_class("vertical-layout"));
        let marker_count = LAYOUT_CLASSES
            .iter()
            .filter(|c| page.body.has_class(c))
            .count();
        assert_eq!(marker_count, 1);
    }

    #[test]
    fn unrecognized_layout_value_dispatches_to_vertical() {
        // An out-of-set persisted value falls back at the parse boundary,
        // so the dispatch runs the vertical (default) routine.
        let applier = applier_with(Some(r#"{"layout":"diagonal"}"#));
        assert_eq!(applier.record().layout, Layout::Vertical);

        let mut page = PageState::new();
        applier.apply(&mut page);
        assert!(page.body.has_class("vertical-layout"));
        let main = page.main_content.as_ref().unwrap();
        assert_eq!(main.style("margin-left"), Some("250px"));
        assert_eq!(main.style("margin-top"), Some("70px"));
    }

    #[test]
    fn horizontal_layout_creates_menu_once() {
        let mut applier = applier_with(None);
        let mut page = PageState::new();

        applier.set_field(PrefField::Layout, "horizontal", &mut page);
        assert!(page.horizontal_menu.is_some());
        assert_eq!(
            page.horizontal_menu.as_ref().unwrap().style("display"),
            Some("block")
        );

        // Re-applying only toggles visibility, never duplicates.
        applier.apply(&mut page);
        assert!(page.horizontal_menu.as_ref().unwrap().has_class("horizontal-menu"));

        let main = page.main_content.as_ref().unwrap();
        assert_eq!(main.style("margin-left"), Some("0"));
        assert_eq!(main.style("margin-top"), Some("120px"));
        assert_eq!(page.sidebar.as_ref().unwrap().style("display"), Some("none"));
    }

    #[test]
    fn semibox_layout_styles_content_box() {
        let mut applier = applier_with(None);
        let mut page = PageState::new();
        applier.set_field(PrefField::Layout, "semibox", &mut page);

        let main = page.main_content.as_ref().unwrap();
        assert_eq!(main.style("padding"), Some("24px"));
        assert_eq!(main.style("background"), Some("#f3f3f9"));
        let content = page.page_content.as_ref().unwrap();
        assert_eq!(content.style("background"), Some("#fff"));
        assert_eq!(content.style("border-radius"), Some("8px"));
    }

    #[test]
    fn set_field_rejects_out_of_set_values() {
        let mut applier = applier_with(None);
        let mut page = PageState::new();

        assert!(!applier.set_field(PrefField::Layout, "Vertical", &mut page));
        assert!(!applier.set_field(PrefField::ThemeMode, "solarized", &mut page));
        assert_eq!(*applier.record(), PreferenceRecord::default());
        // Nothing was persisted either.
        assert_eq!(applier.store.get(STORE_KEY), None);
    }

    #[test]
    fn set_field_persists_before_reload() {
        let mut applier = applier_with(None);
        let mut page = PageState::new();
        assert!(applier.set_field(PrefField::ThemeMode, "dark", &mut page));

        let raw = applier.store.get(STORE_KEY).unwrap();
        assert!(raw.contains("\"themeMode\":\"dark\""));
        assert_eq!(page.root_attr("data-bs-theme"), Some("dark"));
    }

    #[test]
    fn reset_restores_default_record_exactly() {
        let mut applier = applier_with(Some(
            r#"{"layout":"semibox","sidebarSize":"sm-hover","themeMode":"dark"}"#,
        ));
        let mut page = PageState::new();
        applier.apply(&mut page);

        applier.reset(&mut page);
        assert_eq!(*applier.record(), PreferenceRecord::default());
        assert_eq!(page.root_attr("data-layout"), Some("vertical"));
        assert_eq!(page.body_attr("data-sidebar-size"), Some("lg"));

        let reloaded = PreferenceApplier::load(applier.store);
        assert_eq!(*reloaded.record(), PreferenceRecord::default());
    }

    #[test]
    fn absent_regions_are_guarded_noops() {
        let mut page = PageState::new();
        page.sidebar = None;
        page.main_content = None;
        page.page_content = None;

        let applier = applier_with(Some(r#"{"layout":"semibox","sidebarSize":"sm"}"#));
        // Must not panic; body attributes still land.
        applier.apply(&mut page);
        assert!(page.body.has_class("semibox-layout"));
    }
}

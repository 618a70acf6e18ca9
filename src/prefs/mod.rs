//! Preference persistence and application
//!
//! The preference record, its storage, and the applier that maps it onto
//! the page state.

pub mod applier;
pub mod record;
pub mod store;

pub use applier::PreferenceApplier;
pub use record::{Layout, PrefField, PreferenceRecord, SidebarSize, ThemeMode};
pub use store::{FileStore, MemoryStore, PrefStore, STORE_KEY};

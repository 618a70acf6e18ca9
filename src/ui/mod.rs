//! Portal chrome widgets

pub mod animation;
pub mod customizer;
pub mod dialog;
pub mod notification;
pub mod panels;
pub mod search;
pub mod sidebar;
pub mod status_bar;
pub mod tooltip;

pub use customizer::Customizer;
pub use dialog::{ConfirmDialog, DialogResult};
pub use notification::{NotificationManager, Severity};
pub use search::SearchBox;
pub use sidebar::SidebarChrome;
pub use tooltip::TooltipRegistry;

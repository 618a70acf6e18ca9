//! Navigation sidebar chrome
//!
//! Wires the sidebar's observable state: the body "sidebar-enable" flag,
//! the mobile "show" classes on the sidebar and backdrop overlay, and the
//! hover expand/collapse behavior of the sm-hover size. All of it acts on
//! the page model; rendering reads the same model back.

use std::time::{Duration, Instant};

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph};

use crate::page::PageState;
use crate::schedule::{Scheduler, Task, TaskHandle};
use crate::themes::Theme;

/// Viewport widths at or below this toggle the mobile "show" classes.
pub const MOBILE_BREAKPOINT: u16 = 991;

/// Grace period before a hover-mode sidebar collapses after pointer-leave.
pub const HOVER_COLLAPSE_DELAY: Duration = Duration::from_millis(300);

/// Marker class present while a hover-mode sidebar is expanded.
const EXPANDED_CLASS: &str = "sidebar-expanded";

/// Navigation entry shown in the sidebar.
#[derive(Clone, Debug)]
pub struct NavItem {
    pub label: &'static str,
    pub shortcut: char,
}

/// The portal's navigation sections.
pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { label: "Dashboard", shortcut: '1' },
    NavItem { label: "Inventory", shortcut: '2' },
    NavItem { label: "AskGT", shortcut: '3' },
    NavItem { label: "Announcements", shortcut: '4' },
    NavItem { label: "Automation", shortcut: '5' },
    NavItem { label: "Performance", shortcut: '6' },
];

/// Sidebar event wiring and render state.
#[derive(Default)]
pub struct SidebarChrome {
    pending_collapse: Option<TaskHandle>,
    pointer_inside: bool,
    selected: usize,
}

impl SidebarChrome {
    /// Create the chrome with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hamburger trigger: toggle the body flag, and below the breakpoint
    /// also toggle the mobile "show" classes on sidebar and overlay.
    pub fn toggle(&mut self, page: &mut PageState) {
        page.body.toggle_class("sidebar-enable");

        if page.viewport_width <= MOBILE_BREAKPOINT {
            if let Some(sidebar) = page.sidebar.as_mut() {
                sidebar.toggle_class("show");
            }
            if let Some(overlay) = page.overlay.as_mut() {
                overlay.toggle_class("show");
            }
        }
    }

    /// Backdrop click: force-close everything, independent of viewport
    /// width. Removes, never toggles.
    pub fn overlay_clicked(&mut self, page: &mut PageState) {
        page.body.remove_class("sidebar-enable");
        if let Some(sidebar) = page.sidebar.as_mut() {
            sidebar.remove_class("show");
        }
        if let Some(overlay) = page.overlay.as_mut() {
            overlay.remove_class("show");
        }
    }

    /// Whether the hover expand/collapse behavior is active (the sidebar
    /// carries the sm-hover size marker).
    fn hover_enabled(page: &PageState) -> bool {
        page.sidebar
            .as_ref()
            .is_some_and(|s| s.has_class("sidebar-sm-hover"))
    }

    /// Pointer entered the sidebar: cancel any pending collapse and expand
    /// immediately.
    pub fn pointer_enter(&mut self, page: &mut PageState, scheduler: &mut Scheduler) {
        self.pointer_inside = true;
        if !Self::hover_enabled(page) {
            return;
        }
        if let Some(handle) = self.pending_collapse.take() {
            scheduler.cancel(handle);
        }
        if let Some(sidebar) = page.sidebar.as_mut() {
            sidebar.add_class(EXPANDED_CLASS);
        }
    }

    /// Pointer left the sidebar: schedule the collapse after the grace
    /// period. A re-enter before it fires cancels it.
    pub fn pointer_leave(&mut self, now: Instant, page: &mut PageState, scheduler: &mut Scheduler) {
        self.pointer_inside = false;
        if !Self::hover_enabled(page) {
            return;
        }
        // A newer leave supersedes any collapse still pending.
        if let Some(handle) = self.pending_collapse.take() {
            scheduler.cancel(handle);
        }
        self.pending_collapse =
            Some(scheduler.schedule(now, HOVER_COLLAPSE_DELAY, Task::CollapseSidebar));
    }

    /// The sidebar size preference changed: any collapse scheduled for the
    /// previous size is stale and must not fire against the new one. The
    /// applier drops the expanded marker itself when it re-applies.
    pub fn size_changed(&mut self, scheduler: &mut Scheduler) {
        if let Some(handle) = self.pending_collapse.take() {
            scheduler.cancel(handle);
        }
        self.pointer_inside = false;
    }

    /// The scheduled collapse fired: drop the expanded marker.
    pub fn collapse_now(&mut self, page: &mut PageState) {
        self.pending_collapse = None;
        if let Some(sidebar) = page.sidebar.as_mut() {
            sidebar.remove_class(EXPANDED_CLASS);
        }
    }

    /// Track pointer position against the rendered sidebar area, emitting
    /// enter/leave transitions.
    pub fn pointer_moved(
        &mut self,
        now: Instant,
        inside: bool,
        page: &mut PageState,
        scheduler: &mut Scheduler,
    ) {
        if inside && !self.pointer_inside {
            self.pointer_enter(page, scheduler);
        } else if !inside && self.pointer_inside {
            self.pointer_leave(now, page, scheduler);
        }
    }

    /// Select a navigation entry.
    pub fn select(&mut self, index: usize) {
        if index < NAV_ITEMS.len() {
            self.selected = index;
        }
    }

    /// Rendered width in columns, derived from the size marker classes and
    /// the expanded state.
    pub fn width(&self, page: &PageState) -> u16 {
        let Some(sidebar) = page.sidebar.as_ref() else {
            return 0;
        };
        if !sidebar.displayed() {
            return 0;
        }
        if sidebar.has_class("sidebar-md") {
            20
        } else if sidebar.has_class("sidebar-sm") {
            12
        } else if sidebar.has_class("sidebar-sm-hover") {
            if sidebar.has_class(EXPANDED_CLASS) {
                25
            } else {
                12
            }
        } else {
            // lg and anything unmarked
            25
        }
    }

    /// Render the sidebar into `area`, returning the area actually used.
    pub fn render(&self, frame: &mut Frame, area: Rect, page: &PageState, theme: &Theme) -> Rect {
        let width = self.width(page).min(area.width);
        if width == 0 {
            return Rect::new(area.x, area.y, 0, area.height);
        }
        let sidebar_area = Rect::new(area.x, area.y, width, area.height);

        let enabled = page.body.has_class("sidebar-enable");
        let border_color = if enabled { theme.border_focused } else { theme.border };

        let block = Block::default()
            .title(" Portal ")
            .title_style(Style::default().fg(theme.accent).bold())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.surface));
        let inner = block.inner(sidebar_area);
        frame.render_widget(block, sidebar_area);

        let compact = width < 16;
        let items: Vec<ListItem> = NAV_ITEMS
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let label = if compact {
                    format!(" {}", item.shortcut)
                } else {
                    format!(" [{}] {}", item.shortcut, item.label)
                };
                let style = if i == self.selected {
                    Style::default().fg(theme.accent).bold()
                } else {
                    Style::default().fg(theme.text_secondary)
                };
                ListItem::new(label).style(style)
            })
            .collect();
        frame.render_widget(List::new(items), inner);

        // Size marker at the bottom edge for quick diagnosis.
        if inner.height > NAV_ITEMS.len() as u16 {
            let size = page.body_attr("data-sidebar-size").unwrap_or("lg");
            let footer = Rect::new(inner.x, inner.bottom().saturating_sub(1), inner.width, 1);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!(" {size}"),
                    Style::default().fg(theme.text_muted),
                )),
                footer,
            );
        }

        sidebar_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::{MemoryStore, PrefField, PreferenceApplier};

    fn hover_page() -> (PageState, SidebarChrome, Scheduler) {
        let mut page = PageState::new();
        let mut applier = PreferenceApplier::load(MemoryStore::new());
        applier.set_field(PrefField::SidebarSize, "sm-hover", &mut page);
        (page, SidebarChrome::new(), Scheduler::new())
    }

    #[test]
    fn toggle_below_breakpoint_toggles_show_classes() {
        let mut page = PageState::new();
        page.set_viewport_cols(80); // 800 units
        let mut chrome = SidebarChrome::new();

        chrome.toggle(&mut page);
        assert!(page.body.has_class("sidebar-enable"));
        assert!(page.sidebar.as_ref().unwrap().has_class("show"));
        assert!(page.overlay.as_ref().unwrap().has_class("show"));

        chrome.toggle(&mut page);
        assert!(!page.body.has_class("sidebar-enable"));
        assert!(!page.sidebar.as_ref().unwrap().has_class("show"));
        assert!(!page.overlay.as_ref().unwrap().has_class("show"));
    }

    #[test]
    fn toggle_above_breakpoint_only_flips_body_flag() {
        let mut page = PageState::new();
        page.set_viewport_cols(120); // 1200 units
        let mut chrome = SidebarChrome::new();

        chrome.toggle(&mut page);
        assert!(page.body.has_class("sidebar-enable"));
        assert!(!page.sidebar.as_ref().unwrap().has_class("show"));
        assert!(!page.overlay.as_ref().unwrap().has_class("show"));
    }

    #[test]
    fn overlay_click_force_closes_regardless_of_width() {
        let mut page = PageState::new();
        page.set_viewport_cols(120);
        let mut chrome = SidebarChrome::new();

        // Get into an inconsistent-looking state on purpose.
        chrome.toggle(&mut page);
        page.sidebar.as_mut().unwrap().add_class("show");
        page.overlay.as_mut().unwrap().add_class("show");

        chrome.overlay_clicked(&mut page);
        assert!(!page.body.has_class("sidebar-enable"));
        assert!(!page.sidebar.as_ref().unwrap().has_class("show"));
        assert!(!page.overlay.as_ref().unwrap().has_class("show"));
    }

    #[test]
    fn hover_expands_immediately_and_collapses_after_delay() {
        let (mut page, mut chrome, mut scheduler) = hover_page();
        let base = Instant::now();

        chrome.pointer_enter(&mut page, &mut scheduler);
        assert!(page.sidebar.as_ref().unwrap().has_class(EXPANDED_CLASS));

        chrome.pointer_leave(base, &mut page, &mut scheduler);
        // Still expanded until the grace period elapses.
        assert!(page.sidebar.as_ref().unwrap().has_class(EXPANDED_CLASS));

        for task in scheduler.fire_due(base + HOVER_COLLAPSE_DELAY) {
            assert_eq!(task, Task::CollapseSidebar);
            chrome.collapse_now(&mut page);
        }
        assert!(!page.sidebar.as_ref().unwrap().has_class(EXPANDED_CLASS));
    }

    #[test]
    fn reenter_cancels_pending_collapse() {
        let (mut page, mut chrome, mut scheduler) = hover_page();
        let base = Instant::now();

        chrome.pointer_enter(&mut page, &mut scheduler);
        chrome.pointer_leave(base, &mut page, &mut scheduler);
        // Re-enter before the grace period runs out.
        chrome.pointer_enter(&mut page, &mut scheduler);

        assert!(scheduler.fire_due(base + HOVER_COLLAPSE_DELAY).is_empty());
        assert!(page.sidebar.as_ref().unwrap().has_class(EXPANDED_CLASS));
    }

    #[test]
    fn size_reapply_clears_stale_expanded_marker() {
        let (mut page, mut chrome, mut scheduler) = hover_page();
        let mut applier = PreferenceApplier::load(MemoryStore::new());
        applier.set_field(PrefField::SidebarSize, "sm-hover", &mut page);

        chrome.pointer_enter(&mut page, &mut scheduler);
        assert!(page.sidebar.as_ref().unwrap().has_class(EXPANDED_CLASS));

        // Switch away and back while the pointer never returns.
        applier.set_field(PrefField::SidebarSize, "lg", &mut page);
        assert!(!page.sidebar.as_ref().unwrap().has_class(EXPANDED_CLASS));
        applier.set_field(PrefField::SidebarSize, "sm-hover", &mut page);
        assert!(!page.sidebar.as_ref().unwrap().has_class(EXPANDED_CLASS));
        assert_eq!(chrome.width(&page), 12);
    }

    #[test]
    fn size_change_cancels_pending_collapse() {
        let (mut page, mut chrome, mut scheduler) = hover_page();
        let base = Instant::now();

        chrome.pointer_enter(&mut page, &mut scheduler);
        chrome.pointer_leave(base, &mut page, &mut scheduler);

        chrome.size_changed(&mut scheduler);
        assert!(scheduler.is_empty());
        assert!(scheduler.fire_due(base + HOVER_COLLAPSE_DELAY).is_empty());
    }

    #[test]
    fn repeated_leave_replaces_pending_collapse() {
        let (mut page, mut chrome, mut scheduler) = hover_page();
        let base = Instant::now();

        chrome.pointer_enter(&mut page, &mut scheduler);
        chrome.pointer_leave(base, &mut page, &mut scheduler);
        chrome.pointer_leave(base + Duration::from_millis(100), &mut page, &mut scheduler);

        // Re-entering must cancel the one live collapse; nothing may leak
        // from the superseded leave.
        chrome.pointer_enter(&mut page, &mut scheduler);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn hover_is_inert_for_other_sizes() {
        let mut page = PageState::new();
        let mut applier = PreferenceApplier::load(MemoryStore::new());
        applier.set_field(PrefField::SidebarSize, "lg", &mut page);
        let mut chrome = SidebarChrome::new();
        let mut scheduler = Scheduler::new();

        chrome.pointer_enter(&mut page, &mut scheduler);
        assert!(!page.sidebar.as_ref().unwrap().has_class(EXPANDED_CLASS));
        chrome.pointer_leave(Instant::now(), &mut page, &mut scheduler);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn width_follows_size_markers() {
        let mut page = PageState::new();
        let mut applier = PreferenceApplier::load(MemoryStore::new());
        let chrome = SidebarChrome::new();

        applier.set_field(PrefField::SidebarSize, "lg", &mut page);
        assert_eq!(chrome.width(&page), 25);
        applier.set_field(PrefField::SidebarSize, "sm", &mut page);
        assert_eq!(chrome.width(&page), 12);

        // Hidden by the horizontal layout.
        applier.set_field(PrefField::Layout, "horizontal", &mut page);
        assert_eq!(chrome.width(&page), 0);
    }
}

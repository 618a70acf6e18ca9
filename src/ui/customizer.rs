//! Theme customizer drawer
//!
//! A right-edge settings drawer with one radio group per preference field.
//! Opening adds the "show" marker class to the panel and locks body scroll;
//! closing reverses both. The groups are synced from the live preference
//! record so the checked option always reflects persisted state.

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::page::PageState;
use crate::prefs::{Layout, PrefField, PreferenceRecord, SidebarSize, ThemeMode};
use crate::themes::Theme;

/// One radio group in the drawer.
struct ControlGroup {
    field: PrefField,
    label: &'static str,
    options: Vec<&'static str>,
    selected: &'static str,
}

/// Hit area reported by the drawer render, mapping a cell back to the
/// control it represents.
pub struct OptionHit {
    pub control_name: &'static str,
    pub value: &'static str,
    pub area: Rect,
}

/// The settings drawer.
pub struct Customizer {
    groups: Vec<ControlGroup>,
    /// Flat cursor over (group, option) pairs.
    cursor: usize,
}

impl Customizer {
    /// Build the drawer with the three preference groups in display order.
    pub fn new() -> Self {
        let groups = vec![
            ControlGroup {
                field: PrefField::Layout,
                label: "Layout",
                options: Layout::ALL.iter().map(|v| v.as_str()).collect(),
                selected: Layout::default().as_str(),
            },
            ControlGroup {
                field: PrefField::SidebarSize,
                label: "Sidebar Size",
                options: SidebarSize::ALL.iter().map(|v| v.as_str()).collect(),
                selected: SidebarSize::default().as_str(),
            },
            ControlGroup {
                field: PrefField::ThemeMode,
                label: "Theme Mode",
                options: ThemeMode::ALL.iter().map(|v| v.as_str()).collect(),
                selected: ThemeMode::default().as_str(),
            },
        ];
        Self { groups, cursor: 0 }
    }

    /// Open the drawer: show the panel and lock body scroll.
    pub fn open(&self, page: &mut PageState) {
        if let Some(panel) = page.customizer_panel.as_mut() {
            panel.add_class("show");
        }
        page.body.set_style("overflow", "hidden");
    }

    /// Close the drawer and release the scroll lock.
    pub fn close(&self, page: &mut PageState) {
        if let Some(panel) = page.customizer_panel.as_mut() {
            panel.remove_class("show");
        }
        page.body.remove_style("overflow");
    }

    /// Whether the drawer is currently shown.
    pub fn is_open(&self, page: &PageState) -> bool {
        page.customizer_panel
            .as_ref()
            .is_some_and(|panel| panel.has_class("show"))
    }

    /// Mark the checked option in every group from the live record. Groups
    /// whose field the record no longer carries would simply stay as-is.
    pub fn sync_controls(&mut self, record: &PreferenceRecord) {
        for group in &mut self.groups {
            group.selected = match group.field {
                PrefField::Layout => record.layout.as_str(),
                PrefField::SidebarSize => record.sidebar_size.as_str(),
                PrefField::ThemeMode => record.theme_mode.as_str(),
            };
        }
    }

    /// The checked value of one group, for assertions and the status bar.
    pub fn selected(&self, field: PrefField) -> Option<&'static str> {
        self.groups
            .iter()
            .find(|g| g.field == field)
            .map(|g| g.selected)
    }

    fn option_count(&self) -> usize {
        self.groups.iter().map(|g| g.options.len()).sum()
    }

    /// Move the cursor to the next option, wrapping.
    pub fn next(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    /// Move the cursor to the previous option, wrapping.
    pub fn prev(&mut self) {
        let count = self.option_count();
        if count > 0 {
            self.cursor = (self.cursor + count - 1) % count;
        }
    }

    /// The (control name, value) pair under the cursor.
    pub fn activate(&self) -> Option<(&'static str, &'static str)> {
        let mut idx = self.cursor;
        for group in &self.groups {
            if idx < group.options.len() {
                return Some((group.field.control_name(), group.options[idx]));
            }
            idx -= group.options.len();
        }
        None
    }

    /// The drawer's screen area when rendered over `area`. Clicks outside
    /// it dismiss the drawer, like the web portal's backdrop.
    pub fn drawer_area(&self, area: Rect) -> Rect {
        let width = 32.min(area.width);
        Rect::new(area.right().saturating_sub(width), area.y, width, area.height)
    }

    /// Render the drawer over the right edge of `area` when open. Returns
    /// the option hit areas for mouse dispatch.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        page: &PageState,
        theme: &Theme,
    ) -> Vec<OptionHit> {
        if !self.is_open(page) {
            return Vec::new();
        }

        let drawer = self.drawer_area(area);

        frame.render_widget(Clear, drawer);
        let block = Block::default()
            .title(" Customizer ")
            .title_style(Style::default().fg(theme.accent).bold())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border_focused))
            .style(Style::default().bg(theme.surface_elevated));
        let inner = block.inner(drawer);
        frame.render_widget(block, drawer);

        let mut hits = Vec::new();
        let mut y = inner.y;
        let mut flat = 0usize;

        for group in &self.groups {
            if y >= inner.bottom() {
                break;
            }
            frame.render_widget(
                Paragraph::new(Span::styled(
                    group.label,
                    Style::default().fg(theme.text_secondary).bold(),
                )),
                Rect::new(inner.x, y, inner.width, 1),
            );
            y += 1;

            for &value in &group.options {
                if y >= inner.bottom() {
                    break;
                }
                let row = Rect::new(inner.x, y, inner.width, 1);
                let checked = group.selected == value;
                let under_cursor = flat == self.cursor;
                let marker = if checked { "(o)" } else { "( )" };
                let style = if under_cursor {
                    Style::default().fg(theme.background).bg(theme.accent)
                } else if checked {
                    Style::default().fg(theme.accent)
                } else {
                    Style::default().fg(theme.text_primary)
                };
                frame.render_widget(
                    Paragraph::new(Span::styled(format!(" {marker} {value}"), style)),
                    row,
                );
                hits.push(OptionHit {
                    control_name: group.field.control_name(),
                    value,
                    area: row,
                });
                flat += 1;
                y += 1;
            }
            y += 1; // blank line between groups
        }

        hits
    }
}

impl Default for Customizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_shows_panel_and_locks_scroll() {
        let customizer = Customizer::new();
        let mut page = PageState::new();

        customizer.open(&mut page);
        assert!(customizer.is_open(&page));
        assert_eq!(page.body.style("overflow"), Some("hidden"));

        customizer.close(&mut page);
        assert!(!customizer.is_open(&page));
        assert_eq!(page.body.style("overflow"), None);
    }

    #[test]
    fn open_without_panel_is_a_no_op() {
        let customizer = Customizer::new();
        let mut page = PageState::new();
        page.customizer_panel = None;

        customizer.open(&mut page);
        assert!(!customizer.is_open(&page));
    }

    #[test]
    fn sync_marks_checked_options() {
        let mut customizer = Customizer::new();
        let record = PreferenceRecord {
            layout: Layout::SemiBox,
            sidebar_size: SidebarSize::Sm,
            theme_mode: ThemeMode::Dark,
        };

        customizer.sync_controls(&record);
        assert_eq!(customizer.selected(PrefField::Layout), Some("semibox"));
        assert_eq!(customizer.selected(PrefField::SidebarSize), Some("sm"));
        assert_eq!(customizer.selected(PrefField::ThemeMode), Some("dark"));
    }

    #[test]
    fn cursor_walks_every_option_and_wraps() {
        let mut customizer = Customizer::new();
        assert_eq!(customizer.activate(), Some(("layout", "vertical")));

        // Walk past the layout group into sidebar sizes.
        for _ in 0..4 {
            customizer.next();
        }
        assert_eq!(customizer.activate(), Some(("sidebar-size", "lg")));

        // Wrap backwards to the last theme option.
        for _ in 0..4 {
            customizer.prev();
        }
        assert_eq!(customizer.activate(), Some(("layout", "vertical")));
        customizer.prev();
        assert_eq!(customizer.activate(), Some(("theme-mode", "dark")));
    }
}

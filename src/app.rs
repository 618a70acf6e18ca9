//! Application context and event loop
//!
//! One context object owns every piece of chrome state: the page model, the
//! preference applier, the scheduler, and the widgets. Events flow in, the
//! page model changes, and the next draw reads the model back. Nothing here
//! reaches for globals.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Terminal;

use crate::config;
use crate::page::PageState;
use crate::prefs::{FileStore, PrefField, PreferenceApplier};
use crate::schedule::{Scheduler, Task};
use crate::themes::Theme;
use crate::ui::customizer::OptionHit;
use crate::ui::panels::{Panel, PanelStyle};
use crate::ui::sidebar::NAV_ITEMS;
use crate::ui::{
    ConfirmDialog, Customizer, DialogResult, NotificationManager, SearchBox, Severity,
    SidebarChrome, TooltipRegistry,
};

/// Tooltips bound at startup, keyed by the control id each hangs off.
const TOOLTIP_TRIGGERS: [(&str, &str); 2] = [
    ("hamburger", "Toggle sidebar"),
    ("customizer", "Theme settings"),
];

/// Action awaiting confirmation in the dialog.
enum PendingAction {
    ResetPreferences,
}

/// Hit areas captured during the last draw, used for mouse dispatch.
#[derive(Default)]
struct Regions {
    hamburger: Option<Rect>,
    search: Option<Rect>,
    search_clear: Option<Rect>,
    customizer_button: Option<Rect>,
    sidebar: Option<Rect>,
    customizer_drawer: Option<Rect>,
    customizer_options: Vec<OptionHit>,
    alert_closes: Vec<(u64, Rect)>,
}

/// The application context.
pub struct App {
    applier: PreferenceApplier<FileStore>,
    page: PageState,
    scheduler: Scheduler,
    sidebar: SidebarChrome,
    search: SearchBox,
    customizer: Customizer,
    notifications: NotificationManager,
    tooltips: TooltipRegistry,
    confirm_dialog: Option<ConfirmDialog>,
    pending_action: Option<PendingAction>,
    hover_target: Option<&'static str>,
    regions: Regions,
    should_quit: bool,
}

impl App {
    /// Build the context: load persisted preferences, apply them to a fresh
    /// page, and bind the chrome once.
    pub fn new() -> Self {
        let store = FileStore::new(config::settings_file());
        let applier = PreferenceApplier::load(store);
        let mut page = PageState::new();
        applier.apply(&mut page);

        let mut customizer = Customizer::new();
        customizer.sync_controls(applier.record());

        let mut tooltips = TooltipRegistry::new();
        tooltips.bind_all(&TOOLTIP_TRIGGERS);

        Self {
            applier,
            page,
            scheduler: Scheduler::new(),
            sidebar: SidebarChrome::new(),
            search: SearchBox::new(),
            customizer,
            notifications: NotificationManager::new(),
            tooltips,
            confirm_dialog: None,
            pending_action: None,
            hover_target: None,
            regions: Regions::default(),
            should_quit: false,
        }
    }

    /// Run the event loop until quit.
    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        self.page.set_viewport_cols(terminal.size()?.width);

        while !self.should_quit {
            let now = Instant::now();
            for task in self.scheduler.fire_due(now) {
                self.handle_task(now, task);
            }

            terminal.draw(|frame| self.render(frame, now))?;

            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(now, key);
                    }
                    Event::Mouse(mouse) => self.handle_mouse(now, mouse),
                    Event::Resize(cols, _) => self.page.set_viewport_cols(cols),
                    _ => {}
                }
            }
        }
        Ok(())
    }

    fn handle_task(&mut self, now: Instant, task: Task) {
        match task {
            Task::CollapseSidebar => self.sidebar.collapse_now(&mut self.page),
            Task::FadeAlert(id) => self.notifications.begin_fade(now, id, &mut self.scheduler),
            Task::RemoveAlert(id) => self.notifications.remove(id),
        }
    }

    fn handle_key(&mut self, now: Instant, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // A modal dialog captures all keys.
        if let Some(dialog) = self.confirm_dialog.as_mut() {
            match dialog.handle_key(key.code) {
                DialogResult::Confirmed => {
                    self.confirm_dialog = None;
                    if let Some(action) = self.pending_action.take() {
                        self.run_action(now, action);
                    }
                }
                DialogResult::Cancelled => {
                    self.confirm_dialog = None;
                    self.pending_action = None;
                }
                DialogResult::Pending => {}
            }
            return;
        }

        // A focused search box captures text input next.
        if self.search.focused {
            match key.code {
                KeyCode::Esc | KeyCode::Enter => self.search.focused = false,
                KeyCode::Backspace => self.search.backspace(),
                KeyCode::Char(c) => self.search.input(c),
                _ => {}
            }
            return;
        }

        if self.customizer.is_open(&self.page) {
            match key.code {
                KeyCode::Esc | KeyCode::Char('c') => self.customizer.close(&mut self.page),
                KeyCode::Down | KeyCode::Char('j') => self.customizer.next(),
                KeyCode::Up | KeyCode::Char('k') => self.customizer.prev(),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if let Some((name, value)) = self.customizer.activate() {
                        self.change_preference(name, value);
                    }
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('b') => self.sidebar.toggle(&mut self.page),
            KeyCode::Char('c') => {
                self.customizer.sync_controls(self.applier.record());
                self.customizer.open(&mut self.page);
            }
            KeyCode::Char('/') => self.search.focused = true,
            KeyCode::Char('r') => {
                self.confirm_dialog = Some(ConfirmDialog::new(
                    "Restore all display settings to their defaults?",
                ));
                self.pending_action = Some(PendingAction::ResetPreferences);
            }
            KeyCode::Char(c @ '1'..='6') => {
                self.sidebar.select(c as usize - '1' as usize);
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, now: Instant, mouse: MouseEvent) {
        let pos = Position::new(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Moved => {
                let inside = self
                    .regions
                    .sidebar
                    .is_some_and(|area| area.contains(pos));
                self.sidebar
                    .pointer_moved(now, inside, &mut self.page, &mut self.scheduler);

                self.hover_target = if self.regions.hamburger.is_some_and(|a| a.contains(pos)) {
                    Some("hamburger")
                } else if self
                    .regions
                    .customizer_button
                    .is_some_and(|a| a.contains(pos))
                {
                    Some("customizer")
                } else {
                    None
                };
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if self.confirm_dialog.is_some() {
                    return;
                }

                if let Some(&(id, _)) = self
                    .regions
                    .alert_closes
                    .iter()
                    .find(|(_, area)| area.contains(pos))
                {
                    self.notifications.dismiss(id, &mut self.scheduler);
                    return;
                }

                if self.customizer.is_open(&self.page) {
                    let hit = self
                        .regions
                        .customizer_options
                        .iter()
                        .find(|h| h.area.contains(pos))
                        .map(|h| (h.control_name, h.value));
                    if let Some((name, value)) = hit {
                        self.change_preference(name, value);
                    } else if self
                        .regions
                        .customizer_drawer
                        .is_some_and(|area| !area.contains(pos))
                    {
                        // Backdrop click dismisses the drawer.
                        self.customizer.close(&mut self.page);
                    }
                    return;
                }

                if self.regions.search_clear.is_some_and(|a| a.contains(pos)) {
                    self.search.clear();
                } else if self.regions.search.is_some_and(|a| a.contains(pos)) {
                    self.search.focused = true;
                } else if self.regions.hamburger.is_some_and(|a| a.contains(pos)) {
                    self.sidebar.toggle(&mut self.page);
                } else if self
                    .regions
                    .customizer_button
                    .is_some_and(|a| a.contains(pos))
                {
                    self.customizer.sync_controls(self.applier.record());
                    self.customizer.open(&mut self.page);
                } else if self
                    .page
                    .overlay
                    .as_ref()
                    .is_some_and(|o| o.has_class("show"))
                    && !self.regions.sidebar.is_some_and(|a| a.contains(pos))
                {
                    self.sidebar.overlay_clicked(&mut self.page);
                }
            }
            _ => {}
        }
    }

    /// Route a control activation through the applier, then re-sync the
    /// drawer so its checked markers follow the record.
    fn change_preference(&mut self, name: &str, value: &str) {
        let Some(field) = PrefField::from_control_name(name) else {
            return;
        };
        if self.applier.set_field(field, value, &mut self.page) {
            if field == PrefField::SidebarSize {
                self.sidebar.size_changed(&mut self.scheduler);
            }
            self.customizer.sync_controls(self.applier.record());
        }
    }

    fn run_action(&mut self, now: Instant, action: PendingAction) {
        match action {
            PendingAction::ResetPreferences => {
                self.applier.reset(&mut self.page);
                self.sidebar.size_changed(&mut self.scheduler);
                self.customizer.sync_controls(self.applier.record());
                self.notifications.show_alert(
                    now,
                    "Settings restored to defaults",
                    Severity::Success,
                    &mut self.scheduler,
                );
            }
        }
    }

    fn render(&mut self, frame: &mut Frame, now: Instant) {
        let theme = Theme::for_mode(self.applier.record().theme_mode);
        let area = frame.area();

        frame.render_widget(
            Block::default().style(Style::default().bg(theme.background)),
            area,
        );

        let menu_visible = self
            .page
            .horizontal_menu
            .as_ref()
            .is_some_and(|m| m.displayed());
        let rows = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(if menu_visible { 1 } else { 0 }),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

        self.render_topbar(frame, rows[0], &theme);
        if menu_visible {
            self.render_horizontal_menu(frame, rows[1], &theme);
        }
        self.render_body(frame, rows[2], &theme, now);
        crate::ui::status_bar::render(frame, rows[3], self.applier.record(), &theme);

        if let Some(target) = self.hover_target {
            let anchor = match target {
                "hamburger" => self.regions.hamburger,
                "customizer" => self.regions.customizer_button,
                _ => None,
            };
            if let Some(anchor) = anchor {
                self.tooltips.render(frame, anchor, target, &theme);
            }
        }

        if let Some(dialog) = &self.confirm_dialog {
            dialog.render(frame, area, &theme);
        }
    }

    fn render_topbar(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let panel = Panel::new(theme).no_padding();
        let inner = panel.inner(area);
        frame.render_widget(panel.block(), area);

        if inner.width < 12 || inner.height == 0 {
            self.regions.hamburger = None;
            self.regions.search = None;
            self.regions.search_clear = None;
            self.regions.customizer_button = None;
            return;
        }

        let hamburger = Rect::new(inner.x + 1, inner.y, 3, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "[=]",
                Style::default().fg(theme.text_primary).bold(),
            )),
            hamburger,
        );
        self.regions.hamburger = Some(hamburger);

        frame.render_widget(
            Paragraph::new(Span::styled(
                " Middleware Portal",
                Style::default().fg(theme.accent).bold(),
            )),
            Rect::new(
                hamburger.right(),
                inner.y,
                18.min(inner.width.saturating_sub(4)),
                1,
            ),
        );

        let customizer_btn = Rect::new(inner.right().saturating_sub(4), inner.y, 3, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(
                "[*]",
                Style::default().fg(theme.accent).bold(),
            )),
            customizer_btn,
        );
        self.regions.customizer_button = Some(customizer_btn);

        // Search sits between the brand and the customizer trigger.
        let search_width = 30.min(customizer_btn.x.saturating_sub(hamburger.right() + 20));
        if search_width >= 8 {
            let search_area = Rect::new(
                customizer_btn.x.saturating_sub(search_width + 1),
                area.y,
                search_width,
                3,
            );
            self.regions.search = Some(search_area);
            self.regions.search_clear = self.search.render(frame, search_area, theme);
        } else {
            self.regions.search = None;
            self.regions.search_clear = None;
        }
    }

    fn render_horizontal_menu(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let spans: Vec<Span> = NAV_ITEMS
            .iter()
            .flat_map(|item| {
                [
                    Span::styled(
                        format!(" {} ", item.label),
                        Style::default().fg(theme.text_secondary),
                    ),
                    Span::styled("|", Style::default().fg(theme.border)),
                ]
            })
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.surface)),
            area,
        );
    }

    fn render_body(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, now: Instant) {
        let sidebar_area = self.sidebar.render(frame, area, &self.page, theme);
        self.regions.sidebar = if sidebar_area.width > 0 {
            Some(sidebar_area)
        } else {
            None
        };

        let content_area = Rect::new(
            area.x + sidebar_area.width,
            area.y,
            area.width.saturating_sub(sidebar_area.width),
            area.height,
        );

        let panel = Panel::new(theme).title(" Dashboard ").style(PanelStyle::Default);
        let inner = panel.inner(content_area);
        frame.render_widget(panel.block(), content_area);

        // Alerts stack at the top of the content container.
        self.regions.alert_closes = self.notifications.render(frame, inner, theme, now);
        let alerts_height = (self.regions.alert_closes.len() as u16 * 3)
            .max(if self.notifications.is_empty() { 0 } else { 3 });

        let text_area = Rect::new(
            inner.x,
            (inner.y + alerts_height).min(inner.bottom()),
            inner.width,
            inner.height.saturating_sub(alerts_height),
        );
        if text_area.height > 0 {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "Welcome back. Pick a section from the menu.",
                    Style::default().fg(theme.text_secondary),
                )),
                text_area,
            );
        }

        self.regions.customizer_options = self.customizer.render(frame, area, &self.page, theme);
        self.regions.customizer_drawer = if self.customizer.is_open(&self.page) {
            Some(self.customizer.drawer_area(area))
        } else {
            None
        };
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

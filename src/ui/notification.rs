//! Transient alerts
//!
//! Dismissible notifications inserted at the top of the content container.
//! Success alerts fade after a fixed delay and are removed shortly after;
//! every other severity stays until the user dismisses it. Both timers run
//! through the scheduler with explicit handles, so a manual dismissal can
//! cancel them and tests can drive the clock.

use std::time::{Duration, Instant};

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::schedule::{Scheduler, Task, TaskHandle};
use crate::themes::Theme;
use crate::ui::animation::{apply_alpha, FadeState};

/// Delay before a success alert starts fading.
pub const AUTO_DISMISS_DELAY: Duration = Duration::from_millis(3000);
/// Length of the fade, after which the alert is removed.
pub const FADE_DURATION: Duration = Duration::from_millis(300);

/// Alert severity, mirroring the portal's alert-* style names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    /// The style name used in the alert markup ("alert-success" etc).
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// One visible alert.
pub struct Notification {
    id: u64,
    pub message: String,
    pub severity: Severity,
    fade: Option<FadeState>,
    dismiss_handle: Option<TaskHandle>,
    remove_handle: Option<TaskHandle>,
}

impl Notification {
    /// Stable id for hit-testing and scheduler tasks.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Whether the fade-out has started.
    pub fn fading(&self) -> bool {
        self.fade.is_some()
    }
}

/// Ordered set of visible alerts; index 0 renders at the top of the
/// content container.
#[derive(Default)]
pub struct NotificationManager {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a dismissible alert at the top of the container. Success
    /// alerts get an auto-dismiss timer; others persist until dismissed.
    pub fn show_alert(
        &mut self,
        now: Instant,
        message: impl Into<String>,
        severity: Severity,
        scheduler: &mut Scheduler,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        let dismiss_handle = match severity {
            Severity::Success => {
                Some(scheduler.schedule(now, AUTO_DISMISS_DELAY, Task::FadeAlert(id)))
            }
            _ => None,
        };

        self.items.insert(
            0,
            Notification {
                id,
                message: message.into(),
                severity,
                fade: None,
                dismiss_handle,
                remove_handle: None,
            },
        );
        id
    }

    /// Start the fade-out for an alert and schedule its removal.
    pub fn begin_fade(&mut self, now: Instant, id: u64, scheduler: &mut Scheduler) {
        if let Some(item) = self.items.iter_mut().find(|n| n.id == id) {
            item.fade = Some(FadeState::fade_out(now, FADE_DURATION));
            item.dismiss_handle = None;
            item.remove_handle = Some(scheduler.schedule(now, FADE_DURATION, Task::RemoveAlert(id)));
        }
    }

    /// Remove an alert outright (fade already finished).
    pub fn remove(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    /// User dismissal via the close control: cancels any pending timers and
    /// removes immediately.
    pub fn dismiss(&mut self, id: u64, scheduler: &mut Scheduler) {
        if let Some(item) = self.items.iter().find(|n| n.id == id) {
            if let Some(handle) = item.dismiss_handle {
                scheduler.cancel(handle);
            }
            if let Some(handle) = item.remove_handle {
                scheduler.cancel(handle);
            }
        }
        self.remove(id);
    }

    /// Visible alerts, top of container first.
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Whether any alert is visible.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the alert with `id` is still present.
    pub fn contains(&self, id: u64) -> bool {
        self.items.iter().any(|n| n.id == id)
    }

    /// Render the alert stack at the top of `area`. Returns the close
    /// control hit areas, one per rendered alert.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        now: Instant,
    ) -> Vec<(u64, Rect)> {
        let mut close_areas = Vec::new();
        let mut y = area.y;

        for item in &self.items {
            if y + 3 > area.bottom() {
                break;
            }
            let alert_area = Rect::new(area.x, y, area.width, 3);
            y += 3;

            let alpha = item.fade.map(|f| f.alpha(now)).unwrap_or(1.0);
            let color = apply_alpha(
                match item.severity {
                    Severity::Success => theme.success,
                    Severity::Info => theme.info,
                    Severity::Warning => theme.warning,
                    Severity::Error => theme.error,
                },
                alpha,
            );
            let text_color = apply_alpha(theme.text_primary, alpha);

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(theme.surface));
            let inner = block.inner(alert_area);
            frame.render_widget(block, alert_area);

            let line = Line::from(vec![
                Span::styled(format!("{}: ", item.severity.as_str()), Style::default().fg(color).bold()),
                Span::styled(item.message.clone(), Style::default().fg(text_color)),
            ]);
            frame.render_widget(Paragraph::new(line), inner);

            // Close control at the right edge.
            if inner.width >= 3 {
                let close_area = Rect::new(inner.right().saturating_sub(3), inner.y, 3, 1);
                frame.render_widget(
                    Paragraph::new(Span::styled("[x]", Style::default().fg(theme.text_muted))),
                    close_area,
                );
                close_areas.push((item.id, close_area));
            }
        }

        close_areas
    }
}

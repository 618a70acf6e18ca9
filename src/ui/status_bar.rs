//! Bottom status bar

use chrono::Local;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::prefs::PreferenceRecord;
use crate::themes::Theme;

/// Render the status bar: branding on the left, the active preference
/// summary in the middle, clock and help hint on the right.
pub fn render(frame: &mut Frame, area: Rect, record: &PreferenceRecord, theme: &Theme) {
    let summary = format!(
        " {} | {} | {} ",
        record.layout.as_str(),
        record.sidebar_size.as_str(),
        record.theme_mode.as_str()
    );
    let clock = Local::now().format("%H:%M:%S").to_string();

    let left = Line::from(vec![
        Span::styled(" PORTAL ", Style::default().fg(theme.background).bg(theme.accent).bold()),
        Span::styled(summary, Style::default().fg(theme.text_secondary)),
    ]);
    let right = Line::from(vec![
        Span::styled("b:sidebar c:customizer /:search r:reset q:quit ", Style::default().fg(theme.text_muted)),
        Span::styled(format!(" {clock} "), Style::default().fg(theme.text_secondary)),
    ]);

    frame.render_widget(
        Paragraph::new(left).style(Style::default().bg(theme.surface)),
        area,
    );
    frame.render_widget(
        Paragraph::new(right)
            .alignment(Alignment::Right)
            .style(Style::default().bg(theme.surface)),
        area,
    );
}

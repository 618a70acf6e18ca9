//! Confirmation dialog widget
//!
//! Centered modal that gates an action behind an explicit yes/no prompt.
//! The gated action only runs on an affirmative response.

use crossterm::event::KeyCode;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

use crate::themes::Theme;

/// User choice in the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    Yes,
    No,
}

/// Result of handling a key in the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    /// Dialog still active, no decision yet
    Pending,
    /// User confirmed the action
    Confirmed,
    /// User cancelled the action
    Cancelled,
}

/// A centered confirmation dialog overlay
pub struct ConfirmDialog {
    pub message: String,
    pub selected: DialogChoice,
}

impl ConfirmDialog {
    /// Create a new confirmation dialog
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            selected: DialogChoice::No, // Default to No for safety
        }
    }

    /// Handle a key press, returning the dialog result
    pub fn handle_key(&mut self, key: KeyCode) -> DialogResult {
        match key {
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected = DialogChoice::Yes;
                DialogResult::Pending
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.selected = DialogChoice::No;
                DialogResult::Pending
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => DialogResult::Confirmed,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => DialogResult::Cancelled,
            KeyCode::Enter => match self.selected {
                DialogChoice::Yes => DialogResult::Confirmed,
                DialogChoice::No => DialogResult::Cancelled,
            },
            KeyCode::Tab => {
                self.selected = match self.selected {
                    DialogChoice::Yes => DialogChoice::No,
                    DialogChoice::No => DialogChoice::Yes,
                };
                DialogResult::Pending
            }
            _ => DialogResult::Pending,
        }
    }

    /// Render the dialog as a centered overlay
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let width = (area.width * 2 / 5).clamp(30.min(area.width), area.width);
        let height = 7_u16.min(area.height);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        let dialog_area = Rect::new(x, y, width, height);

        // Dim everything behind the dialog.
        let buf = frame.buffer_mut();
        for dy in area.top()..area.bottom() {
            for dx in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((dx, dy)) {
                    if let Color::Rgb(r, g, b) = cell.fg {
                        cell.fg = Color::Rgb(r / 3, g / 3, b / 3);
                    }
                    if let Color::Rgb(r, g, b) = cell.bg {
                        cell.bg = Color::Rgb(r / 3, g / 3, b / 3);
                    }
                }
            }
        }

        frame.render_widget(Clear, dialog_area);
        let block = Block::default()
            .title(" Confirm ")
            .title_style(Style::default().fg(theme.warning).bold())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.warning))
            .style(Style::default().bg(theme.surface_elevated));
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        if inner.height < 3 {
            return;
        }

        let msg_area = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(2));
        frame.render_widget(
            Paragraph::new(Span::styled(
                self.message.clone(),
                Style::default().fg(theme.text_primary),
            ))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
            msg_area,
        );

        let yes_style = if self.selected == DialogChoice::Yes {
            Style::default().fg(theme.background).bg(theme.warning).bold()
        } else {
            Style::default().fg(theme.text_muted)
        };
        let no_style = if self.selected == DialogChoice::No {
            Style::default().fg(theme.background).bg(theme.accent).bold()
        } else {
            Style::default().fg(theme.text_muted)
        };

        let btn_area = Rect::new(inner.x, inner.bottom().saturating_sub(1), inner.width, 1);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("  [ Yes ] ", yes_style),
                Span::raw("   "),
                Span::styled("  [ No ] ", no_style),
            ]))
            .alignment(Alignment::Center),
            btn_area,
        );
    }
}

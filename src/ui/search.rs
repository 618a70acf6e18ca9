//! Topbar search box
//!
//! A non-empty value shows the adjacent clear control; activating the
//! control empties the input, hides itself again, and hands keyboard focus
//! back to the input.

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::themes::Theme;

/// Search input state.
#[derive(Default)]
pub struct SearchBox {
    value: String,
    clear_visible: bool,
    /// Whether keyboard input is routed here.
    pub focused: bool,
}

impl SearchBox {
    /// Create an empty, unfocused search box.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current input value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the clear control is shown.
    pub fn clear_visible(&self) -> bool {
        self.clear_visible
    }

    /// Append a typed character.
    pub fn input(&mut self, c: char) {
        self.value.push(c);
        self.update_clear();
    }

    /// Delete the last character.
    pub fn backspace(&mut self) {
        self.value.pop();
        self.update_clear();
    }

    /// The clear control was activated: empty the input, hide the control,
    /// and return focus to the input.
    pub fn clear(&mut self) {
        self.value.clear();
        self.clear_visible = false;
        self.focused = true;
    }

    fn update_clear(&mut self) {
        self.clear_visible = !self.value.is_empty();
    }

    /// Render into `area`, returning the clear control's hit area when it
    /// is visible.
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) -> Option<Rect> {
        let border_color = if self.focused {
            theme.border_focused
        } else {
            theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let content = if self.value.is_empty() && !self.focused {
            Span::styled("Search...", Style::default().fg(theme.text_muted))
        } else {
            Span::styled(self.value.clone(), Style::default().fg(theme.text_primary))
        };
        frame.render_widget(Paragraph::new(content), inner);

        if self.clear_visible && inner.width >= 3 {
            let clear_area = Rect::new(inner.right().saturating_sub(3), inner.y, 3, 1);
            frame.render_widget(
                Paragraph::new(Span::styled("[x]", Style::default().fg(theme.text_muted))),
                clear_area,
            );
            Some(clear_area)
        } else {
            None
        }
    }
}

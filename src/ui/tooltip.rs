//! Tooltip bindings
//!
//! Chrome controls that carry a tooltip marker are bound to the tooltip
//! widget exactly once, at initialization. Elements appearing later are
//! not picked up, matching the portal's one-shot activation.

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::themes::Theme;

/// A bound tooltip: target control id plus its hint text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tooltip {
    pub target: &'static str,
    pub text: &'static str,
}

/// Registry of bound tooltips.
#[derive(Default)]
pub struct TooltipRegistry {
    tooltips: Vec<Tooltip>,
    bound: bool,
}

impl TooltipRegistry {
    /// Create an empty, unbound registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind every trigger exactly once. Subsequent calls are no-ops, so
    /// re-running initialization cannot double-bind.
    pub fn bind_all(&mut self, triggers: &[(&'static str, &'static str)]) {
        if self.bound {
            return;
        }
        self.bound = true;
        self.tooltips = triggers
            .iter()
            .map(|&(target, text)| Tooltip { target, text })
            .collect();
    }

    /// The tooltip bound to a target, if any.
    pub fn for_target(&self, target: &str) -> Option<&Tooltip> {
        self.tooltips.iter().find(|t| t.target == target)
    }

    /// Number of bound tooltips.
    pub fn len(&self) -> usize {
        self.tooltips.len()
    }

    /// Whether nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.tooltips.is_empty()
    }

    /// Render the tooltip for `target` as a bubble anchored below `anchor`.
    pub fn render(&self, frame: &mut Frame, anchor: Rect, target: &str, theme: &Theme) {
        let Some(tooltip) = self.for_target(target) else {
            return;
        };

        let width = (tooltip.text.len() as u16 + 4).min(frame.area().width);
        let x = anchor.x.min(frame.area().width.saturating_sub(width));
        let y = anchor.bottom().min(frame.area().height.saturating_sub(3));
        let bubble = Rect::new(x, y, width, 3);

        frame.render_widget(Clear, bubble);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border))
            .style(Style::default().bg(theme.surface_elevated));
        let inner = block.inner(bubble);
        frame.render_widget(block, bubble);
        frame.render_widget(
            Paragraph::new(Span::styled(
                tooltip.text,
                Style::default().fg(theme.text_secondary),
            )),
            inner,
        );
    }
}

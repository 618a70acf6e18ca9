//! Reusable panel components
//!
//! Styled blocks with consistent theming for the portal chrome.

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding};

use crate::themes::Theme;

/// Panel style variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelStyle {
    /// Default panel style
    #[default]
    Default,
    /// Focused panel (highlighted border)
    Focused,
    /// Elevated panel (for drawers, modals)
    Elevated,
    /// Success state
    Success,
    /// Warning state
    Warning,
    /// Error state
    Error,
}

/// A styled panel component
#[derive(Clone)]
pub struct Panel<'a> {
    title: Option<&'a str>,
    style: PanelStyle,
    theme: &'a Theme,
    padding: Padding,
}

impl<'a> Panel<'a> {
    /// Create a new panel with the given theme
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            title: None,
            style: PanelStyle::Default,
            theme,
            padding: Padding::uniform(1),
        }
    }

    /// Set the panel title
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the panel style
    pub fn style(mut self, style: PanelStyle) -> Self {
        self.style = style;
        self
    }

    /// Set no padding
    pub fn no_padding(mut self) -> Self {
        self.padding = Padding::zero();
        self
    }

    /// Build the Block widget
    pub fn block(&self) -> Block<'a> {
        let border_color = match self.style {
            PanelStyle::Default => self.theme.border,
            PanelStyle::Focused => self.theme.border_focused,
            PanelStyle::Elevated => self.theme.accent,
            PanelStyle::Success => self.theme.success,
            PanelStyle::Warning => self.theme.warning,
            PanelStyle::Error => self.theme.error,
        };

        let title_color = match self.style {
            PanelStyle::Default => self.theme.text_secondary,
            PanelStyle::Focused | PanelStyle::Elevated => self.theme.accent,
            PanelStyle::Success => self.theme.success,
            PanelStyle::Warning => self.theme.warning,
            PanelStyle::Error => self.theme.error,
        };

        let bg = match self.style {
            PanelStyle::Elevated => self.theme.surface_elevated,
            _ => self.theme.surface,
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(bg))
            .padding(self.padding);

        if let Some(title) = self.title {
            block = block
                .title(title)
                .title_style(Style::default().fg(title_color).bold());
        }

        block
    }

    /// Get the inner area after accounting for borders and padding
    pub fn inner(&self, area: Rect) -> Rect {
        self.block().inner(area)
    }
}

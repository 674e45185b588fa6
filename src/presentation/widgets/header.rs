use ratatui::{prelude::*, widgets::Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::{core::raw_msg::Target, presentation::widgets::label_rect};

pub const HELP_BUTTON: &str = "[? Help]";

/// Deck title on the left, help and fullscreen buttons on the right.
pub struct HeaderWidget<'a> {
    title: &'a str,
    fullscreen_label: &'a str,
    title_style: Style,
    button_style: Style,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(title: &'a str, fullscreen_label: &'a str) -> Self {
        Self {
            title,
            fullscreen_label,
            title_style: Style::default().bold(),
            button_style: Style::default(),
        }
    }

    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    pub fn button_style(mut self, style: Style) -> Self {
        self.button_style = style;
        self
    }

    fn fullscreen_button(&self) -> String {
        format!("[{}]", self.fullscreen_label)
    }

    /// Buttons are right-aligned: `[? Help] [⛶ Fullscreen]`.
    fn button_positions(&self, area: Rect) -> (u16, u16) {
        let fullscreen = self.fullscreen_button();
        let fullscreen_width = u16::try_from(fullscreen.width()).unwrap_or(u16::MAX);
        let help_width = u16::try_from(HELP_BUTTON.width()).unwrap_or(u16::MAX);
        let fullscreen_x = area.right().saturating_sub(fullscreen_width);
        let help_x = fullscreen_x.saturating_sub(help_width + 1);
        (help_x.max(area.x), fullscreen_x.max(area.x))
    }

    pub fn targets(&self, area: Rect) -> Vec<(Rect, Target)> {
        if area.is_empty() {
            return vec![];
        }
        let (help_x, fullscreen_x) = self.button_positions(area);
        vec![
            (label_rect(area.x, area.y, self.title, area), Target::Home),
            (label_rect(help_x, area.y, HELP_BUTTON, area), Target::HelpButton),
            (
                label_rect(fullscreen_x, area.y, &self.fullscreen_button(), area),
                Target::FullscreenButton,
            ),
        ]
    }
}

impl Widget for HeaderWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let (help_x, fullscreen_x) = self.button_positions(area);
        Paragraph::new(Span::styled(self.title, self.title_style)).render(area, buf);
        buf.set_string(help_x, area.y, HELP_BUTTON, self.button_style);
        buf.set_string(fullscreen_x, area.y, self.fullscreen_button(), self.button_style);
    }
}

use ratatui::prelude::*;
use unicode_width::UnicodeWidthStr;

use crate::{
    core::{
        raw_msg::Target,
        state::navigator::{NavControls, SlideView, PREVIOUS_LABEL},
    },
    presentation::widgets::label_rect,
};

const ACTIVE_DOT: &str = "●";
const INACTIVE_DOT: &str = "○";

/// Previous and next buttons with slide dots and the position counter between them.
pub struct NavBarWidget<'a> {
    controls: &'a NavControls,
    views: &'a [SlideView],
    button_style: Style,
    disabled_style: Style,
}

impl<'a> NavBarWidget<'a> {
    pub fn new(controls: &'a NavControls, views: &'a [SlideView]) -> Self {
        Self {
            controls,
            views,
            button_style: Style::default().bold(),
            disabled_style: Style::default().dim(),
        }
    }

    pub fn button_style(mut self, style: Style) -> Self {
        self.button_style = style;
        self
    }

    pub fn disabled_style(mut self, style: Style) -> Self {
        self.disabled_style = style;
        self
    }

    fn previous_button() -> String {
        format!("[{PREVIOUS_LABEL}]")
    }

    fn next_button(&self) -> String {
        format!("[{}]", self.controls.next_label)
    }

    fn next_x(&self, area: Rect) -> u16 {
        let width = u16::try_from(self.next_button().width()).unwrap_or(u16::MAX);
        area.right().saturating_sub(width).max(area.x)
    }

    /// Dots for each slide; only the exposed one is filled.
    pub fn indicator(&self) -> String {
        self.views
            .iter()
            .map(|view| if view.exposed { ACTIVE_DOT } else { INACTIVE_DOT })
            .collect()
    }

    pub fn targets(&self, area: Rect) -> Vec<(Rect, Target)> {
        if area.is_empty() {
            return vec![];
        }
        vec![
            (
                label_rect(area.x, area.y, &Self::previous_button(), area),
                Target::PreviousButton,
            ),
            (
                label_rect(self.next_x(area), area.y, &self.next_button(), area),
                Target::NextButton,
            ),
        ]
    }

    fn style_for(&self, disabled: bool) -> Style {
        if disabled {
            self.disabled_style
        } else {
            self.button_style
        }
    }
}

impl Widget for NavBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let center = Line::from(format!("{}  {}", self.indicator(), self.controls.counter()))
            .centered();
        center.render(area, buf);

        buf.set_string(
            area.x,
            area.y,
            Self::previous_button(),
            self.style_for(self.controls.prev_disabled),
        );
        buf.set_string(
            self.next_x(area),
            area.y,
            self.next_button(),
            self.style_for(self.controls.next_disabled),
        );
    }
}

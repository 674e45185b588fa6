use ratatui::{
    prelude::*,
    widgets::{Block, BorderType},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    core::raw_msg::Target,
    domain::{
        deck::{CtaButton, Slide, TocEntry},
        text::wrap_words,
    },
};

const CTA_GAP: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Row {
    Blank,
    Body(String),
    Toc(usize, String),
    /// `(x offset, button index, label)` for each button on the row.
    Cta(Vec<(u16, usize, String)>),
}

/// The exposed slide: bordered heading, wrapped body, then the TOC links on the
/// first slide or the CTA buttons on the last one.
pub struct SlideWidget<'a> {
    slide: &'a Slide,
    number: usize,
    toc: &'a [TocEntry],
    cta_buttons: &'a [CtaButton],
    heading_style: Style,
    link_style: Style,
    button_style: Style,
}

impl<'a> SlideWidget<'a> {
    pub fn new(slide: &'a Slide, number: usize) -> Self {
        Self {
            slide,
            number,
            toc: &[],
            cta_buttons: &[],
            heading_style: Style::default().bold(),
            link_style: Style::default().underlined(),
            button_style: Style::default().reversed(),
        }
    }

    pub fn toc(mut self, toc: &'a [TocEntry]) -> Self {
        self.toc = toc;
        self
    }

    pub fn cta_buttons(mut self, cta_buttons: &'a [CtaButton]) -> Self {
        self.cta_buttons = cta_buttons;
        self
    }

    pub fn heading_style(mut self, style: Style) -> Self {
        self.heading_style = style;
        self
    }

    pub fn link_style(mut self, style: Style) -> Self {
        self.link_style = style;
        self
    }

    pub fn button_style(mut self, style: Style) -> Self {
        self.button_style = style;
        self
    }

    fn block(&self) -> Block<'_> {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .title(Span::styled(
                format!(" {}. {} ", self.number, self.slide.heading()),
                self.heading_style,
            ))
    }

    fn rows(&self, width: u16) -> Vec<Row> {
        let width = usize::from(width);
        let mut rows = vec![];
        for (i, paragraph) in self.slide.body.iter().enumerate() {
            if i > 0 {
                rows.push(Row::Blank);
            }
            rows.extend(wrap_words(paragraph, width).into_iter().map(Row::Body));
        }

        if !self.toc.is_empty() {
            if !rows.is_empty() {
                rows.push(Row::Blank);
            }
            rows.extend(
                self.toc
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| Row::Toc(i, format!("{}. {}", i + 1, entry.label))),
            );
        }

        if !self.cta_buttons.is_empty() {
            if !rows.is_empty() {
                rows.push(Row::Blank);
            }
            let mut current: Vec<(u16, usize, String)> = vec![];
            let mut x = 0u16;
            for (i, button) in self.cta_buttons.iter().enumerate() {
                let label = format!("[{} {}]", i + 1, button.label);
                let label_width = u16::try_from(label.width()).unwrap_or(u16::MAX);
                if !current.is_empty() && usize::from(x + label_width) > width {
                    rows.push(Row::Cta(std::mem::take(&mut current)));
                    x = 0;
                }
                current.push((x, i, label));
                x = x.saturating_add(label_width + CTA_GAP);
            }
            rows.push(Row::Cta(current));
        }
        rows
    }

    pub fn targets(&self, area: Rect) -> Vec<(Rect, Target)> {
        let inner = self.block().inner(area);
        let mut targets = vec![];
        for (y, row) in (inner.y..inner.bottom()).zip(self.rows(inner.width)) {
            match row {
                Row::Toc(i, label) => {
                    targets.push((
                        super::label_rect(inner.x, y, &label, inner),
                        Target::TocEntry(i),
                    ));
                }
                Row::Cta(buttons) => {
                    targets.extend(buttons.into_iter().map(|(dx, i, label)| {
                        (
                            super::label_rect(inner.x + dx, y, &label, inner),
                            Target::CtaButton(i),
                        )
                    }));
                }
                Row::Blank | Row::Body(_) => {}
            }
        }
        targets
    }
}

impl Widget for SlideWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        for (y, row) in (inner.y..inner.bottom()).zip(self.rows(inner.width)) {
            match row {
                Row::Blank => {}
                Row::Body(text) => {
                    buf.set_stringn(inner.x, y, text, usize::from(inner.width), Style::default());
                }
                Row::Toc(_, label) => {
                    buf.set_stringn(inner.x, y, label, usize::from(inner.width), self.link_style);
                }
                Row::Cta(buttons) => {
                    for (dx, _, label) in buttons {
                        let remaining = inner.width.saturating_sub(dx);
                        buf.set_stringn(
                            inner.x + dx,
                            y,
                            label,
                            usize::from(remaining),
                            self.button_style,
                        );
                    }
                }
            }
        }
    }
}

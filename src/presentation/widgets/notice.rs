use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Clear},
};

use crate::{core::raw_msg::Target, domain::notice::NoticeContent, domain::text::wrap_words};

pub const CLOSE_BUTTON: &str = "[×]";
const MAX_WIDTH: u16 = 60;
const MARGIN: u16 = 1;

/// Transient message box anchored to the top-right corner, above everything else.
pub struct NoticeWidget<'a> {
    content: &'a NoticeContent,
    footer: &'a str,
    border_style: Style,
}

impl<'a> NoticeWidget<'a> {
    pub fn new(content: &'a NoticeContent) -> Self {
        Self {
            content,
            footer: "",
            border_style: Style::default(),
        }
    }

    /// Italic line under the body, separated by a blank row.
    pub fn footer(mut self, footer: &'a str) -> Self {
        self.footer = footer;
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Popup rectangle within `area`: as tall as the wrapped content plus borders.
    pub fn popup_area(&self, area: Rect) -> Rect {
        let width = area.width.saturating_sub(MARGIN * 2).min(MAX_WIDTH);
        let rows = self.rows(width.saturating_sub(2));
        let height = u16::try_from(rows.len())
            .unwrap_or(u16::MAX)
            .saturating_add(2)
            .min(area.height);
        let x = area.right().saturating_sub(width + MARGIN).max(area.x);
        Rect::new(x, area.y, width, height).intersection(area)
    }

    /// Body lines, then a blank row and the footer lines marked `true`.
    fn rows(&self, width: u16) -> Vec<(String, bool)> {
        let width = usize::from(width);
        let mut rows: Vec<(String, bool)> = wrap_words(&self.content.body, width)
            .into_iter()
            .map(|line| (line, false))
            .collect();
        let footer = wrap_words(self.footer, width);
        if !footer.is_empty() {
            rows.push((String::new(), false));
            rows.extend(footer.into_iter().map(|line| (line, true)));
        }
        rows
    }

    fn close_rect(popup: Rect) -> Rect {
        Rect::new(popup.right().saturating_sub(4), popup.y, 3, 1).intersection(popup)
    }

    pub fn targets(&self, area: Rect) -> Vec<(Rect, Target)> {
        let popup = self.popup_area(area);
        if popup.is_empty() {
            return vec![];
        }
        vec![(Self::close_rect(popup), Target::NoticeClose)]
    }
}

impl Widget for NoticeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = self.popup_area(area);
        if popup.is_empty() {
            return;
        }
        Clear.render(popup, buf);
        let block = Block::bordered()
            .border_type(BorderType::Thick)
            .border_style(self.border_style)
            .title(Span::styled(
                format!(" {} ", self.content.title),
                self.border_style.bold(),
            ));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let close = Self::close_rect(popup);
        buf.set_string(close.x, close.y, CLOSE_BUTTON, self.border_style);

        for (y, (line, is_footer)) in (inner.y..inner.bottom()).zip(self.rows(inner.width)) {
            let style = if is_footer {
                Style::default().italic()
            } else {
                Style::default()
            };
            buf.set_stringn(inner.x, y, line, usize::from(inner.width), style);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::notice::NoticeKind;

    fn content() -> NoticeContent {
        NoticeContent::new("Hi", "alpha beta gamma", NoticeKind::Info)
    }

    #[test]
    fn test_popup_anchored_top_right() {
        let content = content();
        let widget = NoticeWidget::new(&content);
        // 80 wide: width caps at 60, one cell margin on the right.
        assert_eq!(widget.popup_area(Rect::new(0, 0, 80, 20)), Rect::new(19, 0, 60, 3));
        assert_eq!(
            widget.targets(Rect::new(0, 0, 80, 20)),
            vec![(Rect::new(75, 0, 3, 1), Target::NoticeClose)]
        );
    }

    #[test]
    fn test_narrow_area_wraps_body() {
        let content = content();
        let widget = NoticeWidget::new(&content);
        // Inner width 10: "alpha beta" / "gamma".
        assert_eq!(widget.popup_area(Rect::new(0, 0, 14, 20)).height, 4);
    }

    #[test]
    fn test_footer_adds_rows() {
        let content = content();
        let widget = NoticeWidget::new(&content).footer("Office");
        assert_eq!(widget.popup_area(Rect::new(0, 0, 80, 20)).height, 5);

        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        // Popup starts at x=1, inner at x=2; body row 1, blank row 2, footer row 3.
        assert_eq!(buf[(2, 3)].symbol(), "O");
        assert!(buf[(2, 3)].modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn test_render_title_and_body() {
        let content = content();
        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);
        NoticeWidget::new(&content).render(area, &mut buf);

        let rows: Vec<String> = (0..3)
            .map(|y| (0..40).map(|x| buf[(x, y)].symbol().to_string()).collect())
            .collect();
        assert!(rows[0].contains(" Hi "));
        assert!(rows[0].contains(CLOSE_BUTTON));
        assert!(rows[1].contains("alpha beta gamma"));
    }
}

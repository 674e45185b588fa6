use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Style, Stylize},
    widgets::{LineGauge, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    core::{raw_msg::Target, state::AppState},
    domain::notice::NoticeKind,
    infrastructure::tui::Frame,
    presentation::{
        config::Styles,
        widgets::{
            header::HeaderWidget, label_rect, nav_bar::NavBarWidget, notice::NoticeWidget,
            print_layout::PrintLayoutWidget, slide::SlideWidget,
        },
    },
};

/// Clickable regions from the last frame, in paint order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    regions: Vec<(Rect, Target)>,
}

impl HitMap {
    pub fn extend(&mut self, regions: impl IntoIterator<Item = (Rect, Target)>) {
        self.regions
            .extend(regions.into_iter().filter(|(rect, _)| !rect.is_empty()));
    }

    /// Topmost control under the cell. Later regions are painted above earlier ones.
    pub fn target_at(&self, column: u16, row: u16) -> Option<Target> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, target)| *target)
    }

    pub fn regions(&self) -> &[(Rect, Target)] {
        &self.regions
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

fn notice_fallback(kind: NoticeKind) -> Style {
    match kind {
        NoticeKind::Primary => Style::default().fg(Color::Red),
        NoticeKind::Secondary => Style::default().fg(Color::Blue),
        NoticeKind::Info => Style::default().fg(Color::Gray),
    }
}

/// Draws the whole screen for `state` and returns where its controls landed.
///
/// Fullscreen drops the header, progress, nav bar and footer. The print
/// layout replaces everything with all slides stacked.
pub fn render(frame: &mut Frame<'_>, state: &AppState) -> HitMap {
    let area = frame.area();
    let styles = &state.config.config.styles;
    let deck = state.deck();
    let mut hits = HitMap::default();

    if state.print.is_active() {
        frame.render_widget(PrintLayoutWidget::new(deck), area);
        return hits;
    }

    let chrome = !state.fullscreen.is_active();
    let bar = |visible: bool| Constraint::Length(u16::from(visible));
    let [header_area, progress_area, slide_area, nav_area, footer_area] = Layout::vertical([
        bar(chrome),
        bar(chrome),
        Constraint::Min(3),
        bar(chrome),
        bar(chrome && !deck.footer.is_empty()),
    ])
    .areas(area);

    let controls = state.navigator.controls();

    if chrome {
        let header = HeaderWidget::new(&deck.title, state.fullscreen.label())
            .title_style(styles.get_or("title", Style::default().bold()))
            .button_style(styles.get_or("button", Style::default()));
        hits.extend(header.targets(header_area));
        frame.render_widget(header, header_area);

        let gauge = LineGauge::default()
            .filled_style(styles.get_or("progress", Style::default().fg(Color::Red)))
            .ratio(controls.progress.clamp(0.0, 1.0))
            .label(controls.counter());
        frame.render_widget(gauge, progress_area);
    }

    let index = state.navigator.index();
    if let Some(slide) = deck.slide(index) {
        let mut widget = SlideWidget::new(slide, index + 1)
            .heading_style(styles.get_or("heading", Style::default().bold()))
            .link_style(styles.get_or("link", Style::default().underlined()))
            .button_style(styles.get_or("cta", Style::default().reversed()));
        if controls.toc_visible {
            widget = widget.toc(&deck.toc);
        }
        if controls.next_disabled {
            widget = widget.cta_buttons(&deck.cta_buttons);
        }
        hits.extend(widget.targets(slide_area));
        frame.render_widget(widget, slide_area);
    }

    if let Some(badge) = branding_rect(slide_area, &deck.branding) {
        frame.render_widget(
            Paragraph::new(deck.branding.as_str())
                .style(styles.get_or("branding", Style::default().fg(Color::Gray))),
            badge,
        );
    }

    if chrome {
        let views = state.navigator.slide_views();
        let nav = NavBarWidget::new(&controls, &views)
            .button_style(styles.get_or("button", Style::default().bold()))
            .disabled_style(styles.get_or("button.disabled", Style::default().dim()));
        hits.extend(nav.targets(nav_area));
        frame.render_widget(nav, nav_area);

        if !footer_area.is_empty() {
            frame.render_widget(
                Paragraph::new(deck.footer.as_str())
                    .style(styles.get_or("footer", Style::default().dim()))
                    .centered(),
                footer_area,
            );
        }
    }

    if let Some(notice) = state.notice.current() {
        let widget = NoticeWidget::new(&notice.content)
            .footer(&deck.footer)
            .border_style(notice_style(styles, notice.content.kind));
        hits.extend(widget.targets(area));
        frame.render_widget(widget, area);
    }

    hits
}

/// Bottom-right corner of the content area, sized to the branding label.
fn branding_rect(area: Rect, label: &str) -> Option<Rect> {
    if label.is_empty() || area.is_empty() {
        return None;
    }
    let width = u16::try_from(label.width()).unwrap_or(u16::MAX).min(area.width);
    let rect = label_rect(area.right() - width, area.bottom() - 1, label, area);
    Some(rect)
}

/// Border color for a notice kind, configurable under `notice.<kind>`.
pub fn notice_style(styles: &Styles, kind: NoticeKind) -> Style {
    styles.get_or(&kind.style_key(), notice_fallback(kind))
}

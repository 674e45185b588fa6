use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    core::state::AppState,
    domain::{deck::Deck, text::wrap_words},
};

pub const PAGE_BREAK: &str = "─── page break ───";

/// Every slide in order as plain lines, separated by page breaks.
///
/// Shared by the on-screen print layout and the `--print` CLI output.
pub fn print_lines(deck: &Deck, width: usize) -> Vec<String> {
    let total = deck.len();
    let mut lines = vec![];
    for (i, slide) in deck.slides.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
            lines.push(PAGE_BREAK.to_string());
            lines.push(String::new());
        }
        let heading = format!("Slide {} of {}: {}", i + 1, total, slide.heading());
        let underline = "=".repeat(heading.chars().count().min(width.max(1)));
        lines.push(heading);
        lines.push(underline);
        for paragraph in &slide.body {
            lines.push(String::new());
            lines.extend(wrap_words(paragraph, width));
        }
        if i == 0 && !deck.toc.is_empty() {
            lines.push(String::new());
            lines.extend(
                deck.toc
                    .iter()
                    .enumerate()
                    .map(|(n, entry)| format!("{}. {}", n + 1, entry.label)),
            );
        }
        if i + 1 == total && !deck.cta_buttons.is_empty() {
            lines.push(String::new());
            lines.extend(deck.cta_buttons.iter().map(|b| format!("* {}", b.label)));
        }
    }
    if !deck.footer.is_empty() {
        lines.push(String::new());
        lines.extend(wrap_words(&deck.footer, width));
    }
    lines
}

/// Plain-text print document: the deck title, then [`print_lines`].
///
/// `None` unless the print layout is active.
pub fn print_document(state: &AppState, width: usize) -> Option<Vec<String>> {
    if !state.print.is_active() {
        return None;
    }
    let deck = state.deck();
    let mut lines = vec![deck.title.clone(), String::new()];
    lines.extend(print_lines(deck, width));
    Some(lines)
}

/// All slides stacked for printing, without navigation chrome.
pub struct PrintLayoutWidget<'a> {
    deck: &'a Deck,
}

impl<'a> PrintLayoutWidget<'a> {
    pub fn new(deck: &'a Deck) -> Self {
        Self { deck }
    }
}

impl Widget for PrintLayoutWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = print_lines(self.deck, usize::from(area.width))
            .into_iter()
            .map(|line| {
                if line == PAGE_BREAK {
                    Line::from(line).centered().dim()
                } else {
                    Line::from(line)
                }
            })
            .collect();
        Paragraph::new(lines).render(area, buf);
    }
}

//! Reusable UI widgets
//!
//! Widgets that own clickable controls also expose `targets`, computed from
//! the same geometry as `render`, so the view can build its hit map.

pub mod header;
pub mod nav_bar;
pub mod notice;
pub mod print_layout;
pub mod slide;

use ratatui::prelude::Rect;
use unicode_width::UnicodeWidthStr;

/// One-line rectangle starting at `x` sized to `label`, clipped to `bounds`.
pub(crate) fn label_rect(x: u16, y: u16, label: &str, bounds: Rect) -> Rect {
    let width = u16::try_from(label.width()).unwrap_or(u16::MAX);
    Rect::new(x, y, width, 1).intersection(bounds)
}

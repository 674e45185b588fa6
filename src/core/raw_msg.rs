use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// Clickable control resolved from a mouse position by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    PreviousButton,
    NextButton,
    /// Deck title in the header; jumps to the first slide.
    Home,
    /// 0-based position in the deck's TOC list.
    TocEntry(usize),
    /// 0-based position in the final slide's CTA row.
    CtaButton(usize),
    NoticeClose,
    FullscreenButton,
    HelpButton,
}

/// Raw messages from external sources (input, timers, host)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Render,
    Resize(u16, u16),
    Quit,

    // User input
    Key(KeyEvent),
    Click(Target),

    // Timers
    NoticeExpired(u64),
    CtaRebindDue,

    // Host feedback
    FullscreenChanged(bool),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}

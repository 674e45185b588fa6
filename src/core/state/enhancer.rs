//! State owned by the optional enhancers.

pub const FULLSCREEN_LABEL: &str = "⛶ Fullscreen";
pub const EXIT_FULLSCREEN_LABEL: &str = "⛷ Exit Fullscreen";

/// Print layout: every slide visible, separated by page breaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrintLayout {
    active: bool,
}

impl PrintLayout {
    pub fn begin(&mut self) {
        self.active = true;
    }

    /// Restores single-slide visibility.
    pub fn end(&mut self) {
        self.active = false;
    }

    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Tracks the local fullscreen flag and the toggle's label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FullscreenToggle {
    active: bool,
}

impl FullscreenToggle {
    /// Flips the flag and returns the state to request from the host.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    pub fn set(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn label(&self) -> &'static str {
        if self.active {
            EXIT_FULLSCREEN_LABEL
        } else {
            FULLSCREEN_LABEL
        }
    }
}

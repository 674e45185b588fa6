use serde::{Deserialize, Serialize};

/// Messages for the optional enhancers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnhancerMsg {
    TogglePrint,
    BeginPrint,
    EndPrint,
    ToggleFullscreen,
    /// Host reported the fullscreen state (e.g. after a failed request).
    FullscreenChanged(bool),
    ShowHelp,
    ShowOverview,
}

use serde::{Deserialize, Serialize};

pub mod cta;
pub mod enhancer;
pub mod nav;
pub mod notice;
pub mod system;

use cta::CtaMsg;
use enhancer::EnhancerMsg;
use nav::NavMsg;
use notice::NoticeMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Msg {
    // Slide navigation (delegated to Navigator)
    Nav(NavMsg),

    // Notice lifecycle (delegated to NoticeState)
    Notice(NoticeMsg),

    // Call-to-action controls on the final slide
    Cta(CtaMsg),

    // Optional enhancers (print, fullscreen, help, overview)
    Enhancer(EnhancerMsg),

    // System operations (delegated to SystemState)
    System(SystemMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, Msg::Notice(NoticeMsg::Expired(_)))
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;

    use super::*;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(Msg::Notice(NoticeMsg::Expired(1)).is_frequent());
        assert!(!Msg::Nav(NavMsg::Next).is_frequent());
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
    }

    #[test]
    fn test_msg_equality() {
        assert_eq!(Msg::Nav(NavMsg::GoTo(3)), Msg::Nav(NavMsg::GoTo(3)));
        assert_ne!(Msg::Nav(NavMsg::Next), Msg::Nav(NavMsg::Previous));
    }

    #[test]
    fn test_msg_serialization() -> Result<()> {
        let msg = Msg::Enhancer(EnhancerMsg::FullscreenChanged(true));
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}

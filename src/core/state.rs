pub mod cta;
pub mod enhancer;
pub mod navigator;
pub mod notice;
pub mod system;
pub mod usage;

use crate::{domain::deck::Deck, infrastructure::config::Config};

use cta::CtaBindings;
use enhancer::{FullscreenToggle, PrintLayout};
use navigator::Navigator;
use notice::NoticeState;
use system::SystemState;
use usage::UsageStats;

/// Unified application state
///
/// Built once at load from the configuration and dropped at exit; nothing in
/// here outlives the session.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub navigator: Navigator,
    pub notice: NoticeState,
    pub cta: CtaBindings,
    pub usage: UsageStats,
    pub print: PrintLayout,
    pub fullscreen: FullscreenToggle,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    pub fn new_with_config(config: Config) -> Self {
        Self {
            navigator: Navigator::new(config.deck.len()),
            notice: NoticeState::new(config.notice.auto_dismiss()),
            config: ConfigState { config },
            ..Default::default()
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.config.config.deck
    }

    pub fn current_slide_name(&self) -> &str {
        self.deck().name(self.navigator.index())
    }
}

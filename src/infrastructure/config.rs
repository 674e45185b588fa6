use std::path::{Path, PathBuf};
use std::time::Duration;

use config::ConfigError;
use serde::Deserialize;

use crate::{
    domain::deck::Deck,
    presentation::config::{keybindings, styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

fn default_auto_dismiss_secs() -> u64 {
    10
}

fn default_cta_rebind_delay_ms() -> u64 {
    50
}

#[derive(Clone, Debug, Deserialize)]
pub struct NoticeConfig {
    #[serde(default = "default_auto_dismiss_secs")]
    pub auto_dismiss_secs: u64,
    #[serde(default = "default_cta_rebind_delay_ms")]
    pub cta_rebind_delay_ms: u64,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            auto_dismiss_secs: default_auto_dismiss_secs(),
            cta_rebind_delay_ms: default_cta_rebind_delay_ms(),
        }
    }
}

impl NoticeConfig {
    pub fn auto_dismiss(&self) -> Duration {
        Duration::from_secs(self.auto_dismiss_secs)
    }

    pub fn cta_rebind_delay(&self) -> Duration {
        Duration::from_millis(self.cta_rebind_delay_ms)
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub deck: Deck,
    #[serde(default)]
    pub notice: NoticeConfig,
}

impl Config {
    /// Loads the user configuration from the config directory and fills in
    /// anything it leaves out from the embedded defaults.
    ///
    /// User files are optional. An empty resulting deck is an error.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        let cfg = cfg.merge_defaults(default_config);
        cfg.validate()?;
        Ok(cfg)
    }

    /// Configuration built only from the defaults shipped with the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Replaces the deck with one read from a JSON5 file.
    pub fn with_deck_file(mut self, path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::Message(format!("Failed to read deck {}: {e}", path.display()))
        })?;
        self.deck = json5::from_str(&raw).map_err(|e| {
            ConfigError::Message(format!("Failed to parse deck {}: {e}", path.display()))
        })?;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.deck.is_empty() {
            return Err(ConfigError::NotFound(String::from("deck.slides")));
        }
        Ok(())
    }

    fn merge_defaults(mut self, default_config: Self) -> Self {
        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            self.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| *action);
        }
        for (style_key, style) in default_config.styles.iter() {
            self.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }
        if self.deck.is_empty() {
            self.deck = default_config.deck;
        }
        self
    }
}

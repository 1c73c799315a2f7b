use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
    /// Panels shown by the demo; an empty list falls back to a built-in set
    #[serde(default)]
    pub panels: Vec<PanelConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            ui: UiConfig::default(),
            keymap: KeymapConfig::default(),
            panels: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Advance automatically on a fixed interval
    #[serde(default)]
    pub autoplay: bool,
    /// Autoplay interval in milliseconds
    #[serde(default = "default_autoplay_interval")]
    pub autoplay_interval_ms: u64,
    /// Show indicator dots under the viewport
    #[serde(default = "default_true")]
    pub dots: bool,
    /// Accent color used for the active dot
    #[serde(default)]
    pub dots_color: DotsColor,
    /// Glyph size of the dots row
    #[serde(default)]
    pub dots_size: DotsSize,
    /// Show prev/next arrow controls beside the viewport
    #[serde(default)]
    pub arrows: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: false,
            autoplay_interval_ms: default_autoplay_interval(),
            dots: default_true(),
            dots_color: DotsColor::default(),
            dots_size: DotsSize::default(),
            arrows: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DotsColor {
    #[default]
    Default,
    Primary,
    Success,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DotsSize {
    #[default]
    Normal,
    Small,
    Large,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds (also paces the slide animation)
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
        }
    }
}

/// Keymap configuration using Vim-style notation
/// Format: "l", "<C-n>" (Ctrl+n), "<Space>", "<Left>", "<Esc>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,
    /// Advance to the next panel
    #[serde(default = "default_key_next")]
    pub next: String,
    /// Go back to the previous panel
    #[serde(default = "default_key_prev")]
    pub prev: String,
    /// Pause or resume autoplay
    #[serde(default = "default_key_toggle_autoplay")]
    pub toggle_autoplay: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            next: default_key_next(),
            prev: default_key_prev(),
            toggle_autoplay: default_key_toggle_autoplay(),
        }
    }
}

/// A panel shown by the demo carousel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    pub title: String,
    /// Body text; blank lines split paragraphs
    #[serde(default)]
    pub body: String,
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String {
    "q".to_string()
}
fn default_key_next() -> String {
    "l".to_string()
}
fn default_key_prev() -> String {
    "h".to_string()
}
fn default_key_toggle_autoplay() -> String {
    "<Space>".to_string()
}

fn default_true() -> bool {
    true
}

fn default_autoplay_interval() -> u64 {
    3000
}

fn default_tick_rate() -> u64 {
    33
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/swivel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("swivel")
            .join("config.toml")
    }
}

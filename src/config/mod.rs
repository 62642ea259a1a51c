// SPDX-License-Identifier: MPL-2.0
//! This module handles the snack configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[placement]` - Screen corner snacks are docked to
//! - `[timing]` - Auto-hide delay and slide duration
//! - `[appearance]` - Icon visibility
//! - `[stack]` - Number of snacks on screen and duplicate handling
//!
//! # Examples
//!
//! ```no_run
//! use iced_snack::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.stack.max_snack = Some(5);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::ui::notifications::AnchorOrigin;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Where snacks appear.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PlacementConfig {
    /// Anchor as `"<top|bottom>-<left|center|right>"`. Unknown values fall
    /// back to bottom-left.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_anchor_origin",
        deserialize_with = "deserialize_anchor_origin"
    )]
    pub anchor_origin: Option<AnchorOrigin>,
}

/// Timer and transition settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    /// Auto-hide delay in milliseconds; `0` disables auto-hide.
    #[serde(default = "default_auto_hide_ms", skip_serializing_if = "Option::is_none")]
    pub auto_hide_ms: Option<u64>,

    /// Enter and exit slide duration in milliseconds.
    #[serde(
        default = "default_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub transition_ms: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            auto_hide_ms: default_auto_hide_ms(),
            transition_ms: default_transition_ms(),
        }
    }
}

/// Visual settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppearanceConfig {
    /// Hides the variant icon of every snack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_icon_variant: Option<bool>,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            hide_icon_variant: Some(false),
        }
    }
}

/// Stacking settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StackConfig {
    /// Number of snacks on screen at once.
    #[serde(default = "default_max_snack", skip_serializing_if = "Option::is_none")]
    pub max_snack: Option<usize>,

    /// Refuse a snack whose message is already shown or queued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prevent_duplicate: Option<bool>,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            max_snack: default_max_snack(),
            prevent_duplicate: Some(false),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Snack configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub placement: PlacementConfig,

    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub appearance: AppearanceConfig,

    #[serde(default)]
    pub stack: StackConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_auto_hide_ms() -> Option<u64> {
    Some(DEFAULT_AUTO_HIDE_MS)
}

fn default_transition_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_MS)
}

fn default_max_snack() -> Option<usize> {
    Some(DEFAULT_MAX_SNACK)
}

fn serialize_anchor_origin<S>(
    origin: &Option<AnchorOrigin>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match origin {
        Some(origin) => serializer.serialize_str(&origin.to_string()),
        None => serializer.serialize_none(),
    }
}

fn deserialize_anchor_origin<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<AnchorOrigin>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|raw| {
        raw.parse().unwrap_or_else(|err: String| {
            tracing::warn!(%err, "falling back to default anchor origin");
            AnchorOrigin::default()
        })
    }))
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "using default config");
                    return (
                        Config::default(),
                        Some(format!("Could not read {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{Horizontal, Vertical};
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            placement: PlacementConfig {
                anchor_origin: Some(AnchorOrigin::new(Vertical::Top, Horizontal::Center)),
            },
            timing: TimingConfig {
                auto_hide_ms: Some(3_000),
                transition_ms: Some(150),
            },
            appearance: AppearanceConfig {
                hide_icon_variant: Some(true),
            },
            stack: StackConfig {
                max_snack: Some(4),
                prevent_duplicate: Some(true),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn anchor_origin_is_written_as_string() {
        let config = Config {
            placement: PlacementConfig {
                anchor_origin: Some(AnchorOrigin::new(Vertical::Bottom, Horizontal::Right)),
            },
            ..Config::default()
        };
        let content = toml::to_string_pretty(&config).expect("serialize");
        assert!(content.contains("anchor_origin = \"bottom-right\""));
    }

    #[test]
    fn unknown_anchor_origin_falls_back_to_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[placement]\nanchor_origin = \"middle-nowhere\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded.placement.anchor_origin, Some(AnchorOrigin::default()));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[stack]\nmax_snack = 5\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert_eq!(loaded.stack.max_snack, Some(5));
        assert_eq!(loaded.timing, TimingConfig::default());
        assert_eq!(loaded.placement.anchor_origin, None);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_warns_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[timing\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_creates_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().join("deep").join("path");

        save_with_override(&Config::default(), Some(base.clone())).expect("save");
        assert!(base.join(CONFIG_FILE).exists());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.placement.anchor_origin, None);
        assert_eq!(config.timing.auto_hide_ms, Some(DEFAULT_AUTO_HIDE_MS));
        assert_eq!(config.timing.transition_ms, Some(DEFAULT_TRANSITION_MS));
        assert_eq!(config.appearance.hide_icon_variant, Some(false));
        assert_eq!(config.stack.max_snack, Some(DEFAULT_MAX_SNACK));
        assert_eq!(config.stack.prevent_duplicate, Some(false));
    }
}

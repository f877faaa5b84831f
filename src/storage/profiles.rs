//! Configuration storage and persistence.
//!
//! Handles saving and loading the dashboard configuration to/from disk.
//! Cross-platform: uses appropriate config directories for each OS.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{DashboardError, Result};

// =============================================================================
// Config Path
// =============================================================================

const APP_NAME: &str = "car-dashboard";
const CONFIG_FILE: &str = "config.json";

/// Get the configuration directory path.
/// - Linux: ~/.config/car-dashboard/
/// - Windows: %APPDATA%\car-dashboard\
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .ok_or_else(|| DashboardError::InvalidProfile("Could not find config directory".into()))
}

/// Get the full path to the config file.
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE))
}

// =============================================================================
// Storage Structures
// =============================================================================

/// Defaults for the `simulate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartupConfig {
    /// Theme id to render with.
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Number of frames per simulation run.
    #[serde(default = "default_frames")]
    pub frames: u32,

    /// Throttle held for the first N frames.
    #[serde(default = "default_throttle_frames")]
    pub throttle_frames: u32,

    /// Simulation tick in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Output directory for frame sequences.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_theme() -> String {
    "classic".to_string()
}

fn default_frames() -> u32 {
    200
}

fn default_throttle_frames() -> u32 {
    100
}

fn default_interval_ms() -> u64 {
    crate::config::simulation::TICK_MS
}

fn default_output_dir() -> String {
    "frames".to_string()
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            frames: default_frames(),
            throttle_frames: default_throttle_frames(),
            interval_ms: default_interval_ms(),
            output_dir: default_output_dir(),
        }
    }
}

/// Main configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Defaults for the `simulate` command.
    #[serde(default)]
    pub startup: StartupConfig,
    /// Gauge overrides by key ("speedometer", "tachometer").
    #[serde(default)]
    pub gauges: HashMap<String, StoredGaugeConfig>,
    /// Bar overrides by key ("fuel", "temp").
    #[serde(default)]
    pub bars: HashMap<String, StoredBarConfig>,
    /// Currently active theme id.
    pub active_theme: Option<String>,
}

/// Stored dial overrides. Missing fields fall back to the built-in spec.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredGaugeConfig {
    pub radius: Option<f32>,
    pub start_angle_deg: Option<f32>,
    pub end_angle_deg: Option<f32>,
    pub max_value: Option<f32>,
    pub danger_threshold: Option<f32>,
    pub marker_divisions: Option<u32>,
    pub label: Option<String>,
    pub units: Option<String>,
}

/// Stored level bar overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredBarConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub label: Option<String>,
}

// =============================================================================
// Storage Functions
// =============================================================================

/// Load configuration from disk.
pub fn load_config() -> Result<AppConfig> {
    let path = get_config_path()?;

    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|e| DashboardError::InvalidProfile(format!("Failed to read config: {}", e)))?;

    serde_json::from_str(&content)
        .map_err(|e| DashboardError::InvalidProfile(format!("Failed to parse config: {}", e)))
}

/// Save configuration to disk.
pub fn save_config(config: &AppConfig) -> Result<()> {
    let dir = get_config_dir()?;
    let path = dir.join(CONFIG_FILE);

    std::fs::create_dir_all(&dir).map_err(|e| {
        DashboardError::InvalidProfile(format!("Failed to create config dir: {}", e))
    })?;

    let content = serde_json::to_string_pretty(config)
        .map_err(|e| DashboardError::InvalidProfile(format!("Failed to serialize config: {}", e)))?;

    std::fs::write(&path, content)
        .map_err(|e| DashboardError::InvalidProfile(format!("Failed to write config: {}", e)))?;

    Ok(())
}

/// Ensure that the configuration file exists.
/// If it doesn't, create it with default values and the classic theme active.
pub fn ensure_config_exists() -> Result<()> {
    let path = get_config_path()?;
    if path.exists() {
        return Ok(());
    }

    println!("Config file not found. Creating default at {:?}", path);

    let config = AppConfig {
        active_theme: Some("classic".to_string()),
        ..Default::default()
    };

    save_config(&config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_roundtrip() {
        let mut config = AppConfig::default();
        config.gauges.insert(
            "speedometer".to_string(),
            StoredGaugeConfig {
                max_value: Some(240.0),
                ..Default::default()
            },
        );

        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed.gauges.get("speedometer").unwrap().max_value,
            Some(240.0)
        );
        assert_eq!(parsed.startup.frames, 200);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"active_theme": null}"#).unwrap();
        assert_eq!(config.startup.theme, "classic");
        assert_eq!(config.startup.interval_ms, 50);
        assert!(config.gauges.is_empty());
    }
}

// src/config.rs

//! Configuration for the sizing subsystem.
//!
//! Every section carries `#[serde(default)]`, so a configuration file only
//! needs to name the settings it changes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::geometry::ScreenExtent;
use crate::msg_level::LogLevel;

// --- Top-Level Configuration Structure ---

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Media engine log forwarding.
    pub logging: LoggingConfig,
    /// Display used for percentage resolution.
    pub screen: ScreenConfig,
    /// Fullscreen trigger.
    pub fullscreen: FullscreenConfig,
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse configuration")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration {}", path.display()))?;
        Self::from_json_str(&json)
    }
}

// --- Logging Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Severity requested from the media engine when no msg-level entry asks
    /// for more.
    pub default_msg_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            default_msg_level: LogLevel::Error,
        }
    }
}

// --- Screen Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// X display to query (e.g. ":0"). `None` uses `$DISPLAY`.
    pub display: Option<String>,
    /// Size assumed when no X display can be opened.
    pub fallback_width: i32,
    pub fallback_height: i32,
}

impl ScreenConfig {
    pub fn fallback_extent(&self) -> ScreenExtent {
        ScreenExtent {
            width: self.fallback_width,
            height: self.fallback_height,
        }
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        ScreenConfig {
            display: None,
            fallback_width: 1920,
            fallback_height: 1080,
        }
    }
}

// --- Fullscreen Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FullscreenConfig {
    /// Value of `options/fs` that makes the window start fullscreen.
    pub trigger_value: String,
}

impl Default for FullscreenConfig {
    fn default() -> Self {
        FullscreenConfig {
            trigger_value: "yes".to_string(),
        }
    }
}

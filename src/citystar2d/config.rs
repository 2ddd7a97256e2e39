use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// How cities and tours are drawn. Any field missing from a config file keeps
/// its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Canvas size in pixels
    pub width: u32,
    pub height: u32,
    /// Multiplier from city coordinates to canvas coordinates
    pub scale: f64,
    pub marker_radius: f64,
    /// Where a label sits relative to its (scaled) city
    pub label_offset: DVec2,
    /// Fill for markers and labels
    pub marker_color: String,
    pub path_color: String,
    pub line_width: f64,
    pub font_size: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            scale: 5.0,
            marker_radius: 5.0,
            label_offset: DVec2::new(5.0, -5.0),
            marker_color: "blue".to_string(),
            path_color: "red".to_string(),
            line_width: 1.0,
            font_size: 10.0,
        }
    }
}

impl RenderConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Optional TOML overrides, e.g.
///
/// ```toml
/// base_dir = "/opt/opensound"
/// table_name = "spotify_tracks"
/// delimiter = ";"
/// ```
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub base_dir: Option<String>,
    pub input_path: Option<String>,
    pub db_path: Option<String>,
    pub table_name: Option<String>,
    pub delimiter: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

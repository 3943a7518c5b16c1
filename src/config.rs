// Configuration loading module

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tui_components::SegmentControlConfigYaml;

use crate::constants::HWND_MAIN_SEGMENTS;

#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub application: ApplicationConfig,
    #[serde(default)]
    pub segment_controls: HashMap<String, SegmentControlConfigYaml>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    pub title: String,
    /// HWND of the segment control to show
    #[serde(default = "default_control")]
    pub control: String,
    #[serde(default)]
    pub status_text: String,
}

fn default_control() -> String {
    HWND_MAIN_SEGMENTS.to_string()
}

/// config.yaml next to the sources
pub fn default_config_path() -> PathBuf {
    let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    default_path.push("src");
    default_path.push("config.yaml");
    default_path
}

pub fn parse_config(contents: &str) -> Result<ConfigFile> {
    serde_yaml::from_str(contents).context("invalid configuration YAML")
}

pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("failed to parse {}", path.display()))
}

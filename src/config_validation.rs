// Configuration validation module

use anyhow::{Context, Result};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};
use tui_components::{SegmentConfigError, SegmentControlManager};

use crate::config::{default_config_path, load_config, ConfigFile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("segment control with hwnd '{hwnd}' not found in config. Available segment controls: {available}")]
    ControlNotFound { hwnd: String, available: String },

    #[error(transparent)]
    Segment(#[from] SegmentConfigError),
}

/// Configuration with the selected segment control built and checked
#[derive(Debug)]
pub struct ValidatedConfig {
    pub file: ConfigFile,
    pub manager: SegmentControlManager,
    /// Initial selection, always in range for the manager's items
    pub selection: usize,
}

impl ValidatedConfig {
    /// Replace the configured items (from the command line); no-op when empty
    pub fn with_items(mut self, items: Vec<String>) -> Self {
        if items.is_empty() {
            return self;
        }
        let count = items.len();
        self.manager.set_items(items);
        if self.selection >= count {
            self.selection = 0;
        }
        debug!(count, selection = self.selection, "items overridden from command line");
        self
    }
}

/// Look up the control named by `application.control` and validate it
pub fn validate_config(file: ConfigFile) -> Result<ValidatedConfig, ConfigError> {
    let hwnd = file.application.control.clone();
    let control = file
        .segment_controls
        .values()
        .find(|config| config.hwnd == hwnd)
        .ok_or_else(|| {
            let mut names: Vec<&str> = file.segment_controls.keys().map(String::as_str).collect();
            names.sort_unstable();
            ConfigError::ControlNotFound {
                hwnd: hwnd.clone(),
                available: names.join(", "),
            }
        })?;

    let manager = SegmentControlManager::create(control)?;
    let selection = manager.initial_selection();
    Ok(ValidatedConfig {
        file,
        manager,
        selection,
    })
}

/// Load config from `config_path` (or the bundled default) and validate it
pub fn load_and_validate_config(config_path: Option<PathBuf>) -> Result<ValidatedConfig> {
    let path = config_path.unwrap_or_else(default_config_path);
    let file = load_config(&path)?;
    let validated = validate_config(file)
        .with_context(|| format!("invalid configuration in {}", path.display()))?;
    info!(
        path = %path.display(),
        hwnd = validated.manager.hwnd(),
        items = validated.manager.state().item_count(),
        "configuration loaded"
    );
    Ok(validated)
}

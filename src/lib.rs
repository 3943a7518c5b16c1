// Segment View Library
// Terminal demo of a segmented tab control with an animated selection indicator

// Core infrastructure - app state, compiled config, events
pub mod core;

// Configuration loading and validation
pub mod config;
pub mod config_validation;

// Page rendering
pub mod render;

// File logging via tracing
pub mod logging;

// Application constants
pub mod constants;

// Re-export commonly used items for convenience
pub use self::core::{App, AppConfig, AppEvent, EventHandler};
pub use config::ConfigFile;
pub use config_validation::{load_and_validate_config, ConfigError, ValidatedConfig};
pub use constants::*;

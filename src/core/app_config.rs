// Application Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

use std::time::Duration;

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Application-level configuration for segment-view
/// Values are compiled in from config.yaml at build time
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// UI and event loop settings
    pub ui: UiSettings,

    /// Log file settings
    pub logging: LogSettings,
}

#[derive(Debug, Clone)]
pub struct UiSettings {
    /// Enable mouse capture and click-to-select
    pub mouse_enabled: bool,

    /// Event poll timeout while idle
    pub tick_rate: Duration,

    /// Event poll timeout while the indicator is moving
    pub animation_tick: Duration,
}

#[derive(Debug, Clone)]
pub struct LogSettings {
    /// Log file path; empty disables logging
    pub file: String,

    /// Default filter directive when RUST_LOG is unset
    pub filter: String,
}

impl UiSettings {
    /// Poll timeout for the next loop iteration
    pub fn poll_timeout(&self, animating: bool) -> Duration {
        if animating {
            self.animation_tick.min(self.tick_rate)
        } else {
            self.tick_rate
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            mouse_enabled: compiled::MOUSE_ENABLED,
            tick_rate: Duration::from_millis(compiled::TICK_RATE_MS.max(1)),
            animation_tick: Duration::from_millis(compiled::ANIMATION_TICK_MS.max(1)),
        }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: compiled::LOG_FILE.to_string(),
            filter: compiled::LOG_FILTER.to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ui: UiSettings::default(),
            logging: LogSettings::default(),
        }
    }
}

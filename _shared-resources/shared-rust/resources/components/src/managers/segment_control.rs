// Segment Control Manager
// Provides YAML configuration helpers and OOP-style segment control manager wrapper

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, style::Style, Frame};
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

use crate::elements::segment_control::{SegmentControl, SegmentControlState, SegmentControlStyle};
use crate::utilities::{parse_color, DEFAULT_INDICATOR_ANIMATION};

/// Longest indicator transition accepted from configuration
pub const MAX_ANIMATION_MS: u64 = 10_000;

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    YAML Configuration Structures                               │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Segment control colors from YAML
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SegmentColorsYaml {
    /// Label color of the selected item (defaults to "blue")
    pub selected: Option<String>,
    /// Label color of the other items (defaults to "gray")
    pub normal: Option<String>,
    /// Indicator bar color (defaults to "white")
    pub indicator: Option<String>,
    /// Divider line color (defaults to "dark_gray")
    pub divider: Option<String>,
}

/// Segment control configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct SegmentControlConfigYaml {
    /// Handle name (HWND)
    pub hwnd: String,
    /// Item labels, left to right
    pub items: Vec<String>,
    /// Initially selected index
    #[serde(default)]
    pub selected: usize,
    /// Fixed gap between items; omit to center the row
    pub fixed_spacing: Option<f32>,
    /// Draw a divider line under the indicator
    #[serde(default)]
    pub divider: bool,
    /// Indicator transition time in milliseconds (defaults to 300)
    pub animation_ms: Option<u64>,
    /// Blank rows between labels and indicator (defaults to 1)
    pub bottom_padding: Option<u16>,
    pub colors: Option<SegmentColorsYaml>,
}

/// Validated segment control settings
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentControlConfigData {
    pub hwnd: String,
    pub items: Vec<String>,
    pub selected: usize,
    pub fixed_spacing: Option<f32>,
    pub divider: bool,
    pub animation: Duration,
    pub style: SegmentControlStyle,
}

/// Error type for segment control configuration
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SegmentConfigError {
    /// Initial selection does not name an item
    #[error("segment control '{hwnd}': selected index {index} is out of range for {count} items")]
    SelectionOutOfRange { hwnd: String, index: usize, count: usize },
    /// Fixed spacing is negative or not a finite number
    #[error("segment control '{hwnd}': fixed_spacing must be finite and non-negative, got {value}")]
    NegativeSpacing { hwnd: String, value: f32 },
    /// Animation time beyond MAX_ANIMATION_MS
    #[error("segment control '{hwnd}': animation_ms {value} exceeds the {max} ms limit", max = MAX_ANIMATION_MS)]
    InvalidAnimation { hwnd: String, value: u64 },
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    Configuration Conversion Functions                          │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Resolve one configured color, warning and falling back when it cannot be parsed
fn resolve_color(hwnd: &str, field: &str, value: Option<&String>, fallback: Style) -> Style {
    match value {
        None => fallback,
        Some(name) => match parse_color(name) {
            Some(color) => fallback.fg(color),
            None => {
                warn!(hwnd, field, color = name.as_str(), "unknown color, using default");
                fallback
            }
        },
    }
}

/// Convert YAML segment control configuration to validated configuration data
pub fn convert_segment_control_config(
    config: &SegmentControlConfigYaml,
) -> Result<SegmentControlConfigData, SegmentConfigError> {
    let count = config.items.len();
    if count > 0 && config.selected >= count {
        return Err(SegmentConfigError::SelectionOutOfRange {
            hwnd: config.hwnd.clone(),
            index: config.selected,
            count,
        });
    }

    if let Some(value) = config.fixed_spacing {
        if !value.is_finite() || value < 0.0 {
            return Err(SegmentConfigError::NegativeSpacing {
                hwnd: config.hwnd.clone(),
                value,
            });
        }
    }

    let animation = match config.animation_ms {
        Some(value) if value > MAX_ANIMATION_MS => {
            return Err(SegmentConfigError::InvalidAnimation {
                hwnd: config.hwnd.clone(),
                value,
            });
        }
        Some(value) => Duration::from_millis(value),
        None => DEFAULT_INDICATOR_ANIMATION,
    };

    let defaults = SegmentControlStyle::default();
    let colors = config.colors.clone().unwrap_or_default();
    let hwnd = config.hwnd.as_str();
    let style = SegmentControlStyle {
        selected: resolve_color(hwnd, "selected", colors.selected.as_ref(), defaults.selected),
        normal: resolve_color(hwnd, "normal", colors.normal.as_ref(), defaults.normal),
        indicator: resolve_color(hwnd, "indicator", colors.indicator.as_ref(), defaults.indicator),
        divider: resolve_color(hwnd, "divider", colors.divider.as_ref(), defaults.divider),
        bottom_padding: config.bottom_padding.unwrap_or(defaults.bottom_padding),
        ..defaults
    };

    Ok(SegmentControlConfigData {
        hwnd: config.hwnd.clone(),
        items: config.items.clone(),
        selected: config.selected,
        fixed_spacing: config.fixed_spacing,
        divider: config.divider,
        animation,
        style,
    })
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                     Segment Control Manager - OOP Style Segment Control Operations             │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Segment Control Manager wrapper for OOP-style segment control operations
/// Bundles validated settings with the control's measurement state
#[derive(Debug, Clone)]
pub struct SegmentControlManager {
    config: SegmentControlConfigData,
    state: SegmentControlState,
}

impl SegmentControlManager {
    /// Validate YAML config and create the manager
    pub fn create(config: &SegmentControlConfigYaml) -> Result<Self, SegmentConfigError> {
        convert_segment_control_config(config).map(Self::from_config)
    }

    pub fn from_config(config: SegmentControlConfigData) -> Self {
        let state = SegmentControlState::new(config.items.clone());
        Self { config, state }
    }

    /// Get the handle name (HWND)
    pub fn hwnd(&self) -> &str {
        &self.config.hwnd
    }

    /// Selection the control starts with
    pub fn initial_selection(&self) -> usize {
        self.config.selected
    }

    pub fn config(&self) -> &SegmentControlConfigData {
        &self.config
    }

    pub fn state(&self) -> &SegmentControlState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SegmentControlState {
        &mut self.state
    }

    /// Replace the items; measurements reset when the list differs
    pub fn set_items(&mut self, items: Vec<String>) -> bool {
        self.config.items = items.clone();
        self.state.set_items(items)
    }

    /// Build the per-frame widget for `selection`
    pub fn widget(&self, selection: usize) -> SegmentControl {
        SegmentControl::new(selection)
            .fixed_spacing(self.config.fixed_spacing)
            .divider(self.config.divider)
            .style(self.config.style.clone())
            .animation_duration(self.config.animation)
    }

    /// Rows the control occupies
    pub fn height(&self) -> u16 {
        self.widget(0).height()
    }

    /// Render into `area` for the current selection
    pub fn render(&mut self, f: &mut Frame, area: Rect, selection: usize) {
        let widget = self.widget(selection);
        f.render_stateful_widget(widget, area, &mut self.state);
    }

    pub fn handle_mouse(&self, mouse: &MouseEvent, selection: &mut usize) -> bool {
        self.state.handle_mouse(mouse, selection)
    }

    pub fn handle_key(&self, key: &KeyEvent, selection: &mut usize) -> bool {
        self.state.handle_key(key, selection)
    }

    /// Re-arm the control size read after the terminal is resized
    pub fn on_resize(&mut self) {
        self.state.invalidate_control_size();
    }
}

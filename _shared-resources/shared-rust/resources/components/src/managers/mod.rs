// Managers module
// Provides OOP-style manager wrappers for TUI components

pub mod segment_control;

pub use segment_control::{
    SegmentControlManager,
    SegmentControlConfigYaml,
    SegmentControlConfigData,
    SegmentColorsYaml,
    SegmentConfigError,
    convert_segment_control_config,
    MAX_ANIMATION_MS,
};

// Utilities module
// Helper functions and quality of life utilities

pub mod animation;
pub mod helpers;
pub mod layout_calculator;

pub use animation::{IndicatorAnimation, IndicatorFrame, DEFAULT_INDICATOR_ANIMATION};
pub use helpers::*;
pub use layout_calculator::{LayoutCalculator, SegmentLayout};

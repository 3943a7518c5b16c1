// Shared TUI components library
// Reusable components for all TUI applications

// Core infrastructure
pub mod core;
// GUI elements (visual components)
pub mod elements;
// OOP-style manager wrappers
pub mod managers;
// Utilities and helpers
pub mod utilities;

// Re-export commonly used items
// Note: segment_control exists in both elements and managers; the glob
// re-exports name different types (SegmentControl vs SegmentControlManager)
#[allow(ambiguous_glob_reexports)]
pub use self::core::*;
#[allow(ambiguous_glob_reexports)]
pub use elements::*;
#[allow(ambiguous_glob_reexports)]
pub use managers::*;
pub use utilities::*;

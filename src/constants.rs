// Application constants
// Handle names (HWND) that tie config.yaml entries to UI elements

/// Segment control shown at the top of the screen
pub const HWND_MAIN_SEGMENTS: &str = "hwndMainSegments";

// Application State
// Owns the selection binding the segment control writes through

use tui_components::Size;

use super::AppConfig;

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration (built-in defaults)
    pub config: AppConfig,

    /// Selected segment index; the control reads and writes this binding
    pub selection: usize,

    /// Last rendered size of the page title, bound through SizeAware
    pub title_size: Size,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig, selection: usize) -> Self {
        Self {
            config,
            selection,
            title_size: Size::ZERO,
            should_quit: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Text of the page title for the current selection
    pub fn page_title(&self, items: &[String]) -> String {
        let name = items.get(self.selection).map(String::as_str).unwrap_or("");
        format!("Page title \"{}\"", name)
    }
}

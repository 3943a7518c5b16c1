// Render module - UI rendering functions

pub mod content;

pub use content::{render_app, render_page_title, render_status};

// Content rendering
// Title bar, segment control, page title and status line

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use tracing::trace;
use tui_components::{SegmentControlManager, SizeAware};

use crate::config::ConfigFile;
use crate::core::App;

/// Render the whole screen for one frame
pub fn render_app(f: &mut Frame, app: &mut App, manager: &mut SegmentControlManager, file: &ConfigFile) {
    let [title_area, _, control_area, _, page_area, _, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(manager.height()),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(f.area());

    let title = Line::styled(
        file.application.title.as_str(),
        Style::default().add_modifier(Modifier::BOLD),
    );
    f.render_widget(Paragraph::new(title).centered(), title_area);

    manager.render(f, control_area, app.selection);

    let text = app.page_title(manager.state().items());
    render_page_title(f, page_area, &text, app);

    render_status(f, status_area, &file.application.status_text);
}

/// Centered page title; its rendered size is written to `app.title_size`
pub fn render_page_title(f: &mut Frame, area: Rect, text: &str, app: &mut App) {
    let line = Line::from(text.to_string());
    let width = (line.width() as u16).min(area.width);
    let x = area.x + (area.width - width) / 2;
    let text_area = Rect::new(x, area.y, width, area.height.min(1));

    let before = app.title_size;
    f.render_stateful_widget(SizeAware::new(Paragraph::new(line)), text_area, &mut app.title_size);
    if app.title_size != before {
        trace!(width = app.title_size.width, height = app.title_size.height, "page title resized");
    }
}

/// Status line at the bottom
pub fn render_status(f: &mut Frame, area: Rect, text: &str) {
    let status = Paragraph::new(Line::styled(text.to_string(), Style::default().fg(Color::DarkGray)));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use crate::config_validation::validate_config;
    use crate::core::AppConfig;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use tui_components::Size;

    const YAML: &str = r#"
application:
  title: "Demo"
  control: "hwndTabs"
  status_text: "q to quit"
segment_controls:
  tabs:
    hwnd: "hwndTabs"
    items: ["A", "ABC", "Long Name", "SN"]
    selected: 1
"#;

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_render_app_layout() {
        let validated = validate_config(parse_config(YAML).unwrap()).unwrap();
        let mut manager = validated.manager;
        let mut app = App::new(AppConfig::default(), validated.selection);
        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();

        terminal
            .draw(|f| render_app(f, &mut app, &mut manager, &validated.file))
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(row(buffer, 0).trim(), "Demo");
        assert!(row(buffer, 2).contains("Long Name"));
        // title(1) + gap(1) + control(3) + gap(1)
        assert_eq!(row(buffer, 6).trim(), "Page title \"ABC\"");
        assert_eq!(row(buffer, 11).trim(), "q to quit");
        assert_eq!(app.title_size, Size::new(16.0, 1.0));
        assert_eq!(manager.state().item_bounds().len(), 4);
    }

    #[test]
    fn test_page_title_clips_to_area() {
        let mut app = App::new(AppConfig::default(), 0);
        let mut terminal = Terminal::new(TestBackend::new(6, 1)).unwrap();

        terminal
            .draw(|f| render_page_title(f, f.area(), "Page title \"Long Name\"", &mut app))
            .unwrap();

        assert_eq!(app.title_size, Size::new(6.0, 1.0));
        assert_eq!(row(terminal.backend().buffer(), 0), "Page t");
    }
}

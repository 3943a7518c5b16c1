// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};

/// Application events that can be handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Key press forwarded to the segment control
    Navigate(KeyEvent),

    /// Mouse event forwarded to the segment control
    Pointer(MouseEvent),

    /// Terminal was resized
    Resize,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) => AppEvent::Pointer(mouse),
            Event::Resize(_, _) => AppEvent::Resize,
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,
            _ => AppEvent::Navigate(key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseButton, MouseEventKind};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(EventHandler::handle(press(KeyCode::Char('q'), KeyModifiers::NONE)), AppEvent::Quit);
        assert_eq!(EventHandler::handle(press(KeyCode::Esc, KeyModifiers::NONE)), AppEvent::Quit);
        assert_eq!(EventHandler::handle(press(KeyCode::Char('c'), KeyModifiers::CONTROL)), AppEvent::Quit);
    }

    #[test]
    fn test_other_keys_are_forwarded() {
        let key = KeyEvent::new(KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(EventHandler::handle(Event::Key(key)), AppEvent::Navigate(key));

        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(EventHandler::handle(Event::Key(plain_c)), AppEvent::Navigate(plain_c));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(EventHandler::handle(Event::Key(release)), AppEvent::None);
    }

    #[test]
    fn test_mouse_and_resize() {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(EventHandler::handle(Event::Mouse(mouse)), AppEvent::Pointer(mouse));
        assert_eq!(EventHandler::handle(Event::Resize(80, 24)), AppEvent::Resize);
        assert_eq!(EventHandler::handle(Event::FocusGained), AppEvent::None);
    }
}

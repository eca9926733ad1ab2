//! Frontend-agnostic input events.
//!
//! A frontend translates its native event stream (crossterm here) into this
//! enum so the core only handles one event shape. Scrolling never shows up
//! here: the frontend owns the viewport and reports it on the scroll signal.

use crate::view::Action;
use crossterm::event::{KeyCode, KeyModifiers, MouseEventKind};

#[derive(Debug, Clone, PartialEq)]
pub enum FrontendEvent {
    /// Keyboard input
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Mouse input that did not land on an interactive node
    Mouse {
        kind: MouseEventKind,
        x: u16,
        y: u16,
    },
    /// Click on an interactive node
    Activate(Action),
    /// Terminal/window resize
    Resize { width: u16, height: u16 },
    /// Paste event (text from clipboard)
    Paste { text: String },
}

impl FrontendEvent {
    pub fn key(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self::Key { code, modifiers }
    }

    pub fn mouse(kind: MouseEventKind, x: u16, y: u16) -> Self {
        Self::Mouse { kind, x, y }
    }

    pub fn resize(width: u16, height: u16) -> Self {
        Self::Resize { width, height }
    }

    pub fn paste(text: String) -> Self {
        Self::Paste { text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Section;

    #[test]
    fn test_event_creation() {
        let key_event = FrontendEvent::key(KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(matches!(key_event, FrontendEvent::Key { .. }));

        let resize_event = FrontendEvent::resize(120, 40);
        assert!(matches!(
            resize_event,
            FrontendEvent::Resize {
                width: 120,
                height: 40
            }
        ));

        let activate = FrontendEvent::Activate(Action::Select(Section::About));
        assert_eq!(activate, FrontendEvent::Activate(Action::Select(Section::About)));

        let paste = FrontendEvent::paste("hello".to_string());
        assert_eq!(paste, FrontendEvent::Paste { text: "hello".to_string() });
    }
}

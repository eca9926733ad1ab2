//! Input routing
//!
//! Routes keyboard input to a `Command` based on:
//! - Whether the acknowledgement overlay is open
//! - Which form field (if any) has focus
//! - Section hotkeys

use crate::data::{FormField, Section};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the focused part of the page looks like to the router
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputContext {
    pub alert_open: bool,
    pub focused_field: Option<FormField>,
    pub has_focus: bool,
}

/// Result of routing one key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Dismiss,
    FocusNext,
    FocusPrev,
    Blur,
    Activate,
    Submit,
    Select(Section),
    Edit(FormField, KeyEvent),
    Ignore,
}

pub fn route_key(key: KeyEvent, ctx: InputContext) -> Command {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Command::Quit;
    }

    // The overlay swallows the key that closes it
    if ctx.alert_open {
        return Command::Dismiss;
    }

    match ctx.focused_field {
        Some(field) => route_field_key(field, key),
        None => route_page_key(key, ctx.has_focus),
    }
}

fn route_field_key(field: FormField, key: KeyEvent) -> Command {
    match key.code {
        KeyCode::Tab => Command::FocusNext,
        KeyCode::BackTab => Command::FocusPrev,
        KeyCode::Esc => Command::Blur,
        KeyCode::Char('s') | KeyCode::Char('S') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Command::Submit
        }
        // Enter in a single-line input submits the form
        KeyCode::Enter if !field.multiline() => Command::Submit,
        _ => Command::Edit(field, key),
    }
}

fn route_page_key(key: KeyEvent, has_focus: bool) -> Command {
    match key.code {
        KeyCode::Tab => Command::FocusNext,
        KeyCode::BackTab => Command::FocusPrev,
        KeyCode::Enter | KeyCode::Char(' ') if has_focus => Command::Activate,
        KeyCode::Esc if has_focus => Command::Blur,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c as usize - '1' as usize;
            Command::Select(Section::ALL[idx])
        }
        _ => Command::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let ctx = InputContext {
            alert_open: true,
            focused_field: Some(FormField::Message),
            has_focus: true,
        };
        assert_eq!(route_key(ctrl_c, ctx), Command::Quit);
    }

    #[test]
    fn test_alert_swallows_keys() {
        let ctx = InputContext {
            alert_open: true,
            ..InputContext::default()
        };
        assert_eq!(route_key(key(KeyCode::Char('q')), ctx), Command::Dismiss);
    }

    #[test]
    fn test_hotkeys_select_sections() {
        let ctx = InputContext::default();
        assert_eq!(route_key(key(KeyCode::Char('1')), ctx), Command::Select(Section::Home));
        assert_eq!(route_key(key(KeyCode::Char('4')), ctx), Command::Select(Section::Contact));
        assert_eq!(route_key(key(KeyCode::Char('5')), ctx), Command::Ignore);
    }

    #[test]
    fn test_field_captures_text() {
        let ctx = InputContext {
            focused_field: Some(FormField::Name),
            has_focus: true,
            ..InputContext::default()
        };
        let q = key(KeyCode::Char('q'));
        assert_eq!(route_key(q, ctx), Command::Edit(FormField::Name, q));
        assert_eq!(route_key(key(KeyCode::Char('1')), ctx), Command::Edit(FormField::Name, key(KeyCode::Char('1'))));
        assert_eq!(route_key(key(KeyCode::Esc), ctx), Command::Blur);
    }

    #[test]
    fn test_enter_submits_only_single_line() {
        let enter = key(KeyCode::Enter);
        let name = InputContext {
            focused_field: Some(FormField::Email),
            has_focus: true,
            ..InputContext::default()
        };
        assert_eq!(route_key(enter, name), Command::Submit);

        let message = InputContext {
            focused_field: Some(FormField::Message),
            has_focus: true,
            ..InputContext::default()
        };
        assert_eq!(route_key(enter, message), Command::Edit(FormField::Message, enter));
    }

    #[test]
    fn test_escape_blurs_before_quitting() {
        let focused = InputContext {
            has_focus: true,
            ..InputContext::default()
        };
        assert_eq!(route_key(key(KeyCode::Esc), focused), Command::Blur);
        assert_eq!(route_key(key(KeyCode::Esc), InputContext::default()), Command::Quit);
    }
}

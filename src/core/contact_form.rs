//! Mounted contact form component
//!
//! Owns the editable field buffers while the contact section is mounted.
//! Dropping the component discards any unsent input.

use crate::data::{FieldError, FormField, FormState};
use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::{Input, TextArea};

pub const ACK_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";

/// One-shot notice shown after a successful submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    pub message: &'static str,
    pub sent_at: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent(Acknowledgement),
    Blocked(FieldError),
}

pub struct ContactForm {
    fields: [TextArea<'static>; 3],
    error: Option<FieldError>,
}

fn field_index(field: FormField) -> usize {
    match field {
        FormField::Name => 0,
        FormField::Email => 1,
        FormField::Message => 2,
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: [TextArea::default(), TextArea::default(), TextArea::default()],
            error: None,
        }
    }

    /// Feed a key press to one field. Returns true if the text changed.
    pub fn handle_key(&mut self, field: FormField, key: KeyEvent) -> bool {
        if !field.multiline() && is_newline(&key) {
            return false;
        }

        let input: Input = key.into();
        let changed = self.fields[field_index(field)].input(input);
        if changed {
            self.clear_error_for(field);
        }
        changed
    }

    pub fn paste(&mut self, field: FormField, text: &str) {
        let text = if field.multiline() {
            text.to_string()
        } else {
            text.replace(['\r', '\n'], " ")
        };
        if self.fields[field_index(field)].insert_str(text) {
            self.clear_error_for(field);
        }
    }

    pub fn state(&self) -> FormState {
        FormState {
            name: self.fields[0].lines().join(""),
            email: self.fields[1].lines().join(""),
            message: self.fields[2].lines().join("\n"),
        }
    }

    pub fn cursors(&self) -> [(usize, usize); 3] {
        [
            self.fields[0].cursor(),
            self.fields[1].cursor(),
            self.fields[2].cursor(),
        ]
    }

    pub fn error(&self) -> Option<&FieldError> {
        self.error.as_ref()
    }

    /// Run the constraint checks; on success reset every field
    ///
    /// Nothing is sent anywhere; the acknowledgement is the whole effect.
    pub fn submit(&mut self) -> SubmitOutcome {
        let state = self.state();
        match state.check() {
            Ok(()) => {
                tracing::info!(
                    name_len = state.name.len(),
                    email_len = state.email.len(),
                    message_len = state.message.len(),
                    "Contact form submitted"
                );
                self.reset();
                SubmitOutcome::Sent(Acknowledgement {
                    message: ACK_MESSAGE,
                    sent_at: Local::now(),
                })
            }
            Err(error) => {
                tracing::debug!("Contact submit blocked on {:?}: {}", error.field, error.message);
                self.error = Some(error.clone());
                SubmitOutcome::Blocked(error)
            }
        }
    }

    pub fn reset(&mut self) {
        self.fields = [TextArea::default(), TextArea::default(), TextArea::default()];
        self.error = None;
    }

    fn clear_error_for(&mut self, field: FormField) {
        if self.error.as_ref().is_some_and(|e| e.field == field) {
            self.error = None;
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

fn is_newline(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter)
        || (key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j')))
}

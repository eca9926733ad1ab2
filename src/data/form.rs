//! Contact form data and the constraint checks a browser applies before submit.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Field values of the contact form
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// The three contact form inputs, in tab order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your Name",
            Self::Email => "Your Email",
            Self::Message => "Your Message",
        }
    }

    pub fn multiline(self) -> bool {
        matches!(self, Self::Message)
    }
}

/// Why a submit was blocked
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

// WHATWG "valid email address" production
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

impl FormState {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    /// Value as the constraint checks see it; email input drops outer whitespace
    fn checked_value(&self, field: FormField) -> &str {
        match field {
            FormField::Email => self.email.trim(),
            _ => self.value(field),
        }
    }

    /// Required-field and email-shape checks, first failing field wins
    pub fn check(&self) -> Result<(), FieldError> {
        for field in FormField::ALL {
            if self.checked_value(field).is_empty() {
                return Err(FieldError {
                    field,
                    message: "Please fill out this field.".to_string(),
                });
            }
        }

        if !email_regex().is_match(self.email.trim()) {
            return Err(FieldError {
                field: FormField::Email,
                message: format!(
                    "Please include a valid email address. '{}' is not an email address.",
                    self.email.trim()
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        FormState {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_complete_form_passes() {
        assert!(filled().check().is_ok());
    }

    #[test]
    fn test_missing_field_blocks_in_order() {
        let mut form = filled();
        form.email.clear();
        form.message = "   ".to_string();
        let err = form.check().unwrap_err();
        assert_eq!(err.field, FormField::Email);
    }

    #[test]
    fn test_whitespace_counts_as_text_except_in_email() {
        let mut form = filled();
        form.name = "  ".to_string();
        form.message = "\n".to_string();
        assert!(form.check().is_ok());

        form.email = "  ".to_string();
        let err = form.check().unwrap_err();
        assert_eq!(err.field, FormField::Email);
        assert_eq!(err.message, "Please fill out this field.");

        form.email = " ada@example.com ".to_string();
        assert!(form.check().is_ok());
    }

    #[test]
    fn test_bad_email_blocks() {
        let mut form = filled();
        form.email = "not-an-address".to_string();
        let err = form.check().unwrap_err();
        assert_eq!(err.field, FormField::Email);
        assert!(err.message.contains("not-an-address"));
    }

    #[test]
    fn test_email_without_tld_accepted() {
        // Browsers accept dotless domains for type=email
        let mut form = filled();
        form.email = "root@localhost".to_string();
        assert!(form.check().is_ok());
    }
}

//! Data layer - Pure state without UI coupling
//!
//! Static content tables, the UI state slots and the contact form values.
//! NO imports from frontend/ or any rendering code.

pub mod content;
pub mod form;
pub mod ui_state;

pub use content::{ProjectRecord, SkillRecord};
pub use form::{FieldError, FormField, FormState};
pub use ui_state::{ActiveSection, Section, UiState};
